use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Post a comment
    Add {
        /// Comment body as a JSON object
        #[arg(long)]
        json: String,
    },
}
