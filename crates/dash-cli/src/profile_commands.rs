use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Update profile fields; omitted fields stay unchanged
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        phone_number: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        company_name: Option<String>,
    },
}
