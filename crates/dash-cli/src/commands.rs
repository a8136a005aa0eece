use crate::{
    comment_commands::CommentCommands, profile_commands::ProfileCommands,
    theme_commands::ThemeCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Create a new account (does not log in)
    Register {
        #[arg(long)]
        phone_number: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        company_name: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Forget the session and reset the theme
    Logout,

    /// Show the current session
    Whoami,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}
