use dash_core::Theme;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the stored theme
    Show,

    /// Store a theme (light, dark or system)
    Set { theme: Theme },

    /// Switch between dark and light
    Toggle,
}
