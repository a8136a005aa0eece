use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// What happens to the in-memory comment list on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentRetention {
    /// Comments survive logout until the process restarts
    #[default]
    Keep,
    /// Comments are dropped together with the session
    Clear,
}

impl FromStr for CommentRetention {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "clear" => Ok(Self::Clear),
            other => Err(ConfigError::config(format!(
                "session.comment_retention must be 'keep' or 'clear', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub comment_retention: CommentRetention,
}
