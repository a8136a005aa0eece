use crate::ClientResult;

use dash_core::{CoreError, User, UserRecord};

use serde::Deserialize;
use serde_json::Value;

/// Decoded `/login/` payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize)]
struct RawLoginResponse {
    token: String,
    user: Value,
}

impl LoginResponse {
    #[track_caller]
    pub(crate) fn decode(body: Value) -> ClientResult<Self> {
        let raw: RawLoginResponse = serde_json::from_value(body)?;

        if raw.token.trim().is_empty() {
            return Err(CoreError::decode("token", "must not be empty").into());
        }

        Ok(Self {
            token: raw.token,
            user: UserRecord::decode(raw.user)?,
        })
    }
}
