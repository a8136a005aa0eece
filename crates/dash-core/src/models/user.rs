use crate::Result as CoreErrorResult;

use serde::{Deserialize, Serialize};

/// Account holder as the dashboard sees it.
///
/// This is also the shape written to the durable store under the `user` key,
/// so field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,

    // Billing
    pub available_funds: Option<f64>,
    pub monthly_fee: Option<f64>,
    pub debit_amount: Option<f64>,
}

impl User {
    /// Parse a user previously written with [`User::to_stored`].
    pub fn from_stored(json: &str) -> CoreErrorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the durable store.
    pub fn to_stored(&self) -> CoreErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
