use crate::{CoreError, Result as CoreErrorResult, User};

use serde::Deserialize;
use serde_json::Value;

/// User as returned by the auth service (`/login/`, `/profile/`).
///
/// Billing amounts come through as raw JSON because the service sends
/// decimals either as numbers or as strings (`"120.50"`).
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub available_funds: Option<Value>,
    #[serde(default)]
    pub monthly_fee: Option<Value>,
    #[serde(default)]
    pub debit_amount: Option<Value>,
}

impl UserRecord {
    /// Decode a raw service payload straight into a [`User`].
    #[track_caller]
    pub fn decode(value: Value) -> CoreErrorResult<User> {
        let record: UserRecord = serde_json::from_value(value)?;
        User::try_from(record)
    }
}

impl TryFrom<UserRecord> for User {
    type Error = CoreError;

    fn try_from(record: UserRecord) -> CoreErrorResult<Self> {
        if record.username.trim().is_empty() {
            return Err(CoreError::decode("username", "must not be empty"));
        }

        Ok(User {
            id: record.id,
            username: record.username,
            full_name: record.full_name,
            phone_number: record.phone_number,
            email: record.email,
            company_name: record.company_name,
            available_funds: parse_amount("available_funds", record.available_funds)?,
            monthly_fee: parse_amount("monthly_fee", record.monthly_fee)?,
            debit_amount: parse_amount("debit_amount", record.debit_amount)?,
        })
    }
}

fn parse_amount(field: &'static str, raw: Option<Value>) -> CoreErrorResult<Option<f64>> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| CoreError::decode(field, format!("{n} is not representable"))),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(Some(amount)),
            _ => Err(CoreError::decode(field, format!("'{s}' is not a number"))),
        },
        Some(other) => Err(CoreError::decode(
            field,
            format!("expected number or numeric string, got {other}"),
        )),
    }
}
