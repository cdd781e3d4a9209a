//! Request and response schemas for the AgroVault backend.
//!
//! Every endpoint gets an explicit schema decoded at the boundary instead of
//! ad hoc field probing. Response types default their optional fields so a
//! partial payload never fails a whole list fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Account role; selects the dashboard and the endpoint family a session
/// may use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Farmer,
    Operator,
    Banker,
    Admin,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Farmer, Self::Operator, Self::Banker, Self::Admin];

    /// Capitalized label for role picker buttons and the topbar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Farmer => "Farmer",
            Self::Operator => "Operator",
            Self::Banker => "Banker",
            Self::Admin => "Admin",
        }
    }
}

/// Receipt lifecycle status as spelled on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Stored,
    Pledged,
    PartiallySold,
    Sold,
    Released,
    /// Any status string this client does not know about.
    #[serde(other)]
    #[default]
    Unknown,
}

impl ReceiptStatus {
    /// Statuses offered in the farmer list filter.
    pub const FILTERS: [Self; 5] = [
        Self::Stored,
        Self::Pledged,
        Self::PartiallySold,
        Self::Sold,
        Self::Released,
    ];

    /// Statuses an operator may transition a receipt into.
    pub const TRANSITIONS: [Self; 4] =
        [Self::Stored, Self::PartiallySold, Self::Sold, Self::Released];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Pledged => "pledged",
            Self::PartiallySold => "partially_sold",
            Self::Sold => "sold",
            Self::Released => "released",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this status passes a list filter; an empty filter matches
    /// everything.
    pub fn matches(self, filter: &str) -> bool {
        filter.is_empty() || self.as_str() == filter
    }
}

/// Login response; servers spell the token field three different ways.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(alias = "token", alias = "accessToken")]
    pub access_token: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

/// A warehouse receipt as returned by the list, create, and search endpoints.
/// Field presence varies per endpoint, so everything beyond the identity and
/// status is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(deserialize_with = "id_string", default)]
    pub id: String,
    #[serde(default)]
    pub receipt_code: String,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub status: ReceiptStatus,
    #[serde(default)]
    pub linked_loan: bool,
    #[serde(default)]
    pub pledged: bool,
    /// Data URL for the printable QR image, present on freshly created
    /// receipts.
    #[serde(default)]
    pub qr: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceiptRequest {
    pub farmer_id: String,
    pub crop_type_id: String,
    pub warehouse_id: String,
    pub quantity: f64,
    pub grade: String,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: ReceiptStatus,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub principal_amount: f64,
    pub interest_rate: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(deserialize_with = "id_string", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CropType {
    #[serde(deserialize_with = "id_string", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewCrop<'a> {
    pub name: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(deserialize_with = "id_string", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location_text: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewWarehouse {
    pub name: String,
    pub location_text: String,
    pub contact_person: String,
    pub phone: String,
}

/// Aggregate counts from `/admin/analytics`, zeroed when absent.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    pub total_receipts: i64,
    pub total_pledged: i64,
    pub total_loan_amount: f64,
}

/// Backends disagree on whether ids are strings or numbers; accept both.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
