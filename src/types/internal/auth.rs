use serde::{Deserialize, Serialize};

/// JWT Claims structure
///
/// Identity facts captured from the account at issuance time. Later changes
/// to the account (a new score, a new email) are not reflected in tokens
/// already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,

    pub email: String,

    /// Account id
    #[serde(rename = "_id")]
    pub id: String,

    pub score: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp); absent when tokens do not expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}
