use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A stored user record.
///
/// Ids are positive, assigned by the store, and never handed out twice
/// within a process lifetime. Emails are unique across stored records,
/// compared exactly (case-sensitive).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Create input. Both fields are required; `#[serde(default)]` keeps a
/// missing field a presence failure handled by the store instead of a
/// deserialization rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Partial update input. Each field is independently present or absent;
/// absent fields leave the record untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("Name must not be empty".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("Email must not be empty".into()));
    }
    Ok(())
}
