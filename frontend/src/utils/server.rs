use std::fmt;
use serde::Deserialize;
use uuid::Uuid;

use super::inquiry::Field;

/* Server Responses */
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredInquiry {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  #[serde(rename = "service")]
  pub category: String,
  pub message: String,
  pub created_at: String
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
  pub missing: Vec<Field>
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let names: Vec<String> = self.missing.iter().map(|field| field.to_string()).collect();
    write!(f, "Required fields missing: {}", names.join(", "))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
  NotConfigured(String),
  Connection(String),
  Rejected { status: u16, body: String },
  Deserialize(String),
}

impl std::error::Error for PersistenceError {}

impl fmt::Display for PersistenceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PersistenceError::NotConfigured(msg) => write!(f, "Persistence not configured: {}", msg),
      PersistenceError::Connection(msg) => write!(f, "Connection error: {}", msg),
      PersistenceError::Rejected { status, body } => write!(f, "Insert rejected with status {}: {}", status, body),
      PersistenceError::Deserialize(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
  Missing(&'static str),
  InvalidUrl(String),
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(var) => write!(f, "{} must be set at compile time", var),
      ConfigError::InvalidUrl(msg) => write!(f, "Invalid persistence url: {}", msg),
    }
  }
}

impl From<ConfigError> for PersistenceError {
  fn from(value: ConfigError) -> Self {
    PersistenceError::NotConfigured(value.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stored_inquiry_reads_service_column() {
    let body = r#"[{
      "id": "6f1c3a52-9a7e-4a55-8a51-0d4c1c7f2b10",
      "name": "Jane",
      "email": "jane@x.com",
      "service": "business-website",
      "message": "Need a site",
      "created_at": "2025-07-01T10:00:00.000Z",
      "updated_at": "2025-07-01T10:00:00.000Z"
    }]"#;
    let rows: Vec<StoredInquiry> = serde_json::from_str(body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "business-website");
    assert_eq!(rows[0].created_at, "2025-07-01T10:00:00.000Z");
  }

  #[test]
  fn validation_error_lists_missing_fields() {
    let err = ValidationError { missing: vec![Field::Name, Field::Message] };
    assert_eq!(err.to_string(), "Required fields missing: name, message");
  }

  #[test]
  fn config_error_becomes_not_configured() {
    let err: PersistenceError = ConfigError::Missing("SUPABASE_URL").into();
    assert_eq!(err, PersistenceError::NotConfigured("SUPABASE_URL must be set at compile time".to_string()));
  }
}
