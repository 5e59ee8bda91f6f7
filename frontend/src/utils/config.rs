use reqwest::Url;

use super::server::ConfigError;

pub const PERSISTENCE_URL: Option<&str> = option_env!("SUPABASE_URL");
pub const PERSISTENCE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// Shown on failure notices and in the contact section.
pub const CONTACT_EMAIL: &str = "xmirsaidov5@gmail.com";
pub const TELEGRAM_HANDLE: &str = "@M_X_Mirsaidov";
pub const TELEGRAM_URL: &str = "https://t.me/M_X_Mirsaidov";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
  pub persistence_url: String,
  pub anon_key: String
}

impl SiteConfig {
  pub fn from_build_env() -> Result<Self, ConfigError> {
    Self::from_parts(PERSISTENCE_URL, PERSISTENCE_ANON_KEY)
  }

  pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
    let url = url.map(str::trim).filter(|u| !u.is_empty()).ok_or(ConfigError::Missing("SUPABASE_URL"))?;
    let anon_key = anon_key.map(str::trim).filter(|k| !k.is_empty()).ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

    Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", url, e)))?;

    Ok(Self {
      persistence_url: url.trim_end_matches('/').to_string(),
      anon_key: anon_key.to_string()
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trailing_slash_is_dropped() {
    let config = SiteConfig::from_parts(Some("https://abc.supabase.co/"), Some("anon")).unwrap();
    assert_eq!(config.persistence_url, "https://abc.supabase.co");
    assert_eq!(config.anon_key, "anon");
  }

  #[test]
  fn blank_values_are_missing() {
    assert_eq!(SiteConfig::from_parts(None, Some("anon")), Err(ConfigError::Missing("SUPABASE_URL")));
    assert_eq!(SiteConfig::from_parts(Some("https://abc.supabase.co"), Some("  ")), Err(ConfigError::Missing("SUPABASE_ANON_KEY")));
  }

  #[test]
  fn unparsable_url_is_rejected() {
    let err = SiteConfig::from_parts(Some("not a url"), Some("anon")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl(_)));
  }
}
