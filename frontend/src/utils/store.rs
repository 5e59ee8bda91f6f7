use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use super::{
  config::SiteConfig,
  inquiry::{Destination, Inquiry},
  server::{ConfigError, PersistenceError, StoredInquiry}
};

/// Insert-only access to the hosted contact tables.
#[allow(async_fn_in_trait)]
pub trait InquiryStore {
  async fn insert(&self, destination: Destination, record: &Inquiry) -> Result<Vec<StoredInquiry>, PersistenceError>;
}

// PostgREST style table client
pub struct RestStore {
  client: reqwest::Client,
  config: Result<SiteConfig, ConfigError>,
  rest_path: String
}

impl RestStore {
  pub fn new(client: reqwest::Client, config: Result<SiteConfig, ConfigError>) -> Self {
    Self {
      client,
      config,
      rest_path: "/rest/v1".to_string()
    }
  }

  pub fn from_build_env() -> Self {
    Self::new(reqwest::Client::new(), SiteConfig::from_build_env())
  }

  pub fn with_rest_path(mut self, path: &str) -> Self {
    self.rest_path = path.trim_end_matches('/').to_string();
    self
  }

  pub fn is_configured(&self) -> bool {
    self.config.is_ok()
  }

  pub fn table_url(&self, destination: Destination) -> Result<String, PersistenceError> {
    let config = self.config.as_ref().map_err(|e| PersistenceError::from(e.clone()))?;
    Ok(format!("{}{}/{}", config.persistence_url, self.rest_path, destination.table()))
  }

  pub fn insert_request(&self, destination: Destination, record: &Inquiry) -> Result<reqwest::Request, PersistenceError> {
    let config = self.config.as_ref().map_err(|e| PersistenceError::from(e.clone()))?;
    let url = self.table_url(destination)?;

    // a single-row array, the service answers with the stored rows
    self.client.post(url)
      .header("apikey", &config.anon_key)
      .header(AUTHORIZATION, format!("Bearer {}", config.anon_key))
      .header(CONTENT_TYPE, "application/json")
      .header("Prefer", "return=representation")
      .json(&[record])
      .build()
      .map_err(|e| PersistenceError::Connection(e.to_string()))
  }
}

impl InquiryStore for RestStore {
  async fn insert(&self, destination: Destination, record: &Inquiry) -> Result<Vec<StoredInquiry>, PersistenceError> {
    let request = self.insert_request(destination, record)?;
    let resp = self.client.execute(request).await.map_err(|e| PersistenceError::Connection(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(PersistenceError::Rejected { status: status.as_u16(), body });
    }

    resp.json::<Vec<StoredInquiry>>().await.map_err(|e| PersistenceError::Deserialize(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn configured() -> RestStore {
    let config = SiteConfig::from_parts(Some("https://abc.supabase.co"), Some("anon-key"));
    RestStore::new(reqwest::Client::new(), config)
  }

  fn jane() -> Inquiry {
    Inquiry {
      name: "Jane".to_string(),
      email: "jane@x.com".to_string(),
      category: "business-website".to_string(),
      message: "Need a site".to_string()
    }
  }

  #[test]
  fn table_url_per_destination() {
    let store = configured();
    assert_eq!(store.table_url(Destination::Contacts).unwrap(), "https://abc.supabase.co/rest/v1/contacts");
    assert_eq!(store.table_url(Destination::AiAgentsContacts).unwrap(), "https://abc.supabase.co/rest/v1/ai_agents_contacts");

    let store = configured().with_rest_path("/api/");
    assert_eq!(store.table_url(Destination::SmartWebsitesContacts).unwrap(), "https://abc.supabase.co/api/smart_websites_contacts");
  }

  #[test]
  fn insert_request_carries_auth_and_single_row() {
    let request = configured().insert_request(Destination::SmartWebsitesContacts, &jane()).unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(request.url().as_str(), "https://abc.supabase.co/rest/v1/smart_websites_contacts");
    assert_eq!(request.headers()["apikey"], "anon-key");
    assert_eq!(request.headers()[AUTHORIZATION], "Bearer anon-key");
    assert_eq!(request.headers()["prefer"], "return=representation");

    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    let rows: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(rows, serde_json::json!([{
      "name": "Jane",
      "email": "jane@x.com",
      "service": "business-website",
      "message": "Need a site"
    }]));
  }

  #[tokio::test]
  async fn unconfigured_store_fails_without_network() {
    let store = RestStore::new(reqwest::Client::new(), Err(ConfigError::Missing("SUPABASE_URL")));
    assert!(!store.is_configured());

    let err = store.insert(Destination::Contacts, &jane()).await.unwrap_err();
    assert_eq!(err, PersistenceError::NotConfigured("SUPABASE_URL must be set at compile time".to_string()));
  }
}
