use std::{fmt, str::FromStr};
use serde::Serialize;

use super::server::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Email,
  Category,
  Message
}

impl Field {
  pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Category, Field::Message];
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Name => write!(f, "name"),
      Self::Email => write!(f, "email"),
      Self::Category => write!(f, "category"),
      Self::Message => write!(f, "message"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown inquiry field: {}", self.0)
  }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
  type Err = UnknownField;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "name" => Ok(Field::Name),
      "email" => Ok(Field::Email),
      // `service` is the column name in the hosted tables
      "category" | "service" => Ok(Field::Category),
      "message" => Ok(Field::Message),
      _ => Err(UnknownField(s.to_string()))
    }
  }
}

/// The record a visitor fills in. Serializes to exactly the four columns
/// written by an insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
  pub name: String,
  pub email: String,
  #[serde(rename = "service")]
  pub category: String,
  pub message: String
}

impl Inquiry {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::Category => &self.category,
      Field::Message => &self.message,
    }
  }

  pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
    let slot = match field {
      Field::Name => &mut self.name,
      Field::Email => &mut self.email,
      Field::Category => &mut self.category,
      Field::Message => &mut self.message,
    };
    *slot = value.into();
  }

  /// Copy of `self` with only `field` replaced.
  pub fn with_field(&self, field: Field, value: impl Into<String>) -> Inquiry {
    let mut next = self.clone();
    next.set_field(field, value);
    next
  }

  pub fn missing_fields(&self) -> Vec<Field> {
    Field::ALL.into_iter().filter(|field| self.get(*field).is_empty()).collect()
  }

  pub fn validate(&self) -> Result<(), ValidationError> {
    let missing = self.missing_fields();
    if missing.is_empty() {
      Ok(())
    } else {
      Err(ValidationError { missing })
    }
  }

  pub fn is_empty(&self) -> bool {
    self.missing_fields().len() == Field::ALL.len()
  }
}

/* Variants and their destinations */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
  #[default]
  General,
  SmartWebsites,
  AiAgents
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
  Contacts,
  SmartWebsitesContacts,
  AiAgentsContacts
}

impl Destination {
  pub fn table(&self) -> &'static str {
    match self {
      Self::Contacts => "contacts",
      Self::SmartWebsitesContacts => "smart_websites_contacts",
      Self::AiAgentsContacts => "ai_agents_contacts",
    }
  }
}

impl fmt::Display for Destination {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.table())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
  pub value: &'static str,
  pub label: &'static str
}

const fn opt(value: &'static str, label: &'static str) -> CategoryOption {
  CategoryOption { value, label }
}

const GENERAL_OPTIONS: [CategoryOption; 5] = [
  opt("smart-websites", "Smart Websites"),
  opt("ai-agents", "AI Agents & Chatbots"),
  opt("automation", "Automation Systems"),
  opt("custom-ai", "Custom AI Tools"),
  opt("consultation", "Consultation"),
];

const SMART_WEBSITES_OPTIONS: [CategoryOption; 6] = [
  opt("landing-page", "Landing Page"),
  opt("business-website", "Business Website"),
  opt("e-commerce", "E-commerce Site"),
  opt("portfolio", "Portfolio Site"),
  opt("saas-platform", "SaaS Platform"),
  opt("custom-website", "Custom Website"),
];

const AI_AGENTS_OPTIONS: [CategoryOption; 5] = [
  opt("customer-support-bot", "Customer Support Bot"),
  opt("sales-assistant", "Sales Assistant"),
  opt("booking-agent", "Booking Agent"),
  opt("lead-qualification", "Lead Qualification"),
  opt("custom-ai-agent", "Custom AI Agent"),
];

impl Variant {
  pub const ALL: [Variant; 3] = [Variant::General, Variant::SmartWebsites, Variant::AiAgents];

  pub fn destination(&self) -> Destination {
    match self {
      Self::General => Destination::Contacts,
      Self::SmartWebsites => Destination::SmartWebsitesContacts,
      Self::AiAgents => Destination::AiAgentsContacts,
    }
  }

  pub fn category_options(&self) -> &'static [CategoryOption] {
    match self {
      Self::General => &GENERAL_OPTIONS,
      Self::SmartWebsites => &SMART_WEBSITES_OPTIONS,
      Self::AiAgents => &AI_AGENTS_OPTIONS,
    }
  }

  pub fn form_title(&self) -> &'static str {
    match self {
      Self::General => "Get Started Today",
      Self::SmartWebsites => "Start Your Website Project",
      Self::AiAgents => "Build Your AI Agent",
    }
  }

  /// Anchor id of the section holding this variant's form.
  pub fn section_id(&self) -> &'static str {
    match self {
      Self::General => "contact",
      Self::SmartWebsites => "smart-websites-contact",
      Self::AiAgents => "ai-agents-contact",
    }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::General => write!(f, "default"),
      Self::SmartWebsites => write!(f, "smart-websites"),
      Self::AiAgents => write!(f, "ai-agents"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Unknown form variant: {}", self.0)
  }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
  type Err = UnknownVariant;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "default" | "general" => Ok(Variant::General),
      "smart-websites" => Ok(Variant::SmartWebsites),
      "ai-agents" => Ok(Variant::AiAgents),
      _ => Err(UnknownVariant(s.to_string()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jane() -> Inquiry {
    Inquiry {
      name: "Jane".to_string(),
      email: "jane@x.com".to_string(),
      category: "business-website".to_string(),
      message: "Need a site".to_string()
    }
  }

  #[test]
  fn with_field_only_touches_named_field() {
    let before = Inquiry { name: "A".to_string(), message: "M".to_string(), ..Default::default() };
    let after = before.with_field(Field::Email, "x@y.com");

    assert_eq!(after, Inquiry {
      name: "A".to_string(),
      email: "x@y.com".to_string(),
      category: String::new(),
      message: "M".to_string()
    });
    // the source inquiry is untouched
    assert_eq!(before.email, "");
  }

  #[test]
  fn validate_reports_every_empty_field() {
    assert!(jane().validate().is_ok());

    let err = Inquiry { email: "a@b.com".to_string(), category: "website".to_string(), message: "hi".to_string(), ..Default::default() }
      .validate()
      .unwrap_err();
    assert_eq!(err.missing, vec![Field::Name]);

    let err = Inquiry::default().validate().unwrap_err();
    assert_eq!(err.missing, Field::ALL.to_vec());
  }

  #[test]
  fn whitespace_counts_as_filled() {
    let inquiry = jane().with_field(Field::Message, " ");
    assert!(inquiry.validate().is_ok());
  }

  #[test]
  fn serializes_category_as_service_column() {
    let value = serde_json::to_value(jane()).unwrap();
    assert_eq!(value, serde_json::json!({
      "name": "Jane",
      "email": "jane@x.com",
      "service": "business-website",
      "message": "Need a site"
    }));
  }

  #[test]
  fn field_names_parse() {
    assert_eq!("email".parse::<Field>(), Ok(Field::Email));
    assert_eq!("service".parse::<Field>(), Ok(Field::Category));
    assert_eq!("Category".parse::<Field>(), Ok(Field::Category));
    assert!("phone".parse::<Field>().is_err());
  }

  #[test]
  fn each_variant_has_its_own_destination() {
    let tables: Vec<&str> = Variant::ALL.iter().map(|v| v.destination().table()).collect();
    assert_eq!(tables, vec!["contacts", "smart_websites_contacts", "ai_agents_contacts"]);

    for variant in Variant::ALL {
      let first = variant.destination();
      for _ in 0..3 {
        assert_eq!(variant.destination(), first);
      }
    }
  }

  #[test]
  fn category_options_follow_variant() {
    let values = |v: Variant| v.category_options().iter().map(|o| o.value).collect::<Vec<_>>();
    assert_eq!(values(Variant::General), vec!["smart-websites", "ai-agents", "automation", "custom-ai", "consultation"]);
    assert!(values(Variant::SmartWebsites).contains(&"business-website"));
    assert_eq!(Variant::AiAgents.category_options().len(), 5);
    assert_eq!(Variant::SmartWebsites.category_options()[2].label, "E-commerce Site");
  }

  #[test]
  fn variant_round_trips_through_page_names() {
    for variant in Variant::ALL {
      assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
    }
    assert_eq!("general".parse::<Variant>(), Ok(Variant::General));
    assert!("blog".parse::<Variant>().is_err());
  }
}
