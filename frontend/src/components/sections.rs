#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
  components::{contact_form::ContactForm, template::{scroll_to_section, scroll_to_top}},
  utils::{config::{CONTACT_EMAIL, TELEGRAM_HANDLE, TELEGRAM_URL}, inquiry::Variant},
  Route
};

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
  pub icon: &'static str,
  pub title: &'static str,
  pub description: &'static str
}

pub const fn feature(icon: &'static str, title: &'static str, description: &'static str) -> Feature {
  Feature { icon, title, description }
}

struct Service {
  icon: &'static str,
  title: &'static str,
  description: &'static str,
  features: [&'static str; 4],
  page: Option<Route>
}

struct ProcessStep {
  step: &'static str,
  title: &'static str,
  description: &'static str,
  details: &'static str
}

const PROCESS: [ProcessStep; 4] = [
  ProcessStep {
    step: "01",
    title: "Vision Alignment",
    description: "Clarify client goals, needs, and automation ideas",
    details: "We start by understanding your unique challenges and opportunities, mapping out a clear roadmap for AI integration."
  },
  ProcessStep {
    step: "02",
    title: "Visual Prototype",
    description: "Present futuristic UI mockups or system blueprints",
    details: "See your solution before it's built with detailed wireframes, mockups, and interactive prototypes."
  },
  ProcessStep {
    step: "03",
    title: "AI Logic Build",
    description: "Build tailored AI agents, automations, or websites",
    details: "Custom development using cutting-edge AI technologies, perfectly tailored to your specific requirements."
  },
  ProcessStep {
    step: "04",
    title: "Launch & Iterate",
    description: "Fast deployment with continuous improvements",
    details: "Fast launch with continuous improvements, monitoring, and real-world performance upgrades."
  },
];

fn services() -> [Service; 4] {
  [
    Service {
      icon: "🌐",
      title: "Smart Websites",
      description: "Beautiful, responsive websites with integrated AI features that convert visitors into customers",
      features: ["AI-powered chatbots", "Dynamic content", "SEO optimization", "Analytics integration"],
      page: Some(Route::SmartWebsites {})
    },
    Service {
      icon: "🤖",
      title: "AI Agents & Chatbots",
      description: "Intelligent conversational AI that provides instant customer support and engagement",
      features: ["Natural conversations", "Multi-platform support", "Learning capabilities", "Human handoff"],
      page: Some(Route::AiAgents {})
    },
    Service {
      icon: "⚙️",
      title: "Automation Systems",
      description: "Streamline operations with intelligent automation that handles repetitive tasks seamlessly",
      features: ["Workflow automation", "Task scheduling", "Error handling", "Performance monitoring"],
      page: None
    },
    Service {
      icon: "✨",
      title: "Custom AI Tools",
      description: "Tailored AI solutions that automate your specific business processes and workflows",
      features: ["Process automation", "Data analysis", "Custom integrations", "24/7 operation"],
      page: None
    },
  ]
}

#[component]
pub fn ServicesSection() -> Element {
  rsx! {
    section {
      id: "services",
      class: "section services",
      div {
        class: "section-header",
        h2 { "Our " span { class: "gradient-text", "Services" } }
        p { "From intelligent websites to custom AI solutions, we build technology that works for you" }
      }
      div {
        class: "card-grid two-col",
        for service in services() {
          div {
            key: "{service.title}",
            class: "feature-card service-card",
            h3 {
              class: "feature-card-title",
              span { "{service.icon}" }
              "{service.title}"
            }
            p { "{service.description}" }
            ul {
              class: "service-features",
              for item in service.features {
                li { "{item}" }
              }
            }
            if let Some(page) = service.page {
              Link {
                class: "button button-outline",
                to: page,
                onclick: move |_| scroll_to_top(),
                "Learn More →"
              }
            } else {
              button {
                class: "button button-outline",
                onclick: move |_| scroll_to_section("contact"),
                "Get Started →"
              }
            }
          }
        }
      }
    }
  }
}

#[component]
pub fn ProcessSection() -> Element {
  rsx! {
    section {
      id: "process",
      class: "section process",
      div {
        class: "section-header",
        span { class: "section-badge", "Our Process" }
        h2 { "What You Get" }
        p { "A proven methodology that transforms your vision into reality with precision engineering and continuous innovation at every step." }
      }
      ol {
        class: "timeline",
        for item in PROCESS.iter() {
          li {
            key: "{item.step}",
            class: "timeline-step",
            span { class: "timeline-number", "{item.step}" }
            h3 { "{item.title}" }
            p { class: "timeline-description", "{item.description}" }
            p { class: "timeline-details", "{item.details}" }
          }
        }
      }
      div {
        class: "center mt-6",
        button {
          class: "button button-primary",
          onclick: move |_| scroll_to_section("contact"),
          "Start Your Journey"
        }
      }
    }
  }
}

/// Titled grid of icon cards used by the service pages.
#[component]
pub fn FeatureGrid(id: String, title: String, highlight: String, intro: String, features: Vec<Feature>) -> Element {
  rsx! {
    section {
      id: "{id}",
      class: "section",
      div {
        class: "section-header",
        h2 { "{title} " span { class: "gradient-text", "{highlight}" } }
        p { "{intro}" }
      }
      div {
        class: "card-grid",
        for feature in features {
          div {
            key: "{feature.title}",
            class: "feature-card",
            h3 {
              class: "feature-card-title",
              span { "{feature.icon}" }
              "{feature.title}"
            }
            p { "{feature.description}" }
          }
        }
      }
    }
  }
}

#[component]
pub fn ContactSection(variant: Variant, heading: String, intro: String) -> Element {
  let section_id = variant.section_id();

  rsx! {
    section {
      id: "{section_id}",
      class: "section contact",
      div {
        class: "section-header",
        span { class: "section-badge", "Get In Touch" }
        h2 { "{heading}" }
        p { "{intro}" }
      }
      div {
        class: "contact-layout",
        ContactForm { variant }
        div {
          class: "contact-direct",
          h3 { "Get in touch directly" }
          a {
            class: "contact-channel",
            href: "mailto:{CONTACT_EMAIL}?subject=Project%20Inquiry",
            span { class: "contact-channel-label", "Email" }
            span { "{CONTACT_EMAIL}" }
          }
          a {
            class: "contact-channel",
            href: TELEGRAM_URL,
            target: "_blank",
            rel: "noopener noreferrer",
            span { class: "contact-channel-label", "Telegram" }
            span { "{TELEGRAM_HANDLE}" }
          }
          div {
            class: "contact-availability",
            span { class: "status-dot" }
            strong { "Available for new projects" }
            p { "We typically respond within 24 hours. For urgent inquiries, reach out via Telegram for the fastest response." }
          }
        }
      }
    }
  }
}
