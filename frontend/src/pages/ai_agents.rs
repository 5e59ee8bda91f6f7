use dioxus::prelude::*;

use crate::{
  components::{hero::PageHero, sections::{feature, ContactSection, Feature, FeatureGrid}},
  utils::inquiry::Variant
};

const WHY: [Feature; 3] = [
  feature("💬", "Real Understanding", "Bots that answer questions about your business, not canned responses."),
  feature("🎯", "Qualified Leads", "Every conversation is a chance to capture and qualify a prospect."),
  feature("⏱️", "Always On", "Workflows keep running at 3 a.m. without a support shift."),
];

const INCLUDED: [Feature; 5] = [
  feature("🧠", "GPT-Powered Brain", "Custom-trained models on your own data."),
  feature("🤖", "Booking & Lead Capture", "Book appointments or qualify leads in real time."),
  feature("🌐", "Omni-Channel Support", "Deploy on websites, Telegram, WhatsApp, etc."),
  feature("🧩", "Custom UI Integration", "Embed seamlessly into your website."),
  feature("🔒", "Secure Data Handling", "Privacy-first architecture with clear control."),
];

const PERFECT_FOR: [Feature; 4] = [
  feature("🚀", "Solo Founders", "Automate first response & capture leads 24/7."),
  feature("📈", "Startups", "Save time on support, qualify faster."),
  feature("🎓", "Learning Centers", "Answer common questions with ease."),
  feature("🛍️", "Marketplaces", "Help customers navigate and convert faster."),
];

#[component]
pub fn AiAgents() -> Element {
  static SECTIONS_CSS: Asset = asset!("/assets/home.css");
  static CSS: Asset = asset!("/assets/pages.css");
  let variant = Variant::AiAgents;

  rsx! {
    document::Stylesheet {href: SECTIONS_CSS},
    document::Stylesheet {href: CSS},
    div {
      class: "service-page",
      PageHero {
        badge: "AI Agents & Chatbots",
        title: "AI Agents",
        highlight: "& Chatbots",
        tagline: "Custom GPT-powered bots that talk, think, and take action.",
        points: vec![
          "Lead qualification bots, support bots, and booking bots".to_string(),
          "Trained on your business data".to_string(),
          "Multi-platform deployment".to_string(),
        ],
        contact_id: variant.section_id().to_string()
      }
      FeatureGrid {
        id: "why-this-matters",
        title: "Smarter Conversations.",
        highlight: "Real Results.",
        intro: "We build bots that actually understand your business: answering questions, qualifying leads, and automating workflows with precision.",
        features: WHY.to_vec()
      }
      FeatureGrid {
        id: "whats-included",
        title: "What's",
        highlight: "Included",
        intro: "Everything you need for intelligent automation that understands your business and converts visitors into customers.",
        features: INCLUDED.to_vec()
      }
      FeatureGrid {
        id: "perfect-for",
        title: "Perfect",
        highlight: "For",
        intro: "AI agents designed for businesses that want to automate intelligently and scale efficiently.",
        features: PERFECT_FOR.to_vec()
      }
      ContactSection {
        variant,
        heading: "Let's Build Your AI Agent",
        intro: "Describe the conversations you want automated. We'll get back to you within 12 hours."
      }
    }
  }
}
