use dioxus::prelude::*;

use crate::{
  components::{hero::PageHero, sections::{feature, ContactSection, Feature, FeatureGrid}},
  utils::inquiry::Variant
};

const WHY: [Feature; 3] = [
  feature("⚡", "Built to Convert", "Fast, focused pages that turn visitors into leads instead of bounces."),
  feature("🧠", "AI Inside", "Chat assistants and dynamic content that answer questions while you sleep."),
  feature("📈", "Measured Growth", "Analytics and SEO wired in from day one so every change is tracked."),
];

const INCLUDED: [Feature; 6] = [
  feature("🎨", "Custom Design", "A unique, modern look tailored to your brand. No templates."),
  feature("📱", "Responsive Layout", "Pixel-perfect on phones, tablets, and desktops."),
  feature("🤖", "AI Chat Assistant", "An on-site assistant trained on your business answers visitors instantly."),
  feature("🔍", "SEO Optimization", "Clean markup, metadata, and performance tuned for search engines."),
  feature("📊", "Analytics Integration", "Know where visitors come from and what makes them convert."),
  feature("🛠️", "CMS & Hosting Setup", "Edit your own content and launch on fast, secure hosting."),
];

const PERFECT_FOR: [Feature; 4] = [
  feature("🚀", "Startups", "Launch a credible web presence quickly and iterate with your product."),
  feature("🛍️", "E-commerce", "Storefronts that guide shoppers from browsing to checkout."),
  feature("💼", "Service Businesses", "Capture bookings and inquiries around the clock."),
  feature("🎨", "Creators & Portfolios", "Showcase your work with a site as distinctive as you are."),
];

#[component]
pub fn SmartWebsites() -> Element {
  static SECTIONS_CSS: Asset = asset!("/assets/home.css");
  static CSS: Asset = asset!("/assets/pages.css");
  let variant = Variant::SmartWebsites;

  rsx! {
    document::Stylesheet {href: SECTIONS_CSS},
    document::Stylesheet {href: CSS},
    div {
      class: "service-page",
      PageHero {
        badge: "Smart Websites",
        title: "Websites That",
        highlight: "Work For You",
        tagline: "Beautiful, responsive websites with integrated AI features that convert visitors into customers.",
        points: vec![
          "Custom design with built-in AI assistants".to_string(),
          "SEO and analytics from launch day".to_string(),
          "Fast, secure, and mobile-first".to_string(),
        ],
        contact_id: variant.section_id().to_string()
      }
      FeatureGrid {
        id: "why-smart-websites",
        title: "Smarter Sites.",
        highlight: "Real Results.",
        intro: "A website should do more than look good. Ours answer questions, capture leads, and keep improving after launch.",
        features: WHY.to_vec()
      }
      FeatureGrid {
        id: "whats-included",
        title: "What's",
        highlight: "Included",
        intro: "Everything you need for a modern website that grows with your business.",
        features: INCLUDED.to_vec()
      }
      FeatureGrid {
        id: "perfect-for",
        title: "Perfect",
        highlight: "For",
        intro: "Smart websites for businesses that want their online presence to pull its weight.",
        features: PERFECT_FOR.to_vec()
      }
      ContactSection {
        variant,
        heading: "Start Your Smart Website",
        intro: "Tell us about your business and the site you have in mind. We'll reply within 24 hours."
      }
    }
  }
}
