use dioxus::prelude::*;

use crate::{
  components::{accordion::FaqSection, hero::Hero, sections::{ContactSection, ProcessSection, ServicesSection}},
  utils::inquiry::Variant
};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      Hero { }
      ServicesSection { }
      ProcessSection { }
      FaqSection { }
      ContactSection {
        variant: Variant::General,
        heading: "Let's Build Something Amazing",
        intro: "Ready to transform your business with AI? Tell us about your project and we'll get back to you within 24 hours."
      }
    }
  }
}
