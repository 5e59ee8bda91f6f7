#![allow(non_snake_case)]

use std::time::Duration;
use dioxus::prelude::*;

use crate::{components::{particles::ParticleBackground, template::scroll_to_section}, utils::particles::WordCycle};

pub const HERO_WORDS: [&str; 4] = ["future", "impossible", "extraordinary", "intelligent"];
const WORD_INTERVAL: Duration = Duration::from_secs(3);

#[component]
pub fn Hero() -> Element {
  let mut word = use_signal(|| HERO_WORDS[0]);

  use_future(move || async move {
    let mut cycle = WordCycle::new(&HERO_WORDS);
    loop {
      async_std::task::sleep(WORD_INTERVAL).await;
      word.set(cycle.advance());
    }
  });

  rsx! {
    section {
      class: "hero",
      ParticleBackground { }
      div {
        class: "hero-content",
        h1 {
          "Build the "
          span { class: "hero-word", "{word}" }
          " with AI"
        }
        p { "Transform your business with cutting-edge AI solutions, smart websites, and automation systems that work while you sleep." }
        div {
          class: "hero-actions",
          button {
            class: "button button-primary",
            onclick: move |_| scroll_to_section("contact"),
            "Get Started"
          }
          button {
            class: "button",
            onclick: move |_| scroll_to_section("process"),
            "View Our Work"
          }
        }
      }
    }
  }
}

/// Hero used by the service pages.
#[component]
pub fn PageHero(badge: String, title: String, highlight: String, tagline: String, points: Vec<String>, contact_id: String) -> Element {
  rsx! {
    section {
      class: "hero hero-page",
      div {
        class: "hero-content",
        span { class: "hero-badge", "{badge}" }
        h1 {
          "{title} "
          span { class: "hero-highlight", "{highlight}" }
        }
        p { "{tagline}" }
        ul {
          class: "hero-points",
          for point in points {
            li { "{point}" }
          }
        }
        div {
          class: "hero-actions",
          button {
            class: "button button-primary",
            onclick: move |_| scroll_to_section(&contact_id),
            "Start Your Project"
          }
          button {
            class: "button",
            onclick: move |_| scroll_to_section("whats-included"),
            "See What's Included"
          }
        }
      }
    }
  }
}
