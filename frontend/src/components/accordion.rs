use dioxus::prelude::*;

use crate::components::template::scroll_to_section;

pub struct FaqEntry {
  pub question: &'static str,
  pub answer: &'static str,
  pub topic: &'static str
}

pub const FAQS: [FaqEntry; 4] = [
  FaqEntry {
    question: "How long does a typical project take?",
    answer: "Most projects are completed within 2-4 weeks, depending on complexity. Simple AI chatbots and automations can be delivered in 1-2 weeks, while comprehensive websites with advanced AI features typically take 3-4 weeks. We provide detailed timelines during our initial consultation.",
    topic: "Timeline"
  },
  FaqEntry {
    question: "Do you only work with startups or also individuals?",
    answer: "We work with everyone! From individual entrepreneurs and freelancers to startups, SMBs, and enterprise clients. Our solutions are scalable and can be tailored to any budget or business size. Whether you're a solopreneur or a growing company, we have the right AI solution for you.",
    topic: "Clients"
  },
  FaqEntry {
    question: "Can I request only AI automation without a full website?",
    answer: "Absolutely! We offer standalone AI automation services including chatbots, workflow automation, CRM integrations, and custom AI tools. You don't need a full website project to benefit from our AI solutions. We can integrate automations into your existing systems and platforms.",
    topic: "Services"
  },
  FaqEntry {
    question: "Do you offer post-launch support?",
    answer: "Yes, we provide comprehensive post-launch support including bug fixes, performance monitoring, feature updates, and ongoing optimization. We offer flexible support packages ranging from basic maintenance to full-service management, ensuring your AI solutions continue to evolve with your business needs.",
    topic: "Support"
  },
];

#[component]
pub fn FaqSection() -> Element {
  rsx! {
    section {
      id: "faq",
      class: "section faq",
      div {
        class: "section-header",
        span { class: "section-badge", "FAQ" }
        h2 { "Frequently Asked Questions" }
        p { "Everything you need to know about working with us." }
      }
      div {
        class: "faq-list",
        for (index, faq) in FAQS.iter().enumerate() {
          details {
            key: "{index}",
            class: "faq-item",
            summary {
              span { class: "faq-question", "{faq.question}" }
              span { class: "faq-topic", "{faq.topic}" }
            }
            div {
              id: "faq-answer-{index}",
              class: "faq-answer",
              "{faq.answer}"
            }
          }
        }
      }
      div {
        class: "faq-cta",
        h3 { "Still have questions?" }
        p { "Our AI experts are here to help you find the perfect solution for your business needs." }
        button {
          class: "button button-primary",
          onclick: move |_| scroll_to_section("contact"),
          "Contact Us"
        }
      }
    }
  }
}
