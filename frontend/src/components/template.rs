use dioxus::prelude::*;
use crate::{utils::{config::{CONTACT_EMAIL, TELEGRAM_URL}, inquiry::Variant}, Route};

pub const HOME_LINKS: [(&str, &str); 4] = [
  ("services", "Services"),
  ("process", "Our Process"),
  ("faq", "FAQ"),
  ("contact", "Contact"),
];

pub const SMART_WEBSITES_LINKS: [(&str, &str); 4] = [
  ("why-smart-websites", "Why Us"),
  ("whats-included", "Included"),
  ("perfect-for", "Perfect For"),
  ("smart-websites-contact", "Contact"),
];

pub const AI_AGENTS_LINKS: [(&str, &str); 4] = [
  ("why-this-matters", "Why This Matters"),
  ("whats-included", "Included"),
  ("perfect-for", "Perfect For"),
  ("ai-agents-contact", "Contact"),
];

/// Which contact variant a route renders. Unknown routes fall back to the home links.
pub fn route_variant(route: &Route) -> Variant {
  match route {
    Route::SmartWebsites {} => Variant::SmartWebsites,
    Route::AiAgents {} => Variant::AiAgents,
    _ => Variant::General,
  }
}

/// (section id, label) anchors shown in the header for a page.
pub fn nav_links(variant: Variant) -> &'static [(&'static str, &'static str)] {
  match variant {
    Variant::General => &HOME_LINKS,
    Variant::SmartWebsites => &SMART_WEBSITES_LINKS,
    Variant::AiAgents => &AI_AGENTS_LINKS,
  }
}

pub fn cta_label(variant: Variant) -> &'static str {
  match variant {
    Variant::General => "Get Started",
    _ => "Start Your Project",
  }
}

pub fn scroll_to_section(id: &str) {
  document::eval(&format!(r#"
    const section = document.getElementById('{}');
    if (section) {{ section.scrollIntoView({{ behavior: 'smooth' }}); }}
  "#, id));
}

pub fn scroll_to_top() {
  document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

#[component]
pub fn SiteLayout() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    Outlet::<Route> {}
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  let route = use_route::<Route>();
  let variant = route_variant(&route);
  let cta = cta_label(variant);
  let mut menu_open = use_signal(|| false);

  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::Home { },
          onclick: move |_| scroll_to_top(),
          span { class: "logo-mark", "X" }
          span { class: "logo-text", "xonai.dev" }
        }
        button {
          class: "menu-button",
          aria_label: "Toggle menu",
          onclick: move |_| menu_open.set(!menu_open()),
          span {
            class: "menu-icon",
            svg {
              class: "menu-icon-svg",
              xmlns: "http://www.w3.org/2000/svg",
              view_box: "0 0 24 24",
              path {
                d: "M6 12H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 15.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 8.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
            }
          }
        },
        div {
          class: if menu_open() { "nav-links open" } else { "nav-links" },
          for (id, label) in nav_links(variant).iter().copied() {
            a {
              key: "{id}",
              href: "#{id}",
              onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
              },
              "{label}"
            }
          }
          button {
            class: "button button-cta",
            onclick: move |_| {
              scroll_to_section(variant.section_id());
              menu_open.set(false);
            },
            "{cta}"
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2025 xonai.dev" }
        },
        div {
          class: "social-links",
          a {
            href: "mailto:{CONTACT_EMAIL}",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
          }
          a {
            href: TELEGRAM_URL,
            target: "_blank",
            rel: "noopener noreferrer",
            class: "social-link",
            title: "Telegram",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path { d: "M22 2 11 13" }
              path { d: "M22 2 15 22l-4-9-9-4 20-7z" }
            }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn routes_map_to_variants() {
    assert_eq!(route_variant(&Route::Home {}), Variant::General);
    assert_eq!(route_variant(&Route::SmartWebsites {}), Variant::SmartWebsites);
    assert_eq!(route_variant(&Route::AiAgents {}), Variant::AiAgents);
    assert_eq!(route_variant(&Route::PageNotFound { route: vec!["blog".to_string()] }), Variant::General);
  }

  #[test]
  fn every_page_links_to_its_own_contact_form() {
    for variant in Variant::ALL {
      let links = nav_links(variant);
      assert_eq!(links.len(), 4);
      assert_eq!(links.last().map(|(id, _)| *id), Some(variant.section_id()));
    }
  }
}
