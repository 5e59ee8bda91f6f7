#![allow(non_snake_case)]

use std::time::Duration;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::utils::pipeline::{Notice, NoticeSink};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
  pub id: usize,
  pub notice: Notice
}

impl NoticeSink for Coroutine<Notice> {
  fn notify(&self, notice: Notice) {
    self.send(notice);
  }
}

/// Starts the notice coroutine for the whole app. Forms below reach it with
/// `use_coroutine_handle::<Notice>()`.
pub fn use_toaster() -> Signal<Vec<Toast>> {
  let mut toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

  use_coroutine(move |mut rx: UnboundedReceiver<Notice>| async move {
    let mut next_id = 0;
    while let Some(notice) = rx.next().await {
      let id = next_id;
      next_id += 1;
      toasts.write().push(Toast { id, notice });

      spawn(async move {
        async_std::task::sleep(TOAST_LIFETIME).await;
        toasts.write().retain(|t| t.id != id);
      });
    }
  });

  toasts
}

#[component]
pub fn Toaster(mut toasts: Signal<Vec<Toast>>) -> Element {
  let items: Vec<(usize, &'static str, &'static str, String)> = toasts().iter().map(|t| {
    let class = if t.notice.is_error() { "toast toast-error show" } else { "toast toast-success show" };
    (t.id, class, t.notice.title(), t.notice.description())
  }).collect();

  rsx! {
    div {
      class: "toaster",
      for (id, class, title, description) in items {
        div {
          key: "{id}",
          class,
          role: "status",
          div {
            class: "toast-body",
            strong { class: "toast-title", "{title}" }
            p { class: "toast-description", "{description}" }
          }
          button {
            class: "toast-close",
            aria_label: "Dismiss",
            onclick: move |_| toasts.write().retain(|t| t.id != id),
            "✕"
          }
        }
      }
    }
  }
}
