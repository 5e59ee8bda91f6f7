#![allow(non_snake_case)]

use std::rc::Rc;
use dioxus::prelude::*;

use crate::utils::{
  config::CONTACT_EMAIL,
  inquiry::{Field, Inquiry, Variant},
  pipeline::{Notice, SubmissionPipeline, SubmitState},
  store::RestStore
};

type FormPipeline = SubmissionPipeline<RestStore, Coroutine<Notice>>;

#[component]
pub fn ContactForm(variant: Variant) -> Element {
  let notices = use_coroutine_handle::<Notice>();
  // one pipeline per mounted form, the variant is fixed for its lifetime
  let pipeline: Rc<FormPipeline> = use_hook(|| {
    Rc::new(SubmissionPipeline::new(variant, RestStore::from_build_env(), notices).with_fallback_contact(CONTACT_EMAIL))
  });
  let mut inquiry: Signal<Inquiry> = use_signal(Inquiry::default);
  let mut submitting: Signal<bool> = use_signal(|| false);

  // mirror Idle/Submitting into the ui
  use_future({
    let pipeline = pipeline.clone();
    move || {
      let mut state_rx = pipeline.subscribe_state();
      async move {
        while state_rx.changed().await.is_ok() {
          let state = *state_rx.borrow_and_update();
          submitting.set(state == SubmitState::Submitting);
        }
      }
    }
  });

  let field_input = |field: Field| {
    let pipeline = pipeline.clone();
    move |evt: FormEvent| {
      pipeline.update_field(field, evt.value());
      inquiry.set(pipeline.inquiry());
    }
  };

  let on_submit = {
    let pipeline = pipeline.clone();
    move |evt: FormEvent| {
      evt.prevent_default();
      let pipeline = pipeline.clone();
      async move {
        pipeline.submit().await;
        inquiry.set(pipeline.inquiry());
      }
    }
  };

  let title = variant.form_title();
  let current = inquiry();
  let is_submitting = submitting();

  rsx! {
    div {
      class: "contact-card",
      h3 { class: "contact-card-title", "{title}" }
      form {
        class: "contact-form",
        onsubmit: on_submit,
        div {
          class: "form-row",
          div {
            class: "form-group",
            label { class: "form-label", r#for: "name-{variant}", "Name" }
            input {
              class: "form-input",
              id: "name-{variant}",
              r#type: "text",
              placeholder: "Your name",
              value: "{current.name}",
              required: true,
              disabled: is_submitting,
              oninput: field_input(Field::Name)
            }
          }
          div {
            class: "form-group",
            label { class: "form-label", r#for: "email-{variant}", "Email" }
            input {
              class: "form-input",
              id: "email-{variant}",
              r#type: "email",
              placeholder: "your@email.com",
              value: "{current.email}",
              required: true,
              disabled: is_submitting,
              oninput: field_input(Field::Email)
            }
          }
        }
        div {
          class: "form-group",
          label { class: "form-label", r#for: "service-{variant}", "What are you looking for?" }
          select {
            class: "form-input",
            id: "service-{variant}",
            value: "{current.category}",
            required: true,
            disabled: is_submitting,
            onchange: field_input(Field::Category),
            option { value: "", disabled: true, selected: current.category.is_empty(), "Select a service" }
            for choice in variant.category_options().iter().copied() {
              option {
                key: "{choice.value}",
                value: choice.value,
                selected: current.category == choice.value,
                "{choice.label}"
              }
            }
          }
        }
        div {
          class: "form-group",
          label { class: "form-label", r#for: "message-{variant}", "Message" }
          textarea {
            class: "form-input",
            id: "message-{variant}",
            placeholder: "Tell us about your project...",
            rows: "4",
            value: "{current.message}",
            required: true,
            disabled: is_submitting,
            oninput: field_input(Field::Message)
          }
        }
        button {
          r#type: "submit",
          class: "button button-primary button-block",
          disabled: is_submitting,
          if is_submitting {
            span { class: "spinner" }
            "Sending..."
          } else {
            "Send Message"
            span { class: "button-arrow", "→" }
          }
        }
      }
    }
  }
}
