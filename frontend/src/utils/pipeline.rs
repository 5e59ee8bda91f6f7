use std::cell::RefCell;
use dioxus::logger::tracing::{error, info, warn};
use futures::channel::mpsc::UnboundedSender;
use tokio::sync::watch;

use super::{
  inquiry::{Field, Inquiry, Variant},
  server::{PersistenceError, StoredInquiry, ValidationError},
  store::InquiryStore
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
  Idle,
  Submitting
}

/// User facing outcome messages. Never carries error internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  Incomplete,
  Sent,
  Failed { fallback: Option<&'static str> }
}

impl Notice {
  pub fn title(&self) -> &'static str {
    match self {
      Self::Incomplete => "Please fill in all fields",
      Self::Sent => "Message sent successfully!",
      Self::Failed { .. } => "Error sending message",
    }
  }

  pub fn description(&self) -> String {
    match self {
      Self::Incomplete => "All fields are required to submit the form.".to_string(),
      Self::Sent => "We'll get back to you within 24 hours.".to_string(),
      Self::Failed { fallback: Some(contact) } => format!("Please try again or contact us directly at {}.", contact),
      Self::Failed { fallback: None } => "Please try again or contact us directly.".to_string(),
    }
  }

  pub fn is_error(&self) -> bool {
    !matches!(self, Self::Sent)
  }
}

pub trait NoticeSink {
  fn notify(&self, notice: Notice);
}

impl NoticeSink for UnboundedSender<Notice> {
  fn notify(&self, notice: Notice) {
    if let Err(e) = self.unbounded_send(notice) {
      warn!("notice dropped, no one is listening: {:?}", e.into_inner());
    }
  }
}

#[derive(Debug)]
pub enum SubmitOutcome {
  Sent(Vec<StoredInquiry>),
  Invalid(ValidationError),
  Failed(PersistenceError),
  /// a submission was already in flight
  Ignored
}

// Leaves `Submitting` on every exit path, including a dropped future.
struct SubmittingGuard<'a> {
  state: &'a watch::Sender<SubmitState>
}

impl<'a> SubmittingGuard<'a> {
  fn enter(state: &'a watch::Sender<SubmitState>) -> Self {
    state.send_replace(SubmitState::Submitting);
    Self { state }
  }
}

impl Drop for SubmittingGuard<'_> {
  fn drop(&mut self) {
    self.state.send_replace(SubmitState::Idle);
  }
}

/// One contact form's worth of state: the inquiry being typed, whether a
/// submission is in flight, and where finished submissions are reported.
///
/// Single threaded by construction (`RefCell`), every mounted form owns its
/// own pipeline.
pub struct SubmissionPipeline<S, N> {
  variant: Variant,
  store: S,
  notices: N,
  fallback_contact: Option<&'static str>,
  inquiry: RefCell<Inquiry>,
  state: watch::Sender<SubmitState>
}

impl<S: InquiryStore, N: NoticeSink> SubmissionPipeline<S, N> {
  pub fn new(variant: Variant, store: S, notices: N) -> Self {
    let (state, _) = watch::channel(SubmitState::Idle);
    Self {
      variant,
      store,
      notices,
      fallback_contact: None,
      inquiry: RefCell::new(Inquiry::default()),
      state
    }
  }

  /// Contact channel pointed to by failure notices.
  pub fn with_fallback_contact(mut self, contact: &'static str) -> Self {
    self.fallback_contact = Some(contact);
    self
  }

  pub fn variant(&self) -> Variant {
    self.variant
  }

  pub fn inquiry(&self) -> Inquiry {
    self.inquiry.borrow().clone()
  }

  pub fn state(&self) -> SubmitState {
    *self.state.borrow()
  }

  pub fn subscribe_state(&self) -> watch::Receiver<SubmitState> {
    self.state.subscribe()
  }

  pub fn update_field(&self, field: Field, value: impl Into<String>) {
    let next = self.inquiry.borrow().with_field(field, value);
    self.inquiry.replace(next);
  }

  pub fn reset(&self) {
    self.inquiry.replace(Inquiry::default());
  }

  /// Validates the current inquiry, writes it to the variant's destination
  /// and reports the result as a notice. Errors come back as outcomes.
  pub async fn submit(&self) -> SubmitOutcome {
    if self.state() == SubmitState::Submitting {
      warn!("submit ignored, a {} submission is already in flight", self.variant);
      return SubmitOutcome::Ignored;
    }

    // the snapshot is what gets written, whatever is typed while in flight
    let snapshot = self.inquiry();
    if let Err(e) = snapshot.validate() {
      warn!("{} form rejected: {}", self.variant, e);
      self.notices.notify(Notice::Incomplete);
      return SubmitOutcome::Invalid(e);
    }

    let destination = self.variant.destination();
    let _guard = SubmittingGuard::enter(&self.state);
    info!("submitting {} inquiry to {}", self.variant, destination);

    match self.store.insert(destination, &snapshot).await {
      Ok(rows) => {
        info!("inquiry stored in {} ({} row(s))", destination, rows.len());
        self.reset();
        self.notices.notify(Notice::Sent);
        SubmitOutcome::Sent(rows)
      },
      Err(e) => {
        error!("error submitting inquiry to {}: {}", destination, e);
        self.notices.notify(Notice::Failed { fallback: self.fallback_contact });
        SubmitOutcome::Failed(e)
      }
    }
  }
}
