//! Contact form submission.
//!
//! The network request itself belongs to the host; it is reached through
//! `FormTransport`. This module owns the submit button state, the encoded
//! request, and the status message shown under the form.
//!
//! ```text
//! Idle -> Sending   (begin_submit: label "Sending...", disabled, loading)
//! Sending -> Idle   (complete: label restored, message shown)
//! ```

use crate::constants::{
    FORM_ERROR_TEXT, FORM_MESSAGE_DURATION_MS, FORM_SENDING_LABEL, FORM_SUCCESS_TEXT,
};
use crate::error::FormError;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Marker in the form `action` that identifies the managed contact form
pub const MANAGED_ACTION_MARKER: &str = "formspree";

/// A POST ready to be sent by the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest {
    pub endpoint: String,
    /// `application/x-www-form-urlencoded` body
    pub body: String,
    pub content_type: &'static str,
    pub accept: &'static str,
}

/// Sends a prepared request and reports the HTTP status.
pub trait FormTransport {
    fn post(&self, request: &FormRequest) -> Result<u16, FormError>;
}

/// Encode fields as `application/x-www-form-urlencoded`.
pub fn encode_fields(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Visual state of the submit button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

impl SubmitButton {
    fn idle(label: String) -> Self {
        Self {
            label,
            disabled: false,
            loading: false,
        }
    }
}

/// Kind of status message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS modifier class, e.g. `form-message--success`
    pub fn class_name(&self) -> &'static str {
        match self {
            MessageKind::Success => "form-message form-message--success",
            MessageKind::Error => "form-message form-message--error",
        }
    }
}

/// Status message inserted after the form
#[derive(Clone, Debug)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
    created_at: Instant,
    duration: Duration,
}

impl FormMessage {
    fn new(kind: MessageKind) -> Self {
        let text = match kind {
            MessageKind::Success => FORM_SUCCESS_TEXT,
            MessageKind::Error => FORM_ERROR_TEXT,
        };
        Self {
            kind,
            text,
            created_at: Instant::now(),
            duration: Duration::from_millis(FORM_MESSAGE_DURATION_MS),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Result of a finished submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    /// `Ok` on a 2xx response
    pub result: Result<u16, FormError>,
    /// Clear the form fields
    pub reset_form: bool,
}

/// Submit lifecycle for one form.
#[derive(Clone, Debug)]
pub struct FormHandler {
    endpoint: String,
    original_label: String,
    button: SubmitButton,
    sending: bool,
    message: Option<FormMessage>,
}

impl FormHandler {
    pub fn new(endpoint: impl Into<String>, submit_label: impl Into<String>) -> Self {
        let original_label = submit_label.into();
        Self {
            endpoint: endpoint.into(),
            button: SubmitButton::idle(original_label.clone()),
            original_label,
            sending: false,
            message: None,
        }
    }

    /// Attach only to forms whose action points at the managed endpoint.
    pub fn for_action(action: &str, submit_label: impl Into<String>) -> Option<Self> {
        action
            .contains(MANAGED_ACTION_MARKER)
            .then(|| Self::new(action, submit_label))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// The message showing at `now`, unless it has expired
    pub fn message(&self, now: Instant) -> Option<&FormMessage> {
        self.message.as_ref().filter(|m| !m.is_expired_at(now))
    }

    /// Drop the message once it has expired. Returns true if one was removed.
    pub fn prune_message(&mut self, now: Instant) -> bool {
        if self.message.as_ref().is_some_and(|m| m.is_expired_at(now)) {
            self.message = None;
            return true;
        }
        false
    }

    /// Enter the sending state and build the request.
    pub fn begin_submit(&mut self, fields: &[(String, String)]) -> Result<FormRequest, FormError> {
        if self.sending {
            return Err(FormError::AlreadySending);
        }
        self.sending = true;
        self.button = SubmitButton {
            label: FORM_SENDING_LABEL.to_string(),
            disabled: true,
            loading: true,
        };
        Ok(FormRequest {
            endpoint: self.endpoint.clone(),
            body: encode_fields(fields),
            content_type: "application/x-www-form-urlencoded",
            accept: "application/json",
        })
    }

    /// Finish a submission with the transport's result.
    pub fn complete(&mut self, response: Result<u16, FormError>) -> Result<FormOutcome, FormError> {
        if !self.sending {
            return Err(FormError::NotSending);
        }
        self.sending = false;
        self.button = SubmitButton::idle(self.original_label.clone());

        let result = match response {
            Ok(status) if (200..300).contains(&status) => Ok(status),
            Ok(status) => Err(FormError::Status(status)),
            Err(err) => Err(err),
        };

        let kind = match &result {
            Ok(status) => {
                info!(status, endpoint = %self.endpoint, "Contact form sent");
                MessageKind::Success
            }
            Err(err) => {
                warn!(error = %err, endpoint = %self.endpoint, "Contact form failed");
                MessageKind::Error
            }
        };
        // A new message replaces any existing one
        self.message = Some(FormMessage::new(kind));

        Ok(FormOutcome {
            reset_form: result.is_ok(),
            result,
        })
    }

    /// Run a whole submission through `transport`.
    pub fn submit<T: FormTransport>(
        &mut self,
        fields: &[(String, String)],
        transport: &T,
    ) -> Result<FormOutcome, FormError> {
        let request = self.begin_submit(fields)?;
        let response = transport.post(&request);
        self.complete(response)
    }
}
