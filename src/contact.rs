use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id / form name of the input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Subject => "Project discussion",
            Field::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{0} doesn't look like an email address")]
    InvalidEmail(String),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(f) => *f,
            FieldError::InvalidEmail(_) => Field::Email,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} field(s) need attention", .0.len())]
pub struct ContactFormError(pub Vec<FieldError>);

impl ContactFormError {
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("message delivery is unavailable")]
    Unavailable,
    #[error("message was rejected: {0}")]
    Rejected(String),
}

/// Raw input captured by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated message, ready to hand to a [`MessageRelay`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<ContactMessage, ContactFormError> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !looks_like_email(email) {
            errors.push(FieldError::InvalidEmail(email.to_string()));
        }
        if message.is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }

        if !errors.is_empty() {
            return Err(ContactFormError(errors));
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: message.to_string(),
        })
    }
}

/// External message-delivery service (email relay, ticketing, ...).
pub trait MessageRelay {
    fn deliver(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Placeholder relay: logs the message and reports success. Nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRelay;

impl MessageRelay for LogRelay {
    fn deliver(&self, message: &ContactMessage) -> Result<(), RelayError> {
        log::info!(
            "contact form submitted: {}",
            serde_json::to_string(message).unwrap_or_default()
        );
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactFormError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Status line under the form after a submit. Field errors are shown inline instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed(String),
}

impl Notice {
    pub fn for_result(result: &Result<(), SubmitError>) -> Option<Self> {
        match result {
            Ok(()) => Some(Notice::Sent),
            Err(SubmitError::Invalid(_)) => None,
            Err(e) => Some(Notice::Failed(e.to_string())),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Sent => "Thanks! Your message is on its way.",
            Notice::Failed(msg) => msg,
        }
    }
}

/// Validates `form` and hands it to `relay`; the form is cleared only on success.
pub fn submit<R: MessageRelay>(form: &mut ContactForm, relay: &R) -> Result<(), SubmitError> {
    let message = form.validate()?;
    relay.deliver(&message)?;
    form.clear();
    Ok(())
}
