use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// How long the "message sent" banner stays up before the form resets.
pub const SUBMIT_RESET_DELAY_MS: f64 = 3000.0;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Email is invalid.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
}

pub type ValidationErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

pub fn validate(fields: &ContactFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if fields.name.is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }
    if fields.email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }
    if fields.message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    }
    errors
}

/// Local-only contact form state. Errors are recomputed on submit, not while
/// typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: ValidationErrors,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit(&mut self) -> Result<(), ValidationErrors> {
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }
        self.submitted = true;
        Ok(())
    }

    /// Called once the reset delay has elapsed after a successful submit.
    pub fn finish_submission(&mut self) {
        self.submitted = false;
        self.fields = ContactFields::default();
    }
}
