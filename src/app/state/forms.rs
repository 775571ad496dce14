//! Newsletter and contact forms.
//!
//! Submissions are validated locally and only ever produce a toast; nothing
//! leaves the process.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Missing(Vec<&'static str>),
    InvalidEmail,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Missing(fields) => write!(f, "Please fill in: {}", fields.join(", ")),
            FormError::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    pub(in crate::app) first_name: String,
    pub(in crate::app) last_name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) error: Option<FormError>,
}

impl NewsletterForm {
    pub fn set(&mut self, field: NewsletterField, value: String) {
        match field {
            NewsletterField::FirstName => self.first_name = value,
            NewsletterField::LastName => self.last_name = value,
            NewsletterField::Email => self.email = value,
        }
        self.error = None;
    }

    pub fn value(&self, field: NewsletterField) -> &str {
        match field {
            NewsletterField::FirstName => &self.first_name,
            NewsletterField::LastName => &self.last_name,
            NewsletterField::Email => &self.email,
        }
    }

    /// Returns the trimmed email on success.
    pub fn validate(&self) -> Result<String, FormError> {
        check_required(&[
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
        ])?;
        check_email(&self.email)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub(in crate::app) name: String,
    pub(in crate::app) email: String,
    pub(in crate::app) subject: String,
    pub(in crate::app) message: String,
    pub(in crate::app) error: Option<FormError>,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        self.error = None;
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        check_required(&[
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ])?;
        check_email(&self.email).map(|_| ())
    }
}

fn check_required(fields: &[(&'static str, &String)]) -> Result<(), FormError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::Missing(missing))
    }
}

fn check_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if EMAIL_SHAPE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(FormError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_reports_every_missing_field() {
        let mut form = NewsletterForm::default();
        form.set(NewsletterField::LastName, "Lovelace".to_string());
        assert_eq!(
            form.validate(),
            Err(FormError::Missing(vec!["First name", "Email"]))
        );
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please fill in: First name, Email"
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "   ".to_string());
        form.set(ContactField::Email, "vera@rubin.org".to_string());
        form.set(ContactField::Subject, "Hello".to_string());
        form.set(ContactField::Message, "\n".to_string());
        assert_eq!(
            form.validate(),
            Err(FormError::Missing(vec!["Name", "Message"]))
        );
    }

    #[test]
    fn email_shape_is_checked_after_required_fields() {
        let mut form = NewsletterForm::default();
        form.set(NewsletterField::FirstName, "Carl".to_string());
        form.set(NewsletterField::LastName, "Sagan".to_string());
        form.set(NewsletterField::Email, "carl-at-cosmos".to_string());
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.set(NewsletterField::Email, "  carl@cosmos.org ".to_string());
        assert_eq!(form.validate(), Ok("carl@cosmos.org".to_string()));
    }

    #[test]
    fn editing_a_field_clears_the_error() {
        let mut form = ContactForm::default();
        form.error = form.validate().err();
        assert!(form.error.is_some());
        form.set(ContactField::Subject, "Telescopes".to_string());
        assert!(form.error.is_none());
        assert_eq!(form.value(ContactField::Subject), "Telescopes");
    }
}
