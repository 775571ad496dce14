use super::super::state::{App, ContactForm, NewsletterForm};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_newsletter_submitted(&mut self) {
        match self.newsletter.validate() {
            Ok(email) => {
                info!("Newsletter signup accepted");
                self.toasts.push(
                    "Thank you for subscribing!",
                    format!("You'll receive our newsletter at {email}"),
                    Instant::now(),
                );
                self.newsletter = NewsletterForm::default();
            }
            Err(err) => {
                debug!(%err, "Newsletter signup rejected");
                self.newsletter.error = Some(err);
            }
        }
    }

    pub(super) fn handle_contact_submitted(&mut self) {
        match self.contact.validate() {
            Ok(()) => {
                info!(subject = %self.contact.subject.trim(), "Contact message accepted");
                self.toasts.push(
                    "Message sent",
                    "Thank you for reaching out. We'll respond soon.",
                    Instant::now(),
                );
                self.contact = ContactForm::default();
            }
            Err(err) => {
                debug!(%err, "Contact message rejected");
                self.contact.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{ContactField, FormError, NewsletterField};
    use super::*;
    use crate::app::update::test_support::build_test_app;
    use crate::config::AppConfig;

    #[test]
    fn valid_newsletter_signup_shows_toast_and_clears_form() {
        let mut app = build_test_app(AppConfig::default());
        for (field, value) in [
            (NewsletterField::FirstName, "Vera"),
            (NewsletterField::LastName, "Rubin"),
            (NewsletterField::Email, "vera@rubin.org"),
        ] {
            app.reduce(Message::NewsletterFieldChanged(field, value.to_string()));
        }
        let effects = app.reduce(Message::NewsletterSubmitted);
        assert!(effects.is_empty());
        assert_eq!(app.toasts.items.len(), 1);
        assert_eq!(app.toasts.items[0].title, "Thank you for subscribing!");
        assert_eq!(
            app.toasts.items[0].body,
            "You'll receive our newsletter at vera@rubin.org"
        );
        assert!(app.newsletter.value(NewsletterField::Email).is_empty());
    }

    #[test]
    fn invalid_newsletter_signup_keeps_input() {
        let mut app = build_test_app(AppConfig::default());
        app.reduce(Message::NewsletterFieldChanged(
            NewsletterField::Email,
            "vera@rubin.org".to_string(),
        ));
        app.reduce(Message::NewsletterSubmitted);
        assert!(app.toasts.is_empty());
        assert_eq!(
            app.newsletter.error,
            Some(FormError::Missing(vec!["First name", "Last name"]))
        );
        assert_eq!(app.newsletter.value(NewsletterField::Email), "vera@rubin.org");
    }

    #[test]
    fn contact_message_is_acknowledged_locally() {
        let mut app = build_test_app(AppConfig::default());
        for (field, value) in [
            (ContactField::Name, "Henrietta Leavitt"),
            (ContactField::Email, "henrietta@harvard.edu"),
            (ContactField::Subject, "Cepheids"),
            (ContactField::Message, "Period-luminosity relation."),
        ] {
            app.reduce(Message::ContactFieldChanged(field, value.to_string()));
        }
        app.reduce(Message::ContactSubmitted);
        assert_eq!(app.toasts.items.len(), 1);
        assert_eq!(app.toasts.items[0].title, "Message sent");
        assert!(app.contact.value(ContactField::Name).is_empty());
        assert!(app.contact.error.is_none());
    }

    #[test]
    fn toast_can_be_dismissed() {
        let mut app = build_test_app(AppConfig::default());
        let id = app.toasts.push("Message sent", "", Instant::now());
        app.reduce(Message::DismissToast(id));
        assert!(app.toasts.is_empty());
    }
}
