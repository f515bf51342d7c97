use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const CONFIRMATION_MESSAGE: &str = "Message submitted. We'll be in touch soon!";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form field name as posted to the endpoint.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in the {0} field")]
    Missing(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// The contact form's editable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Checks that every field is filled and the email looks like one.
    ///
    /// Reports the first problem in field order.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }

        let email = self.email.trim();
        if !EMAIL.is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[rstest]
    #[case(ContactField::Name)]
    #[case(ContactField::Email)]
    #[case(ContactField::Message)]
    fn blank_field_is_reported(#[case] field: ContactField) {
        let mut form = filled();
        form.set(field, "   ");
        assert_eq!(form.validate(), Err(ContactError::Missing(field)));
    }

    #[rstest]
    #[case("ada")]
    #[case("ada@example")]
    #[case("ada @example.com")]
    #[case("@example.com")]
    fn malformed_email_is_rejected(#[case] email: &str) {
        let mut form = filled();
        form.set(ContactField::Email, email);
        assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            ContactError::Missing(ContactField::Email).to_string(),
            "Please fill in the email field"
        );
    }
}
