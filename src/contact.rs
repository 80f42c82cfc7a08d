// Client-side validation for the contact form

use serde::Deserialize;
use std::fmt;
use js_sys::Array;
use wasm_bindgen::prelude::*;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FieldError::Name => "Name must be at least 2 characters long",
            FieldError::Email => "Please enter a valid email address",
            FieldError::Subject => "Please select a subject",
            FieldError::Message => "Message must be at least 10 characters long",
        };
        f.write_str(message)
    }
}

impl std::error::Error for FieldError {}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    // Checks every field and reports all failures in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if utf16_len(self.name.trim()) < MIN_NAME_CHARS {
            errors.push(FieldError::Name);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::Email);
        }
        if self.subject.is_empty() {
            errors.push(FieldError::Subject);
        }
        if utf16_len(self.message.trim()) < MIN_MESSAGE_CHARS {
            errors.push(FieldError::Message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Validates a single input as the user leaves it. Unknown fields pass.
pub fn validate_field(name: &str, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let ok = match name {
        "name" => utf16_len(value) >= MIN_NAME_CHARS,
        "email" => is_valid_email(value),
        "subject" => !value.is_empty(),
        "message" => utf16_len(value) >= MIN_MESSAGE_CHARS,
        _ => return Ok(()),
    };
    if ok {
        return Ok(());
    }
    Err(match name {
        "name" => FieldError::Name,
        "email" => FieldError::Email,
        "subject" => FieldError::Subject,
        _ => FieldError::Message,
    })
}

// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// Lengths are measured the way the browser reports `value.length`.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// Validates a JSON-encoded form. On failure the error is an array of
// messages, ready to be listed above the form.
#[wasm_bindgen]
pub fn validate_contact_json(json: &str) -> Result<(), JsValue> {
    let form: ContactForm = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("invalid contact form: {}", e)))?;
    form.validate().map_err(|errors| {
        errors
            .iter()
            .map(|e| JsValue::from_str(&e.to_string()))
            .collect::<Array>()
            .into()
    })
}

// Message for an invalid field, `None` when it is fine.
#[wasm_bindgen]
pub fn validate_contact_field(name: &str, value: &str) -> Option<String> {
    validate_field(name, value).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "collaboration".into(),
            message: "Let's build something together.".into(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn reports_every_failure_in_order() {
        let form = ContactForm {
            name: " a ".into(),
            email: "not-an-email".into(),
            subject: String::new(),
            message: "   short    ".into(),
        };
        assert_eq!(
            form.validate(),
            Err(vec![
                FieldError::Name,
                FieldError::Email,
                FieldError::Subject,
                FieldError::Message
            ])
        );
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(form.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn field_validation_trims() {
        assert_eq!(validate_field("email", "  ada@example.com "), Ok(()));
        assert_eq!(validate_field("name", " x "), Err(FieldError::Name));
        assert_eq!(validate_field("subject", "   "), Err(FieldError::Subject));
        assert_eq!(validate_field("message", "0123456789"), Ok(()));
        assert_eq!(validate_field("phone", ""), Ok(()));
    }

    #[test]
    fn lengths_count_utf16_units() {
        assert_eq!(validate_field("name", "😀"), Ok(()));
        assert_eq!(validate_field("name", "é"), Err(FieldError::Name));
        let form = ContactForm {
            name: "😀".into(),
            message: "😀😀😀😀😀".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(
            validate_contact_field("name", "a").as_deref(),
            Some("Name must be at least 2 characters long")
        );
        assert_eq!(
            FieldError::Message.to_string(),
            "Message must be at least 10 characters long"
        );
        assert_eq!(validate_contact_field("email", "ada@example.com"), None);
    }
}
