//! Per-field validation rules for the contact form.
//!
//! The rules are pure functions of the field's kind and current value so the
//! form component can run them synchronously on blur, input and submit.

pub const REQUIRED_MSG: &str = "This field is required";
pub const EMAIL_MSG: &str = "Please enter a valid email address";
pub const PHONE_MSG: &str = "Please enter a valid phone number";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

impl FieldKind {
    /// Picks the rule set from the field's name and input type, the same way
    /// the backend form distinguishes its fields.
    pub fn for_field(name: &str, input_type: &str) -> Self {
        if name == "email" || input_type == "email" {
            FieldKind::Email
        } else if name == "phone" {
            FieldKind::Phone
        } else {
            FieldKind::Text
        }
    }
}

/// Displayed validation state of one form field.
#[derive(Clone, PartialEq, Default, Debug)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn from_result(result: Result<(), &'static str>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(message) => FieldStatus::Invalid(message.to_string()),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Validates the trimmed value against the field's rule. Every field is
/// required; email and phone fields additionally have to match their shape.
pub fn validate_field(kind: FieldKind, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(REQUIRED_MSG);
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(EMAIL_MSG),
        FieldKind::Phone if !is_valid_phone(value) => Err(PHONE_MSG),
        _ => Ok(()),
    }
}

// local@domain.tld: exactly one `@`, no whitespace, and a dot inside the
// domain with non-empty halves on either side.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if value.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// At least ten characters drawn from digits, whitespace, `-`, `+`, `(`, `)`.
fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= 10
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_required_for_every_kind() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Phone] {
            assert_eq!(validate_field(kind, ""), Err(REQUIRED_MSG));
            assert_eq!(validate_field(kind, "   "), Err(REQUIRED_MSG));
        }
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_field(FieldKind::Email, "a@b.com"), Ok(()));
        assert_eq!(validate_field(FieldKind::Email, "  a@b.com  "), Ok(()));
        assert_eq!(validate_field(FieldKind::Email, "not-an-email"), Err(EMAIL_MSG));
        assert_eq!(validate_field(FieldKind::Email, "a@b"), Err(EMAIL_MSG));
        assert_eq!(validate_field(FieldKind::Email, "a@.com"), Err(EMAIL_MSG));
        assert_eq!(validate_field(FieldKind::Email, "a@b."), Err(EMAIL_MSG));
        assert_eq!(validate_field(FieldKind::Email, "a b@c.com"), Err(EMAIL_MSG));
        assert_eq!(validate_field(FieldKind::Email, "a@@b.com"), Err(EMAIL_MSG));
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate_field(FieldKind::Phone, "123"), Err(PHONE_MSG));
        assert_eq!(validate_field(FieldKind::Phone, "+1 (555) 123-4567"), Ok(()));
        assert_eq!(validate_field(FieldKind::Phone, "0123456789"), Ok(()));
        assert_eq!(validate_field(FieldKind::Phone, "12345678x9"), Err(PHONE_MSG));
    }

    #[test]
    fn plain_text_only_needs_content() {
        assert_eq!(validate_field(FieldKind::Text, "hello"), Ok(()));
    }

    #[test]
    fn kind_is_derived_from_name_or_type() {
        assert_eq!(FieldKind::for_field("email", "text"), FieldKind::Email);
        assert_eq!(FieldKind::for_field("work_mail", "email"), FieldKind::Email);
        assert_eq!(FieldKind::for_field("phone", "text"), FieldKind::Phone);
        assert_eq!(FieldKind::for_field("subject", "text"), FieldKind::Text);
    }

    #[test]
    fn status_tracks_validation_result() {
        assert_eq!(FieldStatus::from_result(Ok(())), FieldStatus::Valid);
        let status = FieldStatus::from_result(Err(REQUIRED_MSG));
        assert!(status.is_invalid());
        assert_eq!(status.error(), Some(REQUIRED_MSG));
        assert_eq!(FieldStatus::Untouched.error(), None);
    }
}
