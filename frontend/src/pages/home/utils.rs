use crate::api::ContactMessageRequest;
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Imię i nazwisko jest wymagane";
pub const EMAIL_REQUIRED: &str = "Adres email jest wymagany";
pub const EMAIL_INVALID: &str = "Podaj prawidłowy adres email";
pub const MESSAGE_REQUIRED: &str = "Wiadomość jest wymagana";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// DOM `id`/`name` of the input, identical to the intake payload key.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "user_name",
            ContactField::Email => "user_email",
            ContactField::Company => "user_company",
            ContactField::Phone => "user_phone",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Message
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn to_payload(&self) -> ContactMessageRequest {
        ContactMessageRequest {
            user_name: self.name.clone(),
            user_email: self.email.clone(),
            user_company: optional_string(&self.company),
            user_phone: optional_string(&self.phone),
            message: self.message.clone(),
        }
    }
}

fn optional_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Field-scoped validation messages. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ContactField, String>);

impl FormErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

pub fn validate(data: &ContactFormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.name.trim().is_empty() {
        errors.insert(ContactField::Name, NAME_REQUIRED);
    }

    if data.email.trim().is_empty() {
        errors.insert(ContactField::Email, EMAIL_REQUIRED);
    } else if !is_email_shaped(&data.email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if data.message.trim().is_empty() {
        errors.insert(ContactField::Message, MESSAGE_REQUIRED);
    }

    errors
}

/// Coarse shape check: somewhere in `value` there is `\S+@\S+\.\S+`.
///
/// Single pass over each whitespace-free run; the first `@` with a local part
/// is the only one worth tracking since any later one leaves less room.
pub fn is_email_shaped(value: &str) -> bool {
    let mut has_local = false;
    let mut since_at: Option<usize> = None;
    let mut dotted = false;

    for c in value.chars() {
        if c.is_whitespace() {
            has_local = false;
            since_at = None;
            dotted = false;
            continue;
        }
        if dotted {
            return true;
        }
        match since_at {
            Some(seen) => {
                if c == '.' && seen >= 1 {
                    dotted = true;
                }
                since_at = Some(seen + 1);
            }
            None if c == '@' && has_local => since_at = Some(0),
            None => {}
        }
        has_local = true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_with_optional_fields_blank_passes() {
        let data = form("Jan Kowalski", "jan@firma.pl", "Hello");
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn blank_required_fields_each_report_required_message() {
        let errors = validate(&form("   ", "\t", "\n "));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(ContactField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn fields_are_checked_independently() {
        let errors = validate(&form("", "jan@firma.pl", "Hello"));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ContactField::Name));

        let errors = validate(&form("Jan", "jan@firma.pl", ""));
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ContactField::Message));
    }

    #[test]
    fn malformed_email_reports_format_not_required() {
        for email in ["jan", "jan@firma", "@firma.pl", "jan@.pl", "jan@firma.", "jan @firma.pl"] {
            let errors = validate(&form("Jan", email, "Hello"));
            assert_eq!(
                errors.get(ContactField::Email),
                Some(EMAIL_INVALID),
                "email {:?}",
                email
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn optional_fields_never_fail() {
        let mut data = form("Jan", "jan@firma.pl", "Hello");
        data.company = "   ".into();
        data.phone = "not a phone".into();
        assert!(validate(&data).is_empty());
        assert!(!ContactField::Company.is_required());
        assert!(!ContactField::Phone.is_required());
    }

    #[test]
    fn email_shape_matches_unanchored_pattern() {
        assert!(is_email_shaped("a@b.c"));
        assert!(is_email_shaped("jan.kowalski@firma.com.pl"));
        assert!(is_email_shaped("write to jan@firma.pl please"));
        assert!(is_email_shaped("a@..b"));
        assert!(!is_email_shaped("a@b."));
        assert!(!is_email_shaped("a@.b"));
        assert!(!is_email_shaped("a @b.c"));
        assert!(!is_email_shaped("a@b .c"));
        assert!(!is_email_shaped("a@b. c"));
        assert!(!is_email_shaped(""));
    }

    #[test]
    fn email_shape_handles_repeated_at_signs() {
        assert!(is_email_shaped("@a@b.c"));
        assert!(is_email_shaped("a@b@c.d"));
        assert!(!is_email_shaped("@@.x"));

        let long = "a@".repeat(50_000);
        assert!(!is_email_shaped(&long));
        assert!(is_email_shaped(&format!("{long}b.c")));
    }

    #[test]
    fn payload_drops_blank_optional_fields() {
        let mut data = form("Jan Kowalski", "jan@firma.pl", "Hello");
        data.phone = " +48 600 100 200 ".into();
        let payload = data.to_payload();
        assert_eq!(payload.user_name, "Jan Kowalski");
        assert_eq!(payload.user_company, None);
        assert_eq!(payload.user_phone.as_deref(), Some("+48 600 100 200"));
    }

    #[test]
    fn form_data_set_get_and_reset() {
        let mut data = ContactFormData::default();
        for field in ContactField::ALL {
            data.set(field, field.key().to_string());
        }
        assert_eq!(data.get(ContactField::Phone), "user_phone");
        assert!(!data.is_empty());
        data.reset();
        assert!(data.is_empty());
    }

    #[test]
    fn clearing_one_error_keeps_the_rest() {
        let mut errors = validate(&ContactFormData::default());
        assert!(errors.clear_field(ContactField::Email));
        assert!(!errors.clear_field(ContactField::Email));
        let remaining: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(remaining, vec![ContactField::Name, ContactField::Message]);
    }
}
