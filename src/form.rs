//! Contact form state machine: editing -> submitting -> submitted ->
//! editing. Submission is simulated with timers; nothing leaves the page.

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Simulated network latency before the form reports success.
pub const SUBMIT_LATENCY_MS: u32 = 1_500;
/// How long the "message sent" banner stays before the form resets.
pub const SUBMITTED_HOLD_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.message]
            .iter()
            .filter(|error| error.is_some())
            .count()
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a dotted
/// domain with characters on both sides of a dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates a field; editing a field clears that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.email = value;
                self.errors.email = None;
            }
            Field::Message => {
                self.message = value;
                self.errors.message = None;
            }
        }
    }

    /// Rebuilds the error map; returns true when every field passes.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some(EMAIL_REQUIRED);
        } else if !is_valid_email(email) {
            errors.email = Some(EMAIL_INVALID);
        }

        if self.message.trim().is_empty() {
            errors.message = Some(MESSAGE_REQUIRED);
        }

        let ok = errors.is_empty();
        self.errors = errors;
        ok
    }

    /// Submit action: validation failure stays in Editing with the error
    /// map populated; success enters Submitting.
    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Editing || !self.validate() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// The simulated latency elapsed: report success and clear the fields.
    pub fn finish_submission(&mut self) {
        self.phase = Phase::Submitted;
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// The submitted banner timed out: back to an empty editing form.
    pub fn reset(&mut self) {
        self.phase = Phase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "A".to_string());
        form.edit(Field::Email, "a@b.com".to_string());
        form.edit(Field::Message, "hi".to_string());
        form
    }

    #[test]
    fn submitting_an_empty_form_yields_all_three_errors() {
        let mut form = ContactForm::new();
        assert!(!form.submit());
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.errors.count(), 3);
        assert_eq!(form.errors.name, Some(NAME_REQUIRED));
        assert_eq!(form.errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.message, Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn an_invalid_email_yields_exactly_the_email_error() {
        let mut form = filled();
        form.edit(Field::Email, "abc".to_string());
        assert!(!form.submit());
        assert_eq!(form.errors.count(), 1);
        assert_eq!(form.errors.email, Some(EMAIL_INVALID));
    }

    #[test]
    fn email_pattern_requires_local_at_dotted_domain() {
        for bad in ["@b.com", "a@", "a@b", "a@.com", "a@b.com ", "a b@c.com", "a@@b.com"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
        for good in ["a@b.com", "first.last@sub.domain.io", "x@y.z"] {
            assert!(is_valid_email(good), "{good:?} should be accepted");
        }
    }

    #[test]
    fn a_valid_submission_walks_the_whole_cycle() {
        let mut form = filled();

        assert!(form.submit());
        assert!(form.errors.is_empty());
        assert_eq!(form.phase, Phase::Submitting);

        form.finish_submission();
        assert_eq!(form.phase, Phase::Submitted);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());

        form.reset();
        assert_eq!(form.phase, Phase::Editing);
    }

    #[test]
    fn editing_a_field_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        assert!(!form.submit());
        form.edit(Field::Name, "A".to_string());
        assert_eq!(form.errors.name, None);
        assert_eq!(form.errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.message, Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn submit_is_ignored_outside_the_editing_phase() {
        let mut form = filled();
        assert!(form.submit());
        assert!(!form.submit());
        assert_eq!(form.phase, Phase::Submitting);
    }

    #[test]
    fn whitespace_only_fields_do_not_validate() {
        let mut form = filled();
        form.edit(Field::Message, "   ".to_string());
        assert!(!form.submit());
        assert_eq!(form.errors.message, Some(MESSAGE_REQUIRED));
    }
}
