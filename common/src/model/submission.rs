use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single form submission: field name → raw string value.
///
/// Submissions are transient. A form component fills one on submit, the
/// lead pipeline consumes it exactly once to render the outgoing message,
/// and the form resets its state afterwards whether or not the messaging
/// app was actually reached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Builder-style `set`, convenient when assembling a submission inline.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Raw value for `name`, or the empty string when the field was never set.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// True when the field is unset or contains only whitespace.
    pub fn is_blank(&self, name: &str) -> bool {
        self.value(name).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_read_as_empty_and_blank() {
        let submission = FormSubmission::new();
        assert_eq!(submission.value("full_name"), "");
        assert!(submission.is_blank("full_name"));
    }

    #[test]
    fn whitespace_only_values_are_blank_but_preserved() {
        let submission = FormSubmission::new().with("subject", "   ");
        assert!(submission.is_blank("subject"));
        assert_eq!(submission.value("subject"), "   ");
    }
}
