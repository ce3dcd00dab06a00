//! The lead-capture pipeline: validate → template → deep link.
//!
//! The site carries several forms that all do the same thing — check that
//! the required fields are present, render a fixed-structure WhatsApp
//! message, and hand back the `wa.me` URL to open. Instead of one copy per
//! form, each form declares a [`LeadSchema`] (its required fields plus its
//! template function) and calls [`prepare`].
//!
//! Dispatch itself — opening the link in a new browsing context — is the
//! frontend's job; this module never touches the DOM.

pub mod template;
pub mod validate;
pub mod whatsapp;

use crate::model::submission::FormSubmission;

/// Per-form pipeline configuration: which fields must be present and how
/// the submission renders into message text.
pub struct LeadSchema {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub render: fn(&FormSubmission) -> String,
}

/// A validated submission, ready to dispatch.
#[derive(Debug)]
pub struct PreparedLead {
    pub message: String,
    pub link: String,
}

#[derive(Debug, PartialEq)]
pub enum SubmissionError {
    /// One or more required fields were empty; nothing was dispatched.
    MissingFields(Vec<&'static str>),
}

/// Home-page booking form.
pub const CONSULTATION_BOOKING: LeadSchema = LeadSchema {
    name: "consultation-booking",
    required: &["full_name", "date", "destination", "purpose"],
    render: template::consultation_booking,
};

/// Contact-page message form.
pub const CONTACT_MESSAGE: LeadSchema = LeadSchema {
    name: "contact-message",
    required: &["full_name", "email", "subject", "message"],
    render: template::contact_message,
};

/// Consultation-page request form.
pub const CONSULTATION_REQUEST: LeadSchema = LeadSchema {
    name: "consultation-request",
    required: &["first_name", "last_name", "email", "phone", "consultation_type"],
    render: template::consultation_request,
};

/// Runs the pipeline up to (but not including) dispatch.
///
/// On a validation failure the submission halts with no side effects; the
/// caller shows one blocking notification and keeps the form state intact.
/// On success the caller opens `link`, acknowledges, and resets the form.
pub fn prepare(
    schema: &LeadSchema,
    submission: &FormSubmission,
) -> Result<PreparedLead, SubmissionError> {
    let missing = validate::missing_fields(submission, schema.required);
    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }
    let message = (schema.render)(submission);
    let link = whatsapp::deep_link(&message);
    Ok(PreparedLead { message, link })
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn booking(destination: &str) -> FormSubmission {
        FormSubmission::new()
            .with("full_name", "Jane Doe")
            .with("date", "2024-03-01")
            .with("destination", destination)
            .with("purpose", "Master's Degree")
            .with("interests", "")
    }

    #[test]
    fn complete_booking_yields_a_decodable_link() {
        let lead = prepare(&CONSULTATION_BOOKING, &booking("Malaysia")).unwrap();

        let prefix = format!("https://wa.me/{}?text=", whatsapp::WHATSAPP_NUMBER);
        let encoded = lead.link.strip_prefix(&prefix).expect("link prefix");
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();

        assert_eq!(decoded, lead.message);
        assert!(decoded.contains("• Name: Jane Doe"));
        assert!(decoded.contains("• Study Destination: Malaysia"));
        assert!(decoded.contains("• Future Interests: Not specified"));
    }

    #[test]
    fn empty_destination_halts_before_the_link_is_built() {
        let err = prepare(&CONSULTATION_BOOKING, &booking("")).unwrap_err();
        assert_eq!(err, SubmissionError::MissingFields(vec!["destination"]));
    }

    #[test]
    fn contact_schema_requires_all_four_fields() {
        let err = prepare(&CONTACT_MESSAGE, &FormSubmission::new()).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::MissingFields(vec!["full_name", "email", "subject", "message"])
        );
    }

    #[test]
    fn consultation_request_allows_optional_fields_to_be_absent() {
        let submission = FormSubmission::new()
            .with("first_name", "Maria")
            .with("last_name", "Santos")
            .with("email", "maria@example.com")
            .with("phone", "+55 11 91234 5678")
            .with("consultation_type", "General Consultation");
        let lead = prepare(&CONSULTATION_REQUEST, &submission).unwrap();
        assert!(lead.message.contains("Field of Study: Not specified"));
    }
}
