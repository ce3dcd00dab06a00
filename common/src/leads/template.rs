//! Message templaters: pure functions from a [`FormSubmission`] to the single
//! text block sent over the deep link.
//!
//! Every template has a fixed structure — greeting, emoji-labeled sections,
//! closing call to action. Optional fields render a literal fallback instead
//! of being omitted, so the section layout never reflows based on which
//! fields the visitor filled in.

use chrono::{Datelike, NaiveDate};

use crate::model::submission::FormSubmission;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_ADDITIONAL_INFORMATION: &str = "No additional information provided";

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// Formats an ISO `YYYY-MM-DD` date-input value as e.g. "March 1st, 2024".
/// Anything unparsable passes through verbatim.
pub fn long_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => {
            let day = date.day();
            format!(
                "{} {}{}, {}",
                date.format("%B"),
                day,
                ordinal_suffix(day),
                date.format("%Y")
            )
        }
        Err(_) => value.to_string(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Booking form embedded on the home page.
pub fn consultation_booking(s: &FormSubmission) -> String {
    format!(
        "Hello! I would like to book a consultation.\n\
         \n\
         📝 *Consultation Details:*\n\
         • Name: {}\n\
         • Preferred Date & Time: {} {}\n\
         • Study Destination: {}\n\
         • Purpose of Study: {}\n\
         • Future Interests: {}\n\
         \n\
         Please confirm my consultation booking. Thank you!",
        s.value("full_name"),
        long_date(s.value("date")),
        s.value("time"),
        s.value("destination"),
        s.value("purpose"),
        or_fallback(s.value("interests"), NOT_SPECIFIED),
    )
}

/// Contact page form.
pub fn contact_message(s: &FormSubmission) -> String {
    format!(
        "Hello! I have a query:\n\
         \n\
         📝 *Contact Details:*\n\
         • Name: {}\n\
         • Email: {}\n\
         • Subject: {}\n\
         • Message: {}\n\
         \n\
         Please get back to me. Thank you!",
        s.value("full_name"),
        s.value("email"),
        s.value("subject"),
        s.value("message"),
    )
}

/// Long consultation-request form on the consultation page.
pub fn consultation_request(s: &FormSubmission) -> String {
    format!(
        "🎓 *New Consultation Request*\n\
         \n\
         👤 *Personal Information:*\n\
         Name: {} {}\n\
         Email: {}\n\
         Phone: {}\n\
         Country: {}\n\
         \n\
         📚 *Academic Background:*\n\
         Education Level: {}\n\
         Field of Study: {}\n\
         \n\
         💰 *Study Preferences:*\n\
         Budget Range: {}\n\
         \n\
         🗣️ *Consultation Type:*\n\
         {}\n\
         \n\
         💭 *Additional Information:*\n\
         {}\n\
         \n\
         ---\n\
         Please confirm the consultation appointment. Thank you!",
        s.value("first_name"),
        s.value("last_name"),
        s.value("email"),
        s.value("phone"),
        or_fallback(s.value("country"), NOT_SPECIFIED),
        or_fallback(s.value("education"), NOT_SPECIFIED),
        or_fallback(s.value("field_of_study"), NOT_SPECIFIED),
        or_fallback(s.value("budget"), NOT_SPECIFIED),
        s.value("consultation_type"),
        or_fallback(s.value("message"), NO_ADDITIONAL_INFORMATION),
    )
}

/// Fixed-text CTA inside the university detail modal.
pub fn university_inquiry(university_name: &str) -> String {
    format!(
        "Hello! I'm interested in applying to {university_name} and would like to know more about:\n\
         \n\
         🎓 Admission requirements and process\n\
         📚 Available programs and specializations  \n\
         💰 Tuition fees and scholarship opportunities\n\
         📋 Application deadlines and documentation\n\
         🏠 Accommodation and campus facilities\n\
         \n\
         Please provide me with detailed information and guidance for {university_name}."
    )
}

/// Fixed-text CTA inside the scholarship article modal.
pub fn scholarship_guidance() -> String {
    "Hello! I'm interested in applying for international scholarships and would like guidance on:\n\
     \n\
     🎓 Identifying suitable scholarship opportunities\n\
     📝 Application preparation and essay writing\n\
     📋 Document preparation and certification\n\
     💰 Financial planning and backup options\n\
     ⏰ Application timeline and deadline management\n\
     \n\
     Please provide me with personalized scholarship consultation services."
        .to_string()
}

/// Fixed-text CTA at the end of the article reader modal.
pub fn article_followup() -> String {
    "Hello! I read the article about studying in Malaysia and I'm interested in learning more about:\n\
     \n\
     📚 University selection and programs\n\
     🎓 Application process and requirements\n\
     💰 Tuition fees and scholarships\n\
     📋 Visa guidance and documentation\n\
     \n\
     Please provide me with detailed information about studying in Malaysia."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_renders_ordinal_day() {
        assert_eq!(long_date("2024-03-01"), "March 1st, 2024");
        assert_eq!(long_date("2024-01-22"), "January 22nd, 2024");
        assert_eq!(long_date("2024-06-13"), "June 13th, 2024");
    }

    #[test]
    fn long_date_passes_unparsable_input_through() {
        assert_eq!(long_date("next Tuesday"), "next Tuesday");
        assert_eq!(long_date(""), "");
    }

    #[test]
    fn booking_message_contains_values_verbatim() {
        let submission = FormSubmission::new()
            .with("full_name", "Jane Doe")
            .with("date", "2024-03-01")
            .with("time", "10:00 AM")
            .with("destination", "Malaysia")
            .with("purpose", "Master's Degree");
        let message = consultation_booking(&submission);
        assert!(message.starts_with("Hello! I would like to book a consultation.\n\n"));
        assert!(message.contains("📝 *Consultation Details:*"));
        assert!(message.contains("• Name: Jane Doe"));
        assert!(message.contains("• Preferred Date & Time: March 1st, 2024 10:00 AM"));
        assert!(message.contains("• Study Destination: Malaysia"));
        assert!(message.contains("• Purpose of Study: Master's Degree"));
        assert!(message.ends_with("Please confirm my consultation booking. Thank you!"));
    }

    #[test]
    fn booking_message_substitutes_not_specified_for_empty_interests() {
        let submission = FormSubmission::new()
            .with("full_name", "Jane Doe")
            .with("date", "2024-03-01")
            .with("destination", "Malaysia")
            .with("purpose", "Master's Degree")
            .with("interests", "");
        let message = consultation_booking(&submission);
        assert!(message.contains("• Future Interests: Not specified"));
    }

    #[test]
    fn contact_message_keeps_fixed_section_structure() {
        let submission = FormSubmission::new()
            .with("full_name", "Raj Patel")
            .with("email", "raj@example.com")
            .with("subject", "Visa Guidance")
            .with("message", "I need help with my visa interview.");
        let message = contact_message(&submission);
        assert!(message.contains("📝 *Contact Details:*"));
        assert!(message.contains("• Email: raj@example.com"));
        assert!(message.contains("• Subject: Visa Guidance"));
        assert!(message.ends_with("Please get back to me. Thank you!"));
    }

    #[test]
    fn consultation_request_falls_back_on_optional_sections() {
        let submission = FormSubmission::new()
            .with("first_name", "Maria")
            .with("last_name", "Santos")
            .with("email", "maria@example.com")
            .with("phone", "+55 11 91234 5678")
            .with("consultation_type", "University Selection");
        let message = consultation_request(&submission);
        assert!(message.contains("Name: Maria Santos"));
        assert!(message.contains("Country: Not specified"));
        assert!(message.contains("Budget Range: Not specified"));
        assert!(message.contains("💭 *Additional Information:*\nNo additional information provided"));
        assert!(message.ends_with("---\nPlease confirm the consultation appointment. Thank you!"));
    }

    #[test]
    fn university_inquiry_names_the_university_twice() {
        let message = university_inquiry("Taylor's University");
        assert!(message.starts_with("Hello! I'm interested in applying to Taylor's University"));
        assert!(message.ends_with("guidance for Taylor's University."));
    }
}
