use crate::model::submission::FormSubmission;

/// Returns the required field names that are absent or whitespace-only.
/// An empty result means the submission may proceed to templating.
pub fn missing_fields<'a>(
    submission: &FormSubmission,
    required: &[&'a str],
) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| submission.is_blank(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: &[&str] = &["full_name", "email"];

    #[test]
    fn reports_every_missing_field() {
        let submission = FormSubmission::new().with("full_name", "  ");
        assert_eq!(
            missing_fields(&submission, REQUIRED),
            vec!["full_name", "email"]
        );
    }

    #[test]
    fn complete_submission_passes() {
        let submission = FormSubmission::new()
            .with("full_name", "Jane Doe")
            .with("email", "jane@example.com");
        assert!(missing_fields(&submission, REQUIRED).is_empty());
    }
}
