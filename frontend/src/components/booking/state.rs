//! Component state for the consultation booking form.
//!
//! Holds one string per field — the in-memory form state the submission is
//! assembled from. Fields live only as long as the form: a successful
//! dispatch resets everything back to empty.

use common::model::submission::FormSubmission;

/// State container for the `BookingForm` component.
///
/// Fields are `pub` because they are read by the `view` module and written
/// by `update`.
pub struct BookingForm {
    /// Visitor's full name. Required.
    pub full_name: String,

    /// Preferred date as the raw `YYYY-MM-DD` input value. Required.
    pub date: String,

    /// Preferred time slot. Optional; rendered after the date when present.
    pub time: String,

    /// Study destination. Required.
    pub destination: String,

    /// Purpose of study. Required.
    pub purpose: String,

    /// Free-text future interests. Optional.
    pub interests: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            date: String::new(),
            time: String::new(),
            destination: String::new(),
            purpose: String::new(),
            interests: String::new(),
        }
    }

    /// Clears every field. Called after a successful dispatch; the
    /// submission is transient and never outlives one attempt.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshots the current field values into the pipeline's input type.
    pub fn submission(&self) -> FormSubmission {
        FormSubmission::new()
            .with("full_name", self.full_name.clone())
            .with("date", self.date.clone())
            .with("time", self.time.clone())
            .with("destination", self.destination.clone())
            .with("purpose", self.purpose.clone())
            .with("interests", self.interests.clone())
    }
}
