//! Update function for the consultation booking form.
//!
//! Field messages write straight into the component state. `Submit` runs
//! the lead pipeline: validation failure shows one destructive notification
//! and leaves the form untouched; success opens the WhatsApp deep link,
//! confirms with a notification, and resets the form.

use common::leads::{self, SubmissionError};
use yew::prelude::*;

use crate::dispatch::open_whatsapp;
use crate::notify::{show_notification, Severity};

use super::messages::Msg;
use super::state::BookingForm;

pub fn update(form: &mut BookingForm, _ctx: &Context<BookingForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetFullName(value) => {
            form.full_name = value;
            true
        }
        Msg::SetDate(value) => {
            form.date = value;
            true
        }
        Msg::SetTime(value) => {
            form.time = value;
            true
        }
        Msg::SetDestination(value) => {
            form.destination = value;
            true
        }
        Msg::SetPurpose(value) => {
            form.purpose = value;
            true
        }
        Msg::SetInterests(value) => {
            form.interests = value;
            true
        }
        Msg::Submit => {
            match leads::prepare(&leads::CONSULTATION_BOOKING, &form.submission()) {
                Err(SubmissionError::MissingFields(_)) => {
                    show_notification(
                        "Missing Information",
                        "Please fill in all required fields.",
                        Severity::Destructive,
                    );
                }
                Ok(lead) => {
                    open_whatsapp(&lead.link);
                    show_notification(
                        "Consultation Request Sent!",
                        "You will be redirected to WhatsApp to complete your booking.",
                        Severity::Normal,
                    );
                    form.reset();
                }
            }
            true
        }
    }
}
