//! View rendering for the consultation booking form.
//!
//! A single card: labeled inputs for the required fields, selects for the
//! time slot, destination, and purpose, a textarea for future interests,
//! and the submit button. The date input refuses past dates.

use yew::prelude::*;

use crate::components::form_controls::{date_input, select_input, text_input, textarea_input};

use super::messages::Msg;
use super::state::BookingForm;

const TIME_SLOTS: &[&str] = &[
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

const DESTINATIONS: &[&str] = &["Malaysia", "Russia", "Other"];

const PURPOSES: &[&str] = &[
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate/PhD",
    "Diploma",
    "Language Course",
    "MBBS",
    "Other",
];

pub fn view(form: &BookingForm, ctx: &Context<BookingForm>) -> Html {
    let link = ctx.link();

    html! {
        <div class="card booking-card">
            <div class="card-header">
                <h2>{ "💬 Book Your Consultation" }</h2>
                <p>{ "Fill out the form below to schedule your free consultation with our experts." }</p>
            </div>
            <div class="card-body">
                { text_input("Full Name *", &form.full_name, link.callback(Msg::SetFullName)) }
                <div class="form-row">
                    { date_input("Preferred Date *", &form.date, link.callback(Msg::SetDate)) }
                    { select_input("Preferred Time", "Select time", TIME_SLOTS, &form.time, link.callback(Msg::SetTime)) }
                </div>
                { select_input("Study Destination *", "Select destination", DESTINATIONS, &form.destination, link.callback(Msg::SetDestination)) }
                { select_input("Purpose of Study *", "Select purpose", PURPOSES, &form.purpose, link.callback(Msg::SetPurpose)) }
                { textarea_input(
                    "Future Degree Interests / Knowledge",
                    "Tell us about your academic interests, career goals, or any specific questions you have...",
                    4,
                    &form.interests,
                    link.callback(Msg::SetInterests),
                ) }
                <button class="btn btn-primary btn-block" onclick={link.callback(|_| Msg::Submit)}>
                    { "Book Consultation via WhatsApp" }
                </button>
            </div>
        </div>
    }
}
