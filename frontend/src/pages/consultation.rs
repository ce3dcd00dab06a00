//! Consultation page: the long consultation-request form.
//!
//! Twelve fields across personal, academic, and preference sections. Submit
//! runs the shared pipeline with the `CONSULTATION_REQUEST` schema; the
//! preferred date and time inform the consultant's reply but are not part
//! of the templated message.

use common::leads::{self, SubmissionError};
use common::model::submission::FormSubmission;
use yew::prelude::*;

use crate::components::form_controls::{
    date_input, email_input, select_input, tel_input, text_input, textarea_input,
};
use crate::dispatch::open_whatsapp;
use crate::notify::{show_notification, Severity};

const EDUCATION_LEVELS: &[&str] = &[
    "High School",
    "Diploma",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate/PhD",
];

const BUDGET_RANGES: &[&str] = &[
    "Under RM 30,000/year",
    "RM 30,000 - RM 60,000/year",
    "RM 60,000 - RM 100,000/year",
    "Above RM 100,000/year",
];

const TIME_SLOTS: &[&str] = &["Morning", "Afternoon", "Evening"];

/// label, duration, description
const CONSULTATION_TYPES: &[(&str, &str, &str)] = &[
    ("General Consultation", "30 mins", "Overview of study abroad options"),
    ("University Selection", "45 mins", "Detailed university recommendations"),
    ("Application Assistance", "60 mins", "Help with application process"),
    ("Visa Guidance", "45 mins", "Visa requirements and process"),
];

pub struct ConsultationPage {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    country: String,
    education: String,
    field_of_study: String,
    budget: String,
    consultation_type: String,
    preferred_date: String,
    preferred_time: String,
    message: String,
}

pub enum Msg {
    SetFirstName(String),
    SetLastName(String),
    SetEmail(String),
    SetPhone(String),
    SetCountry(String),
    SetEducation(String),
    SetFieldOfStudy(String),
    SetBudget(String),
    SetConsultationType(String),
    SetPreferredDate(String),
    SetPreferredTime(String),
    SetMessage(String),
    Submit,
}

impl ConsultationPage {
    fn submission(&self) -> FormSubmission {
        FormSubmission::new()
            .with("first_name", self.first_name.clone())
            .with("last_name", self.last_name.clone())
            .with("email", self.email.clone())
            .with("phone", self.phone.clone())
            .with("country", self.country.clone())
            .with("education", self.education.clone())
            .with("field_of_study", self.field_of_study.clone())
            .with("budget", self.budget.clone())
            .with("consultation_type", self.consultation_type.clone())
            .with("message", self.message.clone())
    }

    fn reset(&mut self) {
        *self = Self::empty();
    }

    fn empty() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country: String::new(),
            education: String::new(),
            field_of_study: String::new(),
            budget: String::new(),
            consultation_type: String::new(),
            preferred_date: String::new(),
            preferred_time: String::new(),
            message: String::new(),
        }
    }
}

impl Component for ConsultationPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::empty()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFirstName(v) => self.first_name = v,
            Msg::SetLastName(v) => self.last_name = v,
            Msg::SetEmail(v) => self.email = v,
            Msg::SetPhone(v) => self.phone = v,
            Msg::SetCountry(v) => self.country = v,
            Msg::SetEducation(v) => self.education = v,
            Msg::SetFieldOfStudy(v) => self.field_of_study = v,
            Msg::SetBudget(v) => self.budget = v,
            Msg::SetConsultationType(v) => self.consultation_type = v,
            Msg::SetPreferredDate(v) => self.preferred_date = v,
            Msg::SetPreferredTime(v) => self.preferred_time = v,
            Msg::SetMessage(v) => self.message = v,
            Msg::Submit => {
                match leads::prepare(&leads::CONSULTATION_REQUEST, &self.submission()) {
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
                            "Your consultation details have been sent via WhatsApp. We'll contact you within 24 hours.",
                            Severity::Normal,
                        );
                        self.reset();
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let type_labels: Vec<&str> = CONSULTATION_TYPES.iter().map(|(label, _, _)| *label).collect();

        html! {
            <div class="page">
                <section class="hero hero-small">
                    <h1>{ "Book Your Free Consultation" }</h1>
                    <p>
                        { "Get personalized guidance from our education experts. We'll help you \
                           find the perfect university and program for your goals." }
                    </p>
                </section>

                <div class="two-column section">
                    <div class="card">
                        <div class="card-header">
                            <h2>{ "Consultation Details" }</h2>
                            <p>{ "Please fill out this form so we can better assist you during your consultation." }</p>
                        </div>
                        <div class="card-body">
                            <h3>{ "Personal Information" }</h3>
                            <div class="form-row">
                                { text_input("First Name *", &self.first_name, link.callback(Msg::SetFirstName)) }
                                { text_input("Last Name *", &self.last_name, link.callback(Msg::SetLastName)) }
                            </div>
                            <div class="form-row">
                                { email_input("Email Address *", &self.email, link.callback(Msg::SetEmail)) }
                                { tel_input("Phone Number *", &self.phone, link.callback(Msg::SetPhone)) }
                            </div>
                            { text_input("Country of Residence", &self.country, link.callback(Msg::SetCountry)) }

                            <h3>{ "Academic Background" }</h3>
                            <div class="form-row">
                                { select_input("Current Education Level", "Select level", EDUCATION_LEVELS, &self.education, link.callback(Msg::SetEducation)) }
                                { text_input("Intended Field of Study", &self.field_of_study, link.callback(Msg::SetFieldOfStudy)) }
                            </div>

                            <h3>{ "Study Preferences" }</h3>
                            { select_input("Budget Range", "Select budget", BUDGET_RANGES, &self.budget, link.callback(Msg::SetBudget)) }
                            { select_input("Consultation Type *", "Select consultation type", &type_labels, &self.consultation_type, link.callback(Msg::SetConsultationType)) }
                            <div class="form-row">
                                { date_input("Preferred Date", &self.preferred_date, link.callback(Msg::SetPreferredDate)) }
                                { select_input("Preferred Time", "Select time", TIME_SLOTS, &self.preferred_time, link.callback(Msg::SetPreferredTime)) }
                            </div>
                            { textarea_input(
                                "Additional Information",
                                "Anything else we should know before the consultation...",
                                4,
                                &self.message,
                                link.callback(Msg::SetMessage),
                            ) }

                            <button class="btn btn-primary btn-block" onclick={link.callback(|_| Msg::Submit)}>
                                { "Request Consultation via WhatsApp" }
                            </button>
                        </div>
                    </div>

                    <div class="sidebar">
                        <div class="card info-card">
                            <h3>{ "Consultation Types" }</h3>
                            {
                                CONSULTATION_TYPES.iter().map(|(label, duration, description)| html! {
                                    <div class="faq-entry">
                                        <h4>{ format!("{} · {}", label, duration) }</h4>
                                        <p class="muted">{ *description }</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                        <div class="card info-card">
                            <h3>{ "What to Expect" }</h3>
                            <ul class="check-list">
                                <li>{ "A dedicated counselor reviews your profile before the call" }</li>
                                <li>{ "University and program shortlist matched to your budget" }</li>
                                <li>{ "Clear next steps for applications and visa timelines" }</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
