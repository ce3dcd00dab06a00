//! Contact page: the contact message form plus static info cards and FAQs.
//!
//! The form follows the shared submission flow — validate, template,
//! dispatch, one notification, reset — through the `CONTACT_MESSAGE`
//! schema.

use common::leads::{self, SubmissionError};
use yew::prelude::*;

use crate::components::form_controls::{email_input, select_input, text_input, textarea_input};
use crate::dispatch::open_whatsapp;
use crate::notify::{show_notification, Severity};

const SUBJECTS: &[&str] = &[
    "General Inquiry",
    "Book Consultation",
    "Application Support",
    "Visa Guidance",
    "University Selection",
    "Scholarship Information",
    "Other",
];

const CONTACT_INFO: &[(&str, &str, &[&str], &str)] = &[
    (
        "📞",
        "Phone Numbers",
        &["+60 11-1437 1926", "+60 182848310"],
        "(We reply within 24 hours)",
    ),
    (
        "✉️",
        "Emails",
        &["fa.consultancy2020@gmail.com", "asadkhanbaloch111@gmail.com"],
        "(We reply within 24 hours)",
    ),
    (
        "📍",
        "Office Address",
        &["Petaling Jaya, Cova Villa"],
        "Visit us for in-person consultation",
    ),
    (
        "🕑",
        "Office Hours",
        &["Monday – Friday: 9 AM – 6 PM", "Saturday: 10 AM – 4 PM"],
        "Sunday: Closed",
    ),
];

const FAQS: &[(&str, &str)] = &[
    (
        "How long does the consultation process take?",
        "Initial consultations typically last 30-60 minutes, depending on your specific needs and questions.",
    ),
    (
        "Do you charge for the first consultation?",
        "No, your first consultation with us is completely free. We want to understand your goals before discussing our services.",
    ),
    (
        "Which countries do you specialize in?",
        "We specialize in USA, UK, Canada, Australia, Germany, Netherlands, and many other popular study destinations.",
    ),
    (
        "How much do your services cost?",
        "Our service fees vary depending on the level of support you need. We'll discuss pricing during your consultation.",
    ),
];

pub struct ContactPage {
    full_name: String,
    email: String,
    subject: String,
    message: String,
}

pub enum Msg {
    SetFullName(String),
    SetEmail(String),
    SetSubject(String),
    SetMessage(String),
    Submit,
}

impl ContactPage {
    fn submission(&self) -> common::model::submission::FormSubmission {
        common::model::submission::FormSubmission::new()
            .with("full_name", self.full_name.clone())
            .with("email", self.email.clone())
            .with("subject", self.subject.clone())
            .with("message", self.message.clone())
    }

    fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFullName(v) => self.full_name = v,
            Msg::SetEmail(v) => self.email = v,
            Msg::SetSubject(v) => self.subject = v,
            Msg::SetMessage(v) => self.message = v,
            Msg::Submit => {
                match leads::prepare(&leads::CONTACT_MESSAGE, &self.submission()) {
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
                            "Message Sent!",
                            "Redirecting to WhatsApp. We'll get back to you within 24 hours.",
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

        html! {
            <div class="page">
                <section class="hero hero-small">
                    <h1>{ "Contact Us" }</h1>
                    <p>
                        { "Ready to start your study abroad journey? Get in touch with our \
                           expert team for personalized guidance." }
                    </p>
                </section>

                <div class="two-column section">
                    <div class="card">
                        <div class="card-header">
                            <h2>{ "💬 Send us a Message" }</h2>
                            <p>{ "Fill out the form below and we'll get back to you as soon as possible." }</p>
                        </div>
                        <div class="card-body">
                            { text_input("Full Name *", &self.full_name, link.callback(Msg::SetFullName)) }
                            { email_input("Email Address *", &self.email, link.callback(Msg::SetEmail)) }
                            { select_input("Subject *", "Select a subject", SUBJECTS, &self.subject, link.callback(Msg::SetSubject)) }
                            { textarea_input(
                                "Message Description *",
                                "Tell us about your study abroad goals, questions, or how we can help you...",
                                6,
                                &self.message,
                                link.callback(Msg::SetMessage),
                            ) }
                            <button class="btn btn-primary btn-block" onclick={link.callback(|_| Msg::Submit)}>
                                { "Send Message via WhatsApp" }
                            </button>
                        </div>
                    </div>

                    <div class="sidebar">
                        {
                            CONTACT_INFO.iter().map(|(icon, title, details, description)| html! {
                                <div class="card info-card">
                                    <h3>{ format!("{} {}", icon, title) }</h3>
                                    { for details.iter().map(|d| html! { <p>{ *d }</p> }) }
                                    <p class="muted">{ *description }</p>
                                </div>
                            }).collect::<Html>()
                        }

                        <div class="card info-card">
                            <h3>{ "Frequently Asked Questions" }</h3>
                            {
                                FAQS.iter().map(|(question, answer)| html! {
                                    <div class="faq-entry">
                                        <h4>{ *question }</h4>
                                        <p class="muted">{ *answer }</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="card info-card emergency-card">
                            <h3>{ "Need Immediate Help?" }</h3>
                            <p class="muted">
                                { "For urgent matters related to applications or visa deadlines, \
                                   contact our emergency hotline." }
                            </p>
                            <p><strong>{ "Emergency Hotline" }</strong></p>
                            <p>{ "+60 11-1437 1926" }</p>
                            <p class="muted">{ "Available 24/7 for urgent matters" }</p>
                        </div>
                    </div>
                </div>

                <section class="section">
                    <div class="card">
                        <div class="card-header">
                            <h2>{ "Visit Our Office" }</h2>
                            <p>
                                { "Come meet our team in person for a detailed consultation about \
                                   your study abroad plans." }
                            </p>
                        </div>
                        <div class="map-placeholder">
                            <p>{ "📍 Petaling Jaya, Cova Villa" }</p>
                        </div>
                    </div>
                </section>
            </div>
        }
    }
}
