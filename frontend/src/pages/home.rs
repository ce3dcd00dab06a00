use yew::{html, Callback, Component, Context, Html, Properties};

use crate::app::Page;
use crate::components::booking::BookingForm;

pub struct HomePage;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🎓",
        "Expert Guidance",
        "Professional counselors with years of experience in international education.",
    ),
    (
        "🌍",
        "Global Universities",
        "Access to 500+ universities across 20+ countries worldwide.",
    ),
    (
        "🤝",
        "Personalized Support",
        "One-on-one consultation tailored to your academic goals and budget.",
    ),
    (
        "🏅",
        "Scholarship Assistance",
        "Help you find and apply for scholarships to reduce study costs.",
    ),
];

const TESTIMONIALS: &[(&str, &str, &str, &str)] = &[
    (
        "Sarah Johnson",
        "USA",
        "Oxford University",
        "Future Ace made my dream of studying at Oxford a reality. Their guidance was invaluable throughout the entire process.",
    ),
    (
        "Raj Patel",
        "India",
        "University of Toronto",
        "The team helped me secure a scholarship and guided me through the visa process. Highly recommended!",
    ),
    (
        "Maria Santos",
        "Brazil",
        "University of Melbourne",
        "Professional service and excellent support. They were with me every step of the way.",
    ),
];

const DESTINATIONS: &[(&str, &str, &str, &str)] = &[
    ("🇲🇾", "Malaysia", "6 partner universities", "All Programs"),
    ("🇷🇺", "Russia", "Coming Soon", "MBBS Only"),
];

impl Component for HomePage {
    type Message = ();
    type Properties = HomePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;

        html! {
            <div class="page">
                <section class="hero">
                    <h1>{ "Your Gateway to " }<span class="accent">{ "Global Education" }</span></h1>
                    <p>
                        { "Expert guidance for studying abroad. We help students achieve their \
                           dreams with personalized consultation and comprehensive support." }
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={on_navigate.reform(|_| Page::Blog)}>
                            { "📖 Explore Universities" }
                        </button>
                        <button class="btn btn-secondary" onclick={on_navigate.reform(|_| Page::Consultation)}>
                            { "Book Free Consultation" }
                        </button>
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title">{ "Why Choose Us" }</h2>
                    <div class="feature-grid">
                        {
                            FEATURES.iter().map(|(icon, title, description)| html! {
                                <div class="card feature-card">
                                    <span class="feature-icon">{ *icon }</span>
                                    <h3>{ *title }</h3>
                                    <p class="muted">{ *description }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title">{ "Popular Destinations" }</h2>
                    <div class="destination-grid">
                        {
                            DESTINATIONS.iter().map(|(flag, country, universities, programs)| html! {
                                <div class="card destination-card">
                                    <span class="destination-flag">{ *flag }</span>
                                    <h3>{ *country }</h3>
                                    <p class="muted">{ *universities }</p>
                                    <span class="badge badge-outline">{ *programs }</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="section">
                    <BookingForm />
                </section>

                <section class="section">
                    <h2 class="section-title">{ "What Our Students Say" }</h2>
                    <div class="testimonial-grid">
                        {
                            TESTIMONIALS.iter().map(|(name, country, university, text)| html! {
                                <div class="card testimonial-card">
                                    <p>{ "⭐⭐⭐⭐⭐" }</p>
                                    <p>{ format!("\u{201c}{}\u{201d}", text) }</p>
                                    <p class="muted">{ format!("{} · {} · {}", name, country, university) }</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            </div>
        }
    }
}
