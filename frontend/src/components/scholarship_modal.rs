use common::catalog::scholarship::{Scholarship, APPLICATION_TIPS, SCHOLARSHIPS};
use common::leads::{template, whatsapp};
use yew::prelude::*;

use crate::components::modal::{close_modal, open_modal, ModalDialog};
use crate::dispatch::open_whatsapp;

/// Reader modal for the "Top 10 Scholarships" article: the full scholarship
/// list with award details, application tips, and a fixed-text guidance CTA.
pub struct ScholarshipModal {
    dialog_ref: NodeRef,
}

pub enum Msg {
    Open,
    Close,
    RequestGuidance,
}

impl Component for ScholarshipModal {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialog_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                open_modal(self.dialog_ref.clone());
                false
            }
            Msg::Close => {
                close_modal(self.dialog_ref.clone());
                false
            }
            Msg::RequestGuidance => {
                open_whatsapp(&whatsapp::deep_link(&template::scholarship_guidance()));
                close_modal(self.dialog_ref.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <button class="btn btn-ghost" onclick={link.callback(|_| Msg::Open)}>
                    { "Read More →" }
                </button>
                <ModalDialog node_ref={self.dialog_ref.clone()}>
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>

                    <h2>{ "Top 10 Scholarships for International Students 2024" }</h2>
                    <p class="muted article-meta">
                        { "Future Ace Consultancy · January 10, 2024 · 2,100 views · 10 min read" }
                    </p>
                    <span class="badge badge-secondary">{ "Scholarships" }</span>

                    <section>
                        <h3>{ "🏆 Why Apply for International Scholarships?" }</h3>
                        <p class="muted">
                            { "International scholarships can significantly reduce the financial burden of \
                               studying abroad while opening doors to world-class education and global career \
                               opportunities. These prestigious awards not only cover tuition fees but often \
                               include living expenses, travel costs, and valuable networking opportunities." }
                        </p>
                    </section>

                    <section>
                        <h3>{ "Top 10 International Scholarships" }</h3>
                        { for SCHOLARSHIPS.iter().enumerate().map(|(i, s)| scholarship_entry(i, s)) }
                    </section>

                    <section>
                        <h3>{ "Application Tips for Success" }</h3>
                        <ul class="star-list">
                            { for APPLICATION_TIPS.iter().map(|tip| html! { <li>{ *tip }</li> }) }
                        </ul>
                    </section>

                    <section class="cta-panel">
                        <h3>{ "Need Help with Your Scholarship Applications?" }</h3>
                        <p class="muted">
                            { "Our expert education consultants can help you identify the best scholarship \
                               opportunities, prepare compelling applications, and increase your chances of \
                               success. Get personalized guidance for your scholarship journey." }
                        </p>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::RequestGuidance)}>
                            { "Get Scholarship Guidance →" }
                        </button>
                    </section>
                </ModalDialog>
            </>
        }
    }
}

fn scholarship_entry(index: usize, scholarship: &Scholarship) -> Html {
    html! {
        <div class="scholarship-entry">
            <div class="scholarship-head">
                <h4>{ format!("{}. {}", index + 1, scholarship.name) }</h4>
                <span class="badge badge-outline">{ scholarship.competitiveness }</span>
            </div>
            <p class="muted">{ scholarship.description }</p>
            <div class="scholarship-facts">
                { fact("AWARD AMOUNT", scholarship.amount) }
                { fact("DEADLINE", scholarship.deadline) }
                { fact("STUDY LEVEL", scholarship.level) }
                { fact("DESTINATION", &scholarship.countries.join(", ")) }
            </div>
            <p><strong>{ "Eligibility Requirements: " }</strong>{ scholarship.eligibility }</p>
            <div>
                <strong>{ "Coverage Includes:" }</strong>
                <ul class="check-list">
                    { for scholarship.coverage.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </div>
        </div>
    }
}

fn fact(label: &str, value: &str) -> Html {
    html! {
        <div class="fact">
            <p class="fact-label">{ label }</p>
            <p class="fact-value">{ value }</p>
        </div>
    }
}
