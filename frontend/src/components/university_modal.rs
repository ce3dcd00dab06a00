use common::catalog::university::{details_for, University};
use common::leads::{template, whatsapp};
use yew::prelude::*;

use crate::components::modal::{close_modal, open_modal, ModalDialog};
use crate::dispatch::open_whatsapp;

/// "Read More" card action that expands into the full university detail
/// sheet. The CTA at the bottom dispatches a fixed-text WhatsApp inquiry
/// naming the university and closes the dialog — no notification, matching
/// the other fixed-text CTAs.
pub struct UniversityModal {
    dialog_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct UniversityModalProps {
    pub university: &'static University,
}

pub enum Msg {
    Open,
    Close,
    Inquire,
}

impl Component for UniversityModal {
    type Message = Msg;
    type Properties = UniversityModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialog_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                open_modal(self.dialog_ref.clone());
                false
            }
            Msg::Close => {
                close_modal(self.dialog_ref.clone());
                false
            }
            Msg::Inquire => {
                let message = template::university_inquiry(ctx.props().university.name);
                open_whatsapp(&whatsapp::deep_link(&message));
                close_modal(self.dialog_ref.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let university = ctx.props().university;
        let details = details_for(university.name);

        html! {
            <>
                <button class="btn btn-outline btn-block" onclick={link.callback(|_| Msg::Open)}>
                    { "Read More →" }
                </button>
                <ModalDialog node_ref={self.dialog_ref.clone()}>
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>

                    <div class="modal-title-row">
                        <span class="modal-logo">{ university.logo }</span>
                        <div>
                            <h2>{ university.name }</h2>
                            <p class="muted">{ format!("📍 {}", university.location) }</p>
                        </div>
                        <span class="badge badge-primary">{ university.ranking }</span>
                    </div>

                    <div class="stat-grid">
                        { stat_tile(university.students, "Students") }
                        { stat_tile(university.tuition_fee, "Tuition Fee") }
                        { stat_tile(university.programs, "Programs") }
                        { stat_tile(university.kind, "University Type") }
                    </div>

                    <section>
                        <h3>{ "📖 University Overview" }</h3>
                        <p class="muted">{ details.overview }</p>
                    </section>

                    <section>
                        <h3>{ "Key Highlights" }</h3>
                        <ul class="check-list">
                            { for details.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
                        </ul>
                    </section>

                    <section>
                        <h3>{ "Top Programs" }</h3>
                        <div class="program-grid">
                            {
                                details.top_programs.iter().map(|program| html! {
                                    <div class="program-card">
                                        <h4>{ program.name }</h4>
                                        <p class="muted">{ program.description }</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </section>

                    <section>
                        <h3>{ "Campus Facilities" }</h3>
                        <ul class="star-list">
                            { for details.facilities.iter().map(|f| html! { <li>{ *f }</li> }) }
                        </ul>
                    </section>

                    <section>
                        <h3>{ "Scholarships & Financial Aid" }</h3>
                        <ul class="aid-list">
                            { for details.scholarships.iter().map(|s| html! { <li>{ *s }</li> }) }
                        </ul>
                    </section>

                    <section class="cta-panel">
                        <h3>{ "Ready to Apply?" }</h3>
                        <p class="muted">
                            { format!(
                                "Get personalized guidance for your application to {}. Our education \
                                 consultants will help you with admission requirements, application \
                                 process, and scholarship opportunities.",
                                university.name
                            ) }
                        </p>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Inquire)}>
                            { "Get Free Consultation →" }
                        </button>
                    </section>
                </ModalDialog>
            </>
        }
    }
}

fn stat_tile(value: &str, caption: &str) -> Html {
    html! {
        <div class="stat-tile">
            <p class="stat-value">{ value }</p>
            <p class="stat-caption">{ caption }</p>
        </div>
    }
}
