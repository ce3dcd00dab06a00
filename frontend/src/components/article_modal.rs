use common::catalog::blog::BlogPost;
use common::leads::{template, whatsapp};
use num_format::{Locale, ToFormattedString};
use pulldown_cmark::{html as md_html, Parser};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::modal::{close_modal, open_modal, ModalDialog};
use crate::dispatch::open_whatsapp;

/// Article reader: post metadata header, the markdown body rendered to
/// HTML, and a fixed-text follow-up CTA.
pub struct ArticleModal {
    dialog_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct ArticleModalProps {
    pub post: &'static BlogPost,
    /// Trigger button label; the featured card uses a longer one.
    #[prop_or(AttrValue::Static("Read More →"))]
    pub trigger_text: AttrValue,
}

pub enum Msg {
    Open,
    Close,
    FollowUp,
}

impl Component for ArticleModal {
    type Message = Msg;
    type Properties = ArticleModalProps;

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
            Msg::FollowUp => {
                open_whatsapp(&whatsapp::deep_link(&template::article_followup()));
                close_modal(self.dialog_ref.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let post = ctx.props().post;

        html! {
            <>
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::Open)}>
                    { ctx.props().trigger_text.clone() }
                </button>
                <ModalDialog node_ref={self.dialog_ref.clone()}>
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{ "✕" }</button>

                    <h2>{ post.title }</h2>
                    <p class="muted article-meta">
                        { format!(
                            "👤 {} · 📅 {} · 👁 {} views · 🕑 {}",
                            post.author,
                            template::long_date(post.publish_date),
                            post.views.to_formatted_string(&Locale::en),
                            post.read_time
                        ) }
                    </p>
                    <span class="badge badge-secondary">{ post.category }</span>

                    <div class="article-body">
                        { render_markdown(post.body) }
                    </div>

                    <section class="cta-panel">
                        <h3>{ "Ready to Get Started?" }</h3>
                        <p class="muted">
                            { "Let's discuss how studying abroad can transform your future. Our expert \
                               team is here to guide you through every step." }
                        </p>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::FollowUp)}>
                            { "Start Your Journey" }
                        </button>
                    </section>
                </ModalDialog>
            </>
        }
    }
}

fn render_markdown(source: &str) -> Html {
    let parser = Parser::new(source);
    let mut html_output = String::new();
    md_html::push_html(&mut html_output, parser);
    Html::from_html_unchecked(AttrValue::from(html_output))
}
