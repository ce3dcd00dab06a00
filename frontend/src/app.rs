use yew::{html, Component, Context, Html};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::blog::BlogPage;
use crate::pages::consultation::ConsultationPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;

/// The four top-level pages. Navigation is plain component state; the site
/// is a single document and never reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Consultation,
    Contact,
    Blog,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Consultation => "Consultation",
            Page::Contact => "Contact",
            Page::Blog => "Blog",
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page != page {
                    self.page = page;
                    scroll_to_top();
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);

        html! {
            <div class="site-root">
                <Navbar active={self.page} on_navigate={on_navigate.clone()} />
                {
                    match self.page {
                        Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
                        Page::Consultation => html! { <ConsultationPage /> },
                        Page::Contact => html! { <ContactPage /> },
                        Page::Blog => html! { <BlogPage /> },
                    }
                }
                <Footer on_navigate={on_navigate} />
            </div>
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
