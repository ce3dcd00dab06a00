use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::app::Page;

pub struct Navbar;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

const PAGES: &[Page] = &[Page::Home, Page::Consultation, Page::Contact, Page::Blog];

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="navbar">
                <button
                    class="navbar-brand"
                    onclick={props.on_navigate.reform(|_| Page::Home)}
                >
                    { "🎓 Future Ace Consultancy" }
                </button>
                <div class="navbar-links">
                    {
                        PAGES.iter().map(|page| {
                            let page = *page;
                            html! {
                                <button
                                    class={classes!("nav-link", (props.active == page).then_some("active"))}
                                    onclick={props.on_navigate.reform(move |_| page)}
                                >
                                    { page.label() }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <button
                        class="btn btn-primary nav-cta"
                        onclick={props.on_navigate.reform(|_| Page::Consultation)}
                    >
                        { "Book Free Consultation" }
                    </button>
                </div>
            </nav>
        }
    }
}
