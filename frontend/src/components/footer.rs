use yew::{html, Callback, Component, Context, Html, Properties};

use crate::app::Page;

pub struct Footer;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

impl Component for Footer {
    type Message = ();
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <footer class="footer">
                <div class="footer-grid">
                    <div>
                        <h3>{ "🎓 Future Ace Consultancy" }</h3>
                        <p>
                            { "Expert guidance for studying abroad. We help students achieve \
                               their dreams with personalized consultation and comprehensive support." }
                        </p>
                    </div>
                    <div>
                        <h4>{ "Quick Links" }</h4>
                        <ul class="footer-links">
                            <li><button onclick={on_navigate.reform(|_| Page::Home)}>{ "Home" }</button></li>
                            <li><button onclick={on_navigate.reform(|_| Page::Consultation)}>{ "Book Consultation" }</button></li>
                            <li><button onclick={on_navigate.reform(|_| Page::Contact)}>{ "Contact Us" }</button></li>
                            <li><button onclick={on_navigate.reform(|_| Page::Blog)}>{ "Blog & Universities" }</button></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{ "Get in Touch" }</h4>
                        <ul class="footer-contact">
                            <li>{ "📞 +60 11-1437 1926" }</li>
                            <li>{ "✉️ fa.consultancy2020@gmail.com" }</li>
                            <li>{ "📍 Petaling Jaya, Cova Villa" }</li>
                            <li>{ "🕑 Mon – Fri: 9 AM – 6 PM · Sat: 10 AM – 4 PM" }</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    { "© 2025 Future Ace Consultancy. All rights reserved." }
                </div>
            </footer>
        }
    }
}
