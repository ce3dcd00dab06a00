//! Consultation booking form: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, and
//! view rendering.
//!
//! The component owns its field state, and `Submit` drives the shared lead
//! pipeline (validate → template → WhatsApp deep link). It is embedded on
//! the home page but self-contained, so any page can host it.

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::BookingForm;

use yew::prelude::*;

impl Component for BookingForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BookingForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
