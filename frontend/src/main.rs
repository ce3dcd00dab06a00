use crate::app::App;

mod app;
mod components;
mod dispatch;
mod notify;
mod pages;

fn main() {
    yew::Renderer::<App>::new().render();
}
