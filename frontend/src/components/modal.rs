use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Overlay dialog host. The dialog stays in the DOM and is shown or hidden
/// by toggling the `show` class on its overlay through [`open_modal`] and
/// [`close_modal`], addressed via the `node_ref` prop.
pub struct ModalDialog {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ModalDialog {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-overlay" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                <div class="modal-panel">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_modal(modal_ref: NodeRef) {
    toggle_show_class(modal_ref, "add");
}

pub fn close_modal(modal_ref: NodeRef) {
    toggle_show_class(modal_ref, "remove");
}

fn toggle_show_class(modal_ref: NodeRef, method: &str) {
    if let Some(overlay) = modal_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            overlay.id(),
            method
        ));
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
            .unwrap();
    }
}
