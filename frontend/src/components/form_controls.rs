//! Shared form controls.
//!
//! Small `Html` builders for labeled inputs used by every form on the site.
//! Each control reports its value through a `Callback<String>`; the owning
//! component stores it and assembles a `FormSubmission` on submit.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn text_input(label: &str, value: &str, on_change: Callback<String>) -> Html {
    typed_input("text", label, value, on_change)
}

pub fn email_input(label: &str, value: &str, on_change: Callback<String>) -> Html {
    typed_input("email", label, value, on_change)
}

pub fn tel_input(label: &str, value: &str, on_change: Callback<String>) -> Html {
    typed_input("tel", label, value, on_change)
}

fn typed_input(kind: &'static str, label: &str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <input
                type={kind}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

/// Native date picker; `min` refuses dates before today.
pub fn date_input(label: &str, value: &str, on_change: Callback<String>) -> Html {
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <input
                type="date"
                min={today_iso()}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

pub fn textarea_input(
    label: &str,
    placeholder: &str,
    rows: u32,
    value: &str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <textarea
                rows={rows.to_string()}
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                oninput={Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit(input.value());
                })}
            />
        </div>
    }
}

/// Select with a disabled-looking placeholder entry for the empty value.
pub fn select_input(
    label: &str,
    placeholder: &str,
    options: &[&str],
    value: &str,
    on_change: Callback<String>,
) -> Html {
    html! {
        <div class="form-field">
            <label>{ label }</label>
            <select onchange={Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit(select.value());
            })}>
                <option value="" selected={value.is_empty()}>{ placeholder }</option>
                {
                    options.iter().map(|option| html! {
                        <option value={option.to_string()} selected={value == *option}>
                            { option }
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

/// Today as `YYYY-MM-DD`, the date picker's lower bound.
fn today_iso() -> String {
    let iso = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    iso.get(..10).unwrap_or("").to_string()
}
