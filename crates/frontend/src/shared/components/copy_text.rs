//! CopyText — inline text that copies itself to the clipboard on click.

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const COPIED_RESET_MS: u32 = 1500;

#[component]
pub fn CopyText(
    /// Text to show and copy
    #[prop(into)]
    text: String,
    /// Extra classes for the outer button
    #[prop(optional, into)]
    class: String,
    /// Extra classes for the text span
    #[prop(optional, into)]
    text_class: String,
    /// Hide the copy icon (the "copied" check still shows)
    #[prop(optional)]
    hide_icon: bool,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = {
        let text = text.clone();
        move |_| {
            copy_to_clipboard_with_callback(&text, move || {
                copied.set(true);
                Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
            });
        }
    };

    let title = move || if copied.get() { "Copied!" } else { "Click to copy" };

    view! {
        <button
            type="button"
            class=format!("copy-text {}", class)
            title=title
            on:click=on_click
        >
            <span class=format!("copy-text__text {}", text_class)>{text}</span>
            {move || {
                if copied.get() {
                    Some(icon("check"))
                } else if hide_icon {
                    None
                } else {
                    Some(icon("copy"))
                }
            }}
        </button>
    }
}
