//! Prompt line of the hero terminal.
//!
//! The typed text lives in one signal; everything else is derived from it
//! or from the last Tab press:
//! - the ghost hint is a memo over the typed text
//! - ambiguous completions are kept in [`Completions`] until the text is
//!   edited by hand

use folio_core::AutocompleteResult;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::completion::{Completions, tab_press, utf16_len};
use super::keymap::KeyAction;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

#[component]
pub fn Input(
    /// Working directory shown before `$`
    prompt: String,
    /// Blinking glyph after the typed text
    cursor: String,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let value = RwSignal::new(String::new());
    let completions = RwSignal::new(Completions::default());

    // No hint while cycling; the candidates are listed instead
    let hint = Memo::new(move |_| {
        let typed = value.get();
        if typed.is_empty() || completions.with(|c| !c.is_empty()) {
            None
        } else {
            on_get_hint.run(typed)
        }
    });

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Replace the typed text and put the caret after it
    let set_value = move |text: String| {
        let end = utf16_len(&text);
        value.set(text);
        if let Some(input) = input_ref.get() {
            input.set_value(&value.get_untracked());
            let _ = input.set_selection_range(end, end);
        }
    };

    let caret_at_end = move || {
        let Some(input) = input_ref.get() else {
            return false;
        };
        let caret = input.selection_start().ok().flatten().unwrap_or(0);
        caret == value.with_untracked(|v| utf16_len(v))
    };

    let complete = move || {
        let typed = value.get_untracked();
        if typed.trim().is_empty() {
            return;
        }
        let mut cycling = completions.get_untracked();
        let next = if cycling.is_empty() {
            let (next, fresh) = tab_press(&typed, on_autocomplete.run(typed.clone()));
            cycling = fresh;
            next
        } else {
            cycling.cycle()
        };
        completions.set(cycling);
        if let Some(next) = next {
            set_value(next);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let Some(action) = KeyAction::from_key(&ev.key(), ev.ctrl_key()) else {
            completions.set(Completions::default());
            return;
        };
        if action.prevents_default() {
            ev.prevent_default();
        }
        if action != KeyAction::Complete {
            completions.set(Completions::default());
        }

        match action {
            KeyAction::Submit => {
                on_submit.run(value.get_untracked());
                set_value(String::new());
            }
            KeyAction::HistoryBack => {
                if let Some(cmd) = on_history_nav.run(-1) {
                    set_value(cmd);
                }
            }
            KeyAction::HistoryForward => {
                set_value(on_history_nav.run(1).unwrap_or_default());
            }
            KeyAction::Complete => complete(),
            KeyAction::AcceptHint => {
                if let Some(rest) = hint.get_untracked().filter(|_| caret_at_end()) {
                    ev.prevent_default();
                    set_value(format!("{}{}", value.get_untracked(), rest));
                }
            }
            KeyAction::ClearLine => set_value(String::new()),
            KeyAction::ClearScreen => on_submit.run("clear".to_string()),
            KeyAction::DismissCompletions => {}
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        value.set(target.unchecked_into::<web_sys::HtmlInputElement>().value());
        completions.set(Completions::default());
    };

    let candidates = move || {
        completions.with(|c| {
            (!c.is_empty()).then(|| {
                let selected = c.selected();
                c.candidates()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let class = if Some(i) == selected {
                            format!("{} {}", css::candidate, css::candidateSelected)
                        } else {
                            css::candidate.to_string()
                        };
                        view! { <span class=class>{name.clone()}</span> }
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div class=css::promptBlock>
            <label class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <span class=css::field>
                    // Mirrors the typed text so the hint and cursor sit after it
                    <span class=css::overlay aria-hidden="true">
                        <span class=css::mirror>{move || value.get()}</span>
                        <span class=css::hint>{move || hint.get().unwrap_or_default()}</span>
                        <span class=css::cursor>{cursor}</span>
                    </span>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        aria-label="Terminal command"
                        autocomplete="off"
                        autocapitalize="off"
                        spellcheck="false"
                        prop:value=move || value.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </span>
            </label>
            <div class=css::candidates>{candidates}</div>
        </div>
    }
}
