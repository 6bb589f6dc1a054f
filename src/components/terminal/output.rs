use folio_core::{TerminalLine, Tone};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for a line tone.
fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Default => css::toneDefault,
        Tone::Accent => css::toneAccent,
        Tone::Error => css::toneError,
        Tone::Success => css::toneSuccess,
        Tone::Muted => css::toneMuted,
    }
}

#[component]
pub fn Output(line: TerminalLine) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::line, tone_class(line.tone))>{line.text}</div>
    }
}
