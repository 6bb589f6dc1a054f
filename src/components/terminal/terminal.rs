use leptos::prelude::*;

use super::{Input, Output};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Hero terminal window: scrolling output followed by the input line.
#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest line in view
    Effect::new(move || {
        session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_submit = Callback::new(move |input: String| ctx.submit(input));
    let on_history_nav = Callback::new(move |direction: i32| ctx.navigate_history(direction));
    let on_autocomplete = Callback::new(move |input: String| ctx.autocomplete(&input));
    let on_get_hint = Callback::new(move |input: String| ctx.hint(&input));

    view! {
        <section class=css::window aria-label="Interactive terminal">
            <div class=css::titleBar>
                <span class=format!("{} {}", css::dot, css::dotRed)></span>
                <span class=format!("{} {}", css::dot, css::dotYellow)></span>
                <span class=format!("{} {}", css::dot, css::dotGreen)></span>
                <span class=css::titleText>{ctx.terminal_path()}</span>
            </div>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || session.with(|s| s.lines().to_vec())
                    key=|entry| entry.id
                    children=|entry| view! { <Output line=entry.line /> }
                />
                <Input
                    prompt=ctx.terminal_path()
                    cursor=ctx.prompt_cursor()
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                    on_get_hint=on_get_hint
                />
            </div>
        </section>
    }
}
