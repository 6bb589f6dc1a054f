use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/footer.module.css");

/// Link text for the GitHub profile: `@username` when known, else the bare URL.
fn github_label(username: &str, url: &str) -> String {
    if username.is_empty() {
        url.trim_start_matches("https://").to_string()
    } else {
        format!("@{}", username)
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (name, url, label) = ctx.content.with_value(|c| {
        let p = &c.profile;
        (
            p.name.clone(),
            p.github_url.clone(),
            github_label(&p.github_username, &p.github_url),
        )
    });
    let link = (!url.is_empty()).then(|| {
        view! {
            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
    });

    view! {
        <footer class=css::footer>
            <span>{name}</span>
            {link}
        </footer>
    }
}
