//! Project cards below the terminal.

use folio_core::Project;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/projects.module.css");

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|c| c.projects.clone());

    view! {
        <section class=css::section aria-label="Projects">
            {projects
                .into_iter()
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard index=i + 1 project=project /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let Project {
        id,
        title,
        summary,
        highlights,
        stack,
        repo_url,
        live_url,
    } = project;

    view! {
        <article class=css::card>
            <header class=css::header>
                <h3 class=css::title>{title}</h3>
                // Same reference the terminal's `open` accepts
                <code class=css::reference>{format!("open {} | open {}", index, id)}</code>
            </header>
            <p class=css::summary>{summary}</p>
            <ul class=css::highlights>
                {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
            <div class=css::stack>
                {stack
                    .into_iter()
                    .map(|tech| view! { <span class=css::tech>{tech}</span> })
                    .collect_view()}
            </div>
            <div class=css::links>
                {live_url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">"Live"</a>
                })}
                {repo_url.map(|url| view! {
                    <a href=url target="_blank" rel="noopener noreferrer">"Source"</a>
                })}
            </div>
        </article>
    }
}
