//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] shared with the
//! terminal components.

use leptos::prelude::*;

use folio_core::content::{load_profile, load_projects};
use folio_core::{
    AutocompleteResult, ContentError, Profile, Project, TerminalSession, autocomplete, get_hint,
};

use crate::components::{Footer, ProjectsSection, Terminal};
use crate::utils::{dom, theme};

stylance::import_crate_style!(css, "src/app.module.css");

/// Validated site content.
pub struct Content {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_profile()?,
            projects: load_projects()?,
        })
    }
}

/// Application context shared via Leptos context.
///
/// `Copy` because both fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<TerminalSession>,
    pub content: StoredValue<Content>,
}

impl AppContext {
    pub fn new(content: Content) -> Self {
        let initial = theme::initial_theme();
        theme::apply_theme(initial);
        Self {
            session: RwSignal::new(TerminalSession::new(&content.profile, initial)),
            content: StoredValue::new(content),
        }
    }

    /// Run one line of input and carry out its side effects.
    pub fn submit(&self, input: String) {
        let session = self.session;
        let intent = self.content.with_value(|c| {
            let mut intent = None;
            session.update(|s| intent = s.submit(&input, &c.profile, &c.projects));
            intent
        });
        let Some(intent) = intent else { return };

        if intent.theme_changed {
            theme::persist_theme(session.with_untracked(|s| s.theme()));
        }
        if let Some(url) = intent.open_url {
            dom::open_in_new_tab(&url);
        }
    }

    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let mut entry = None;
        self.session.update(|s| entry = s.navigate_history(direction));
        entry
    }

    pub fn autocomplete(&self, input: &str) -> AutocompleteResult {
        self.content.with_value(|c| autocomplete(input, &c.projects))
    }

    pub fn hint(&self, input: &str) -> Option<String> {
        self.content.with_value(|c| get_hint(input, &c.projects))
    }

    pub fn terminal_path(&self) -> String {
        self.content.with_value(|c| c.profile.hero_terminal_path.clone())
    }

    pub fn prompt_cursor(&self) -> String {
        self.content.with_value(|c| c.profile.hero_terminal_prompt.clone())
    }
}

#[component]
pub fn App() -> impl IntoView {
    match Content::load() {
        Ok(content) => {
            let ctx = AppContext::new(content);
            provide_context(ctx);
            let (name, title, tagline) = ctx.content.with_value(|c| {
                (
                    c.profile.name.clone(),
                    c.profile.title.clone(),
                    c.profile.tagline.clone(),
                )
            });

            view! {
                <main class=css::page>
                    <header class=css::hero>
                        <h1 class=css::name>{name}</h1>
                        <p class=css::title>{title}</p>
                        <p class=css::tagline>{tagline}</p>
                    </header>
                    <Terminal />
                    <ProjectsSection />
                    <Footer />
                </main>
            }
            .into_any()
        }
        Err(e) => {
            dom::error(&e.to_string());
            view! {
                <main class=css::page>
                    <div class=css::error>
                        <h1>"Content failed to load"</h1>
                        <pre class=css::errorDetails>{e.to_string()}</pre>
                    </div>
                </main>
            }
            .into_any()
        }
    }
}
