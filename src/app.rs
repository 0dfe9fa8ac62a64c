//! Root application component, context providers, and initial-page hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has two views, chat and dashboard, switched by a tab strip, not
//! by routes. All shared state is provided here as reactive contexts; the
//! seed data embedded in the served page is read once after mount for the
//! initial paint.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::attachments::AttachmentStrip;
use crate::components::error_banner::ErrorBanner;
use crate::components::final_output::FinalOutput;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::receipts_panel::ReceiptsPanel;
use crate::components::run_panel::RunPanel;
use crate::components::tab_bar::TabBar;
use crate::components::toasts::ToastHost;
use crate::state::attachments::AttachmentState;
use crate::state::run::RunState;
use crate::state::toast::ToastState;
use crate::state::ui::{ActiveTab, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and composes the chat and dashboard
/// views plus the page-level chrome (tab strip, error banner, busy overlay,
/// toast container).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let attachments = RwSignal::new(AttachmentState::default());
    let run = RwSignal::new(RunState::default());

    provide_context(ui);
    provide_context(toasts);
    provide_context(attachments);
    provide_context(run);

    // One-shot bootstrap from the seed element embedded in the served page.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        seeded.set(true);
        #[cfg(feature = "hydrate")]
        {
            let seed = crate::util::seed::parse_seed(&read_seed_dataset());
            run.update(|r| {
                r.metrics = seed.metrics;
                r.receipts = seed.receipts;
                if let Some(text) = seed.final_output {
                    r.final_output = text;
                }
            });
            if let Some(message) = seed.error {
                ui.update(|u| u.set_error(message));
            }
        }
    });

    let dash_active = move || ui.get().active_tab == ActiveTab::Dash;

    view! {
        <Stylesheet id="leptos" href="/pkg/farmagent-ui.css"/>
        <Title text="FarmAgent"/>

        <TabBar/>
        <ErrorBanner/>

        // Dashboard-only chrome outside the views proper follows the active
        // tab the same way the views do.
        <div class="dash-strip" class:dash-strip--hidden=move || !dash_active()>
            <MetricsPanel/>
        </div>

        <main class="app">
            <section class="app__view app__view--chat" class:app__view--active=move || !dash_active()>
                <FinalOutput/>
                <AttachmentStrip/>
                <RunPanel/>
            </section>

            <section class="app__view app__view--dash" class:app__view--active=dash_active>
                <ReceiptsPanel/>
                <div class="app__run-detail">
                    <pre class="app__plan">{move || run.get().plan_text().to_owned()}</pre>
                    <pre class="app__receipts-json">{move || run.get().receipts_json()}</pre>
                    <pre class="app__governor-log">{move || run.get().governor_json()}</pre>
                </div>
                <FinalOutput/>
            </section>
        </main>

        <div class="overlay" class:overlay--show=move || ui.get().busy></div>
        <ToastHost/>
    }
}

/// Read the raw seed attributes off the `#seed` element, if present.
#[cfg(feature = "hydrate")]
fn read_seed_dataset() -> crate::util::seed::SeedDataset {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("seed"));
    match element {
        Some(el) => crate::util::seed::SeedDataset {
            metrics: el.get_attribute("data-metrics"),
            receipts: el.get_attribute("data-receipts"),
            error: el.get_attribute("data-error"),
            final_output: el.get_attribute("data-final"),
        },
        None => crate::util::seed::SeedDataset::default(),
    }
}
