//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::moderation::ModerationPage;
use crate::state::messages::MessagesState;

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
/// Provides the shared message-board state context and the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let messages = RwSignal::new(MessagesState::default());
    provide_context(messages);

    view! {
        <Stylesheet id="leptos" href="/pkg/modqueue.css"/>
        <Title text="Moderation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ModerationPage/>
            </Routes>
        </Router>
    }
}
