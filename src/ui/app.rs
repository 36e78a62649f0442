//! Document shell and route tree.

use axum::http::StatusCode;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::ui::chat::{ChatIndex, Layout};
use crate::ui::landing::LandingPage;
use crate::ui::render::{PageStatus, UiSettings};

/// Path of the landing page.
pub const HOME_ROUTE: &str = "/";

/// Path of the chat section.
pub const CHAT_ROUTE: &str = "/chat";

/// Full HTML document for a page.
#[component]
pub fn Document(
    /// Title and stylesheet for the page.
    settings: UiSettings,
) -> impl IntoView {
    let UiSettings { title, stylesheet } = settings;

    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Route tree.
///
/// `/` is the landing page; everything under `/chat` renders inside
/// [`Layout`]. Unmatched paths fall back to [`NotFoundPage`].
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
                <ParentRoute path=path!("/chat") view=Layout>
                    <Route path=path!("") view=ChatIndex/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// 404 Not Found page.
#[component]
fn NotFoundPage() -> impl IntoView {
    if let Some(status) = use_context::<PageStatus>() {
        status.set(StatusCode::NOT_FOUND);
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=HOME_ROUTE>"Go Home"</a>
        </div>
    }
}
