//! Rendering entry points.

use axum::http::StatusCode;
use leptos::prelude::*;
use leptos_router::location::RequestUrl;

use crate::config::{DEFAULT_TITLE, STYLESHEET_HREF};
use crate::ui::app::Document;

/// Presentation settings provided to every render as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Site title.
    pub title: String,
    /// Stylesheet href.
    pub stylesheet: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: STYLESHEET_HREF.to_string(),
        }
    }
}

/// HTTP status chosen by the components of a single render.
///
/// Starts at `200 OK`; the fallback page flips it to `404 Not Found`.
#[derive(Debug, Clone)]
pub struct PageStatus(ArcRwSignal<StatusCode>);

impl PageStatus {
    pub fn new() -> Self {
        Self(ArcRwSignal::new(StatusCode::OK))
    }

    pub fn set(&self, status: StatusCode) {
        self.0.set(status);
    }

    pub fn get(&self) -> StatusCode {
        self.0.get_untracked()
    }
}

impl Default for PageStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of rendering one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

/// Renders the full document for `path`.
///
/// `path` may carry a query string. Rendering is a pure function of its
/// inputs: the same settings and path always give the same page.
pub fn render_document(settings: &UiSettings, path: &str) -> RenderedPage {
    let status = PageStatus::new();
    let owner = Owner::new();

    let html = owner.with(|| {
        provide_context(RequestUrl::new(&normalize_path(path)));
        provide_context(status.clone());
        provide_context(settings.clone());

        let settings = settings.clone();
        view! { <Document settings=settings/> }.to_html()
    });

    RenderedPage {
        status: status.get(),
        html,
    }
}

/// Collapses leading slashes so `//chat` is matched as the path `/chat`
/// rather than parsed as a scheme-relative URL with host `chat`.
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Renders a standalone view to HTML inside a fresh owner.
///
/// Useful for components that do not need the router.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}
