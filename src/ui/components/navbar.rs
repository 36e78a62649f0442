//! Top navigation bar.

use leptos::prelude::*;

use super::ChatBubbleIcon;
use crate::ui::{CHAT_ROUTE, HOME_ROUTE, UiSettings};

/// Navigation bar with the site brand and a link into the chat section.
///
/// Reads the site title from the [`UiSettings`] context, falling back to the
/// default title when rendered on its own.
#[component]
pub fn Navbar() -> impl IntoView {
    let title = use_context::<UiSettings>().unwrap_or_default().title;

    view! {
        <nav class="navbar">
            <a href=HOME_ROUTE class="navbar-brand">
                <ChatBubbleIcon class="navbar-icon" />
                <span>{title}</span>
            </a>
            <div class="navbar-links">
                <a href=CHAT_ROUTE class="navbar-link">"Chat"</a>
            </div>
        </nav>
    }
}
