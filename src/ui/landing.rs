//! Landing page.

use leptos::prelude::*;

use crate::ui::CHAT_ROUTE;

/// Label of the call-to-action link.
pub const START_CHAT_LABEL: &str = "Start Chat";

/// Entry screen with a single call to action into the chat section.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1 class="landing-title">"Welcome"</h1>
            <p class="landing-text">"Pick up where you left off or begin a new conversation."</p>
            <a href=CHAT_ROUTE class="px-4 py-2 bg-black text-white rounded">
                {START_CHAT_LABEL}
            </a>
        </div>
    }
}
