//! Chat section layout.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::ui::components::Container;

/// Chrome for every page in the chat section.
///
/// Renders exactly one [`Container`] around exactly one outlet. The router
/// fills the outlet with the matched nested route; when that route yields no
/// content the outlet stays empty and the chrome still renders.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <Container>
            <Outlet />
        </Container>
    }
}

/// Index of the chat section. Contributes no content of its own.
#[component]
pub fn ChatIndex() -> impl IntoView {}
