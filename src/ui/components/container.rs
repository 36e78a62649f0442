//! Background container that frames page content.

use leptos::prelude::*;

use super::Navbar;

/// Style class of the outer background wrapper.
pub const BACKGROUND_CLASS: &str = "background";

/// Style class of the wrapper holding the page content.
pub const CONTENT_CLASS: &str = "container";

/// Frames page content with the site background and the navbar.
///
/// The navbar always renders before the content wrapper. Without children
/// the content wrapper is rendered empty.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Container>
///         <p>"Hello"</p>
///     </Container>
/// }
/// ```
#[component]
pub fn Container(
    /// Page content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=BACKGROUND_CLASS>
            <Navbar />
            <div class=CONTENT_CLASS>
                {children.map(|children| children())}
            </div>
        </div>
    }
}
