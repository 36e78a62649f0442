//! UI components and server-side rendering.
//!
//! Pages are rendered to HTML with Leptos SSR. Each request renders inside its
//! own reactive owner, so components never share state across requests.
//!
//! # Structure
//!
//! - [`app`]: Document shell and route tree
//! - [`components`]: Chrome shared across pages
//! - [`chat`]: Chat section layout
//! - [`landing`]: Landing page
//! - [`node`]: Dynamic renderable content
//! - [`render`]: Rendering entry points

pub mod app;
pub mod chat;
pub mod components;
pub mod landing;
pub mod node;
pub mod render;

pub use app::{App, CHAT_ROUTE, Document, HOME_ROUTE};
pub use node::{Element, RenderableNode, Tag};
pub use render::{PageStatus, RenderedPage, UiSettings, render_document, render_fragment};
