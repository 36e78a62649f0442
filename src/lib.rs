//! Chat UI
//!
//! Server-rendered front end for a chat application: a landing page and the
//! layout chrome shared by the chat section.
//!
//! # Architecture
//!
//! - **Server**: Axum serves static assets and renders every other path
//! - **UI**: Leptos SSR components and route tree
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`error`]: Server error type
//! - [`server`]: HTTP router and startup
//! - [`ui`]: Components, routes, rendering

pub mod config;
pub mod error;
pub mod server;
pub mod ui;

pub use server::AppState;
