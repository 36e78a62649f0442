//! The routed chat section.
//!
//! Everything under `/chat` renders inside [`Layout`], which supplies the
//! shared chrome around whatever nested route matched.

mod layout;

pub use layout::{ChatIndex, Layout};
