//! Leptos bindings for the user-card surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components express the view-node contract from [`crate::render`] in
//! `view!` form for the web UI, resolving classes through the
//! [`crate::style::StyleRegistry`] context when a host application provides
//! one.

pub mod avatar;
pub mod user_card;
