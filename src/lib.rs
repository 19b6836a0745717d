//! # user-card
//!
//! Presentational user card: avatar plus caption, with a conditional email
//! line for protected users. The rendering contract lives in a pure,
//! renderer-agnostic core; Leptos components bind that contract to the web
//! UI.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `User` view model, variant tag, opaque avatar reference |
//! | [`view`] | Typed view-node tree and builders |
//! | [`render`] | The card contract: test id, email gating, tree assembly |
//! | [`style`] | Key-based class lookup injected by the host |
//! | [`components`] | Leptos `UserCard` and `Avatar` components |

pub mod components;
pub mod model;
pub mod render;
pub mod style;
pub mod view;
