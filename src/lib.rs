//! Experts Land - authenticated dashboard client.
//!
//! A single-page web application compiled to WebAssembly with Dioxus. The
//! client signs users in against the Experts Land backend, then exposes the
//! features their role permits: the Google Sheets archive search and the
//! admin user roster.
//!
//! # Architecture
//!
//! - **Components**: Dioxus component tree with a login gate, an app bar
//!   driving view navigation, and one module per feature view
//! - **Session**: signed-in user and permissions shared through Dioxus
//!   context ([`components::use_session`])
//! - **API**: thin typed client over the backend's JSON endpoints with a
//!   pooled HTTP client
//! - **Scan**: wire types and the view-state machine for the sheet-archive
//!   scan flow

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod api;
pub mod components;
pub mod error;
pub mod scan;
pub mod utils;
