//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the auth overlay while reading/writing
//! shared state from Leptos context providers.

pub mod auth_modal;
pub mod auth_provider;
pub mod footer;
pub mod nav_auth_link;
pub mod navbar;
