//! Routed pages.

pub mod docs;
pub mod home;
