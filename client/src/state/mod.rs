//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The state machines (`session`, `modal`, `nav`) are plain Rust with no
//! reactive types, so they behave the same during SSR, in the browser and in
//! tests. `auth` and `submit` bridge them into Leptos.

pub mod auth;
pub mod modal;
pub mod nav;
pub mod session;
pub mod submit;
