//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so both run unchanged during server rendering and tests.

pub mod host_page;
pub mod theme;
pub mod token_storage;
