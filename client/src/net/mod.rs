//! Network layer: the Auth API client and its wire types.

pub mod api;
pub mod types;
