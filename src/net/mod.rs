//! Networking modules for the gallery storage endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single document fetch and `types` defines the
//! document schema shared with the gallery editor.

pub mod api;
pub mod types;
