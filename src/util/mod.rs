//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and store logic so the
//! latter stay testable natively.

pub mod redirect;
