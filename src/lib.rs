//! # gallery-viewer
//!
//! Leptos + WASM front end for the virtual gallery viewer.
//!
//! Loads a gallery's metadata, room layout and content list from the storage
//! endpoint into a read-only reactive store and renders it through routed
//! pages. Browser-only code sits behind the `csr` feature so the store,
//! schema and helpers are testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
