//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `gallery` holds the plain state value and URL resolution; `store` owns
//! the reactive container and its single load operation.

pub mod gallery;
pub mod store;
