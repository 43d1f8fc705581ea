//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render read-only views of the gallery state handed down by
//! pages. Room and wall presentation is provided elsewhere.

pub mod content_list;
pub mod gallery_header;
