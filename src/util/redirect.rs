//! Full-page navigation used to abandon a view.
//!
//! Unlike router navigation this reloads the application at the target path,
//! dropping all in-memory state. Requires a browser environment; native
//! builds no-op.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Application root, the target of every failed gallery load.
pub const ROOT_PATH: &str = "/";

/// Performs a full-page navigation. Enables mocking in tests.
pub trait Redirect: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirect;

impl Redirect for BrowserRedirect {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_href(path) {
                log::error!("redirect to {path} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
