//! Browser entry point, built by Trunk with the `csr` feature.

#[cfg(feature = "csr")]
fn main() {
    use gallery_viewer::app::App;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);

    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // This binary is only meaningful with the `csr` feature.
}
