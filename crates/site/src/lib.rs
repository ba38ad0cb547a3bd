mod demo;
mod web_app;

pub use demo::{sample_messages, DemoMessage};
pub use web_app::{SignInForm, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
