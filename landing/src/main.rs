// Robotic Solutions landing page (Leptos 0.8, CSR)
// Mounts the features section behind a client-side router.

mod pages;

use features_section::styles::FEATURES_CSS;
use features_section::{Navigator, provide_navigator};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{ContactPage, HomePage, NotFound};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_navigator(Navigator::smart());

    view! {
        <style>{FEATURES_CSS}</style>
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}
