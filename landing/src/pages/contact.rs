// Contact page - target of the primary call to action
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="intro">
            <h1>"Start your free consultation"</h1>
            <p>"Tell us about your line and we'll get back within one business day."</p>
            <a href="mailto:sales@robotic-solutions.dev">"sales@robotic-solutions.dev"</a>
        </section>
    }
}
