//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

/// Root application component.
///
/// The boot sequence mounts exactly one instance of this component onto the
/// `#app` anchor; everything the application renders lives below it. The
/// shell itself is static — it carries no routing or state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Appshell"/>
        <main class="shell">
            <h1 class="shell-brand">"Appshell"</h1>
            <p class="shell-tagline">"Ready."</p>
        </main>
    }
}
