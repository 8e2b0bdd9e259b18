//! Demo page reached through the explore button on the landing page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Title text="Anna Laura AI - Demo" />

        <div class="landing">
            <div class="background-effects" aria-hidden="true">
                <div class="orb orb-1"></div>
                <div class="orb orb-2"></div>
            </div>

            <section class="hero">
                <h1 class="hero-title">"Say hello to Anna Laura"</h1>
                <p class="hero-subtitle">
                    "The interactive demo opens here. Ask a question to get started."
                </p>
                <div class="hero-actions">
                    <a href="/" rel="external" class="btn btn-secondary">
                        "Back to the homepage"
                    </a>
                </div>
            </section>
        </div>
    }
}
