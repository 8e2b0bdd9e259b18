//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="hero">
                // Error code
                <h1 class="hero-title">"404"</h1>

                <p class="hero-subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="hero-actions">
                    <a href="/" rel="external" class="btn btn-primary">
                        "Go Home"
                    </a>
                </div>
            </section>
        </div>
    }
}
