use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::EffectsConfig;
use crate::core::config::CONFIG_ELEMENT_ID;
use crate::core::motion::{MOTION_STYLE_ID, motion_stylesheet};
use crate::ui::{DemoPage, LandingPage, NotFoundPage, PageStyles};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server routes; error pages fall back to defaults
    let config = use_context::<EffectsConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                // motion presets ship with the page so the client never inserts a second copy
                <style id=MOTION_STYLE_ID inner_html=motion_stylesheet()></style>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=config.to_json()></script>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title text="Anna Laura AI"/>

        <PageStyles />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("demo") view=DemoPage/>
                </Routes>
            </main>
        </Router>
    }
}
