//! Landing page component
//!
//! Marketing page for Anna Laura AI. The markup only lays out the elements the
//! visual effects bind to after hydration:
//! - full-viewport rain canvas and parallax orbs behind everything
//! - floating particle container
//! - hero with the explore button
//! - features grid, stats counters and packages, all revealed on scroll

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="landing">
            <canvas id="matrixCanvas" class="matrix-canvas" aria-hidden="true"></canvas>

            <div class="background-effects" aria-hidden="true">
                <div class="orb orb-1"></div>
                <div class="orb orb-2"></div>
                <div class="orb orb-3"></div>
            </div>

            <div class="floating-particles" aria-hidden="true"></div>

            // Hero Section
            <section class="hero">
                <h1 class="hero-title">"Anna Laura AI"</h1>
                <p class="hero-subtitle">
                    "Your assistant for research, writing and everyday decisions. Always on, always learning."
                </p>
                <div class="hero-actions">
                    <a id="exploreBtn" class="btn btn-primary" href="/demo">
                        "Explore the demo"
                    </a>
                    <a class="btn btn-secondary" href="#packages">
                        "See packages"
                    </a>
                </div>
            </section>

            // Features Section
            <section id="features" class="features">
                <h2 class="section-title">"What Anna Laura does"</h2>
                <div class="feature-grid">
                    <FeatureCard
                        title="Research"
                        description="Summarizes long documents and answers questions about them in seconds."
                    />
                    <FeatureCard
                        title="Writing"
                        description="Drafts emails, reports and posts in your own tone of voice."
                    />
                    <FeatureCard
                        title="Planning"
                        description="Turns loose goals into schedules and reminds you when it matters."
                    />
                    <FeatureCard
                        title="Memory"
                        description="Remembers preferences and context across every conversation."
                    />
                    <FeatureCard
                        title="Voice"
                        description="Talk instead of type. Natural speech in and out, in twelve languages."
                    />
                    <FeatureCard
                        title="Privacy"
                        description="Your data stays yours. Nothing is used for training without consent."
                    />
                </div>
            </section>

            // Stats Section
            <section class="stats">
                <StatItem target=1280 label="Active teams" />
                <StatItem target=98 label="Satisfaction (%)" />
                <StatItem target=24 label="Hours a day" />
                <StatItem target=12 label="Languages" />
            </section>

            // Packages Section
            <section id="packages" class="packages">
                <h2 class="section-title">"Packages"</h2>
                <div class="package-grid">
                    <PackageBox name="Starter" price="Free" blurb="Everyday questions and short drafts." />
                    <PackageBox name="Pro" price="$19/mo" blurb="Unlimited research, memory and voice." />
                    <PackageBox name="Team" price="$49/mo" blurb="Shared workspaces and admin controls." />
                </div>
            </section>

            <Footer />
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Stat with a counter that ramps up to `target`
#[component]
fn StatItem(target: u64, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-item">
            <span class="stat-number" data-target=target.to_string()>"0"</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn PackageBox(name: &'static str, price: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="package-box">
            <h3>{name}</h3>
            <p class="package-price">{price}</p>
            <p>{blurb}</p>
            <a class="btn btn-secondary" href="#features">"Choose"</a>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 Anna Laura AI"</p>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Anna Laura AI - Your everyday assistant" />
        <Meta name="description" content="Anna Laura AI helps you research, write and plan. Try the interactive demo." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Anna Laura AI" />
    }
}

/// Styles shared by every page. Motion keyframes live in the motion stylesheet.
#[component]
pub fn PageStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            body { margin: 0; background: #05060a; color: #f5f5f7; font-family: system-ui, sans-serif; }
            .landing { position: relative; min-height: 100vh; overflow-x: hidden; }

            .matrix-canvas { position: fixed; inset: 0; width: 100vw; height: 100vh; z-index: -3; opacity: 0.25; }
            .background-effects { position: fixed; inset: 0; z-index: -2; pointer-events: none; }
            .orb { position: absolute; border-radius: 50%; filter: blur(60px); opacity: 0.35; will-change: transform; }
            .orb-1 { width: 420px; height: 420px; top: 10%; left: 5%; background: #6d5dfc; }
            .orb-2 { width: 320px; height: 320px; top: 50%; right: 10%; background: #22d3ee; }
            .orb-3 { width: 260px; height: 260px; bottom: 5%; left: 40%; background: #f472b6; }
            .floating-particles { position: fixed; inset: 0; z-index: -1; pointer-events: none; overflow: hidden; }

            .hero { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 0 1rem; }
            .hero-title { font-size: clamp(2.5rem, 8vw, 5rem); margin: 0 0 1rem; letter-spacing: -0.03em; }
            .hero-subtitle { max-width: 40rem; font-size: 1.25rem; color: #b4b4c0; margin-bottom: 2.5rem; }
            .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; }

            .btn { position: relative; overflow: hidden; display: inline-block; padding: 0.85rem 1.75rem; border-radius: 999px; font-weight: 600; text-decoration: none; transition: transform 0.2s; }
            .btn:hover { transform: translateY(-2px); }
            .btn-primary { background: #f5f5f7; color: #05060a; }
            .btn-secondary { border: 1px solid rgba(255, 255, 255, 0.3); color: #f5f5f7; }

            .section-title { text-align: center; font-size: 2.25rem; margin-bottom: 3rem; }
            .features, .packages { padding: 6rem 1rem; max-width: 72rem; margin: 0 auto; }
            .feature-grid, .package-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; }
            .feature-card, .package-box { background: rgba(255, 255, 255, 0.04); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; padding: 1.5rem; }
            .package-price { font-size: 1.75rem; font-weight: 700; }

            .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 2rem; padding: 4rem 1rem; max-width: 64rem; margin: 0 auto; text-align: center; }
            .stat-number { display: block; font-size: 3rem; font-weight: 800; font-variant-numeric: tabular-nums; }
            .stat-label { color: #b4b4c0; }

            .footer { text-align: center; padding: 3rem 1rem; color: #6b6b78; }
            "#
        </style>
    }
}
