//! Landing page: hero, feature cards, call to action.

use leptos::prelude::*;

use crate::components::star_background::StarBackground;

/// `(icon, title, description)` for each feature card.
const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🧭",
        "3D Star Map",
        "Explore an interactive 3D map of the night sky with detailed information about stars, planets, and constellations.",
    ),
    (
        "📅",
        "Event Tracker",
        "Never miss a meteor shower, eclipse, or planetary alignment with our celestial event calendar.",
    ),
    (
        "📖",
        "Stargazing Logs",
        "Record your observations and track your stargazing journey with detailed personal logs.",
    ),
    (
        "👥",
        "Community",
        "Connect with fellow astronomy enthusiasts, share discoveries, and learn from experienced stargazers.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <StarBackground/>

            <section class="home__hero">
                <h1 class="home__title">"SpaceMonkey"</h1>
                <p class="home__tagline">
                    "Explore the cosmos, track celestial events, and connect with fellow stargazers"
                </p>
                <div class="home__actions">
                    <a class="btn btn--primary btn--lg" href="/map">"Explore Star Map"</a>
                    <a class="btn btn--outline btn--lg" href="/community">"Join Community"</a>
                </div>
            </section>

            <section class="home__features">
                <h2>"Discover the Universe with SpaceMonkey"</h2>
                <div class="home__grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| view! { <FeatureCard icon=icon title=title description=description/> })
                        .collect_view()}
                </div>
            </section>

            <section class="home__cta">
                <h2>"Ready to Begin Your Cosmic Journey?"</h2>
                <p>"Join thousands of stargazers who are expanding their knowledge of the universe."</p>
                <a class="btn btn--primary btn--lg" href="/dashboard">"Get Started →"</a>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="feature-card__icon">{icon}</div>
            <h3 class="card__title">{title}</h3>
            <p class="card__description">{description}</p>
            <span class="btn btn--link">"Learn more →"</span>
        </div>
    }
}
