//! Site footer: brand blurb and link columns.

use leptos::prelude::*;

const NAVIGATION: [(&str, &str); 4] = [("/", "Home"), ("/map", "Star Map"), ("/events", "Events"), ("/community", "Community")];
const LEGAL: [(&str, &str); 2] = [("/privacy", "Privacy Policy"), ("/terms", "Terms of Service")];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span>"🔭"</span>
                        <span class="footer__title">"AstroMentor"</span>
                    </div>
                    <p class="footer__blurb">
                        "Explore the cosmos, track celestial events, and connect with fellow stargazers."
                    </p>
                </div>

                <div>
                    <h3 class="footer__heading">"Navigation"</h3>
                    <ul class="footer__list">
                        {NAVIGATION
                            .iter()
                            .map(|&(href, label)| view! { <li><a href=href>{label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class="footer__heading">"Resources"</h3>
                    <ul class="footer__list">
                        <li>
                            <a href="https://api.nasa.gov" target="_blank" rel="noopener noreferrer">"NASA APIs ↗"</a>
                        </li>
                        <li>
                            <a href="https://github.com" target="_blank" rel="noopener noreferrer">"GitHub ↗"</a>
                        </li>
                        <li><a href="/about">"About"</a></li>
                    </ul>
                </div>

                <div>
                    <h3 class="footer__heading">"Legal"</h3>
                    <ul class="footer__list">
                        {LEGAL.iter().map(|&(href, label)| view! { <li><a href=href>{label}</a></li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <p class="footer__copyright">"© 2023 AstroMentor. All rights reserved."</p>
        </footer>
    }
}
