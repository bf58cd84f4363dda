//! Top navigation bar with route links and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{NAV_LINKS, UiState, nav_active};

/// Site-wide navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            let active = move || nav_active(href, &location.pathname.get());
            view! {
                <a
                    href=href
                    class="navbar__link"
                    class:navbar__link--active=active
                    on:click=move |_| ui.update(|u| u.nav_open = false)
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">
                <span class="navbar__logo">"🔭"</span>
                <span class="navbar__title">"AstroMentor"</span>
            </a>

            <nav class="navbar__links" class:navbar__links--open=move || ui.get().nav_open>
                {links}
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__theme"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <button
                class="btn navbar__menu"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
                title="Toggle navigation"
            >
                {move || if ui.get().nav_open { "✕" } else { "☰" }}
            </button>
        </header>
    }
}
