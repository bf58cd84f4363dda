//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    community::CommunityPage, dashboard::DashboardPage, events::EventsPage, home::HomePage, map::MapPage,
    profile::ProfilePage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context, renders the layout shell, and sets up
/// client-side routing. Everything else is page-local.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Stored preference wins over the dark default once the browser is up.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/astromentor.css"/>
        <Title text="AstroMentor - Learn Astronomy"/>
        <Meta name="description" content="Modern, interactive astronomy learning platform for stargazers"/>

        <Router>
            <div class="layout">
                <Navbar/>
                <main class="layout__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("community") view=CommunityPage/>
                        <Route path=StaticSegment("events") view=EventsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("map") view=MapPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
