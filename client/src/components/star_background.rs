//! Decorative twinkling star layer behind the home page.

use leptos::prelude::*;

use crate::util::star_field::{self, DEFAULT_SEED, DEFAULT_STAR_COUNT};

#[component]
pub fn StarBackground() -> impl IntoView {
    let stars = star_field::generate(DEFAULT_STAR_COUNT, DEFAULT_SEED);

    view! {
        <div class="star-background" aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| view! { <span class="star-background__star" style=star.style()></span> })
                .collect_view()}
        </div>
    }
}
