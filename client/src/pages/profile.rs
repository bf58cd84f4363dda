//! Profile page: profile card with edit mode and the observation tabs.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::state::profile::{CARD, ProfileState, ProfileTab};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::default());

    let tabs = ProfileTab::ALL
        .iter()
        .map(|&tab| {
            view! {
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.with(|s| s.tab == tab)
                    on:click=move |_| state.update(|s| s.tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let entries = move || {
        let tab = state.with(|s| s.tab);
        let glyph = match tab {
            ProfileTab::Observations => "🔭",
            ProfileTab::Favorites => "★",
        };
        view! {
            <div class="card">
                <h3 class="card__title">{tab.heading()}</h3>
                <ul class="object-list">
                    {tab
                        .entries()
                        .iter()
                        .map(|entry| {
                            view! {
                                <li class="object-list__item">
                                    <span class="object-list__icon">{glyph}</span>
                                    <div>
                                        <p class="object-list__name">{entry.name}</p>
                                        <p class="muted">{entry.note}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <Title text="Profile - Astronomy Enthusiast"/>
        <Meta name="description" content="User profile page"/>
        <div class="profile">
            <div class="card profile__card">
                <div class="profile__avatar">
                    <span class="avatar avatar--xl">{CARD.initials}</span>
                    <button
                        class="btn btn--outline profile__edit"
                        on:click=move |_| state.update(ProfileState::start_edit)
                        title="Edit profile"
                    >
                        "📷"
                    </button>
                </div>
                <h2>{CARD.name}</h2>
                <p class="muted">{CARD.title}</p>
                <p>"Location: " {CARD.location}</p>
                <p>"Member since: " {CARD.member_since}</p>
                <Show when=move || state.with(|s| s.editing)>
                    <div class="profile__edit-actions">
                        <button class="btn btn--primary" on:click=move |_| state.update(ProfileState::save)>"Save"</button>
                        <button class="btn btn--outline" on:click=move |_| state.update(ProfileState::cancel)>"Cancel"</button>
                    </div>
                </Show>
            </div>

            <div class="profile__content">
                <div class="tabs">{tabs}</div>
                {entries}
            </div>
        </div>
    }
}
