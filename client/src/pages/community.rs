//! Community page: searchable post feed, tabs, sidebar, create-post dialog.
//!
//! DESIGN
//! ======
//! Posts are seed data held in a `StoredValue`; everything the user changes
//! (query, tab, follows, dialog) lives in one `CommunityState` signal and
//! the feed is derived from it on every render. Posting is not wired to
//! anything: both dialog buttons just close it.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::community::{
    COMMUNITY_STATS, CommunityState, FeedTab, POPULAR_TAGS, POST_CATEGORIES, TOP_CONTRIBUTORS, avatar_fallback,
    contributions, seed_posts,
};

#[component]
pub fn CommunityPage() -> impl IntoView {
    let state = RwSignal::new(CommunityState::default());
    let posts = StoredValue::new(seed_posts());

    let visible = move || state.with(|s| posts.with_value(|p| s.visible_posts(p)));

    let feed = move || {
        let visible = visible();
        if visible.is_empty() {
            view! {
                <div class="empty-state">
                    <p>{move || state.with(CommunityState::empty_feed_message)}</p>
                    <Show when=move || state.with(|s| !s.query.is_empty())>
                        <button class="btn btn--link" on:click=move |_| state.update(|s| s.query.clear())>
                            "Clear search"
                        </button>
                    </Show>
                </div>
            }
            .into_any()
        } else {
            visible
                .into_iter()
                .map(|post| view! { <PostCard post=post/> })
                .collect_view()
                .into_any()
        }
    };

    let tabs = FeedTab::ALL
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

    let contributors = TOP_CONTRIBUTORS
        .iter()
        .enumerate()
        .map(|(rank, &user)| {
            let following = move || state.with(|s| s.is_following(user));
            view! {
                <div class="contributor">
                    <span class="avatar">{avatar_fallback(user)}</span>
                    <div class="contributor__body">
                        <p class="contributor__name">{user}</p>
                        <p class="muted">{contributions(rank)} " contributions"</p>
                    </div>
                    <button
                        class="btn btn--ghost"
                        class:btn--active=following
                        on:click=move |_| {
                            state.update(|s| {
                                s.toggle_follow(user);
                            });
                        }
                    >
                        {move || if following() { "Following" } else { "Follow" }}
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="community">
            <div class="page-header">
                <div>
                    <h1>"Community"</h1>
                    <p class="muted">"Connect with fellow astronomy enthusiasts"</p>
                </div>
                <div class="page-header__actions">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search posts..."
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                    />
                    <button class="btn btn--primary" on:click=move |_| state.update(|s| s.create_open = true)>
                        "✎ New Post"
                    </button>
                </div>
            </div>

            <div class="community__layout">
                <div class="community__feed">
                    <div class="tabs">{tabs}</div>
                    {feed}
                </div>

                <aside class="community__sidebar">
                    <div class="card">
                        <h3 class="card__title">"Community Stats"</h3>
                        <div class="stats stats--grid">
                            {COMMUNITY_STATS
                                .iter()
                                .map(|&(value, label)| {
                                    view! {
                                        <div>
                                            <p class="stats__value">{value}</p>
                                            <p class="muted">{label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button class="btn btn--primary">"Join Community"</button>
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Popular Tags"</h3>
                        <div class="badges">
                            {POPULAR_TAGS
                                .iter()
                                .map(|&tag| {
                                    view! {
                                        <button class="badge badge--clickable" on:click=move |_| state.update(|s| s.query = tag.to_owned())>
                                            {tag}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Top Contributors"</h3>
                        {contributors}
                    </div>
                </aside>
            </div>

            <Show when=move || state.with(|s| s.create_open)>
                <CreatePostDialog on_close=Callback::new(move |()| state.update(|s| s.create_open = false))/>
            </Show>
        </div>
    }
}

#[component]
fn CreatePostDialog(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2 class="dialog__title">"Create New Post"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">"✕"</button>
                </header>
                <p class="muted">
                    "Share your astronomy experiences, questions, or discoveries with the community."
                </p>
                <label class="field">
                    "Title"
                    <input class="input" placeholder="Enter a descriptive title"/>
                </label>
                <label class="field">
                    "Content"
                    <textarea class="input" placeholder="Share your thoughts, questions, or observations..."></textarea>
                </label>
                <label class="field">
                    "Category"
                    <select class="input">
                        <option value="" disabled selected>"Select a category"</option>
                        {POST_CATEGORIES
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="field">
                    "Image (Optional)"
                    <div class="field__row">
                        <button class="btn btn--outline" type="button">"🖼 Upload Image"</button>
                        <span class="muted">"No file selected"</span>
                    </div>
                </div>
                <footer class="dialog__actions">
                    <button class="btn btn--outline" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Post"</button>
                </footer>
            </div>
        </div>
    }
}
