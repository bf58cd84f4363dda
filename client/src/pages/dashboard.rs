//! Dashboard page: profile summary, recent logs, upcoming events, activity.
//!
//! All content is seed data from `state::dashboard`; the page has no state.

use leptos::prelude::*;

use crate::state::community::avatar_fallback;
use crate::state::dashboard::{ACTIVITY, PROFILE, RECENT_LOGS, UPCOMING, rating_stars};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let logs = RECENT_LOGS
        .iter()
        .map(|log| {
            view! {
                <div class="list-row">
                    <div>
                        <h4>{log.title}</h4>
                        <p class="muted">{log.date}</p>
                    </div>
                    <span class="rating" title=format!("{} / 5", log.rating)>{rating_stars(log.rating)}</span>
                </div>
            }
        })
        .collect_view();

    let upcoming = UPCOMING
        .iter()
        .map(|event| {
            view! {
                <div class="list-row">
                    <div>
                        <h4>{event.title}</h4>
                        <p class="muted">{event.date}</p>
                    </div>
                    <span class=format!("badge {}", event.kind.badge_class())>{event.kind.label()}</span>
                </div>
            }
        })
        .collect_view();

    let activity = ACTIVITY
        .iter()
        .map(|item| {
            view! {
                <div class="card activity">
                    <span class="avatar">{avatar_fallback(item.user)}</span>
                    <div class="activity__body">
                        <div>
                            <span class="activity__user">{item.user}</span>
                            " "
                            <span class="muted">{item.action}</span>
                        </div>
                        <p>{item.content}</p>
                        <div class="activity__meta">
                            <span>{item.time}</span>
                            <span>"★ " {item.likes} " likes"</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="muted">"Welcome back, Astronomer!"</p>
                </div>
                <div class="page-header__actions">
                    <a class="btn btn--outline" href="/map">"🧭 Explore Star Map"</a>
                    <a class="btn btn--primary" href="/community">"👥 View Community"</a>
                </div>
            </div>

            <div class="dashboard__grid">
                <div class="card">
                    <div class="card__header">
                        <span class="avatar avatar--lg">{PROFILE.initials}</span>
                        <div>
                            <h3 class="card__title">{PROFILE.name}</h3>
                            <p class="muted">{PROFILE.joined}</p>
                            <div class="badges">
                                {PROFILE.badges.iter().map(|&b| view! { <span class="badge">{b}</span> }).collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="stats">
                        <div>
                            <p class="stats__value">{PROFILE.observations}</p>
                            <p class="muted">"Observations"</p>
                        </div>
                        <div>
                            <p class="stats__value">{PROFILE.events_attended}</p>
                            <p class="muted">"Events Attended"</p>
                        </div>
                    </div>
                    <a class="btn btn--ghost" href="/profile">"View Full Profile"</a>
                </div>

                <div class="card">
                    <h3 class="card__title">"★ Recent Stargazing Logs"</h3>
                    {logs}
                    <a class="btn btn--ghost" href="/profile">"View All Logs →"</a>
                </div>

                <div class="card">
                    <h3 class="card__title">"📅 Upcoming Events"</h3>
                    {upcoming}
                    <a class="btn btn--ghost" href="/events">"View All Events →"</a>
                </div>
            </div>

            <section class="dashboard__activity">
                <h2>"Recent Community Activity"</h2>
                {activity}
            </section>
        </div>
    }
}
