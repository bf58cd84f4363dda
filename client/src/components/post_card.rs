//! A single community post: author line, body, tags, votes.

use leptos::prelude::*;

use crate::state::community::{Post, avatar_fallback};

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="card post-card">
            <header class="post-card__header">
                <span class="avatar" title=post.author>{avatar_fallback(post.author)}</span>
                <div>
                    <h3 class="post-card__title">{post.title}</h3>
                    <div class="post-card__meta">
                        <span>{post.author}</span>
                        <span>"•"</span>
                        <span>{post.timestamp}</span>
                    </div>
                </div>
                <button class="btn btn--ghost post-card__more" title="More">"⋯"</button>
            </header>

            <div class="post-card__body">
                <p>{post.content}</p>
                {post.image.map(|src| view! { <img class="post-card__image" src=src alt="Post image"/> })}
                <div class="post-card__tags">
                    {post.tags.iter().map(|&tag| view! { <span class="badge">{tag}</span> }).collect_view()}
                </div>
            </div>

            <footer class="post-card__footer">
                <div class="post-card__votes">
                    <button class="btn btn--ghost" title="Upvote">"▲"</button>
                    <span class="post-card__score">{post.net_score()}</span>
                    <button class="btn btn--ghost" title="Downvote">"▼"</button>
                </div>
                <button class="btn btn--ghost">"💬 " {post.comments} " Comments"</button>
                <button class="btn btn--ghost">"👍 Save"</button>
            </footer>
        </article>
    }
}
