//! Community feed: seed posts, search, tab ordering, follows.
//!
//! DESIGN
//! ======
//! Posts are fixed seed data. The page never mutates them; it only derives
//! the visible list from the search query, the active tab, and the set of
//! followed authors.

use std::collections::BTreeSet;

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

/// A community post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub avatar: &'static str,
    pub timestamp: &'static str,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: u32,
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
}

impl Post {
    /// Upvotes minus downvotes.
    pub fn net_score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    /// Case-insensitive match on title, content, or any tag.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Feed ordering tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedTab {
    #[default]
    Popular,
    Recent,
    Following,
}

impl FeedTab {
    pub const ALL: [FeedTab; 3] = [FeedTab::Popular, FeedTab::Recent, FeedTab::Following];

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Recent => "Recent",
            Self::Following => "Following",
        }
    }
}

pub const NO_MATCHING_POSTS: &str = "No posts found matching your search";
pub const NO_FOLLOWED_POSTS: &str = "Follow a top contributor to see their posts here";

/// Community page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunityState {
    pub query: String,
    pub tab: FeedTab,
    pub following: BTreeSet<String>,
    pub create_open: bool,
}

impl CommunityState {
    /// Follow `author` if not followed, otherwise unfollow. Returns the new state.
    pub fn toggle_follow(&mut self, author: &str) -> bool {
        if self.following.remove(author) {
            false
        } else {
            self.following.insert(author.to_owned());
            true
        }
    }

    pub fn is_following(&self, author: &str) -> bool {
        self.following.contains(author)
    }

    /// Posts to render for the current query, tab, and follows.
    pub fn visible_posts(&self, posts: &[Post]) -> Vec<Post> {
        let mut visible = filter_posts(posts, &self.query);
        match self.tab {
            // Stable sort keeps seed order for equal scores.
            FeedTab::Popular => visible.sort_by_key(|post| std::cmp::Reverse(post.net_score())),
            FeedTab::Recent => {}
            FeedTab::Following => visible.retain(|post| self.following.contains(post.author)),
        }
        visible
    }

    /// Text for an empty feed. The search wording only applies while a query is set.
    pub fn empty_feed_message(&self) -> &'static str {
        if self.tab == FeedTab::Following && self.query.is_empty() { NO_FOLLOWED_POSTS } else { NO_MATCHING_POSTS }
    }
}

/// Posts matching `query`, in seed order. An empty query returns all posts.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    posts.iter().filter(|post| post.matches(query)).cloned().collect()
}

/// Two-character avatar fallback from the author name.
pub fn avatar_fallback(author: &str) -> String {
    author.chars().take(2).collect()
}

// =============================================================================
// SEED DATA
// =============================================================================

const PLACEHOLDER: &str = "/placeholder.svg";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// The four seed posts, newest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Captured the Andromeda Galaxy last night!",
            content: "After months of preparation, I finally got a clear shot of the Andromeda Galaxy (M31). Used my 8\" telescope with a DSLR camera. The conditions were perfect with no moon and clear skies.",
            author: "StarGazer42",
            avatar: PLACEHOLDER,
            timestamp: "2 hours ago",
            upvotes: 128,
            downvotes: 3,
            comments: 24,
            image: Some(PLACEHOLDER_IMAGE),
            tags: &["Astrophotography", "Galaxy"],
        },
        Post {
            id: 2,
            title: "Tips for observing the upcoming meteor shower",
            content: "The Perseids are coming up next month! Here are my top tips for getting the best viewing experience: 1) Find a dark location away from city lights, 2) Bring a comfortable chair or blanket, 3) Allow your eyes at least 20 minutes to adjust to the darkness, 4) Look toward the northeast after midnight for best results.",
            author: "MeteorHunter",
            avatar: PLACEHOLDER,
            timestamp: "Yesterday",
            upvotes: 95,
            downvotes: 2,
            comments: 18,
            image: None,
            tags: &["Meteor Shower", "Observation Tips"],
        },
        Post {
            id: 3,
            title: "Question about telescope eyepieces",
            content: "I'm new to astronomy and just got my first telescope (8\" Dobsonian). It came with 25mm and 10mm eyepieces, but I'm looking to expand my collection. What would be the next best eyepiece to add to my kit? Looking for something that would give me good planetary views.",
            author: "NewbieStargazer",
            avatar: PLACEHOLDER,
            timestamp: "2 days ago",
            upvotes: 42,
            downvotes: 0,
            comments: 31,
            image: None,
            tags: &["Equipment", "Question"],
        },
        Post {
            id: 4,
            title: "Solar prominence captured during yesterday's observation",
            content: "Check out this massive solar prominence I captured yesterday using my solar telescope! The Sun has been quite active lately, and this prominence extended almost 50,000 km from the surface. Always remember to use proper solar filters when observing the Sun!",
            author: "SolarObserver",
            avatar: PLACEHOLDER,
            timestamp: "3 days ago",
            upvotes: 87,
            downvotes: 1,
            comments: 12,
            image: Some(PLACEHOLDER_IMAGE),
            tags: &["Solar", "Astrophotography"],
        },
    ]
}

/// Sidebar counters as `(value, label)`.
pub const COMMUNITY_STATS: [(&str, &str); 4] = [("12.4k", "Members"), ("1.2k", "Online"), ("45.6k", "Posts"), ("324", "Today")];

pub const POPULAR_TAGS: [&str; 10] = [
    "Astrophotography",
    "Telescope",
    "Planets",
    "Galaxies",
    "Meteor Shower",
    "Solar",
    "Equipment",
    "Beginner",
    "Deep Sky",
    "Observation",
];

pub const TOP_CONTRIBUTORS: [&str; 5] = ["CosmicExplorer", "GalaxyHunter", "StarGazer42", "AstroEnthusiast", "NebulaObserver"];

/// Contribution count shown for the contributor at `rank` (0-based).
pub fn contributions(rank: usize) -> i64 {
    let rank = i64::try_from(rank).unwrap_or(i64::MAX / 15);
    100 - rank * 15
}

/// Categories offered by the create-post dialog.
pub const POST_CATEGORIES: [(&str, &str); 6] = [
    ("observation", "Observation"),
    ("astrophotography", "Astrophotography"),
    ("question", "Question"),
    ("equipment", "Equipment"),
    ("event", "Event"),
    ("other", "Other"),
];
