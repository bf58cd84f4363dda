use super::*;

fn titles(posts: &[Post]) -> Vec<u32> {
    posts.iter().map(|p| p.id).collect()
}

// =============================================================
// Search
// =============================================================

#[test]
fn empty_query_returns_all_seeds_in_order() {
    let posts = seed_posts();
    assert_eq!(titles(&filter_posts(&posts, "")), vec![1, 2, 3, 4]);
}

#[test]
fn query_is_matched_literally_including_spaces() {
    let posts = seed_posts();
    let literal: Vec<u32> = posts
        .iter()
        .filter(|post| {
            let needle = "equipment ";
            post.title.to_lowercase().contains(needle)
                || post.content.to_lowercase().contains(needle)
                || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        })
        .map(|post| post.id)
        .collect();
    assert_eq!(titles(&filter_posts(&posts, "equipment ")), literal);
    assert!(!titles(&filter_posts(&posts, "equipment ")).contains(&3));
    assert_eq!(titles(&filter_posts(&posts, "   ")), Vec::<u32>::new());
}

#[test]
fn query_matches_title_case_insensitively() {
    let posts = seed_posts();
    assert_eq!(titles(&filter_posts(&posts, "ANDROMEDA")), vec![1]);
}

#[test]
fn query_matches_content() {
    let posts = seed_posts();
    assert_eq!(titles(&filter_posts(&posts, "dobsonian")), vec![3]);
}

#[test]
fn query_matches_any_tag() {
    let posts = seed_posts();
    assert_eq!(titles(&filter_posts(&posts, "astrophoto")), vec![1, 4]);
}

#[test]
fn query_without_match_is_empty() {
    let posts = seed_posts();
    assert!(filter_posts(&posts, "quasar").is_empty());
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn popular_orders_by_net_score_descending() {
    let posts = seed_posts();
    let state = CommunityState::default();
    assert_eq!(state.tab, FeedTab::Popular);
    // 125, 93, 86, 42
    assert_eq!(titles(&state.visible_posts(&posts)), vec![1, 2, 4, 3]);
}

#[test]
fn empty_following_feed_without_query_asks_to_follow() {
    let mut state = CommunityState { tab: FeedTab::Following, ..CommunityState::default() };
    assert!(state.visible_posts(&seed_posts()).is_empty());
    assert_eq!(state.empty_feed_message(), NO_FOLLOWED_POSTS);

    state.query = "nebula".to_owned();
    assert_eq!(state.empty_feed_message(), NO_MATCHING_POSTS);

    state.tab = FeedTab::Popular;
    assert_eq!(state.empty_feed_message(), NO_MATCHING_POSTS);
}

#[test]
fn popular_keeps_seed_order_on_ties() {
    let mut posts = seed_posts();
    // ids 3 and 4 both net 94
    posts[2].upvotes = 94;
    posts[3].upvotes = 94;
    posts[3].downvotes = 0;
    let state = CommunityState::default();
    assert_eq!(titles(&state.visible_posts(&posts)), vec![1, 3, 4, 2]);
}

#[test]
fn recent_keeps_seed_order() {
    let posts = seed_posts();
    let state = CommunityState { tab: FeedTab::Recent, ..CommunityState::default() };
    assert_eq!(titles(&state.visible_posts(&posts)), vec![1, 2, 3, 4]);
}

#[test]
fn following_is_empty_until_someone_is_followed() {
    let posts = seed_posts();
    let mut state = CommunityState { tab: FeedTab::Following, ..CommunityState::default() };
    assert!(state.visible_posts(&posts).is_empty());

    assert!(state.toggle_follow("StarGazer42"));
    assert_eq!(titles(&state.visible_posts(&posts)), vec![1]);

    assert!(!state.toggle_follow("StarGazer42"));
    assert!(state.visible_posts(&posts).is_empty());
}

#[test]
fn search_applies_within_tab() {
    let posts = seed_posts();
    let state = CommunityState { query: "solar".into(), ..CommunityState::default() };
    assert_eq!(titles(&state.visible_posts(&posts)), vec![4]);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn net_score_subtracts_downvotes() {
    let posts = seed_posts();
    assert_eq!(posts[0].net_score(), 125);
    assert_eq!(posts[2].net_score(), 42);
}

#[test]
fn avatar_fallback_takes_two_chars() {
    assert_eq!(avatar_fallback("StarGazer42"), "St");
    assert_eq!(avatar_fallback("Q"), "Q");
    assert_eq!(avatar_fallback(""), "");
}

#[test]
fn contributions_step_down_by_fifteen() {
    let counts: Vec<i64> = (0..TOP_CONTRIBUTORS.len()).map(contributions).collect();
    assert_eq!(counts, vec![100, 85, 70, 55, 40]);
}

#[test]
fn feed_tab_labels() {
    let labels: Vec<&str> = FeedTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Popular", "Recent", "Following"]);
}
