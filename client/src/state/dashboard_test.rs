use super::*;

#[test]
fn badge_classes_follow_kind() {
    assert_eq!(PreviewKind::Meteor.badge_class(), "badge--green");
    assert_eq!(PreviewKind::Eclipse.badge_class(), "badge--orange");
    assert_eq!(PreviewKind::Planetary.badge_class(), "badge--blue");
}

#[test]
fn rating_stars_repeat_and_clamp() {
    assert_eq!(rating_stars(4), "★★★★");
    assert_eq!(rating_stars(0), "");
    assert_eq!(rating_stars(9).chars().count(), usize::from(MAX_RATING));
}

#[test]
fn seeds_match_dashboard_layout() {
    assert_eq!(RECENT_LOGS.len(), 3);
    assert_eq!(UPCOMING.iter().map(|e| e.kind.label()).collect::<Vec<_>>(), vec!["Meteor", "Eclipse", "Planetary"]);
    assert_eq!(ACTIVITY[0].user, "CosmicExplorer");
    assert_eq!(PROFILE.badges.len(), 2);
}
