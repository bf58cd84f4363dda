//! Dashboard seed data: profile summary, logs, event previews, activity.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: &'static str,
    pub joined: &'static str,
    pub initials: &'static str,
    pub badges: &'static [&'static str],
    pub observations: u32,
    pub events_attended: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub title: &'static str,
    pub date: &'static str,
    pub rating: u8,
}

/// Kind of an upcoming-event preview; drives the badge colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Meteor,
    Eclipse,
    Planetary,
}

impl PreviewKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Meteor => "Meteor",
            Self::Eclipse => "Eclipse",
            Self::Planetary => "Planetary",
        }
    }

    /// Badge modifier: meteor green, eclipse orange, anything else blue.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Meteor => "badge--green",
            Self::Eclipse => "badge--orange",
            Self::Planetary => "badge--blue",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventPreview {
    pub title: &'static str,
    pub date: &'static str,
    pub kind: PreviewKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub user: &'static str,
    pub action: &'static str,
    pub content: &'static str,
    pub time: &'static str,
    pub likes: u32,
}

/// Highest possible log rating.
pub const MAX_RATING: u8 = 5;

/// Filled-star string for a rating, clamped to [`MAX_RATING`].
pub fn rating_stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(MAX_RATING)))
}

pub const PROFILE: ProfileSummary = ProfileSummary {
    name: "Stella Astronomer",
    joined: "Joined January 2023",
    initials: "UN",
    badges: &["Stargazer", "Lunar Observer"],
    observations: 24,
    events_attended: 12,
};

pub const RECENT_LOGS: [LogEntry; 3] = [
    LogEntry { title: "Orion Nebula Observation", date: "Mar 15, 2023", rating: 5 },
    LogEntry { title: "Jupiter and Its Moons", date: "Feb 28, 2023", rating: 4 },
    LogEntry { title: "Andromeda Galaxy", date: "Feb 10, 2023", rating: 5 },
];

pub const UPCOMING: [EventPreview; 3] = [
    EventPreview { title: "Meteor Shower", date: "Apr 22, 2023", kind: PreviewKind::Meteor },
    EventPreview { title: "Solar Eclipse", date: "May 15, 2023", kind: PreviewKind::Eclipse },
    EventPreview { title: "Mars Opposition", date: "Jun 8, 2023", kind: PreviewKind::Planetary },
];

pub const ACTIVITY: [Activity; 2] = [
    Activity {
        user: "CosmicExplorer",
        action: "posted",
        content: "Amazing view of Saturn's rings last night!",
        time: "2 hours ago",
        likes: 24,
    },
    Activity {
        user: "StarGazer42",
        action: "shared",
        content: "Tips for photographing the Milky Way",
        time: "5 hours ago",
        likes: 18,
    },
];
