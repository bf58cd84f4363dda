//! Profile page: card, edit mode, observation/favourite tabs.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub member_since: &'static str,
    pub initials: &'static str,
}

/// A listed sky object with a one-line note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectEntry {
    pub name: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Observations,
    Favorites,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::Observations, ProfileTab::Favorites];

    pub fn label(self) -> &'static str {
        match self {
            Self::Observations => "Observations",
            Self::Favorites => "Favorites",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Observations => "Recent Observations",
            Self::Favorites => "Favorite Objects",
        }
    }

    pub fn entries(self) -> &'static [ObjectEntry] {
        match self {
            Self::Observations => &OBSERVATIONS,
            Self::Favorites => &FAVORITES,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub editing: bool,
}

impl ProfileState {
    pub fn start_edit(&mut self) {
        self.editing = true;
    }

    /// Nothing is persisted; saving just leaves edit mode.
    pub fn save(&mut self) {
        self.editing = false;
    }

    pub fn cancel(&mut self) {
        self.editing = false;
    }
}

pub const CARD: ProfileCard = ProfileCard {
    name: "Stella Astronomer",
    title: "Amateur Astronomer",
    location: "Star City",
    member_since: "January 2025",
    initials: "SA",
};

pub const OBSERVATIONS: [ObjectEntry; 2] = [
    ObjectEntry { name: "Orion Nebula (M42)", note: "Observed on June 10, 2025" },
    ObjectEntry { name: "Andromeda Galaxy (M31)", note: "Observed on June 5, 2025" },
];

pub const FAVORITES: [ObjectEntry; 2] = [
    ObjectEntry { name: "Pleiades (M45)", note: "Open Cluster in Taurus" },
    ObjectEntry { name: "Ring Nebula (M57)", note: "Planetary Nebula in Lyra" },
];
