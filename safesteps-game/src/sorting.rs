//! Private-vs-public content: what is okay for others to see or know.
use serde::{Deserialize, Serialize};

use crate::session::QuizItem;

/// Where an item belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Public => "Public",
        }
    }

    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Visibility::Private => "This is private. Keep it just for you and your trusted family.",
            Visibility::Public => "This is public. It's okay for other people to see or know this.",
        }
    }
}

/// Display grouping for the sorting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingCategory {
    Body,
    Info,
    Activity,
    Place,
}

/// One thing the player marks private or public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortingItem {
    pub id: u32,
    pub text: &'static str,
    pub emoji: &'static str,
    pub visibility: Visibility,
    pub category: SortingCategory,
}

impl QuizItem for SortingItem {
    type Answer = Visibility;

    fn is_correct(&self, answer: &Visibility) -> bool {
        *answer == self.visibility
    }

    fn explanation(&self) -> &str {
        self.visibility.explanation()
    }
}

pub const SORTING_POOL: [SortingItem; 20] = [
    SortingItem { id: 1, text: "Going to the bathroom", emoji: "🚽", visibility: Visibility::Private, category: SortingCategory::Activity },
    SortingItem { id: 2, text: "Your body under clothes", emoji: "👕", visibility: Visibility::Private, category: SortingCategory::Body },
    SortingItem { id: 3, text: "Your home address", emoji: "🏠", visibility: Visibility::Private, category: SortingCategory::Info },
    SortingItem { id: 4, text: "Your password", emoji: "🔑", visibility: Visibility::Private, category: SortingCategory::Info },
    SortingItem { id: 5, text: "Getting dressed", emoji: "👔", visibility: Visibility::Private, category: SortingCategory::Activity },
    SortingItem { id: 6, text: "Taking a bath", emoji: "🛁", visibility: Visibility::Private, category: SortingCategory::Activity },
    SortingItem { id: 7, text: "Your bedroom", emoji: "🛏️", visibility: Visibility::Private, category: SortingCategory::Place },
    SortingItem { id: 8, text: "Family secrets", emoji: "🤫", visibility: Visibility::Private, category: SortingCategory::Info },
    SortingItem { id: 9, text: "Changing clothes", emoji: "👗", visibility: Visibility::Private, category: SortingCategory::Activity },
    SortingItem { id: 10, text: "Your phone number", emoji: "📱", visibility: Visibility::Private, category: SortingCategory::Info },
    SortingItem { id: 11, text: "Waving hello", emoji: "👋", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 12, text: "Playing at the park", emoji: "🏞️", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 13, text: "Your first name", emoji: "📛", visibility: Visibility::Public, category: SortingCategory::Info },
    SortingItem { id: 14, text: "Eating lunch", emoji: "🍱", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 15, text: "Doing homework in class", emoji: "📚", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 16, text: "Playing with friends", emoji: "⚽", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 17, text: "Your favorite color", emoji: "🎨", visibility: Visibility::Public, category: SortingCategory::Info },
    SortingItem { id: 18, text: "Riding your bike", emoji: "🚲", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 19, text: "Singing a song", emoji: "🎵", visibility: Visibility::Public, category: SortingCategory::Activity },
    SortingItem { id: 20, text: "Drawing a picture", emoji: "✏️", visibility: Visibility::Public, category: SortingCategory::Activity },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = SORTING_POOL.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), SORTING_POOL.len());
    }

    #[test]
    fn pool_is_balanced() {
        let private = SORTING_POOL
            .iter()
            .filter(|i| i.visibility == Visibility::Private)
            .count();
        assert_eq!(private, 10);
    }

    #[test]
    fn judging_uses_exact_visibility_match() {
        let bath = SORTING_POOL.iter().find(|i| i.id == 6).unwrap();
        assert!(bath.is_correct(&Visibility::Private));
        assert!(!bath.is_correct(&Visibility::Public));
        assert!(!bath.explanation().is_empty());
    }
}
