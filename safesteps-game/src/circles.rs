//! Relationship-circles content: who belongs in which circle of trust.
use serde::{Deserialize, Serialize};

use crate::session::QuizItem;

/// The six circles of trust, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Circle {
    Me,
    Family,
    Friends,
    Acquaintances,
    Helpers,
    Strangers,
}

impl Circle {
    pub const ALL: [Circle; 6] = [
        Circle::Me,
        Circle::Family,
        Circle::Friends,
        Circle::Acquaintances,
        Circle::Helpers,
        Circle::Strangers,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Circle::Me => "Me",
            Circle::Family => "Family",
            Circle::Friends => "Friends",
            Circle::Acquaintances => "Acquaintances",
            Circle::Helpers => "Helpers",
            Circle::Strangers => "Strangers",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Circle::Me => "Just you!",
            Circle::Family => "People who live with you",
            Circle::Friends => "People you play with",
            Circle::Acquaintances => "People you know a little",
            Circle::Helpers => "People who help us",
            Circle::Strangers => "People you don't know",
        }
    }
}

/// One person (or pet) the player sorts into a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: &'static str,
    pub emoji: &'static str,
    pub circle: Circle,
}

impl QuizItem for Character {
    type Answer = Circle;

    fn is_correct(&self, answer: &Circle) -> bool {
        *answer == self.circle
    }

    fn explanation(&self) -> &str {
        self.circle.description()
    }
}

pub const CHARACTER_POOL: [Character; 31] = [
    Character { id: 1, name: "Mom", emoji: "👩", circle: Circle::Family },
    Character { id: 2, name: "Dad", emoji: "👨", circle: Circle::Family },
    Character { id: 3, name: "Grandma", emoji: "👵", circle: Circle::Family },
    Character { id: 4, name: "Grandpa", emoji: "👴", circle: Circle::Family },
    Character { id: 5, name: "Sister", emoji: "👧", circle: Circle::Family },
    Character { id: 6, name: "Brother", emoji: "👦", circle: Circle::Family },
    Character { id: 7, name: "Cousin", emoji: "👧", circle: Circle::Family },
    Character { id: 8, name: "Best Friend", emoji: "👦", circle: Circle::Friends },
    Character { id: 9, name: "Classmate", emoji: "👧", circle: Circle::Friends },
    Character { id: 10, name: "School Friend", emoji: "👦", circle: Circle::Friends },
    Character { id: 11, name: "Teammate", emoji: "🏃", circle: Circle::Friends },
    Character { id: 12, name: "Playground Buddy", emoji: "🎮", circle: Circle::Friends },
    Character { id: 13, name: "Neighbor", emoji: "👨‍🦳", circle: Circle::Acquaintances },
    Character { id: 14, name: "Cashier", emoji: "👨‍💼", circle: Circle::Acquaintances },
    Character { id: 15, name: "Librarian", emoji: "👩‍💼", circle: Circle::Acquaintances },
    Character { id: 16, name: "Babysitter", emoji: "👩", circle: Circle::Acquaintances },
    Character { id: 17, name: "Bus Driver", emoji: "👨‍✈️", circle: Circle::Acquaintances },
    Character { id: 18, name: "Mail Carrier", emoji: "📬", circle: Circle::Acquaintances },
    Character { id: 19, name: "Teacher", emoji: "👨‍🏫", circle: Circle::Helpers },
    Character { id: 20, name: "Doctor", emoji: "👨‍⚕️", circle: Circle::Helpers },
    Character { id: 21, name: "Police Officer", emoji: "👮", circle: Circle::Helpers },
    Character { id: 22, name: "Firefighter", emoji: "👨‍🚒", circle: Circle::Helpers },
    Character { id: 23, name: "Dentist", emoji: "🦷", circle: Circle::Helpers },
    Character { id: 24, name: "Nurse", emoji: "👩‍⚕️", circle: Circle::Helpers },
    Character { id: 25, name: "Coach", emoji: "⚽", circle: Circle::Helpers },
    Character { id: 26, name: "Stranger", emoji: "🧔", circle: Circle::Strangers },
    Character { id: 27, name: "Person at Park", emoji: "🧑", circle: Circle::Strangers },
    Character { id: 28, name: "Unknown Person", emoji: "🕴️", circle: Circle::Strangers },
    Character { id: 29, name: "Online Stranger", emoji: "💻", circle: Circle::Strangers },
    Character { id: 30, name: "Pet", emoji: "🐕", circle: Circle::Me },
    Character { id: 31, name: "Aunt", emoji: "👩‍🦰", circle: Circle::Family },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn character_ids_are_unique() {
        let ids: HashSet<u32> = CHARACTER_POOL.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHARACTER_POOL.len());
    }

    #[test]
    fn every_circle_is_represented() {
        for circle in Circle::ALL {
            assert!(
                CHARACTER_POOL.iter().any(|c| c.circle == circle),
                "no character for {}",
                circle.label()
            );
        }
    }

    #[test]
    fn judging_uses_exact_circle_match() {
        let mom = &CHARACTER_POOL[0];
        assert!(mom.is_correct(&Circle::Family));
        assert!(!mom.is_correct(&Circle::Friends));
        assert!(!mom.explanation().is_empty());
    }
}
