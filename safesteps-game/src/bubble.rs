//! Personal-space scenarios: is this person too close?
use serde::{Deserialize, Serialize};

use crate::session::QuizItem;

/// The player's judgment of a situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Proximity {
    TooClose,
    Okay,
}

impl Proximity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Proximity::TooClose => "Too Close",
            Proximity::Okay => "Okay",
        }
    }
}

/// Where the illustration places the other person relative to the bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualDistance {
    InsideBubble,
    NearBubble,
    FarAway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceScenario {
    pub id: u32,
    pub emoji: &'static str,
    pub situation: &'static str,
    pub person: &'static str,
    pub proximity: Proximity,
    pub visual: VisualDistance,
    pub explanation: &'static str,
}

impl QuizItem for SpaceScenario {
    type Answer = Proximity;

    fn is_correct(&self, answer: &Proximity) -> bool {
        *answer == self.proximity
    }

    fn explanation(&self) -> &str {
        self.explanation
    }
}

pub const SPACE_POOL: [SpaceScenario; 18] = [
    SpaceScenario {
        id: 1,
        emoji: "🧑",
        situation: "A stranger standing inside your hula hoop",
        person: "Stranger",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Strangers should not stand this close to you. This is your personal space bubble!",
    },
    SpaceScenario {
        id: 2,
        emoji: "👦",
        situation: "A classmate leaning on your shoulder without asking",
        person: "Classmate",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Even friends and classmates should ask before touching you. Your body belongs to you!",
    },
    SpaceScenario {
        id: 3,
        emoji: "🧔",
        situation: "Someone you don't know well standing very close to you in line",
        person: "Acquaintance",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "People should give you space in line. It's okay to ask them to step back.",
    },
    SpaceScenario {
        id: 4,
        emoji: "👨",
        situation: "A stranger reaching to touch your hair",
        person: "Stranger",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Your hair and body are private. Strangers should not touch you without permission.",
    },
    SpaceScenario {
        id: 5,
        emoji: "👧",
        situation: "Someone looking over your shoulder at your paper without asking",
        person: "Classmate",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Your work is yours. People should respect your space and ask before looking.",
    },
    SpaceScenario {
        id: 6,
        emoji: "🧑‍🦱",
        situation: "A new kid sitting in your lap",
        person: "New acquaintance",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Your lap is your personal space! People need your permission to be this close.",
    },
    SpaceScenario {
        id: 7,
        emoji: "👨‍💼",
        situation: "A stranger at the store standing right next to you",
        person: "Stranger",
        proximity: Proximity::TooClose,
        visual: VisualDistance::InsideBubble,
        explanation: "Strangers should keep their distance. It's okay to move away if someone is too close.",
    },
    SpaceScenario {
        id: 8,
        emoji: "👫",
        situation: "Your friend sitting next to you on a bench",
        person: "Friend",
        proximity: Proximity::Okay,
        visual: VisualDistance::NearBubble,
        explanation: "Friends can sit near you! This is a comfortable distance for people you know and trust.",
    },
    SpaceScenario {
        id: 9,
        emoji: "👩‍🏫",
        situation: "Your teacher standing at the whiteboard",
        person: "Teacher",
        proximity: Proximity::Okay,
        visual: VisualDistance::FarAway,
        explanation: "Perfect! Teachers often stand at a comfortable distance when teaching the class.",
    },
    SpaceScenario {
        id: 10,
        emoji: "👩",
        situation: "Mom giving you a hug",
        person: "Mom",
        proximity: Proximity::Okay,
        visual: VisualDistance::InsideBubble,
        explanation: "Hugs from family you trust and love are okay! They are in your closest circle.",
    },
    SpaceScenario {
        id: 11,
        emoji: "👨‍⚕️",
        situation: "The doctor checking your heartbeat (with your parent there)",
        person: "Doctor",
        proximity: Proximity::Okay,
        visual: VisualDistance::InsideBubble,
        explanation: "Doctors need to be close to help you, but a parent should always be there too!",
    },
    SpaceScenario {
        id: 12,
        emoji: "👦",
        situation: "Your teammate giving you a high-five after a game",
        person: "Teammate",
        proximity: Proximity::Okay,
        visual: VisualDistance::NearBubble,
        explanation: "High-fives are great! Quick, friendly touches during games are usually okay.",
    },
    SpaceScenario {
        id: 13,
        emoji: "👨",
        situation: "Dad holding your hand in the parking lot",
        person: "Dad",
        proximity: Proximity::Okay,
        visual: VisualDistance::InsideBubble,
        explanation: "Family members you trust can hold your hand to keep you safe!",
    },
    SpaceScenario {
        id: 14,
        emoji: "📬",
        situation: "Waving to the mailman from the porch",
        person: "Mailman",
        proximity: Proximity::Okay,
        visual: VisualDistance::FarAway,
        explanation: "Perfect! Friendly waves from a distance are great. You're staying safe in your own space.",
    },
    SpaceScenario {
        id: 15,
        emoji: "👧",
        situation: "A classmate sitting at their own desk next to yours",
        person: "Classmate",
        proximity: Proximity::Okay,
        visual: VisualDistance::NearBubble,
        explanation: "Good! Each person has their own space. This is a comfortable classroom distance.",
    },
    SpaceScenario {
        id: 16,
        emoji: "👵",
        situation: "Grandma asking \"Can I have a hug?\"",
        person: "Grandma",
        proximity: Proximity::Okay,
        visual: VisualDistance::NearBubble,
        explanation: "Great! She asked first! You can say yes or no. Both answers are okay.",
    },
    SpaceScenario {
        id: 17,
        emoji: "⚽",
        situation: "Playing tag on the playground, someone gently tags your arm",
        person: "Friend",
        proximity: Proximity::Okay,
        visual: VisualDistance::InsideBubble,
        explanation: "This is part of the game! Quick, gentle touches during games you agreed to play are okay.",
    },
    SpaceScenario {
        id: 18,
        emoji: "👨‍🏫",
        situation: "The school nurse checking your temperature",
        person: "Nurse",
        proximity: Proximity::Okay,
        visual: VisualDistance::InsideBubble,
        explanation: "Healthcare helpers at school can check on you when you're not feeling well. That's their job!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = SPACE_POOL.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SPACE_POOL.len());
    }

    #[test]
    fn trusted_people_can_be_inside_the_bubble() {
        // Being inside the bubble is not automatically too close; consent
        // and trust decide, so the visual hint must stay independent.
        let mom = SPACE_POOL.iter().find(|s| s.id == 10).unwrap();
        assert_eq!(mom.visual, VisualDistance::InsideBubble);
        assert!(mom.is_correct(&Proximity::Okay));
    }

    #[test]
    fn explanations_are_never_empty() {
        for s in &SPACE_POOL {
            assert!(!s.explanation().is_empty());
        }
    }
}
