//! "What would you do?" decision scenarios with two labeled choices.
use serde::{Deserialize, Serialize};

use crate::session::QuizItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionCategory {
    Boundaries,
    Assertiveness,
    GameRules,
    StrangerSafety,
    AskingPermission,
}

impl DecisionCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DecisionCategory::Boundaries => "Boundaries",
            DecisionCategory::Assertiveness => "Assertiveness",
            DecisionCategory::GameRules => "Game Rules",
            DecisionCategory::StrangerSafety => "Stranger Safety",
            DecisionCategory::AskingPermission => "Asking Permission",
        }
    }
}

/// One of the two actions offered for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionChoice {
    pub id: &'static str,
    pub action: &'static str,
    pub icon: &'static str,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionScenario {
    pub id: u32,
    pub emoji: &'static str,
    pub situation: &'static str,
    pub context: &'static str,
    pub category: DecisionCategory,
    pub choices: [DecisionChoice; 2],
    pub explanation: &'static str,
}

impl QuizItem for DecisionScenario {
    /// The id of the chosen [`DecisionChoice`].
    type Answer = &'static str;

    fn is_correct(&self, answer: &&'static str) -> bool {
        self.choices
            .iter()
            .any(|c| c.id == *answer && c.correct)
    }

    fn explanation(&self) -> &str {
        self.explanation
    }
}

pub const DECISION_POOL: [DecisionScenario; 15] = [
    DecisionScenario {
        id: 1,
        emoji: "🤗",
        situation: "You don't want a hug from Auntie",
        context: "Your aunt wants to give you a hug, but you don't feel like hugging right now.",
        category: DecisionCategory::Boundaries,
        choices: [
            DecisionChoice { id: "scream", action: "Scream and hit", icon: "😡", correct: false },
            DecisionChoice { id: "alternative", action: "Say \"No thank you, I want a high-five\"", icon: "✋", correct: true },
        ],
        explanation: "It's okay to say no to hugs! Offering another greeting like a high-five or wave is polite and respectful.",
    },
    DecisionScenario {
        id: 2,
        emoji: "🧸",
        situation: "A friend grabs your toy",
        context: "Your friend took your toy without asking and is playing with it.",
        category: DecisionCategory::Assertiveness,
        choices: [
            DecisionChoice { id: "words", action: "Use words: \"Please give that back\"", icon: "🗣️", correct: true },
            DecisionChoice { id: "push", action: "Push them", icon: "👊", correct: false },
        ],
        explanation: "Using calm, clear words is the best way to solve problems. Pushing can hurt someone and doesn't solve anything.",
    },
    DecisionScenario {
        id: 3,
        emoji: "🏃",
        situation: "You are playing tag and someone tags you gently",
        context: "You agreed to play tag on the playground, and a friend gently touches your arm to tag you.",
        category: DecisionCategory::GameRules,
        choices: [
            DecisionChoice { id: "game", action: "It's part of the game (Safe)", icon: "✅", correct: true },
            DecisionChoice { id: "yell", action: "Yell at them", icon: "😠", correct: false },
        ],
        explanation: "When you agree to play a game like tag, gentle touching is part of the game rules. That's different from unwanted touching!",
    },
    DecisionScenario {
        id: 4,
        emoji: "💇",
        situation: "A stranger touches your hair",
        context: "Someone you don't know reaches out and touches your hair without asking.",
        category: DecisionCategory::StrangerSafety,
        choices: [
            DecisionChoice { id: "smile", action: "Smile and do nothing", icon: "😊", correct: false },
            DecisionChoice { id: "stop", action: "Step back and say \"Stop\"", icon: "🛑", correct: true },
        ],
        explanation: "Your body belongs to you! It's okay to tell anyone - even adults - to stop if they touch you without permission.",
    },
    DecisionScenario {
        id: 5,
        emoji: "🧱",
        situation: "You want to play with a friend's blocks",
        context: "Your friend is building with blocks and you want to join in.",
        category: DecisionCategory::AskingPermission,
        choices: [
            DecisionChoice { id: "take", action: "Just take them", icon: "✊", correct: false },
            DecisionChoice { id: "ask", action: "Ask \"Can I play too?\"", icon: "🙋", correct: true },
        ],
        explanation: "Always ask before using someone else's things or joining their activity. Asking shows respect!",
    },
    DecisionScenario {
        id: 6,
        emoji: "🤭",
        situation: "Someone keeps tickling you even though you asked them to stop",
        context: "A friend thinks it's funny to tickle you, but you don't like it and already said stop.",
        category: DecisionCategory::Boundaries,
        choices: [
            DecisionChoice { id: "laugh", action: "Just laugh along", icon: "😅", correct: false },
            DecisionChoice { id: "firm", action: "Say firmly \"STOP. I don't like that.\"", icon: "✋", correct: true },
        ],
        explanation: "When someone doesn't stop after you ask nicely, use a firm voice. You have the right to say NO to any touch you don't like!",
    },
    DecisionScenario {
        id: 7,
        emoji: "🚶",
        situation: "A stranger asks you to help find their lost puppy",
        context: "An adult you don't know asks if you can help them look for their dog.",
        category: DecisionCategory::StrangerSafety,
        choices: [
            DecisionChoice { id: "help", action: "Go with them to help", icon: "🐕", correct: false },
            DecisionChoice { id: "no", action: "Say no and tell a trusted adult", icon: "🛡️", correct: true },
        ],
        explanation: "Adults should ask other adults for help, not children. If a stranger asks you for help, say no and tell your parent or teacher!",
    },
    DecisionScenario {
        id: 8,
        emoji: "👥",
        situation: "Someone cuts in front of you in line",
        context: "You were waiting patiently in line, and someone pushes ahead of you.",
        category: DecisionCategory::Assertiveness,
        choices: [
            DecisionChoice { id: "push", action: "Push them back", icon: "👊", correct: false },
            DecisionChoice { id: "speak", action: "Say \"Excuse me, I was here first\"", icon: "💬", correct: true },
        ],
        explanation: "Standing up for yourself with polite but firm words works best. Being assertive doesn't mean being mean!",
    },
    DecisionScenario {
        id: 9,
        emoji: "✏️",
        situation: "You want to borrow your friend's pencil",
        context: "Your pencil broke and your friend has a nice one you'd like to use.",
        category: DecisionCategory::AskingPermission,
        choices: [
            DecisionChoice { id: "grab", action: "Just take it off their desk", icon: "✊", correct: false },
            DecisionChoice { id: "ask", action: "Ask \"May I please borrow your pencil?\"", icon: "🙏", correct: true },
        ],
        explanation: "Asking permission shows respect for other people's belongings. They might say yes, or they might need it themselves!",
    },
    DecisionScenario {
        id: 10,
        emoji: "🎮",
        situation: "Your turn is over but you want to keep playing",
        context: "You've been playing a video game but it's your friend's turn now.",
        category: DecisionCategory::GameRules,
        choices: [
            DecisionChoice { id: "keep", action: "Keep playing and ignore them", icon: "🙅", correct: false },
            DecisionChoice { id: "share", action: "Hand them the controller and say \"Your turn!\"", icon: "🤝", correct: true },
        ],
        explanation: "Taking turns is fair and keeps friendships strong. You'll get another turn soon!",
    },
    DecisionScenario {
        id: 11,
        emoji: "🎒",
        situation: "Someone opens your backpack without asking",
        context: "A classmate starts looking through your backpack while you're away from your desk.",
        category: DecisionCategory::Boundaries,
        choices: [
            DecisionChoice { id: "hit", action: "Yell and grab it back roughly", icon: "😤", correct: false },
            DecisionChoice { id: "words", action: "Say \"That's my backpack. Please don't touch it.\"", icon: "🗣️", correct: true },
        ],
        explanation: "Your belongings are yours! You can be firm about your boundaries while still being respectful.",
    },
    DecisionScenario {
        id: 12,
        emoji: "🍬",
        situation: "A stranger offers you candy",
        context: "Someone you don't know offers you a piece of candy when your parents aren't around.",
        category: DecisionCategory::StrangerSafety,
        choices: [
            DecisionChoice { id: "take", action: "Take it and say thank you", icon: "😊", correct: false },
            DecisionChoice { id: "refuse", action: "Say \"No thank you\" and walk away", icon: "🚶", correct: true },
        ],
        explanation: "Never take food, toys, or gifts from strangers. It's a safety rule, even if they seem nice!",
    },
    DecisionScenario {
        id: 13,
        emoji: "😢",
        situation: "Your friend said something that hurt your feelings",
        context: "Your friend made a joke about you that made you feel sad.",
        category: DecisionCategory::Assertiveness,
        choices: [
            DecisionChoice { id: "silent", action: "Say nothing and stay sad", icon: "😔", correct: false },
            DecisionChoice { id: "express", action: "Say \"That hurt my feelings when you said that\"", icon: "💬", correct: true },
        ],
        explanation: "It's healthy to share your feelings! Real friends want to know if they hurt you so they can do better.",
    },
    DecisionScenario {
        id: 14,
        emoji: "⚽",
        situation: "Kids are playing soccer and you want to join",
        context: "Some kids are playing soccer at recess and it looks fun.",
        category: DecisionCategory::AskingPermission,
        choices: [
            DecisionChoice { id: "join", action: "Just run in and start playing", icon: "🏃", correct: false },
            DecisionChoice { id: "ask", action: "Ask \"Can I play with you?\"", icon: "😊", correct: true },
        ],
        explanation: "Asking to join is polite! The worst they can say is \"maybe next time,\" and that's okay too.",
    },
    DecisionScenario {
        id: 15,
        emoji: "🚪",
        situation: "You're in the bathroom and someone tries to open the door",
        context: "You're using the bathroom and you hear the doorknob turning.",
        category: DecisionCategory::Boundaries,
        choices: [
            DecisionChoice { id: "silent", action: "Stay quiet and hope they go away", icon: "🤫", correct: false },
            DecisionChoice { id: "speak", action: "Say \"Someone's in here!\"", icon: "🗣️", correct: true },
        ],
        explanation: "You have a right to privacy! It's okay to speak up so people know the bathroom is occupied.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = DECISION_POOL.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), DECISION_POOL.len());
    }

    #[test]
    fn exactly_one_correct_choice_per_scenario() {
        for s in &DECISION_POOL {
            let correct = s.choices.iter().filter(|c| c.correct).count();
            assert_eq!(correct, 1, "scenario {} must have one correct choice", s.id);
        }
    }

    #[test]
    fn judging_uses_choice_ids() {
        let auntie = &DECISION_POOL[0];
        assert!(auntie.is_correct(&"alternative"));
        assert!(!auntie.is_correct(&"scream"));
        assert!(!auntie.is_correct(&"missing"));
    }
}
