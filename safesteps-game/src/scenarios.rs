//! Safe-or-unsafe judgment scenarios.
use serde::{Deserialize, Serialize};

use crate::session::QuizItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    Stranger,
    Touch,
    Online,
    Sharing,
    Permission,
}

/// A described situation the player judges safe or not safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyScenario {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub safe: bool,
    pub explanation: &'static str,
    pub category: ScenarioCategory,
}

impl QuizItem for SafetyScenario {
    /// `true` means the player judged the scenario safe.
    type Answer = bool;

    fn is_correct(&self, answer: &bool) -> bool {
        *answer == self.safe
    }

    fn explanation(&self) -> &str {
        self.explanation
    }
}

pub const SCENARIO_POOL: [SafetyScenario; 20] = [
    SafetyScenario {
        id: 1,
        title: "Lost Puppy Help",
        description: "A stranger asks you to help find their lost puppy in their car.",
        emoji: "🐕",
        safe: false,
        explanation: "Never go anywhere with a stranger! If someone needs help, they should ask an adult, not a child. Tell a parent or trusted adult.",
        category: ScenarioCategory::Stranger,
    },
    SafetyScenario {
        id: 2,
        title: "Stranger Offers Ride",
        description: "Someone you don't know offers to give you a ride home from school.",
        emoji: "🚗",
        safe: false,
        explanation: "Never accept rides from strangers! Only get in cars with people your parents have approved. Say \"No thank you\" and walk away.",
        category: ScenarioCategory::Stranger,
    },
    SafetyScenario {
        id: 3,
        title: "Online Photo Request",
        description: "Someone you met online asks you to send them a photo of yourself.",
        emoji: "📱",
        safe: false,
        explanation: "Never share photos with people you only know online! Tell a parent right away and block the person.",
        category: ScenarioCategory::Online,
    },
    SafetyScenario {
        id: 4,
        title: "Neighbor Invitation",
        description: "A neighbor you don't know well asks you to come inside their house alone.",
        emoji: "🏠",
        safe: false,
        explanation: "Only go to someone's house if your parents know and gave permission. Always check with your parents first.",
        category: ScenarioCategory::Stranger,
    },
    SafetyScenario {
        id: 5,
        title: "Free Toy from Stranger",
        description: "A stranger at the park offers you a toy or candy.",
        emoji: "🎁",
        safe: false,
        explanation: "Don't take things from strangers! Politely say \"No thank you\" and tell a parent or trusted adult.",
        category: ScenarioCategory::Stranger,
    },
    SafetyScenario {
        id: 6,
        title: "Secret Touch",
        description: "Someone tells you to keep a touch a secret and not tell your parents.",
        emoji: "🤫",
        safe: false,
        explanation: "Safe touches are never secrets! If someone asks you to keep a touch secret, tell a trusted adult right away.",
        category: ScenarioCategory::Touch,
    },
    SafetyScenario {
        id: 7,
        title: "Password Sharing",
        description: "Your friend asks for your tablet password so they can play games.",
        emoji: "🔐",
        safe: false,
        explanation: "Passwords should always stay private, even from friends! They are your personal security.",
        category: ScenarioCategory::Sharing,
    },
    SafetyScenario {
        id: 8,
        title: "Address Question",
        description: "Someone at the store asks where you live and what your address is.",
        emoji: "🏘️",
        safe: false,
        explanation: "Your address is private information! Never tell strangers or acquaintances where you live.",
        category: ScenarioCategory::Sharing,
    },
    SafetyScenario {
        id: 9,
        title: "Uncomfortable Touch Continues",
        description: "Someone keeps tickling you even after you said \"Stop\".",
        emoji: "✋",
        safe: false,
        explanation: "When you say \"Stop\", people must listen! This is not safe. Tell a trusted adult immediately.",
        category: ScenarioCategory::Touch,
    },
    SafetyScenario {
        id: 10,
        title: "Online Gamer Wants Info",
        description: "Someone you play games with online asks for your school name.",
        emoji: "🎮",
        safe: false,
        explanation: "Never share personal information with online friends! Keep your school, address, and full name private.",
        category: ScenarioCategory::Online,
    },
    SafetyScenario {
        id: 11,
        title: "Grandma Wants a Hug",
        description: "Your grandma asks if you want a hug hello.",
        emoji: "👵",
        safe: true,
        explanation: "Hugs from family members you know and trust are safe! You can always say yes or no to hugs.",
        category: ScenarioCategory::Touch,
    },
    SafetyScenario {
        id: 12,
        title: "Doctor Check-Up",
        description: "The doctor asks to check your heartbeat with a stethoscope while your parent is there.",
        emoji: "👨‍⚕️",
        safe: true,
        explanation: "Medical exams with a parent present are safe! Doctors need to check your body to keep you healthy.",
        category: ScenarioCategory::Permission,
    },
    SafetyScenario {
        id: 13,
        title: "High-Five at Game",
        description: "Your teammate gives you a high-five after scoring a goal.",
        emoji: "🙌",
        safe: true,
        explanation: "High-fives and celebrations with friends during games are safe and fun!",
        category: ScenarioCategory::Touch,
    },
    SafetyScenario {
        id: 14,
        title: "Holding Parent's Hand",
        description: "Dad holds your hand while crossing a busy parking lot.",
        emoji: "👨‍👧",
        safe: true,
        explanation: "Holding a parent's hand for safety is perfectly safe! Parents help keep you safe in busy places.",
        category: ScenarioCategory::Touch,
    },
    SafetyScenario {
        id: 15,
        title: "Waving to Mail Carrier",
        description: "You wave hello to the mail carrier from your front porch.",
        emoji: "👋",
        safe: true,
        explanation: "Being friendly from a distance is safe! Waving and saying \"hi\" is a nice way to be polite.",
        category: ScenarioCategory::Permission,
    },
    SafetyScenario {
        id: 16,
        title: "Sharing Feelings with Mom",
        description: "You tell your mom that you feel sad today.",
        emoji: "💙",
        safe: true,
        explanation: "Sharing your feelings with trusted family is safe and healthy! It's good to talk about how you feel.",
        category: ScenarioCategory::Sharing,
    },
    SafetyScenario {
        id: 17,
        title: "Teacher Asks Your Name",
        description: "Your teacher asks what your name is on the first day of school.",
        emoji: "👩‍🏫",
        safe: true,
        explanation: "Telling your teacher your name at school is safe! Teachers need to know your name to help you learn.",
        category: ScenarioCategory::Sharing,
    },
    SafetyScenario {
        id: 18,
        title: "Friend Asks Favorite Color",
        description: "A classmate asks what your favorite color is.",
        emoji: "🎨",
        safe: true,
        explanation: "Sharing your favorite things with friends is safe and fun! It helps you get to know each other.",
        category: ScenarioCategory::Sharing,
    },
    SafetyScenario {
        id: 19,
        title: "Nurse at School",
        description: "The school nurse checks your temperature when you feel sick.",
        emoji: "🌡️",
        safe: true,
        explanation: "School nurses help when you're sick! They are trusted adults who take care of students.",
        category: ScenarioCategory::Permission,
    },
    SafetyScenario {
        id: 20,
        title: "Playing Tag",
        description: "Friends gently tag you during a game of tag at recess.",
        emoji: "🏃",
        safe: true,
        explanation: "Gentle touch during games with friends is safe! Games like tag are fun when everyone plays nicely.",
        category: ScenarioCategory::Touch,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = SCENARIO_POOL.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SCENARIO_POOL.len());
    }

    #[test]
    fn pool_is_balanced() {
        let safe = SCENARIO_POOL.iter().filter(|s| s.safe).count();
        assert_eq!(safe, 10);
    }

    #[test]
    fn explanations_are_never_empty() {
        for s in &SCENARIO_POOL {
            assert!(!s.explanation().is_empty(), "scenario {} lacks an explanation", s.id);
        }
    }

    #[test]
    fn judging_matches_ground_truth() {
        let puppy = &SCENARIO_POOL[0];
        assert!(puppy.is_correct(&false));
        assert!(!puppy.is_correct(&true));
    }
}
