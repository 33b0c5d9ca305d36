//! Main menu: one card per mini-game plus the parent-settings entry.
use once_cell::sync::Lazy;
use safesteps_game::{Settings, SettingsStore};
use yew::prelude::*;

use crate::app::Screen;
use crate::pointer::{GuidedPointer, PointerTarget};
use crate::storage::LocalSettingsStore;

struct GameCard {
    screen: Screen,
    title: &'static str,
    emoji: &'static str,
    blurb: &'static str,
}

static GAME_CARDS: Lazy<Vec<GameCard>> = Lazy::new(|| {
    vec![
        GameCard {
            screen: Screen::Circles,
            title: "Circle Sorter",
            emoji: "🎯",
            blurb: "Who belongs in which circle of trust?",
        },
        GameCard {
            screen: Screen::Sorting,
            title: "Private or Public?",
            emoji: "🔒",
            blurb: "Sort what's private from what's okay to share.",
        },
        GameCard {
            screen: Screen::Scenarios,
            title: "Safety Scenarios",
            emoji: "🛡️",
            blurb: "Is it safe, or not safe? You decide!",
        },
        GameCard {
            screen: Screen::Bubble,
            title: "Space Bubble",
            emoji: "🫧",
            blurb: "Learn about your personal space bubble.",
        },
        GameCard {
            screen: Screen::Decisions,
            title: "What Would You Do?",
            emoji: "💭",
            blurb: "Pick the best way to handle tricky moments.",
        },
    ]
});

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Screen>,
}

#[function_component(MainMenu)]
pub fn main_menu(props: &Props) -> Html {
    let settings = use_state(Settings::default);
    {
        let settings = settings.clone();
        use_effect_with((), move |()| {
            if let Ok(loaded) = LocalSettingsStore.load_settings() {
                settings.set(loaded);
            }
            || {}
        });
    }

    let hint_target = settings.show_hints.then(|| {
        PointerTarget::for_selector(".game-card:first-of-type").with_message("Tap to play!")
    });

    html! {
        <div class="main-menu">
            <header class="main-menu__header">
                <h1>{ "SafeSteps" }</h1>
                <p class="main-menu__tagline">{ "Little games for big safety skills" }</p>
            </header>
            <div class="main-menu__cards">
                { for GAME_CARDS.iter().map(|card| {
                    let screen = card.screen;
                    let cb = props.on_navigate.clone();
                    let onclick = Callback::from(move |_| cb.emit(screen));
                    html! {
                        <button class="game-card" {onclick}>
                            <span class="game-card__emoji">{ card.emoji }</span>
                            <span class="game-card__title">{ card.title }</span>
                            <span class="game-card__blurb">{ card.blurb }</span>
                        </button>
                    }
                }) }
            </div>
            <button class="settings-link" onclick={{
                let cb = props.on_navigate.clone();
                Callback::from(move |_| cb.emit(Screen::Settings))
            }}>
                { "⚙️ Parent Settings" }
            </button>
            <GuidedPointer target={hint_target} />
        </div>
    }
}
