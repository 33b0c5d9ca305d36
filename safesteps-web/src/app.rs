//! Top-level application shell and screen switching.
use yew::prelude::*;

use crate::a11y;
use crate::audio::cancel_speech;
use crate::components::circle_sorter::CircleSorterScreen;
use crate::components::menu::MainMenu;
use crate::components::private_public::PrivatePublicScreen;
use crate::components::safety_scenarios::SafetyScenariosScreen;
use crate::components::settings_panel::SettingsPanel;
use crate::components::space_bubble::SpaceBubbleScreen;
use crate::components::what_would_you_do::WhatWouldYouDoScreen;

/// Every screen reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Circles,
    Sorting,
    Scenarios,
    Bubble,
    Decisions,
    Settings,
}

#[function_component(App)]
pub fn app() -> Html {
    let screen = use_state(|| Screen::Menu);

    let navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| {
            // Narration must not leak across screens.
            cancel_speech();
            screen.set(next);
        })
    };
    let go_home = navigate.reform(|()| Screen::Menu);

    let body = match *screen {
        Screen::Menu => html! { <MainMenu on_navigate={navigate.clone()} /> },
        Screen::Circles => html! { <CircleSorterScreen on_back={go_home.clone()} /> },
        Screen::Sorting => html! { <PrivatePublicScreen on_back={go_home.clone()} /> },
        Screen::Scenarios => html! { <SafetyScenariosScreen on_back={go_home.clone()} /> },
        Screen::Bubble => html! { <SpaceBubbleScreen on_back={go_home.clone()} /> },
        Screen::Decisions => html! { <WhatWouldYouDoScreen on_back={go_home.clone()} /> },
        Screen::Settings => html! { <SettingsPanel on_back={go_home.clone()} /> },
    };

    html! {
        <main id="main">
            <style>{ a11y::visible_focus_css() }</style>
            <div id="game-status" class="sr-only" aria-live="polite"></div>
            { body }
        </main>
    }
}
