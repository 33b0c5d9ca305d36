use futures::executor::block_on;
use safesteps_game::{SessionSummary, StarTier};
use safesteps_web::components::circle_sorter::CircleSorterScreen;
use safesteps_web::components::menu::MainMenu;
use safesteps_web::components::quiz::{
    CompletionScreen, FeedbackCard, LengthPicker, ProgressHeader, StarRating,
};
use safesteps_web::components::safety_scenarios::SafetyScenariosScreen;
use safesteps_web::components::settings_panel::SettingsPanel;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn main_menu_lists_every_game_and_settings() {
    let props = safesteps_web::components::menu::Props {
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MainMenu>::with_props(props).render());
    assert!(html.contains("Circle Sorter"));
    assert!(html.contains("Private or Public?"));
    assert!(html.contains("Safety Scenarios"));
    assert!(html.contains("Space Bubble"));
    assert!(html.contains("What Would You Do?"));
    assert!(html.contains("Parent Settings"));
}

#[test]
fn length_picker_offers_the_three_session_lengths() {
    let props = safesteps_web::components::quiz::LengthPickerProps {
        selected: 10,
        on_select: Callback::noop(),
        on_start: Callback::noop(),
        intro: Some(AttrValue::from("Pick a length")),
    };
    let html = block_on(LocalServerRenderer::<LengthPicker>::with_props(props).render());
    assert_eq!(html.matches("aria-pressed").count(), 3);
    assert_eq!(html.matches("length-choice--selected").count(), 1);
    assert!(html.contains("Pick a length"));
    assert!(html.contains("start-button"));
}

#[test]
fn progress_header_shows_round_and_score() {
    let props = safesteps_web::components::quiz::ProgressHeaderProps {
        title: AttrValue::from("Space Bubble"),
        current: 2,
        total: 10,
        score: 2,
        show_progress: true,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProgressHeader>::with_props(props).render());
    assert!(html.contains("Space Bubble"));
    assert!(html.contains("Question 3 of 10"));

    let hidden = safesteps_web::components::quiz::ProgressHeaderProps {
        title: AttrValue::from("Space Bubble"),
        current: 2,
        total: 10,
        score: 2,
        show_progress: false,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProgressHeader>::with_props(hidden).render());
    assert!(!html.contains("Question 3 of 10"));
}

#[test]
fn star_rating_fills_the_earned_slots() {
    let props = safesteps_web::components::quiz::StarRatingProps {
        tier: StarTier::Two,
    };
    let html = block_on(LocalServerRenderer::<StarRating>::with_props(props).render());
    assert_eq!(html.matches("star--earned").count(), 2);
    assert_eq!(html.matches("star--empty").count(), 1);
}

#[test]
fn completion_screen_reports_score_and_stars() {
    let props = safesteps_web::components::quiz::CompletionScreenProps {
        summary: SessionSummary::new(9, 10),
        on_play_again: Callback::noop(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CompletionScreen>::with_props(props).render());
    assert!(html.contains("You got 9 out of 10 right (90%)"));
    assert!(html.contains("safety star"));
    assert!(html.contains("Play Again"));
}

#[test]
fn feedback_card_swaps_copy_on_outcome() {
    let correct = safesteps_web::components::quiz::FeedbackCardProps {
        correct: true,
        explanation: AttrValue::from("Nice work."),
        on_continue: Callback::noop(),
        is_last_round: false,
    };
    let html = block_on(LocalServerRenderer::<FeedbackCard>::with_props(correct).render());
    assert!(html.contains("feedback-card--correct"));
    assert!(html.contains("Nice work."));
    assert!(html.contains("Next"));

    let incorrect = safesteps_web::components::quiz::FeedbackCardProps {
        correct: false,
        explanation: AttrValue::from("Try again."),
        on_continue: Callback::noop(),
        is_last_round: true,
    };
    let html = block_on(LocalServerRenderer::<FeedbackCard>::with_props(incorrect).render());
    assert!(html.contains("feedback-card--incorrect"));
    assert!(html.contains("See results"));
}

#[test]
fn game_screens_open_on_the_length_picker() {
    let props = safesteps_web::components::circle_sorter::Props {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CircleSorterScreen>::with_props(props).render());
    assert!(html.contains("Circle Sorter"));
    assert!(html.contains("How many rounds?"));

    let props = safesteps_web::components::safety_scenarios::Props {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SafetyScenariosScreen>::with_props(props).render());
    assert!(html.contains("Safety Scenarios"));
    assert!(html.contains("How many rounds?"));
}

#[test]
fn settings_panel_renders_tabs_and_defaults() {
    let props = safesteps_web::components::settings_panel::Props {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SettingsPanel>::with_props(props).render());
    assert!(html.contains("Parent Settings"));
    assert!(html.contains("General"));
    assert!(html.contains("Photos"));
    assert!(html.contains("Accessibility"));
    assert!(html.contains("Advanced"));
    assert!(html.contains("Voice narration"));
}
