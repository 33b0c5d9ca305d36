//! Widgets shared by every mini-game screen: length picker, progress
//! header, star rating, feedback card and completion screen.
use safesteps_game::{SESSION_LENGTHS, SessionSummary, StarTier};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LengthPickerProps {
    pub selected: usize,
    pub on_select: Callback<usize>,
    pub on_start: Callback<()>,
    #[prop_or_default]
    pub intro: Option<AttrValue>,
}

/// Setup-phase chooser for the number of rounds.
#[function_component(LengthPicker)]
pub fn length_picker(props: &LengthPickerProps) -> Html {
    let start = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="length-picker">
            if let Some(intro) = &props.intro {
                <p class="length-picker__intro">{ intro.clone() }</p>
            }
            <h2>{ "How many rounds?" }</h2>
            <div class="length-picker__choices" role="group" aria-label="Session length">
                { for SESSION_LENGTHS.iter().map(|len| {
                    let len = *len;
                    let cb = props.on_select.clone();
                    let onclick = Callback::from(move |_| cb.emit(len));
                    let class = if len == props.selected {
                        "length-choice length-choice--selected"
                    } else {
                        "length-choice"
                    };
                    html! {
                        <button {class} {onclick} aria-pressed={(len == props.selected).to_string()}>
                            { len }
                        </button>
                    }
                }) }
            </div>
            <button class="start-button" onclick={start}>{ "Start!" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressHeaderProps {
    pub title: AttrValue,
    pub current: usize,
    pub total: usize,
    pub score: usize,
    #[prop_or(true)]
    pub show_progress: bool,
    pub on_back: Callback<()>,
}

/// Top bar with the back button, game title and round progress.
#[function_component(ProgressHeader)]
pub fn progress_header(props: &ProgressHeaderProps) -> Html {
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header class="progress-header">
            <button class="back-button" onclick={back} aria-label="Back to menu">{ "← Back" }</button>
            <h1>{ props.title.clone() }</h1>
            if props.show_progress {
                <div class="progress-header__counts">
                    <span class="round-count">
                        { format!("Question {} of {}", props.current + 1, props.total) }
                    </span>
                    <span class="score-count">{ format!("⭐ {}", props.score) }</span>
                </div>
            }
        </header>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StarRatingProps {
    pub tier: StarTier,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let earned = props.tier.stars();
    html! {
        <div class="star-rating" role="img" aria-label={format!("{earned} of 3 stars")}>
            { for (1..=3u8).map(|slot| {
                let class = if slot <= earned { "star star--earned" } else { "star star--empty" };
                html! { <span {class}>{ if slot <= earned { "⭐" } else { "☆" } }</span> }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackCardProps {
    pub correct: bool,
    pub explanation: AttrValue,
    pub on_continue: Callback<()>,
    pub is_last_round: bool,
}

/// Feedback-phase card showing the outcome and explanation.
#[function_component(FeedbackCard)]
pub fn feedback_card(props: &FeedbackCardProps) -> Html {
    let advance = {
        let cb = props.on_continue.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (class, headline) = if props.correct {
        ("feedback-card feedback-card--correct", "Correct! 🎉")
    } else {
        ("feedback-card feedback-card--incorrect", "Not quite!")
    };
    let label = if props.is_last_round { "See results" } else { "Next" };
    html! {
        <div {class}>
            <h2>{ headline }</h2>
            <p class="feedback-card__explanation">{ props.explanation.clone() }</p>
            <button class="continue-button" onclick={advance}>{ label }</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CompletionScreenProps {
    pub summary: SessionSummary,
    pub on_play_again: Callback<()>,
    pub on_back: Callback<()>,
}

/// End-of-session screen with score, stars and replay controls.
#[function_component(CompletionScreen)]
pub fn completion_screen(props: &CompletionScreenProps) -> Html {
    let play_again = {
        let cb = props.on_play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let summary = props.summary;
    let message = match summary.tier {
        StarTier::Three => "Amazing! You're a safety star!",
        StarTier::Two => "Great job! Keep practicing!",
        StarTier::One => "Good try! Let's practice some more!",
    };
    html! {
        <div class="completion-screen">
            <h2>{ "All done!" }</h2>
            <StarRating tier={summary.tier} />
            <p class="completion-screen__score">
                { format!("You got {} out of {} right ({}%)", summary.score, summary.rounds, summary.percentage) }
            </p>
            <p class="completion-screen__message">{ message }</p>
            <div class="completion-screen__actions">
                <button class="play-again-button" onclick={play_again}>{ "Play Again 🔄" }</button>
                <button class="home-button" onclick={back}>{ "Home 🏠" }</button>
            </div>
        </div>
    }
}
