//! Space Bubble: is this person too close, or at an okay distance?
use rand::SeedableRng;
use rand::rngs::SmallRng;
use safesteps_game::{
    OutcomeNotifier, Proximity, QuizItem, QuizSession, SPACE_POOL, SessionConfig, SessionPhase,
    Settings, SettingsStore, SpaceScenario, VisualDistance,
};
use yew::prelude::*;

use crate::a11y;
use crate::audio::{WebNotifier, cancel_speech};
use crate::components::quiz::{CompletionScreen, FeedbackCard, LengthPicker, ProgressHeader};
use crate::dom;
use crate::storage::LocalSettingsStore;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_back: Callback<()>,
}

/// Bubble illustration with the other person placed by the visual hint.
fn bubble_scene(scenario: &SpaceScenario) -> Html {
    let person_class = match scenario.visual {
        VisualDistance::InsideBubble => "bubble-person bubble-person--inside",
        VisualDistance::NearBubble => "bubble-person bubble-person--near",
        VisualDistance::FarAway => "bubble-person bubble-person--far",
    };
    html! {
        <div class="bubble-scene">
            <div class="bubble-scene__ring">
                <span class="bubble-scene__me">{ "🧒" }</span>
            </div>
            <span class={person_class} title={scenario.person}>{ scenario.emoji }</span>
        </div>
    }
}

#[function_component(SpaceBubbleScreen)]
pub fn space_bubble_screen(props: &Props) -> Html {
    let session = use_state(QuizSession::<SpaceScenario>::new);
    let chosen_len = use_state(|| 5_usize);
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

    let on_select = {
        let chosen_len = chosen_len.clone();
        Callback::from(move |len: usize| chosen_len.set(len))
    };

    let on_start = {
        let session = session.clone();
        let chosen_len = chosen_len.clone();
        Callback::from(move |()| {
            let Ok(config) = SessionConfig::new(*chosen_len) else {
                return;
            };
            let mut next = (*session).clone();
            let mut rng = SmallRng::seed_from_u64(dom::rng_seed());
            if next.start(&SPACE_POOL, config, &mut rng).is_ok() {
                session.set(next);
            }
        })
    };

    let on_answer = {
        let session = session.clone();
        let settings = settings.clone();
        Callback::from(move |proximity: Proximity| {
            let mut next = (*session).clone();
            let Ok(outcome) = next.submit(proximity) else {
                return;
            };
            let notifier = WebNotifier;
            notifier.play_outcome(outcome.correct);
            if settings.voice_enabled
                && let Some(scenario) = next.current_item()
            {
                notifier.speak(scenario.explanation());
            }
            a11y::set_status(if outcome.correct { "Correct!" } else { "Not quite." });
            session.set(next);
        })
    };

    let on_continue = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            if next.acknowledge().is_ok() {
                cancel_speech();
                session.set(next);
            }
        })
    };

    let on_play_again = {
        let session = session.clone();
        Callback::from(move |()| {
            let mut next = (*session).clone();
            next.restart();
            session.set(next);
        })
    };

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |()| {
            cancel_speech();
            cb.emit(());
        })
    };

    let body = match session.phase() {
        SessionPhase::Setup => html! {
            <LengthPicker
                selected={*chosen_len}
                on_select={on_select}
                on_start={on_start}
                intro={Some(AttrValue::from("Everyone has a space bubble. Is this too close?"))}
            />
        },
        SessionPhase::AwaitingChoice | SessionPhase::Feedback => {
            let Some(scenario) = session.current_item().copied() else {
                return Html::default();
            };
            let in_feedback = session.phase() == SessionPhase::Feedback;
            html! {
                <>
                    { bubble_scene(&scenario) }
                    <p class="bubble-situation">{ scenario.situation }</p>
                    if in_feedback {
                        <FeedbackCard
                            correct={session.last_outcome().is_some_and(|o| o.correct)}
                            explanation={AttrValue::from(scenario.explanation().to_string())}
                            on_continue={on_continue}
                            is_last_round={session.current_index() + 1 == session.rounds()}
                        />
                    } else {
                        <div class="bubble-choices" role="group" aria-label="Too close or okay">
                            <button class="bubble-choice bubble-choice--too-close"
                                onclick={{
                                    let cb = on_answer.clone();
                                    Callback::from(move |_| cb.emit(Proximity::TooClose))
                                }}>
                                { "Too Close ✋" }
                            </button>
                            <button class="bubble-choice bubble-choice--okay"
                                onclick={{
                                    let cb = on_answer.clone();
                                    Callback::from(move |_| cb.emit(Proximity::Okay))
                                }}>
                                { "Okay 👍" }
                            </button>
                        </div>
                    }
                </>
            }
        }
        SessionPhase::Complete => {
            let Some(summary) = session.summary() else {
                return Html::default();
            };
            html! {
                <CompletionScreen
                    summary={summary}
                    on_play_again={on_play_again}
                    on_back={on_back.clone()}
                />
            }
        }
    };

    html! {
        <section class="game-screen space-bubble">
            <ProgressHeader
                title="Space Bubble"
                current={session.current_index()}
                total={session.rounds()}
                score={session.score()}
                show_progress={settings.show_progress && session.phase() != SessionPhase::Setup}
                on_back={on_back}
            />
            { body }
        </section>
    }
}
