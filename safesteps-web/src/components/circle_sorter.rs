//! Circle Sorter: drop each person into the right circle of trust.
use rand::SeedableRng;
use rand::rngs::SmallRng;
use safesteps_game::{
    CHARACTER_POOL, Character, Circle, OutcomeNotifier, QuizItem, QuizSession, SessionConfig,
    SessionPhase, Settings, SettingsStore,
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

#[function_component(CircleSorterScreen)]
pub fn circle_sorter_screen(props: &Props) -> Html {
    let session = use_state(QuizSession::<Character>::new);
    let chosen_len = use_state(|| 10_usize);
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
            if next.start(&CHARACTER_POOL, config, &mut rng).is_ok() {
                session.set(next);
            }
        })
    };

    let on_answer = {
        let session = session.clone();
        let settings = settings.clone();
        Callback::from(move |circle: Circle| {
            let mut next = (*session).clone();
            let Ok(outcome) = next.submit(circle) else {
                return;
            };
            let notifier = WebNotifier;
            notifier.play_outcome(outcome.correct);
            if settings.voice_enabled
                && let Some(item) = next.current_item()
            {
                notifier.speak(item.explanation());
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
                intro={Some(AttrValue::from("Who belongs in which circle? Sort each person!"))}
            />
        },
        SessionPhase::AwaitingChoice | SessionPhase::Feedback => {
            let Some(character) = session.current_item().copied() else {
                return Html::default();
            };
            let in_feedback = session.phase() == SessionPhase::Feedback;
            html! {
                <>
                    <div class="character-card">
                        <span class="character-card__emoji">{ character.emoji }</span>
                        <span class="character-card__name">{ character.name }</span>
                    </div>
                    if in_feedback {
                        <FeedbackCard
                            correct={session.last_outcome().is_some_and(|o| o.correct)}
                            explanation={AttrValue::from(format!(
                                "{} belongs in {}: {}",
                                character.name,
                                character.circle.label(),
                                character.circle.description()
                            ))}
                            on_continue={on_continue}
                            is_last_round={session.current_index() + 1 == session.rounds()}
                        />
                    } else {
                        <div class="circle-targets" role="group" aria-label="Circles of trust">
                            { for Circle::ALL.iter().map(|circle| {
                                let circle = *circle;
                                let cb = on_answer.clone();
                                let onclick = Callback::from(move |_| cb.emit(circle));
                                html! {
                                    <button class={format!("circle-target circle-target--{}", circle.label().to_lowercase())} {onclick}>
                                        <span class="circle-target__label">{ circle.label() }</span>
                                        <span class="circle-target__hint">{ circle.description() }</span>
                                    </button>
                                }
                            }) }
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
        <section class="game-screen circle-sorter">
            <ProgressHeader
                title="Circle Sorter"
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
