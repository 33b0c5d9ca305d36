use rand::SeedableRng;
use rand::rngs::SmallRng;
use safesteps_game::{
    CHARACTER_POOL, Circle, DECISION_POOL, Proximity, QuizItem, QuizSession, SCENARIO_POOL,
    SESSION_LENGTHS, SORTING_POOL, SPACE_POOL, SessionConfig, SessionError, SessionPhase,
    Settings, StarTier, Visibility, draw_session,
};
use std::collections::HashSet;

#[test]
fn perfect_run_earns_three_stars() {
    // Answer every drawn character correctly across a five-round session.
    let mut rng = SmallRng::seed_from_u64(0xC1FF);
    let mut session = QuizSession::new();
    session
        .start(&CHARACTER_POOL, SessionConfig::new(5).unwrap(), &mut rng)
        .unwrap();

    while session.phase() == SessionPhase::AwaitingChoice {
        let truth = session.current_item().unwrap().circle;
        let outcome = session.submit(truth).unwrap();
        assert!(outcome.correct);
        session.acknowledge().unwrap();
    }

    assert_eq!(session.phase(), SessionPhase::Complete);
    assert_eq!(session.score(), 5);
    let summary = session.summary().unwrap();
    assert_eq!(summary.percentage, 100);
    assert_eq!(summary.tier, StarTier::Three);
    assert_eq!(summary.tier.stars(), 3);
}

#[test]
fn all_wrong_run_still_earns_one_star() {
    let mut rng = SmallRng::seed_from_u64(0xBEE);
    let mut session = QuizSession::new();
    session
        .start(&SCENARIO_POOL, SessionConfig::new(5).unwrap(), &mut rng)
        .unwrap();

    while session.phase() == SessionPhase::AwaitingChoice {
        let truth = session.current_item().unwrap().safe;
        let outcome = session.submit(!truth).unwrap();
        assert!(!outcome.correct);
        session.acknowledge().unwrap();
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 0);
    assert_eq!(summary.percentage, 0);
    assert_eq!(summary.tier, StarTier::One);
}

#[test]
fn score_changes_by_at_most_one_per_round() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut session = QuizSession::new();
    session
        .start(&SORTING_POOL, SessionConfig::new(10).unwrap(), &mut rng)
        .unwrap();

    let mut round = 0_usize;
    while session.phase() == SessionPhase::AwaitingChoice {
        let before = session.score();
        // Alternate right and wrong answers.
        let truth = session.current_item().unwrap().visibility;
        let answer = if round % 2 == 0 {
            truth
        } else {
            match truth {
                Visibility::Private => Visibility::Public,
                Visibility::Public => Visibility::Private,
            }
        };
        session.submit(answer).unwrap();
        let delta = session.score() - before;
        assert!(delta <= 1);
        session.acknowledge().unwrap();
        round += 1;
    }
    assert_eq!(session.score(), 5);
    assert!(session.score() <= session.rounds());
}

#[test]
fn repeated_submits_during_feedback_are_inert() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut session = QuizSession::new();
    session
        .start(&SPACE_POOL, SessionConfig::new(5).unwrap(), &mut rng)
        .unwrap();

    let truth = session.current_item().unwrap().proximity;
    session.submit(truth).unwrap();
    let score = session.score();
    for _ in 0..3 {
        assert_eq!(
            session.submit(Proximity::Okay),
            Err(SessionError::NotAwaitingChoice(SessionPhase::Feedback))
        );
    }
    assert_eq!(session.score(), score);
    assert_eq!(session.phase(), SessionPhase::Feedback);
}

#[test]
fn every_offered_length_draws_distinct_items() {
    for len in SESSION_LENGTHS {
        let mut rng = SmallRng::seed_from_u64(len as u64);
        let drawn = draw_session(&SCENARIO_POOL, SessionConfig::new(len).unwrap(), &mut rng);
        assert_eq!(drawn.len(), len);
        let ids: HashSet<u32> = drawn.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), len);
    }
}

#[test]
fn oversized_request_clamps_to_pool() {
    // Only five family members in this mini pool.
    let family: Vec<_> = CHARACTER_POOL
        .iter()
        .filter(|c| c.circle == Circle::Family)
        .take(5)
        .copied()
        .collect();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut session = QuizSession::new();
    session
        .start(&family, SessionConfig::new(15).unwrap(), &mut rng)
        .unwrap();
    assert_eq!(session.rounds(), 5);
}

#[test]
fn decision_answers_are_judged_by_choice_id() {
    let mut rng = SmallRng::seed_from_u64(31);
    let mut session = QuizSession::new();
    session
        .start(&DECISION_POOL, SessionConfig::new(5).unwrap(), &mut rng)
        .unwrap();

    while session.phase() == SessionPhase::AwaitingChoice {
        let scenario = *session.current_item().unwrap();
        let good = scenario.choices.iter().find(|c| c.correct).unwrap();
        let outcome = session.submit(good.id).unwrap();
        assert!(outcome.correct);
        assert!(!scenario.explanation().is_empty());
        session.acknowledge().unwrap();
    }
    assert_eq!(session.score(), 5);
    assert_eq!(session.summary().unwrap().tier, StarTier::Three);
}

#[test]
fn mixed_run_maps_to_expected_tier() {
    // 9 of 10 lands exactly on the three-star boundary.
    let mut rng = SmallRng::seed_from_u64(123);
    let mut session = QuizSession::new();
    session
        .start(&SCENARIO_POOL, SessionConfig::new(10).unwrap(), &mut rng)
        .unwrap();

    let mut round = 0_usize;
    while session.phase() == SessionPhase::AwaitingChoice {
        let truth = session.current_item().unwrap().safe;
        let answer = if round == 3 { !truth } else { truth };
        session.submit(answer).unwrap();
        session.acknowledge().unwrap();
        round += 1;
    }
    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 9);
    assert_eq!(summary.percentage, 90);
    assert_eq!(summary.tier, StarTier::Three);
}

#[test]
fn play_again_replays_from_a_fresh_draw() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = QuizSession::new();
    session
        .start(&SPACE_POOL, SessionConfig::new(5).unwrap(), &mut rng)
        .unwrap();
    while session.phase() != SessionPhase::Complete {
        let truth = session.current_item().unwrap().proximity;
        session.submit(truth).unwrap();
        session.acknowledge().unwrap();
    }
    assert!(session.summary().is_some());

    session.restart();
    assert_eq!(session.phase(), SessionPhase::Setup);
    assert!(session.summary().is_none());
    session
        .start(&SPACE_POOL, SessionConfig::new(10).unwrap(), &mut rng)
        .unwrap();
    assert_eq!(session.rounds(), 10);
    assert_eq!(session.score(), 0);
}

#[test]
fn settings_export_import_round_trip() {
    let mut settings = Settings::default();
    settings.voice_enabled = true;
    settings.show_hints = false;
    settings.time_limit = 15;
    let exported = settings.to_json().unwrap();
    let imported = Settings::from_json(&exported).unwrap();
    assert_eq!(imported, settings);
}
