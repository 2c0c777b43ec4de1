//! Input handling and per-tick orchestration for a session.

use super::types::{Phase, Session, SessionInput, TickOutcome};
use crate::collision::{self, Collision};
use crate::ranking::{self, RankingEntry, RankingStore};
use crate::sensor::GestureSensor;
use rand::Rng;

fn set_phase(session: &mut Session, phase: Phase) {
    if session.phase != phase {
        log::info!("Session {:?} -> {:?}", session.phase, phase);
        session.phase = phase;
    }
}

/// Reset and enter Playing, then try to attach the gesture sensor.
fn start_run(session: &mut Session, sensor: &mut dyn GestureSensor) {
    session.reset();
    set_phase(session, Phase::Playing);
    match sensor.acquire(session.sensor_index) {
        Ok(()) => log::info!("Gesture sensor {} acquired", session.sensor_index),
        Err(e) => log::warn!(
            "Gesture sensor {} unavailable, using jump control: {}",
            session.sensor_index,
            e
        ),
    }
}

/// Process a player command for the current phase.
pub fn process_input(session: &mut Session, input: SessionInput, sensor: &mut dyn GestureSensor) {
    match session.phase {
        Phase::Lobby => match input {
            SessionInput::Char(c) => {
                if c.is_ascii_alphanumeric()
                    && session.player_id.chars().count() < session.config.max_id_len
                {
                    session.player_id.push(c.to_ascii_uppercase());
                }
            }
            SessionInput::Backspace => {
                session.player_id.pop();
            }
            SessionInput::Confirm => {
                if session.id_complete() {
                    log::info!("Player {} starting a run", session.player_id);
                    start_run(session, sensor);
                }
            }
            _ => {}
        },
        Phase::Playing => match input {
            SessionInput::Jump => {
                let acquired = session.gesture_acquired();
                session.actor.apply_impulse(acquired);
            }
            SessionInput::Abandon => {
                sensor.release();
                set_phase(session, Phase::Lobby);
            }
            _ => {}
        },
        Phase::GameOver => match input {
            SessionInput::Restart => start_run(session, sensor),
            SessionInput::Abandon => {
                session.player_id.clear();
                set_phase(session, Phase::Lobby);
            }
            _ => {}
        },
    }
}

/// Write the finished run to the rankings, once per run.
///
/// Returns the rank the first time it is called after a run ends and `None`
/// on every later call until the next `reset`.
pub fn persist_score(session: &mut Session, store: &mut dyn RankingStore) -> Option<usize> {
    if session.score_persisted {
        return None;
    }
    session.score_persisted = true;

    let entry = RankingEntry::now(&session.player_id, session.score);
    let (table, rank) = ranking::record_score(store, entry);
    session.rankings = table;
    session.last_rank = rank;
    rank
}

fn end_run(
    session: &mut Session,
    cause: Collision,
    sensor: &mut dyn GestureSensor,
    store: &mut dyn RankingStore,
) {
    log::info!(
        "Game over for {}: {} (score {}, {} ticks)",
        session.player_id,
        cause.describe(),
        session.score,
        session.tick_count
    );
    session.last_collision = Some(cause);
    set_phase(session, Phase::GameOver);
    sensor.release();
    persist_score(session, store);
}

/// Advance the session by one fixed tick. Only Playing does any work.
pub fn process_tick<R: Rng>(
    session: &mut Session,
    sensor: &mut dyn GestureSensor,
    store: &mut dyn RankingStore,
    rng: &mut R,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if session.phase != Phase::Playing {
        return outcome;
    }

    session.tick_count += 1;

    let sample = sensor.poll();
    session.gesture = sample;
    session.actor.update(sample);

    let field_tick = session
        .field
        .tick(1, session.scroll_speed, session.actor.x, rng);
    for _ in 0..field_tick.scored_count {
        session.score += 1;
        session.scroll_speed += session.config.speed_increase;
    }
    outcome.scored = field_tick.scored_count;
    outcome.score_positions = field_tick.score_positions;

    if let Some(cause) = collision::resolve(&session.actor, &session.field) {
        end_run(session, cause, sensor, store);
        outcome.collision = Some(cause);
    }

    outcome
}
