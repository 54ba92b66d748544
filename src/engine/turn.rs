//! The turn engine.
//!
//! ## Movement
//!
//! A roll of `r` moves the player up to `r` squares, one at a time. The
//! first gate the player has not cleared stops the move: its hook runs,
//! the visit is recorded, and any remaining pips are discarded. Gates the
//! player already cleared are walked through silently. If the move ends on
//! a non-gate square, that square's hook fires once for flavor.
//!
//! A player standing on a gate they have not cleared (the conditional
//! gates) does not move at all: the gate's hook runs again with the new
//! roll and the visit is re-evaluated.
//!
//! ## Rounds
//!
//! Players act in roll order. A pending missed turn is consumed instead of
//! rolling. The round stops the moment anyone reaches the last square.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{ArriveContext, LAST_SQUARE};
use crate::core::{Die, GameState, GateEvent, PlayerId, TurnOutcome, TurnRecord};
use crate::io::Prompt;

/// Everything that happened in one call to `play_round`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number (starts at 1).
    pub round: u32,
    /// Turns taken this round, in order.
    pub turns: Vec<TurnRecord>,
    /// Whether the game was over when the round finished.
    pub game_over: bool,
}

/// Drives a game: owns the state plus the injected die and prompt.
pub struct TurnEngine<D, P> {
    state: GameState,
    die: D,
    prompt: P,
}

impl<D: Die, P: Prompt> TurnEngine<D, P> {
    /// Wrap a prepared state. The roll order is used as-is.
    pub fn new(state: GameState, die: D, prompt: P) -> Self {
        Self { state, die, prompt }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for setting up positions or flags.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn die(&self) -> &D {
        &self.die
    }

    #[must_use]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    // === Rounds ===

    /// Play one full round in roll order.
    ///
    /// Does nothing once the game is over.
    pub fn play_round(&mut self) -> RoundReport {
        if self.state.is_game_over() {
            return RoundReport {
                round: self.state.round(),
                turns: Vec::new(),
                game_over: true,
            };
        }

        let round = self.state.begin_round();
        let order = self.state.roll_order().to_vec();
        let mut turns = Vec::with_capacity(order.len());
        debug!("round {} begins", round);

        for player in order {
            let outcome = self.take_turn(player);
            let record = TurnRecord::new(round, player, outcome);
            self.state.record(record);
            turns.push(record);

            if self.state.update_game_over() {
                info!("{} reaches the end and wins", self.state.player(player));
                break;
            }
        }

        RoundReport {
            round,
            turns,
            game_over: self.state.is_game_over(),
        }
    }

    /// Play rounds until the game ends or `max_rounds` have been played.
    ///
    /// Returns the winner, if any.
    pub fn run(&mut self, max_rounds: u32) -> Option<PlayerId> {
        for _ in 0..max_rounds {
            if self.play_round().game_over {
                break;
            }
        }
        self.state.winner()
    }

    // === Turns ===

    /// One player's turn: consume a missed turn, or roll once and move.
    pub fn take_turn(&mut self, player: PlayerId) -> TurnOutcome {
        if self.state.player(player).missed_turn() {
            self.state.player_mut(player).clear_missed_turn();
            info!("{} misses a turn", self.state.player(player));
            return TurnOutcome::Skipped;
        }

        let roll = self.die.roll();
        info!("{} rolls {}", self.state.player(player), roll);
        self.move_player(player, roll)
    }

    /// Apply a roll to a player's position, honoring gates.
    pub fn move_player(&mut self, player: PlayerId, roll: u8) -> TurnOutcome {
        let from = self.state.position(player);

        if !self.state.track.square(from).has_cleared(player) {
            debug!("{} is held at gate {}", self.state.player(player), from);
            let gate = self.visit_gate(player, from, roll);
            return TurnOutcome::Moved {
                roll,
                from,
                to: from,
                gate: Some(gate),
            };
        }

        let mut position = from;
        let mut gate = None;
        for _ in 0..roll {
            if position == LAST_SQUARE {
                break;
            }
            position += 1;
            self.state.set_position(player, position);
            debug!("{} steps to {}", self.state.player(player), position);

            if !self.state.track.square(position).has_cleared(player) {
                gate = Some(self.visit_gate(player, position, roll));
                break;
            }
        }

        if !self.state.track.square(position).is_gate() {
            self.arrive(player, position, roll);
        }

        TurnOutcome::Moved {
            roll,
            from,
            to: position,
            gate,
        }
    }

    /// Run a gate's hook, then record the visit.
    fn visit_gate(&mut self, player: PlayerId, index: usize, roll: u8) -> GateEvent {
        self.arrive(player, index, roll);

        let cleared = self
            .state
            .track
            .square_mut(index)
            .record_visit(&self.state.players[player]);
        if cleared {
            let name = self.state.track.square(index).name();
            info!("{} clears {}", self.state.player(player), name);
        }

        GateEvent { index, cleared }
    }

    /// Fire a square's arrival hook for a player.
    fn arrive(&mut self, player: PlayerId, index: usize, roll: u8) {
        let square = self.state.track.square(index);
        let hook = square.hook();
        let name = square.name();

        let mut ctx = ArriveContext {
            player: self.state.players.get_mut(player),
            index,
            name,
            roll,
            die: &mut self.die,
            prompt: &mut self.prompt,
        };
        hook(&mut ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hooks::BIRDS;
    use crate::core::ScriptedDie;
    use crate::io::ScriptedPrompt;

    const CALLS: &str = "hook_calls";

    fn counting(ctx: &mut ArriveContext<'_>) {
        ctx.player.add_progress(CALLS);
    }

    fn engine(names: &[&str], rolls: &[u8]) -> TurnEngine<ScriptedDie, ScriptedPrompt> {
        let state = GameState::new(names).unwrap();
        TurnEngine::new(
            state,
            ScriptedDie::new(rolls.iter().copied()),
            ScriptedPrompt::default(),
        )
    }

    #[test]
    fn test_gate_halts_movement() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        engine.state_mut().track_mut().set_hook(6, counting);
        engine.state_mut().set_position(ash, 5);

        let outcome = engine.move_player(ash, 6);

        assert_eq!(engine.state().position(ash), 6);
        assert_eq!(engine.state().player(ash).progress(CALLS), 1);
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                roll: 6,
                from: 5,
                to: 6,
                gate: Some(GateEvent { index: 6, cleared: true }),
            }
        );
    }

    #[test]
    fn test_cleared_gate_is_passed_through() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        engine.state_mut().track_mut().set_hook(6, counting);
        engine.state_mut().set_position(ash, 5);
        engine.move_player(ash, 6);

        engine.state_mut().set_position(ash, 5);
        let outcome = engine.move_player(ash, 6);

        assert_eq!(engine.state().position(ash), 11);
        assert_eq!(engine.state().player(ash).progress(CALLS), 1);
        assert!(!outcome.halted_at_gate());
    }

    #[test]
    fn test_landing_on_cleared_gate_is_silent() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        engine.state_mut().track_mut().set_hook(6, counting);
        engine.state_mut().set_position(ash, 5);
        engine.move_player(ash, 1);

        engine.state_mut().set_position(ash, 5);
        let outcome = engine.move_player(ash, 1);

        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                roll: 1,
                from: 5,
                to: 6,
                gate: None,
            }
        );
        assert_eq!(engine.state().player(ash).progress(CALLS), 1);
    }

    #[test]
    fn test_flavor_hook_fires_once_on_landing() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        for index in 1..=5 {
            engine.state_mut().track_mut().set_hook(index, counting);
        }

        engine.move_player(ash, 4);

        assert_eq!(engine.state().position(ash), 4);
        // Only the square landed on, not the ones walked over.
        assert_eq!(engine.state().player(ash).progress(CALLS), 1);
    }

    #[test]
    fn test_gates_are_per_player() {
        let mut engine = engine(&["Ash", "Misty"], &[1]);
        let (ash, misty) = (PlayerId::new(0), PlayerId::new(1));
        engine.state_mut().set_position(ash, 5);
        engine.state_mut().set_position(misty, 5);

        engine.move_player(ash, 1);
        assert!(engine.state().track().square(6).has_cleared(ash));
        assert!(!engine.state().track().square(6).has_cleared(misty));

        engine.move_player(misty, 3);
        assert_eq!(engine.state().position(misty), 6);
    }

    #[test]
    fn test_legendaries_hold_until_three_birds() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        engine.state_mut().set_position(ash, 67);

        // Arrive with a 6, then sit on the gate rolling 1 and 5.
        for roll in [6, 1, 5] {
            let outcome = engine.move_player(ash, roll);
            assert_eq!(outcome.destination(), Some(68));
        }
        assert_eq!(engine.state().player(ash).progress(BIRDS), 2);
        assert!(!engine.state().track().square(68).has_cleared(ash));

        let outcome = engine.move_player(ash, 4);
        assert_eq!(
            outcome,
            TurnOutcome::Moved {
                roll: 4,
                from: 68,
                to: 68,
                gate: Some(GateEvent { index: 68, cleared: true }),
            }
        );
        assert_eq!(engine.state().player(ash).progress(BIRDS), 3);

        // Cleared: the next roll moves on to the elite four.
        engine.move_player(ash, 2);
        assert_eq!(engine.state().position(ash), 69);
    }

    #[test]
    fn test_movement_never_passes_last_square() {
        let mut engine = engine(&["Ash"], &[1]);
        let ash = PlayerId::new(0);
        for index in [68, 69, 70] {
            engine.state_mut().track_mut().set_hook(index, counting);
        }
        // Clear the three final gates by hand.
        engine.state_mut().player_mut(ash).set_flag(crate::board::hooks::ELITE);
        for _ in 0..3 {
            engine.state_mut().player_mut(ash).add_progress(BIRDS);
        }
        for index in [68, 69, 70] {
            engine.state_mut().set_position(ash, index - 1);
            engine.move_player(ash, 1);
        }

        engine.state_mut().set_position(ash, 70);
        let outcome = engine.move_player(ash, 6);
        assert_eq!(outcome.destination(), Some(LAST_SQUARE));
        assert_eq!(engine.state().position(ash), LAST_SQUARE);
    }

    #[test]
    fn test_missed_turn_consumed() {
        let mut engine = engine(&["Ash"], &[3]);
        let ash = PlayerId::new(0);
        engine.state_mut().player_mut(ash).set_missed_turn();

        assert_eq!(engine.take_turn(ash), TurnOutcome::Skipped);
        assert!(!engine.state().player(ash).missed_turn());
        assert_eq!(engine.die().rolls_made(), 0);

        assert_eq!(engine.take_turn(ash).destination(), Some(3));
    }

    #[test]
    fn test_round_after_game_over_is_empty() {
        let mut engine = engine(&["Ash", "Misty"], &[1]);
        engine.state_mut().set_position(PlayerId::new(1), LAST_SQUARE);
        engine.state_mut().update_game_over();

        let report = engine.play_round();
        assert!(report.game_over);
        assert!(report.turns.is_empty());
        assert_eq!(engine.die().rolls_made(), 0);
    }
}
