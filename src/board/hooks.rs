//! Arrival hooks and gate clearing rules.
//!
//! Every square carries an `ArriveHook`: a plain function that receives an
//! `ArriveContext` with the arriving player, the movement roll, and the
//! injected die and prompt. Hooks may log, roll extra dice, ask for a
//! number, and write to the player's progress store. They never move the
//! player; movement belongs to the engine.
//!
//! Gate squares also carry a `ClearCondition`, evaluated after the hook
//! runs, deciding whether the player has cleared the gate for good.

use log::info;

use crate::core::{Die, Player};
use crate::io::Prompt;

/// Bird counter used by the legendaries gate.
pub const BIRDS: &str = "birds";

/// Set on the first arrival at the legendaries gate.
pub const AT_LEGENDARIES: &str = "at_legendaries";

/// Set when the elite four gate has been beaten.
pub const ELITE: &str = "elite";

/// Birds needed to clear the legendaries gate.
pub const BIRDS_REQUIRED: i64 = 3;

/// Everything a hook may read or touch during one arrival.
pub struct ArriveContext<'a> {
    /// The arriving player.
    pub player: &'a mut Player,
    /// Index of the square being arrived at.
    pub index: usize,
    /// Display name of the square.
    pub name: &'static str,
    /// The roll that moved the player this turn.
    pub roll: u8,
    /// Die for any extra rolls the square demands.
    pub die: &'a mut dyn Die,
    /// Source for numeric guesses.
    pub prompt: &'a mut dyn Prompt,
}

/// Side-effecting arrival callback.
pub type ArriveHook = fn(&mut ArriveContext<'_>);

/// When a gate counts as cleared for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearCondition {
    /// Cleared by the first arrival.
    Always,
    /// Cleared once a progress counter reaches `min`.
    ProgressAtLeast { key: &'static str, min: i64 },
    /// Cleared once a boolean flag is set.
    FlagSet(&'static str),
}

impl ClearCondition {
    /// Evaluate against the player's current progress.
    #[must_use]
    pub fn is_met(&self, player: &Player) -> bool {
        match *self {
            ClearCondition::Always => true,
            ClearCondition::ProgressAtLeast { key, min } => player.progress(key) >= min,
            ClearCondition::FlagSet(key) => player.flag(key),
        }
    }
}

// === Flavor ===

/// Announce the landing and nothing else.
pub fn announce(ctx: &mut ArriveContext<'_>) {
    info!("{} lands on {} ({})", ctx.player, ctx.name, ctx.index);
}

pub fn pokemon_tower(ctx: &mut ArriveContext<'_>) {
    info!("{} is inside Pokemon Tower: {}", ctx.player, ctx.name);
}

pub fn silph_co(ctx: &mut ArriveContext<'_>) {
    info!("{} is inside Silph Co.: {}", ctx.player, ctx.name);
}

pub fn safari_zone(ctx: &mut ArriveContext<'_>) {
    info!("{} is in the Safari Zone: {}", ctx.player, ctx.name);
}

// === Gates ===

pub fn pewter(ctx: &mut ArriveContext<'_>) {
    let roll = ctx.die.roll();
    info!("{} rolls {} at Pewter", ctx.player, roll);
}

/// Even roll: the player sits out their next turn.
pub fn vermilion(ctx: &mut ArriveContext<'_>) {
    let roll = ctx.die.roll();
    info!("{} rolls {} at Vermilion", ctx.player, roll);
    if roll % 2 == 0 {
        ctx.player.set_missed_turn();
    }
}

/// Roll of 3 or less: the player sits out their next turn.
pub fn celadon(ctx: &mut ArriveContext<'_>) {
    let roll = ctx.die.roll();
    info!("{} rolls {} at Celadon", ctx.player, roll);
    if roll <= 3 {
        ctx.player.set_missed_turn();
    }
}

/// Guess the next roll.
pub fn saffron(ctx: &mut ArriveContext<'_>) {
    let guess = ctx.prompt.prompt_integer(1, 6);
    let roll = ctx.die.roll();
    if i64::from(roll) == guess {
        info!("{} called it: {} at Saffron", ctx.player, roll);
    } else {
        info!("{} guessed {} but rolled {} at Saffron", ctx.player, guess, roll);
    }
}

/// Keep rolling while the die comes up even.
///
/// With a die that only ever shows even faces this never returns.
pub fn cinnabar(ctx: &mut ArriveContext<'_>) {
    loop {
        let roll = ctx.die.roll();
        info!("{} rolls {} at Cinnabar", ctx.player, roll);
        if roll % 2 != 0 {
            break;
        }
    }
}

/// Catch a bird on a movement roll of 4 or more, up to three birds.
pub fn legendaries(ctx: &mut ArriveContext<'_>) {
    if !ctx.player.flag(AT_LEGENDARIES) {
        info!("{} reaches the Legendaries", ctx.player);
        ctx.player.set_flag(AT_LEGENDARIES);
    } else {
        info!("{} is still at the Legendaries", ctx.player);
    }

    if ctx.player.progress(BIRDS) < BIRDS_REQUIRED && ctx.roll >= 4 {
        ctx.player.add_progress(BIRDS);
        info!(
            "{} catches a bird ({}/{})",
            ctx.player,
            ctx.player.progress(BIRDS),
            BIRDS_REQUIRED
        );
    }
}

/// Beat the elite four with a movement roll of exactly 4.
pub fn elite_four(ctx: &mut ArriveContext<'_>) {
    if ctx.roll == 4 {
        ctx.player.set_flag(ELITE);
        info!("{} is Elite!", ctx.player);
    } else {
        info!("{} is not Elite (rolled {})", ctx.player, ctx.roll);
    }
}
