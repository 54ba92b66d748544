//! Track squares.
//!
//! A square's behavior comes entirely from its `SquareRule` (kind, name,
//! arrival hook, clearing condition). Only gate squares keep per-player
//! state: the set of players who have cleared them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerId};

use super::hooks::{self, ArriveHook, ClearCondition};

/// The three flavors of square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// Plain square, flavor only.
    Ordinary,
    /// Zone square, flavor only.
    Silver,
    /// Gate: stops forward motion until cleared.
    Gold,
}

/// Static description of a square, as listed in the catalog.
#[derive(Clone, Copy, Debug)]
pub struct SquareRule {
    pub kind: SquareKind,
    pub name: &'static str,
    pub hook: ArriveHook,
    /// Only consulted for gates.
    pub clear: ClearCondition,
}

impl SquareRule {
    pub const fn ordinary(name: &'static str, hook: ArriveHook) -> Self {
        Self {
            kind: SquareKind::Ordinary,
            name,
            hook,
            clear: ClearCondition::Always,
        }
    }

    pub const fn silver(name: &'static str, hook: ArriveHook) -> Self {
        Self {
            kind: SquareKind::Silver,
            name,
            hook,
            clear: ClearCondition::Always,
        }
    }

    pub const fn gold(name: &'static str, hook: ArriveHook, clear: ClearCondition) -> Self {
        Self {
            kind: SquareKind::Gold,
            name,
            hook,
            clear,
        }
    }

    /// Gate that clears on first arrival.
    pub const fn gate(name: &'static str, hook: ArriveHook) -> Self {
        Self::gold(name, hook, ClearCondition::Always)
    }

    /// Plain square with the default announcement.
    pub const fn plain(name: &'static str) -> Self {
        Self::ordinary(name, hooks::announce)
    }
}

/// One cell on the track.
#[derive(Clone, Debug)]
pub struct Square {
    index: usize,
    rule: SquareRule,
    /// Players who have cleared this gate. Always empty for non-gates.
    visitors: SmallVec<[PlayerId; 4]>,
}

impl Square {
    #[must_use]
    pub fn new(index: usize, rule: SquareRule) -> Self {
        Self {
            index,
            rule,
            visitors: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn kind(&self) -> SquareKind {
        self.rule.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.rule.name
    }

    #[must_use]
    pub fn is_gate(&self) -> bool {
        self.rule.kind == SquareKind::Gold
    }

    #[must_use]
    pub fn hook(&self) -> ArriveHook {
        self.rule.hook
    }

    /// Replace the arrival hook.
    pub fn set_hook(&mut self, hook: ArriveHook) {
        self.rule.hook = hook;
    }

    /// Has this player cleared the square? Non-gates never block anyone.
    #[must_use]
    pub fn has_cleared(&self, player: PlayerId) -> bool {
        !self.is_gate() || self.visitors.contains(&player)
    }

    /// Record a gate visit after its hook has run.
    ///
    /// The player is added to the visitors only if the clearing condition
    /// holds. Returns whether the player has now cleared the square.
    pub fn record_visit(&mut self, player: &Player) -> bool {
        if self.has_cleared(player.id()) {
            return true;
        }
        if self.rule.clear.is_met(player) {
            self.visitors.push(player.id());
            true
        } else {
            false
        }
    }

    /// Players who have cleared this gate, in clearing order.
    #[must_use]
    pub fn visitors(&self) -> &[PlayerId] {
        &self.visitors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::hooks::{BIRDS, ELITE};

    #[test]
    fn test_non_gate_never_blocks() {
        let square = Square::new(3, SquareRule::plain("Caterpie"));
        assert!(!square.is_gate());
        assert!(square.has_cleared(PlayerId::new(0)));
        assert_eq!(square.kind(), SquareKind::Ordinary);
    }

    #[test]
    fn test_unconditional_gate_clears_on_visit() {
        let mut square = Square::new(6, SquareRule::gate("Pewter", hooks::pewter));
        let player = Player::new(PlayerId::new(1), "Misty");

        assert!(square.is_gate());
        assert!(!square.has_cleared(player.id()));

        assert!(square.record_visit(&player));
        assert!(square.has_cleared(player.id()));
        assert!(!square.has_cleared(PlayerId::new(0)));
        assert_eq!(square.visitors(), &[PlayerId::new(1)]);
    }

    #[test]
    fn test_conditional_gate_waits_for_progress() {
        let mut square = Square::new(
            68,
            SquareRule::gold(
                "Legendaries",
                hooks::legendaries,
                ClearCondition::ProgressAtLeast { key: BIRDS, min: 3 },
            ),
        );
        let mut player = Player::new(PlayerId::new(0), "Ash");

        player.add_progress(BIRDS);
        player.add_progress(BIRDS);
        assert!(!square.record_visit(&player));
        assert!(square.visitors().is_empty());

        player.add_progress(BIRDS);
        assert!(square.record_visit(&player));
        assert!(square.has_cleared(player.id()));
    }

    #[test]
    fn test_repeat_visit_not_duplicated() {
        let mut square = Square::new(
            69,
            SquareRule::gold("Elite Four", hooks::elite_four, ClearCondition::FlagSet(ELITE)),
        );
        let mut player = Player::new(PlayerId::new(0), "Ash");
        player.set_flag(ELITE);

        assert!(square.record_visit(&player));
        assert!(square.record_visit(&player));
        assert_eq!(square.visitors().len(), 1);
    }
}
