//! The fixed square table.
//!
//! One entry per index, 0 through 71. Kind, display name, arrival hook and
//! clearing rule all live here; nothing else in the crate branches on a
//! square's index.

use super::hooks::{self, ClearCondition, BIRDS, BIRDS_REQUIRED, ELITE};
use super::square::SquareRule;

/// Number of squares on the track.
pub const TRACK_LEN: usize = 72;

const fn tower(name: &'static str) -> SquareRule {
    SquareRule::silver(name, hooks::pokemon_tower)
}

const fn silph(name: &'static str) -> SquareRule {
    SquareRule::silver(name, hooks::silph_co)
}

const fn safari(name: &'static str) -> SquareRule {
    SquareRule::silver(name, hooks::safari_zone)
}

/// Every square on the board, indexed by position.
pub static SQUARES: [SquareRule; TRACK_LEN] = [
    SquareRule::plain("Pallet Town"),
    SquareRule::plain("Rattata"),
    SquareRule::plain("Pidgey"),
    SquareRule::plain("Caterpie"),
    SquareRule::plain("Pikachu"),
    SquareRule::plain("Beedrill"),
    SquareRule::gate("Pewter", hooks::pewter),
    SquareRule::plain("Nidoran"),
    SquareRule::plain("Zubat"),
    SquareRule::plain("Clefairy"),
    // 10
    SquareRule::plain("Jigglypuff"),
    SquareRule::plain("Abra"),
    SquareRule::plain("Gary 1"),
    SquareRule::gate("Cerulean", hooks::announce),
    SquareRule::plain("Slowpoke"),
    SquareRule::plain("Bellsprout"),
    SquareRule::plain("Meowth"),
    SquareRule::plain("Diglett"),
    SquareRule::plain("S.S. Anne"),
    SquareRule::gate("Vermilion", hooks::vermilion),
    // 20
    SquareRule::plain("Bicycle"),
    SquareRule::plain("Magikarp"),
    SquareRule::plain("Sandshrew"),
    tower("Pokemon Tower"),
    tower("Channeler"),
    tower("Haunter"),
    tower("Cubone"),
    tower("Silph Scope"),
    SquareRule::plain("Abra"),
    SquareRule::plain("Snorlax"),
    // 30
    SquareRule::plain("Gary 2"),
    SquareRule::plain("Eevee"),
    SquareRule::gate("Celadon", hooks::celadon),
    SquareRule::plain("Psyduck"),
    SquareRule::plain("Evolve"),
    SquareRule::plain("Porygon"),
    silph("Silph Co."),
    silph("Scientist"),
    silph("Lapras"),
    silph("Team Rocket"),
    // 40
    silph("Giovanni"),
    SquareRule::plain("Rare Candy"),
    SquareRule::plain("Gary 3"),
    SquareRule::gate("Saffron", hooks::saffron),
    SquareRule::plain("Hitmonchan"),
    SquareRule::plain("Krabby"),
    SquareRule::plain("Ditto"),
    SquareRule::plain("Doduo"),
    safari("Safari Zone"),
    safari("Dratini"),
    // 50
    safari("Taurus"),
    safari("Chansey"),
    SquareRule::gate("Fuchsia", hooks::announce),
    SquareRule::plain("Electrode"),
    SquareRule::plain("Electabuzz"),
    SquareRule::plain("Poliwag"),
    SquareRule::plain("Seaking"),
    SquareRule::plain("Missingno"),
    SquareRule::gate("Cinnabar", hooks::cinnabar),
    SquareRule::plain("Koffing"),
    // 60
    SquareRule::plain("Fossil"),
    SquareRule::plain("Pokeball"),
    SquareRule::plain("Persian"),
    SquareRule::gate("Viridian", hooks::announce),
    SquareRule::plain("Fearow"),
    SquareRule::plain("Graveler"),
    SquareRule::plain("Gyarados"),
    SquareRule::plain("Dragonite"),
    SquareRule::gold(
        "Legendaries",
        hooks::legendaries,
        ClearCondition::ProgressAtLeast {
            key: BIRDS,
            min: BIRDS_REQUIRED,
        },
    ),
    SquareRule::gold("Elite Four", hooks::elite_four, ClearCondition::FlagSet(ELITE)),
    // 70
    SquareRule::gate("Champion Gary", hooks::announce),
    SquareRule::gate("Pokemon Master", hooks::announce),
];
