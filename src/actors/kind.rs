//! Closed set of actor kinds with their base attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of actor that can occupy a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActorKind {
    /// Placeholder for an unoccupied cell
    Empty,
    /// Reveals the identity of nearby actors
    Orb,
    /// Spell scroll that creates an orb
    SpellMakeOrb,
    /// Explosive trap
    Mine,
    /// Boss of the mines
    MineKing,
    /// The final boss
    Dragon,
    /// Destructible obstacle that may hide loot
    Wall,
    /// Monster disguised as a chest
    Mimic,
    /// Heals the player
    Medikit,
    /// Leader of the rats
    RatKing,
    /// Common fodder
    Rat,
    /// Common fodder
    Slime,
    /// Stone sentinel that comes in twins
    Gargoyle,
    /// Chest keeper
    Minotaur,
    /// Container of loot
    Chest,
    /// Common fodder
    Skeleton,
    /// Loose experience pickup
    Treasure,
    /// Venomous monster
    Snake,
    /// One of the two lovers
    Giant,
    /// Purely visual filler
    Decoration,
    /// Edge-dwelling caster
    Wizard,
    /// Sees the player coming
    Gazer,
    /// Spell scroll that disarms mines
    SpellDisarm,
    /// The wizard's slimes
    BigSlime,
    /// Spell scroll that reveals rats
    SpellRevealRats,
    /// Spell scroll that reveals slimes
    SpellRevealSlimes,
    /// Medikit hoarder
    Gnome,
    /// Common fodder
    Bat,
    /// Quadrant guardian
    Guard,
    /// Victory item
    Crown,
    /// Corner-loving companion
    Fidel,
    /// The dragon's offspring
    DragonEgg,
    /// Reaper
    Death,
    /// Armoured knight
    DarkKnight,
    /// Floating eye
    Eye,
}

impl ActorKind {
    /// All kinds in declaration order
    pub const ALL: [Self; 35] = [
        Self::Empty,
        Self::Orb,
        Self::SpellMakeOrb,
        Self::Mine,
        Self::MineKing,
        Self::Dragon,
        Self::Wall,
        Self::Mimic,
        Self::Medikit,
        Self::RatKing,
        Self::Rat,
        Self::Slime,
        Self::Gargoyle,
        Self::Minotaur,
        Self::Chest,
        Self::Skeleton,
        Self::Treasure,
        Self::Snake,
        Self::Giant,
        Self::Decoration,
        Self::Wizard,
        Self::Gazer,
        Self::SpellDisarm,
        Self::BigSlime,
        Self::SpellRevealRats,
        Self::SpellRevealSlimes,
        Self::Gnome,
        Self::Bat,
        Self::Guard,
        Self::Crown,
        Self::Fidel,
        Self::DragonEgg,
        Self::Death,
        Self::DarkKnight,
        Self::Eye,
    ];

    /// Base monster level (0 for items and obstacles)
    pub const fn base_level(self) -> u32 {
        match self {
            Self::Wizard | Self::Rat => 1,
            Self::Bat => 2,
            Self::Skeleton => 3,
            Self::Gargoyle => 4,
            Self::RatKing
            | Self::Slime
            | Self::Gazer
            | Self::DarkKnight
            | Self::Eye => 5,
            Self::Minotaur => 6,
            Self::Guard | Self::Snake => 7,
            Self::BigSlime => 8,
            Self::Giant | Self::Death => 9,
            Self::MineKing => 10,
            Self::Mimic => 11,
            Self::Dragon => 13,
            Self::Mine => 100,
            _ => 0,
        }
    }

    /// Experience granted for defeating or collecting this kind
    pub const fn base_xp(self) -> u32 {
        match self {
            Self::Wizard | Self::Rat | Self::Treasure => 1,
            Self::Bat => 2,
            Self::Skeleton | Self::Mine | Self::DragonEgg => 3,
            Self::Gargoyle => 4,
            Self::RatKing
            | Self::Slime
            | Self::Gazer
            | Self::DarkKnight
            | Self::Eye => 5,
            Self::Minotaur => 6,
            Self::Guard | Self::Snake => 7,
            Self::BigSlime => 8,
            Self::Giant | Self::Death | Self::Gnome => 9,
            Self::MineKing => 10,
            Self::Mimic => 11,
            Self::Dragon => 13,
            _ => 0,
        }
    }

    /// Whether this kind is fought rather than collected
    pub const fn is_monster(self) -> bool {
        matches!(
            self,
            Self::Mine
                | Self::MineKing
                | Self::Dragon
                | Self::Mimic
                | Self::RatKing
                | Self::Rat
                | Self::Slime
                | Self::Gargoyle
                | Self::Minotaur
                | Self::Skeleton
                | Self::Snake
                | Self::Giant
                | Self::Wizard
                | Self::Gazer
                | Self::BigSlime
                | Self::Gnome
                | Self::Bat
                | Self::Guard
                | Self::Fidel
                | Self::DragonEgg
                | Self::Death
                | Self::DarkKnight
                | Self::Eye
        )
    }

    /// Kinds an orb must not reveal
    pub const fn is_orb_forbidden(self) -> bool {
        matches!(
            self,
            Self::Dragon
                | Self::Gazer
                | Self::Chest
                | Self::SpellMakeOrb
                | Self::RatKing
                | Self::Mine
                | Self::Fidel
                | Self::DragonEgg
                | Self::BigSlime
                | Self::Mimic
        )
    }

    /// Kinds of which a finished board holds at most one
    pub const fn is_unique(self) -> bool {
        matches!(
            self,
            Self::Dragon
                | Self::Wizard
                | Self::MineKing
                | Self::RatKing
                | Self::Gnome
                | Self::DragonEgg
        )
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Orb => "orb",
            Self::SpellMakeOrb => "spell_reveal",
            Self::Mine => "mine",
            Self::MineKing => "mine king",
            Self::Dragon => "dragon",
            Self::Wall => "wall",
            Self::Mimic => "mimic",
            Self::Medikit => "medikit",
            Self::RatKing => "rat king",
            Self::Rat => "rat",
            Self::Slime => "slime",
            Self::Gargoyle => "gargoyle",
            Self::Minotaur => "minotaur",
            Self::Chest => "chest",
            Self::Skeleton => "skeleton",
            Self::Treasure => "treasure",
            Self::Snake => "snake",
            Self::Giant => "giant",
            Self::Decoration => "decoration",
            Self::Wizard => "wizard",
            Self::Gazer => "gazer",
            Self::SpellDisarm => "spell_disarm",
            Self::BigSlime => "big slime",
            Self::SpellRevealRats => "spell_reveal_rats",
            Self::SpellRevealSlimes => "spell_reveal_slimes",
            Self::Gnome => "gnome",
            Self::Bat => "bat",
            Self::Guard => "guardian",
            Self::Crown => "crown",
            Self::Fidel => "fidel",
            Self::DragonEgg => "dragon_egg",
            Self::Death => "death",
            Self::DarkKnight => "dark knight",
            Self::Eye => "eye",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
