//! Actor instances and their relationship descriptors

use crate::actors::ActorKind;
use crate::spatial::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable index of an actor in its board's arena
///
/// Ids are handed out in creation order, which doubles as the tie-break order
/// wherever two actors compete for the same thing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub usize);

impl ActorId {
    /// Arena index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side a lover prefers to stand on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairRole {
    /// Wants the left half of the board
    Left,
    /// Wants the right half of the board
    Right,
}

/// Board quadrant split around the centre cell
///
/// The centre row and column belong to no quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Left of and above the centre
    TopLeft,
    /// Right of and above the centre
    TopRight,
    /// Right of and below the centre
    BottomRight,
    /// Left of and below the centre
    BottomLeft,
}

impl Quadrant {
    /// Quadrant for a one-based guard number
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::TopLeft),
            2 => Some(Self::TopRight),
            3 => Some(Self::BottomRight),
            4 => Some(Self::BottomLeft),
            _ => None,
        }
    }

    /// One-based quadrant number
    pub const fn number(self) -> u8 {
        match self {
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomRight => 3,
            Self::BottomLeft => 4,
        }
    }
}

/// Explicit relationship an actor has with other actors on the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// No relationship
    #[default]
    None,
    /// One half of a pair of lovers
    Lover(PairRole),
    /// Guardian of a quadrant
    Quadrant(Quadrant),
    /// Member of a twin pair identified by group number
    Twin(u8),
    /// Bodyguard of the rat king
    RatGuard,
}

/// Eight-way direction an actor faces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Up
    North,
    /// Up and right
    NorthEast,
    /// Right
    East,
    /// Down and right
    SouthEast,
    /// Down
    South,
    /// Down and left
    SouthWest,
    /// Left
    West,
    /// Up and left
    NorthWest,
}

impl Facing {
    /// Direction from one cell towards another, `None` if they coincide
    pub const fn towards(from: Position, to: Position) -> Option<Self> {
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Self::North),
            (1, -1) => Some(Self::NorthEast),
            (1, 0) => Some(Self::East),
            (1, 1) => Some(Self::SouthEast),
            (0, 1) => Some(Self::South),
            (-1, 1) => Some(Self::SouthWest),
            (-1, 0) => Some(Self::West),
            (-1, -1) => Some(Self::NorthWest),
            _ => None,
        }
    }
}

/// Item hidden inside a container actor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loot {
    /// Kind of the contained item
    pub kind: ActorKind,
    /// Experience the item grants
    pub xp: u32,
}

impl Loot {
    /// Treasure worth the given experience
    pub const fn treasure(xp: u32) -> Self {
        Self {
            kind: ActorKind::Treasure,
            xp,
        }
    }

    /// A medikit
    pub const fn medikit() -> Self {
        Self {
            kind: ActorKind::Medikit,
            xp: 0,
        }
    }
}

/// A typed entity placed on the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Kind tag driving the happiness rules
    pub kind: ActorKind,
    /// Optional informational name
    pub name: Option<String>,
    /// Relationship with other actors
    pub relation: Relation,
    /// Monster level
    pub level: u32,
    /// Experience granted by the actor itself
    pub xp: u32,
    /// Contained item, if any
    pub contains: Option<Loot>,
    /// Current wall durability
    pub wall_hp: u32,
    /// Maximum wall durability
    pub wall_max_hp: u32,
    /// Whether the actor is visible from the start
    pub revealed: bool,
    /// Whether the actor must be revealed once generation finishes
    pub always_revealed: bool,
    /// Current cell, `None` until placed
    pub position: Option<Position>,
    /// Whether the position is final
    pub locked: bool,
    /// Chest a minotaur guards
    pub chest_location: Option<Position>,
    /// Direction a twin faces
    pub facing: Option<Facing>,
    /// Display variant chosen after placement
    pub display_variant: Option<u8>,
}

impl Actor {
    /// Create an actor with the base attributes of its kind
    pub const fn new(kind: ActorKind) -> Self {
        let contains = match kind {
            ActorKind::Chest => Some(Loot::treasure(5)),
            _ => None,
        };
        Self {
            kind,
            name: None,
            relation: Relation::None,
            level: kind.base_level(),
            xp: kind.base_xp(),
            contains,
            wall_hp: 0,
            wall_max_hp: 0,
            revealed: false,
            always_revealed: false,
            position: None,
            locked: false,
            chest_location: None,
            facing: None,
            display_variant: None,
        }
    }

    /// Attach an informational name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a relationship descriptor
    #[must_use]
    pub const fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Hide an item inside the actor
    #[must_use]
    pub const fn containing(mut self, loot: Loot) -> Self {
        self.contains = Some(loot);
        self
    }

    /// Override level and experience
    #[must_use]
    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self.xp = level;
        self
    }

    /// Reveal the actor automatically once the board is final
    #[must_use]
    pub const fn always_revealed(mut self) -> Self {
        self.always_revealed = true;
        self
    }

    /// Experience of the actor plus anything it contains
    pub fn total_xp(&self) -> u32 {
        self.xp + self.contains.map_or(0, |loot| loot.xp)
    }
}
