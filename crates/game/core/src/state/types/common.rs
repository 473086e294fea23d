use std::fmt;

/// Unique identifier for any actor tracked in the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tile index on the one-dimensional lane.
///
/// Signed so that offsets can be applied before bounds are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(pub i32);

impl Position {
    pub const ORIGIN: Self = Self(0);

    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    /// Position `tiles` steps away in the given facing.
    ///
    /// Saturates instead of overflowing; the result is bounds-checked by the
    /// caller anyway.
    #[inline]
    pub const fn step(self, facing: Facing, tiles: i32) -> Self {
        Self(self.0.saturating_add(tiles.saturating_mul(facing.sign())))
    }

    /// Position reached by a pattern offset, mirrored by facing.
    #[inline]
    pub const fn offset(self, offset: i32, facing: Facing) -> Self {
        Self(self.0.saturating_add(offset.saturating_mul(facing.sign())))
    }

    /// Tile distance between two positions.
    #[inline]
    pub const fn distance(self, other: Position) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Returns true if `other` lies strictly ahead when facing `facing`.
    #[inline]
    pub const fn is_ahead(self, other: Position, facing: Facing) -> bool {
        other.0.saturating_sub(self.0).signum() == facing.sign()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction an actor faces on the lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// `-1` for left, `+1` for right.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing that points from `from` towards `to`, if they differ.
    pub fn towards(from: Position, to: Position) -> Option<Self> {
        match to.0.cmp(&from.0) {
            std::cmp::Ordering::Less => Some(Facing::Left),
            std::cmp::Ordering::Greater => Some(Facing::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Facing that a signed step of `offset` tiles moves in.
    pub fn of_offset(offset: i32) -> Option<Self> {
        Self::towards(Position::ORIGIN, Position(offset))
    }
}
