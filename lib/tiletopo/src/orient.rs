use enum_map::Enum;
use serde::{Serialize, Deserialize};
use crate::grid::{pt, Pt};

/// Compass facing of a tile. Screen coordinates, so North is towards
/// negative y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Enum)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation { East, South, West, North }

impl Default for Orientation {
    fn default() -> Self { Orientation::East }
}

impl Orientation {
    /// Clockwise order, starting from the default.
    pub const ALL :[Orientation; 4] =
        [Orientation::East, Orientation::South, Orientation::West, Orientation::North];

    /// Next orientation in the clockwise cycle.
    pub fn next(&self) -> Orientation {
        match self {
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
            Orientation::North => Orientation::East,
        }
    }

    pub fn prev(&self) -> Orientation {
        match self {
            Orientation::East => Orientation::North,
            Orientation::South => Orientation::East,
            Orientation::West => Orientation::South,
            Orientation::North => Orientation::West,
        }
    }

    pub fn opposite(&self) -> Orientation {
        self.next().next()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::East | Orientation::West)
    }

    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }

    pub fn unit(&self) -> Pt {
        match self {
            Orientation::East => pt(1, 0),
            Orientation::South => pt(0, 1),
            Orientation::West => pt(-1, 0),
            Orientation::North => pt(0, -1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::East => "EAST",
            Orientation::South => "SOUTH",
            Orientation::West => "WEST",
            Orientation::North => "NORTH",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f :&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Diverging branch selection for turnout shaped tiles. Plain track uses
/// `Center`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction { Center, Left, Right }

impl Default for Direction {
    fn default() -> Self { Direction::Center }
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Center => "CENTER",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f :&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
