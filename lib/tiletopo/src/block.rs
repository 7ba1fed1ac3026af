use serde::{Serialize, Deserialize};

use crate::orient::*;
use crate::tile::*;
use crate::topo::*;

/// Polarity of a block end. By convention the block's own-orientation side
/// is `Plus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub enum Suffix {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Suffix {
    pub fn opposite(&self) -> Suffix {
        match self {
            Suffix::Plus => Suffix::Minus,
            Suffix::Minus => Suffix::Plus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Plus => "+",
            Suffix::Minus => "-",
        }
    }
}

impl std::fmt::Display for Suffix {
    fn fmt(&self, f :&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which end of `block` the adjacent tile `other` touches.
pub fn id_suffix<'a>(block :&Tile, other :impl Into<Option<&'a Tile>>) -> Option<Suffix> {
    if block.tile_type != TileType::Block { return None; }
    let side = connection_side(block, other)?;
    if side == block.orientation {
        Some(Suffix::Plus)
    } else if side == block.orientation.opposite() {
        Some(Suffix::Minus)
    } else {
        None
    }
}

/// Compass side of the block end carrying `suffix`.
pub fn suffix_side(block :&Tile, suffix :Suffix) -> Orientation {
    match suffix {
        Suffix::Plus => block.orientation,
        Suffix::Minus => block.orientation.opposite(),
    }
}

/// A train leaves through the end opposite to where it arrived, unless the
/// block is marked as reversing.
pub fn departure_suffix(arrival :Suffix, reverse_arrival :bool) -> Suffix {
    if reverse_arrival { arrival } else { arrival.opposite() }
}

pub fn travel_direction(block :&Tile, departure :Suffix) -> Orientation {
    suffix_side(block, departure)
}

/// Node id of one block end, e.g. `bk-1+`.
pub fn end_id(block :&Tile, suffix :Suffix) -> String {
    format!("{}{}", block.id, suffix)
}
