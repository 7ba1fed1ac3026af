use serde::{Serialize, Deserialize};

use crate::block::Suffix;
use crate::grid::*;
use crate::orient::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileType {
    Straight,
    StraightDirectional,
    Curved,
    Switch,
    Cross,
    Crossing,
    Signal,
    Sensor,
    Block,
}

impl TileType {
    pub const ALL :[TileType; 9] = [
        TileType::Straight, TileType::StraightDirectional, TileType::Curved,
        TileType::Switch, TileType::Cross, TileType::Crossing,
        TileType::Signal, TileType::Sensor, TileType::Block,
    ];

    /// Short prefix used for generated tile ids.
    pub fn prefix(&self) -> &'static str {
        match self {
            TileType::Straight => "st",
            TileType::StraightDirectional => "sd",
            TileType::Curved => "ct",
            TileType::Switch => "sw",
            TileType::Cross => "cs",
            TileType::Crossing => "xn",
            TileType::Signal => "si",
            TileType::Sensor => "se",
            TileType::Block => "bk",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileType::Straight => "STRAIGHT",
            TileType::StraightDirectional => "STRAIGHT_DIRECTIONAL",
            TileType::Curved => "CURVED",
            TileType::Switch => "SWITCH",
            TileType::Cross => "CROSS",
            TileType::Crossing => "CROSSING",
            TileType::Signal => "SIGNAL",
            TileType::Sensor => "SENSOR",
            TileType::Block => "BLOCK",
        }
    }

    pub fn from_name(name :&str) -> Option<TileType> {
        let name = name.trim().to_ascii_uppercase().replace('-', "_");
        TileType::ALL.iter().find(|t| t.name() == name).copied()
    }

    /// Switch and cross: three or four exits with a diverging branch
    /// selected by `Direction`.
    pub fn is_turnout(&self) -> bool {
        matches!(self, TileType::Switch | TileType::Cross)
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(self, TileType::Curved)
    }

    pub fn default_state(&self) -> TileState {
        match self {
            TileType::Switch | TileType::Cross => TileState::Accessory {
                value: AccessoryValue::Off,
                route_value: AccessoryValue::Off,
            },
            TileType::Signal => TileState::Signal {
                kind: SignalKind::Home,
                aspect: SignalAspect::Off,
            },
            TileType::Sensor => TileState::Sensor { active: false },
            TileType::Block => TileState::Block {
                locomotive: None,
                arrival_suffix: None,
                reverse_arrival: false,
            },
            _ => TileState::Track,
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f :&mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessoryValue { Green, Red, Off }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind { Home, Distant, Entry, Exit }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAspect { Off, Stop, Proceed, Caution }

/// Display state carried by a tile. Topology never looks at this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TileState {
    Track,
    Accessory { value :AccessoryValue, route_value :AccessoryValue },
    Signal { kind :SignalKind, aspect :SignalAspect },
    Sensor { active :bool },
    Block { locomotive :Option<String>, arrival_suffix :Option<Suffix>, reverse_arrival :bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub id :String,
    pub tile_type :TileType,
    pub orientation :Orientation,
    pub direction :Direction,
    pub center :Pt,
    pub state :TileState,
}

impl Tile {
    /// The center is snapped to the grid. Plain track always gets
    /// `Direction::Center`.
    pub fn new(id :impl Into<String>, tile_type :TileType, orientation :Orientation,
               direction :Direction, center :Pt) -> Tile {
        let direction = if tile_type.is_turnout() { direction } else { Direction::Center };
        Tile {
            id: id.into(),
            tile_type,
            orientation,
            direction,
            center: snap(center),
            state: tile_type.default_state(),
        }
    }

    pub fn with_state(mut self, state :TileState) -> Tile {
        self.state = state;
        self
    }

    pub fn rotate(&mut self) {
        self.orientation = self.orientation.next();
    }

    /// Only vertically oriented tiles change; a half turn of a horizontal
    /// tile is a horizontal no-op.
    pub fn flip_horizontal(&mut self) {
        if self.orientation.is_vertical() {
            self.rotate();
            self.rotate();
        }
    }

    pub fn flip_vertical(&mut self) {
        if self.orientation.is_horizontal() {
            self.rotate();
            self.rotate();
        }
    }

    pub fn move_to(&mut self, center :Pt) {
        self.center = snap(center);
    }

    /// Extra cell centers claimed by multi-cell tiles.
    pub fn alt_points(&self) -> Vec<Pt> {
        let step = self.orientation.unit() * TILE_SIZE;
        match self.tile_type {
            TileType::Block => vec![self.center - step, self.center + step],
            TileType::Cross => vec![self.center + step],
            _ => vec![],
        }
    }

    pub fn all_points(&self) -> Vec<Pt> {
        let mut pts = vec![self.center];
        pts.extend(self.alt_points());
        pts
    }

    pub fn occupies(&self, p :Pt) -> bool {
        self.center == p || self.alt_points().contains(&p)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::covering(&self.all_points())
    }
}
