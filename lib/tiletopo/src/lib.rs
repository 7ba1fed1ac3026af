pub mod grid;
pub mod orient;
pub mod tile;
pub mod topo;
pub mod block;

pub use grid::{Pt, pt, GRID, TILE_SIZE};
pub use orient::{Orientation, Direction};
pub use tile::{Tile, TileType, TileState};
pub use topo::SideMap;
