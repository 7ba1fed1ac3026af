use nalgebra_glm as glm;

/// Grid unit in canvas coordinates. Every tile center and connector lies on
/// a multiple of this.
pub const GRID :i32 = 20;

/// Width and height of one tile cell.
pub const TILE_SIZE :i32 = 2 * GRID;

pub type Pt = glm::I32Vec2;

pub fn pt(x :i32, y :i32) -> Pt {
    glm::vec2(x, y)
}

/// Round both coordinates to the nearest grid point (halves away from zero).
pub fn snap(p :Pt) -> Pt {
    pt(snap_coord(p.x), snap_coord(p.y))
}

fn snap_coord(v :i32) -> i32 {
    let half = GRID / 2;
    if v >= 0 {
        ((v + half) / GRID) * GRID
    } else {
        -(((-v + half) / GRID) * GRID)
    }
}

/// Center of the tile cell containing `p`. Used to place tiles from free
/// canvas coordinates (mouse positions etc.).
pub fn snap_to_cell(p :Pt) -> Pt {
    pt(cell_center(p.x), cell_center(p.y))
}

fn cell_center(v :i32) -> i32 {
    v.div_euclid(TILE_SIZE) * TILE_SIZE + GRID
}

pub fn is_grid_point(p :Pt) -> bool {
    p.x.rem_euclid(GRID) == 0 && p.y.rem_euclid(GRID) == 0
}

pub fn distance_sq(a :Pt, b :Pt) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}

pub fn fmt_pt(p :Pt) -> String {
    format!("({},{})", p.x, p.y)
}

/// Axis aligned footprint of a tile, top-left corner plus size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x :i32,
    pub y :i32,
    pub width :i32,
    pub height :i32,
}

impl Bounds {
    /// Smallest rectangle covering one tile cell around each of the given centers.
    pub fn covering(centers :&[Pt]) -> Bounds {
        let min_x = centers.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = centers.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = centers.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = centers.iter().map(|p| p.y).max().unwrap_or(0);
        Bounds {
            x: min_x - GRID,
            y: min_y - GRID,
            width: max_x - min_x + TILE_SIZE,
            height: max_y - min_y + TILE_SIZE,
        }
    }

    pub fn contains(&self, p :Pt) -> bool {
        p.x >= self.x && p.x < self.x + self.width &&
        p.y >= self.y && p.y < self.y + self.height
    }
}
