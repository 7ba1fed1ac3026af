use enum_map::EnumMap;
use log::*;

use crate::grid::*;
use crate::orient::*;
use crate::tile::*;

/// One optional point per compass side. `None` means the side has no
/// connection.
pub type SideMap = EnumMap<Orientation, Option<Pt>>;

/// Compass side taken by the diverging branch of a switch or cross.
/// `Center` on a turnout resolves like `Right`.
pub fn diverging_side(orientation :Orientation, direction :Direction) -> Orientation {
    match (orientation, direction) {
        (Orientation::East, Direction::Left) => Orientation::South,
        (Orientation::East, _) => Orientation::North,
        (Orientation::South, Direction::Left) => Orientation::West,
        (Orientation::South, _) => Orientation::East,
        (Orientation::West, Direction::Left) => Orientation::North,
        (Orientation::West, _) => Orientation::South,
        (Orientation::North, Direction::Left) => Orientation::East,
        (Orientation::North, _) => Orientation::West,
    }
}

fn axis(o :Orientation) -> [Orientation; 2] {
    if o.is_horizontal() {
        [Orientation::East, Orientation::West]
    } else {
        [Orientation::North, Orientation::South]
    }
}

// Edge point per active side. Neighbor points are always one more grid
// unit out along the same side.
fn connectors(tile :&Tile) -> Vec<(Orientation, Pt)> {
    let c = tile.center;
    let o = tile.orientation;
    let at = |from :Pt, s :Orientation, units :i32| (s, from + s.unit() * (GRID * units));

    match tile.tile_type {
        TileType::Straight | TileType::StraightDirectional |
        TileType::Signal | TileType::Sensor => {
            axis(o).iter().map(|s| at(c, *s, 1)).collect()
        },
        TileType::Crossing => {
            Orientation::ALL.iter().map(|s| at(c, *s, 1)).collect()
        },
        TileType::Curved => {
            vec![at(c, o, 1), at(c, o.prev(), 1)]
        },
        TileType::Block => {
            axis(o).iter().map(|s| at(c, *s, 3)).collect()
        },
        TileType::Switch => {
            vec![at(c, o, 1),
                 at(c, o.opposite(), 1),
                 at(c, diverging_side(o, tile.direction), 1)]
        },
        TileType::Cross => {
            let alt = c + o.unit() * TILE_SIZE;
            let dv = diverging_side(o, tile.direction);
            vec![at(alt, o, 1),
                 at(c, o.opposite(), 1),
                 at(c, dv, 1),
                 at(alt, dv.opposite(), 1)]
        },
    }
}

/// Compass sides on which the tile connects to track.
pub fn active_sides(tile :&Tile) -> Vec<Orientation> {
    let pts = edge_points(tile);
    Orientation::ALL.iter().filter(|s| pts[**s].is_some()).copied().collect()
}

/// Points just outside the tile's footprint, one per active side. Two tiles
/// are adjacent when these coincide.
pub fn edge_points(tile :&Tile) -> SideMap {
    let mut map = SideMap::default();
    for (side, p) in connectors(tile) {
        map[side] = Some(p);
    }
    map
}

/// Candidate centers for tiles connecting on each active side.
pub fn neighbor_points(tile :&Tile) -> SideMap {
    let mut map = SideMap::default();
    for (side, p) in connectors(tile) {
        map[side] = Some(p + side.unit() * GRID);
    }
    map
}

pub fn is_adjacent<'a>(a :&Tile, b :impl Into<Option<&'a Tile>>) -> bool {
    let b = match b.into() { Some(b) => b, None => return false };
    let theirs = connectors(b);
    connectors(a).iter().any(|(_, p)| theirs.iter().any(|(_, q)| p == q))
}

/// The side of `tile` at which `other` connects, if the two are adjacent.
pub fn connection_side<'a>(tile :&Tile, other :impl Into<Option<&'a Tile>>) -> Option<Orientation> {
    let other = other.into()?;
    let theirs = connectors(other);
    connectors(tile).into_iter()
        .find(|(_, p)| theirs.iter().any(|(_, q)| p == q))
        .map(|(side, _)| side)
}

fn connects_on<'a>(tile :&Tile, other :Option<&'a Tile>, side :Orientation) -> bool {
    let other = match other { Some(o) => o, None => return false };
    match edge_points(tile)[side] {
        Some(p) => {
            let found = edge_points(other).iter().any(|(_, q)| *q == Some(p));
            found && is_adjacent(tile, other)
        },
        None => false,
    }
}

/// `other` sits at the common entry of the straight and diverging routes.
pub fn is_switch_side<'a>(tile :&Tile, other :impl Into<Option<&'a Tile>>) -> bool {
    tile.tile_type.is_turnout() && connects_on(tile, other.into(), tile.orientation)
}

pub fn is_straight_side<'a>(tile :&Tile, other :impl Into<Option<&'a Tile>>) -> bool {
    tile.tile_type.is_turnout() && connects_on(tile, other.into(), tile.orientation.opposite())
}

pub fn is_diverging_side<'a>(tile :&Tile, other :impl Into<Option<&'a Tile>>) -> bool {
    tile.tile_type.is_turnout() &&
        connects_on(tile, other.into(), diverging_side(tile.orientation, tile.direction))
}

/// For one-way track: true when the arrow of `tile` points at `other`.
pub fn is_arrow_direction<'a>(tile :&Tile, other :impl Into<Option<&'a Tile>>) -> bool {
    tile.tile_type == TileType::StraightDirectional &&
        connects_on(tile, other.into(), tile.orientation)
}

pub fn log_topology(tile :&Tile) {
    let edges = edge_points(tile);
    let neighbors = neighbor_points(tile);
    for side in Orientation::ALL.iter() {
        if let (Some(e), Some(n)) = (edges[*side], neighbors[*side]) {
            debug!("{} {} side {}: edge {} neighbor {}", tile.tile_type, tile.id, side,
                   fmt_pt(e), fmt_pt(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(t :TileType, o :Orientation, d :Direction, x :i32, y :i32) -> Tile {
        Tile::new(format!("{}-test", t.prefix()), t, o, d, pt(x, y))
    }

    fn sides(map :&SideMap) -> Vec<(Orientation, Option<Pt>)> {
        map.iter().map(|(k, v)| (k, *v)).collect()
    }

    fn straight(o :Orientation, x :i32, y :i32) -> Tile {
        tile(TileType::Straight, o, Direction::Center, x, y)
    }

    #[test]
    fn straight_east_points() {
        let t = straight(Orientation::East, 100, 100);
        let e = edge_points(&t);
        let n = neighbor_points(&t);
        assert_eq!(e[Orientation::East], Some(pt(120, 100)));
        assert_eq!(e[Orientation::West], Some(pt(80, 100)));
        assert_eq!(e[Orientation::North], None);
        assert_eq!(e[Orientation::South], None);
        assert_eq!(n[Orientation::East], Some(pt(140, 100)));
        assert_eq!(n[Orientation::West], Some(pt(60, 100)));
        assert_eq!(active_sides(&t), vec![Orientation::East, Orientation::West]);
    }

    #[test]
    fn straight_north_is_vertical() {
        let t = straight(Orientation::North, 100, 100);
        assert_eq!(active_sides(&t), vec![Orientation::South, Orientation::North]);
        assert_eq!(edge_points(&t)[Orientation::North], Some(pt(100, 80)));
        assert_eq!(neighbor_points(&t)[Orientation::South], Some(pt(100, 140)));
    }

    #[test]
    fn signal_and_sensor_behave_like_straight() {
        for t in [TileType::Signal, TileType::Sensor, TileType::StraightDirectional].iter() {
            let s = tile(*t, Orientation::West, Direction::Center, 100, 100);
            assert_eq!(sides(&edge_points(&s)), sides(&edge_points(&straight(Orientation::West, 100, 100))));
        }
    }

    #[test]
    fn crossing_has_four_sides() {
        let t = tile(TileType::Crossing, Orientation::East, Direction::Center, 100, 100);
        let e = edge_points(&t);
        assert_eq!(active_sides(&t).len(), 4);
        assert_eq!(e[Orientation::North], Some(pt(100, 80)));
        assert_eq!(e[Orientation::South], Some(pt(100, 120)));
        assert_eq!(neighbor_points(&t)[Orientation::West], Some(pt(60, 100)));
    }

    #[test]
    fn curved_uses_consecutive_sides() {
        let expect = [
            (Orientation::East, [Orientation::East, Orientation::North]),
            (Orientation::South, [Orientation::East, Orientation::South]),
            (Orientation::West, [Orientation::South, Orientation::West]),
            (Orientation::North, [Orientation::West, Orientation::North]),
        ];
        for (o, sides) in expect.iter() {
            let t = tile(TileType::Curved, *o, Direction::Center, 100, 100);
            assert!(t.tile_type.is_diagonal());
            assert_eq!(active_sides(&t), sides.to_vec(), "curve {}", o);
        }
        let t = tile(TileType::Curved, Orientation::East, Direction::Center, 100, 100);
        assert_eq!(neighbor_points(&t)[Orientation::North], Some(pt(100, 60)));
    }

    #[test]
    fn switch_east_right() {
        let t = tile(TileType::Switch, Orientation::East, Direction::Right, 100, 100);
        let e = edge_points(&t);
        assert_eq!(e[Orientation::East], Some(pt(120, 100)));
        assert_eq!(e[Orientation::West], Some(pt(80, 100)));
        assert_eq!(e[Orientation::North], Some(pt(100, 80)));
        assert_eq!(e[Orientation::South], None);
        assert_eq!(neighbor_points(&t)[Orientation::North], Some(pt(100, 60)));

        let diverging = straight(Orientation::North, 100, 60);
        let switch_side = straight(Orientation::East, 140, 100);
        let straight_side = straight(Orientation::East, 60, 100);
        assert!(is_diverging_side(&t, &diverging));
        assert!(!is_diverging_side(&t, &switch_side));
        assert!(is_switch_side(&t, &switch_side));
        assert!(!is_switch_side(&t, &straight_side));
        assert!(is_straight_side(&t, &straight_side));
        assert!(!is_straight_side(&t, &diverging));
    }

    #[test]
    fn diverging_table() {
        use Orientation::*;
        let expect = [
            (East, South, North), (South, West, East),
            (West, North, South), (North, East, West),
        ];
        for (o, left, right) in expect.iter() {
            assert_eq!(diverging_side(*o, Direction::Left), *left);
            assert_eq!(diverging_side(*o, Direction::Right), *right);
            assert_eq!(diverging_side(*o, Direction::Center), *right);
        }
    }

    #[test]
    fn switch_left_picks_other_branch() {
        let t = tile(TileType::Switch, Orientation::North, Direction::Left, 100, 100);
        assert_eq!(active_sides(&t), vec![Orientation::East, Orientation::South, Orientation::North]);
        let east = straight(Orientation::East, 140, 100);
        let west = straight(Orientation::East, 60, 100);
        assert!(is_diverging_side(&t, &east));
        assert!(!is_adjacent(&t, &west));
    }

    #[test]
    fn cross_spans_two_cells() {
        let t = tile(TileType::Cross, Orientation::East, Direction::Right, 100, 100);
        let e = edge_points(&t);
        let n = neighbor_points(&t);
        assert_eq!(e[Orientation::East], Some(pt(160, 100)));
        assert_eq!(n[Orientation::East], Some(pt(180, 100)));
        assert_eq!(e[Orientation::West], Some(pt(80, 100)));
        assert_eq!(n[Orientation::West], Some(pt(60, 100)));
        // right: diverging north from the center cell, south exit from the alt cell
        assert_eq!(e[Orientation::North], Some(pt(100, 80)));
        assert_eq!(e[Orientation::South], Some(pt(140, 120)));
        assert_eq!(n[Orientation::South], Some(pt(140, 140)));

        let l = tile(TileType::Cross, Orientation::East, Direction::Left, 100, 100);
        assert_eq!(edge_points(&l)[Orientation::South], Some(pt(100, 120)));
        assert_eq!(edge_points(&l)[Orientation::North], Some(pt(140, 80)));
    }

    #[test]
    fn cross_side_roles() {
        let t = tile(TileType::Cross, Orientation::East, Direction::Left, 100, 100);
        let beyond_alt = straight(Orientation::East, 180, 100);
        let behind = straight(Orientation::East, 60, 100);
        let below = straight(Orientation::North, 100, 140);
        let above_alt = straight(Orientation::North, 140, 60);
        assert!(is_switch_side(&t, &beyond_alt));
        assert!(is_straight_side(&t, &behind));
        assert!(is_diverging_side(&t, &below));
        assert!(is_adjacent(&t, &above_alt));
        assert!(!is_diverging_side(&t, &above_alt));
        assert!(!is_switch_side(&t, &above_alt));
        assert!(!is_straight_side(&t, &above_alt));
    }

    #[test]
    fn block_points() {
        let b = tile(TileType::Block, Orientation::East, Direction::Center, 200, 200);
        let e = edge_points(&b);
        let n = neighbor_points(&b);
        assert_eq!(e[Orientation::East], Some(pt(260, 200)));
        assert_eq!(e[Orientation::West], Some(pt(140, 200)));
        assert_eq!(n[Orientation::East], Some(pt(280, 200)));
        assert_eq!(n[Orientation::West], Some(pt(120, 200)));
        assert_eq!(active_sides(&b).len(), 2);
    }

    #[test]
    fn adjacency_needs_shared_edge() {
        let a = straight(Orientation::East, 100, 100);
        let b = straight(Orientation::East, 140, 100);
        let c = straight(Orientation::North, 140, 100);
        let d = straight(Orientation::East, 180, 100);
        assert!(is_adjacent(&a, &b));
        assert!(is_adjacent(&b, &a));
        assert!(!is_adjacent(&a, &c));
        assert!(!is_adjacent(&a, &d));
        assert_eq!(connection_side(&a, &b), Some(Orientation::East));
        assert_eq!(connection_side(&b, &a), Some(Orientation::West));
        assert_eq!(connection_side(&a, &c), None);
    }

    #[test]
    fn adjacency_ignores_orientation_match() {
        let curve = tile(TileType::Curved, Orientation::East, Direction::Center, 100, 100);
        let above = straight(Orientation::North, 100, 60);
        let right = straight(Orientation::West, 140, 100);
        assert!(is_adjacent(&curve, &above));
        assert!(is_adjacent(&curve, &right));
    }

    #[test]
    fn absent_other_never_matches() {
        let t = tile(TileType::Switch, Orientation::East, Direction::Left, 100, 100);
        assert!(!is_adjacent(&t, None));
        assert!(!is_switch_side(&t, None));
        assert!(!is_straight_side(&t, None));
        assert!(!is_diverging_side(&t, None));
        assert!(!is_arrow_direction(&t, None));
        assert_eq!(connection_side(&t, None), None);
    }

    #[test]
    fn plain_track_has_no_turnout_sides() {
        let a = straight(Orientation::East, 100, 100);
        let b = straight(Orientation::East, 140, 100);
        assert!(!is_switch_side(&a, &b));
        assert!(!is_straight_side(&b, &a));
    }

    #[test]
    fn arrow_points_along_orientation() {
        let one_way = tile(TileType::StraightDirectional, Orientation::East, Direction::Center, 100, 100);
        let ahead = straight(Orientation::East, 140, 100);
        let behind = straight(Orientation::East, 60, 100);
        assert!(is_arrow_direction(&one_way, &ahead));
        assert!(!is_arrow_direction(&one_way, &behind));

        let plain = straight(Orientation::East, 100, 100);
        assert!(!is_arrow_direction(&plain, &ahead));
    }
}
