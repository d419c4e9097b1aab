/// Compass direction of a canvas edge.
///
/// The numeric codes are what generated application code passes around:
/// north-ish directions are positive, south-ish negative, and 0 means none.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Code used when no edge was reached.
    pub const NONE_CODE: i32 = 0;

    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const fn code(self) -> i32 {
        match self {
            Direction::North => 1,
            Direction::NorthEast => 2,
            Direction::East => 3,
            Direction::SouthEast => 4,
            Direction::South => -1,
            Direction::SouthWest => -2,
            Direction::West => -3,
            Direction::NorthWest => -4,
        }
    }

    /// Decodes an edge code. `0` and out-of-range codes give `None`.
    pub fn from_code(code: i32) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Combines per-edge overflow flags into one direction.
    ///
    /// West/east take precedence in forming diagonals, so west+east+north is
    /// reported as north-west.
    pub fn from_edges(north: bool, east: bool, south: bool, west: bool) -> Option<Direction> {
        let d = if west {
            if north {
                Direction::NorthWest
            } else if south {
                Direction::SouthWest
            } else {
                Direction::West
            }
        } else if east {
            if north {
                Direction::NorthEast
            } else if south {
                Direction::SouthEast
            } else {
                Direction::East
            }
        } else if north {
            Direction::North
        } else if south {
            Direction::South
        } else {
            return None;
        };
        Some(d)
    }
}
