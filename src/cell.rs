use serde::{Deserialize, Serialize};

/// A single cave cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// `R` - impassable rock
    Rock,
    /// `.` - open floor
    Floor,
    /// `S` - where the explorer starts
    Start,
    /// `M` - the mirror pool, the goal
    MirrorPool,
}

impl Cell {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(Cell::Rock),
            '.' => Some(Cell::Floor),
            'S' => Some(Cell::Start),
            'M' => Some(Cell::MirrorPool),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Rock => 'R',
            Cell::Floor => '.',
            Cell::Start => 'S',
            Cell::MirrorPool => 'M',
        }
    }

    /// Cells the breadth-first search may expand into
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Floor | Cell::MirrorPool)
    }

    /// Cells the greedy walk may step onto. The mirror pool is not one of them.
    pub fn is_floor(self) -> bool {
        self == Cell::Floor
    }

    pub fn is_goal(self) -> bool {
        self == Cell::MirrorPool
    }
}
