/// Static terrain, fixed at parse time. Exactly one per coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Goal,
    Floor,
}

/// Dynamic content of a coordinate. An empty coordinate holds no occupant,
/// so the grid stores `Option<Occupant>` per slot. Whether a box sits on a
/// goal is derived from the terrain underneath it, never stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Box,
    Mover,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Result of one attempted move. Blocked still carries the direction so a
/// frontend can face the mover and play a rejection cue without a mutation
/// having happened.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveOutcome {
    Blocked {
        direction: Direction,
        mover: Position,
    },
    SteppedOnly {
        direction: Direction,
        mover: Position,
    },
    Pushed {
        direction: Direction,
        mover: Position,
        box_from: Position,
        box_to: Position,
    },
    PushedAndWon {
        direction: Direction,
        mover: Position,
        box_from: Position,
        box_to: Position,
    },
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GridError {
    OutOfBounds(Position),
    MalformedLevel(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds(pos) => {
                write!(f, "position ({},{}) is outside the warehouse", pos.x, pos.y)
            }
            GridError::MalformedLevel(reason) => write!(f, "malformed level: {}", reason),
        }
    }
}

impl std::error::Error for GridError {}
