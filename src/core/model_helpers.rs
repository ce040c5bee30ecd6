use crate::core::{Cell, Direction, Position};

impl Position {
    /// Position `offset` cells away along `direction`. Pure offset
    /// arithmetic, no bounds check; callers validate through the grid.
    pub fn position_towards(&self, direction: Direction, offset: i32) -> Position {
        match direction {
            Direction::Up => Position { x: self.x, y: self.y - offset },
            Direction::Down => Position { x: self.x, y: self.y + offset },
            Direction::Left => Position { x: self.x - offset, y: self.y },
            Direction::Right => Position { x: self.x + offset, y: self.y },
        }
    }
}

impl Cell {
    /// Whether a box or the mover may stand on this terrain.
    pub fn can_be_covered(&self) -> bool {
        match self {
            Cell::Wall => false,
            Cell::Goal | Cell::Floor => true,
        }
    }
}

impl Direction {
    pub fn all_directions() -> Vec<Direction> {
        vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_position_towards_offsets_one_axis() {
        let pos = Position { x: 3, y: 4 };
        assert_eq!(pos.position_towards(Direction::Right, 2), Position { x: 5, y: 4 });
        assert_eq!(pos.position_towards(Direction::Left, 1), Position { x: 2, y: 4 });
        assert_eq!(pos.position_towards(Direction::Up, 1), Position { x: 3, y: 3 });
        assert_eq!(pos.position_towards(Direction::Down, 3), Position { x: 3, y: 7 });
    }
}
