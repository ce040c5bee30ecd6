use crate::core::{Cell, GridError, Occupant, Position};

/// The warehouse: static terrain and dynamic occupants held in two parallel
/// matrices of identical dimensions, plus the mover's cached coordinate.
/// Dimensions never change after parse; the cached mover coordinate always
/// names the slot whose occupant is `Occupant::Mover`.
pub struct WarehouseGrid {
    terrain: Vec<Vec<Cell>>,
    occupants: Vec<Vec<Option<Occupant>>>,
    mover: Position,
    level_number: usize,
}

impl WarehouseGrid {
    /// Parses an XSB level layout. Legend: '#' wall, '@' mover on floor,
    /// '+' mover on goal, '$' box on floor, '*' box on goal, '.' goal,
    /// anything else floor. Blank lines are skipped; short rows pad with
    /// floor up to the widest row, so every coordinate gets terrain.
    pub fn parse(layout: &str, level_number: usize) -> Result<WarehouseGrid, GridError> {
        let mut terrain: Vec<Vec<Cell>> = Vec::new();
        let mut occupants: Vec<Vec<Option<Occupant>>> = Vec::new();
        let mut mover: Option<Position> = None;
        let max_width = layout_lines(layout)
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        for line in layout_lines(layout) {
            let y = terrain.len() as i32;
            let mut terrain_row = Vec::with_capacity(max_width);
            let mut occupant_row = Vec::with_capacity(max_width);
            for (x, ch) in line.chars().enumerate() {
                let (cell, occupant) = match ch {
                    '#' => (Cell::Wall, None),
                    '.' => (Cell::Goal, None),
                    '$' => (Cell::Floor, Some(Occupant::Box)),
                    '*' => (Cell::Goal, Some(Occupant::Box)),
                    '@' | '+' => {
                        let pos = Position { x: x as i32, y };
                        if mover.replace(pos).is_some() {
                            return Err(GridError::MalformedLevel(
                                "more than one mover in layout".to_string(),
                            ));
                        }
                        let under = if ch == '+' { Cell::Goal } else { Cell::Floor };
                        (under, Some(Occupant::Mover))
                    }
                    _ => (Cell::Floor, None),
                };
                terrain_row.push(cell);
                occupant_row.push(occupant);
            }
            // Pad row to max width with Floor
            while terrain_row.len() < max_width {
                terrain_row.push(Cell::Floor);
                occupant_row.push(None);
            }
            terrain.push(terrain_row);
            occupants.push(occupant_row);
        }

        let Some(mover) = mover else {
            return Err(GridError::MalformedLevel("no mover in layout".to_string()));
        };

        Ok(WarehouseGrid {
            terrain,
            occupants,
            mover,
            level_number,
        })
    }

    pub fn height(&self) -> i32 {
        self.terrain.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.terrain.is_empty() {
            0
        } else {
            self.terrain[0].len() as i32
        }
    }

    pub fn level_number(&self) -> usize {
        self.level_number
    }

    pub fn mover_position(&self) -> Position {
        self.mover
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width() && pos.y >= 0 && pos.y < self.height()
    }

    pub fn terrain_at(&self, pos: Position) -> Result<Cell, GridError> {
        if !self.is_in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        Ok(self.cell(pos))
    }

    pub fn occupant_at(&self, pos: Position) -> Result<Option<Occupant>, GridError> {
        if !self.is_in_bounds(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        Ok(self.occupant(pos))
    }

    /// True only for floor terrain with nothing standing on it.
    pub fn is_free_place(&self, pos: Position) -> Result<bool, GridError> {
        Ok(self.terrain_at(pos)? == Cell::Floor && self.occupant(pos).is_none())
    }

    /// Moves whatever occupies `from` to `to`, clearing `from`. Callers
    /// guarantee `to` holds nothing live; the previous value is discarded.
    pub fn relocate_occupant(&mut self, from: Position, to: Position) -> Result<(), GridError> {
        if !self.is_in_bounds(from) {
            return Err(GridError::OutOfBounds(from));
        }
        if !self.is_in_bounds(to) {
            return Err(GridError::OutOfBounds(to));
        }
        self.relocate(from, to);
        Ok(())
    }

    // Unchecked variant for the move engine, which bounds-checks first.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        let moved = self.occupants[from.y as usize][from.x as usize].take();
        self.occupants[to.y as usize][to.x as usize] = moved;
        if moved == Some(Occupant::Mover) {
            self.mover = to;
        }
    }

    /// Canonical XSB character for one coordinate. A box reads '*' exactly
    /// when the cell under it is a goal.
    pub fn xsb_char(&self, pos: Position) -> Result<char, GridError> {
        let cell = self.terrain_at(pos)?;
        Ok(xsb_char_for(cell, self.occupant(pos)))
    }

    pub fn to_xsb_string(&self) -> String {
        let mut result = String::new();
        for (y, row) in self.terrain.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                result.push(xsb_char_for(cell, self.occupants[y][x]));
            }
            result.push('\n');
        }
        result
    }

    /// Scans every goal coordinate for a box, short-circuiting on the
    /// first uncovered goal. Only the push path calls this.
    pub fn all_goals_covered(&self) -> bool {
        for (y, row) in self.terrain.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Cell::Goal && self.occupants[y][x] != Some(Occupant::Box) {
                    return false;
                }
            }
        }
        true
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        let mut count = 0;
        for (y, row) in self.terrain.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Cell::Goal && self.occupants[y][x] == Some(Occupant::Box) {
                    count += 1;
                }
            }
        }
        count
    }

    // Unchecked lookups for the move engine, which bounds-checks first.
    pub(crate) fn cell(&self, pos: Position) -> Cell {
        self.terrain[pos.y as usize][pos.x as usize]
    }

    pub(crate) fn occupant(&self, pos: Position) -> Option<Occupant> {
        self.occupants[pos.y as usize][pos.x as usize]
    }
}

fn xsb_char_for(cell: Cell, occupant: Option<Occupant>) -> char {
    match (cell, occupant) {
        (Cell::Wall, _) => '#',
        (Cell::Goal, Some(Occupant::Box)) => '*',
        (Cell::Goal, Some(Occupant::Mover)) => '+',
        (Cell::Goal, None) => '.',
        (Cell::Floor, Some(Occupant::Box)) => '$',
        (Cell::Floor, Some(Occupant::Mover)) => '@',
        (Cell::Floor, None) => ' ',
    }
}

fn layout_lines(layout: &str) -> impl Iterator<Item = &str> {
    layout.lines().filter(|line| !line.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_rejects_layout_without_mover() {
        let result = WarehouseGrid::parse("####\n#$.#\n####", 0);
        assert!(matches!(result, Err(GridError::MalformedLevel(_))));
    }

    #[test]
    fn test_parse_rejects_layout_with_two_movers() {
        let result = WarehouseGrid::parse("#####\n#@$+#\n#####", 0);
        assert!(matches!(result, Err(GridError::MalformedLevel(_))));
    }

    #[test]
    fn test_parse_places_mover_on_goal_for_plus() {
        let grid = WarehouseGrid::parse("#+#", 3).unwrap();
        let mover = grid.mover_position();
        assert_eq!(mover, Position { x: 1, y: 0 });
        assert_eq!(grid.terrain_at(mover), Ok(Cell::Goal));
        assert_eq!(grid.occupant_at(mover), Ok(Some(Occupant::Mover)));
        assert_eq!(grid.level_number(), 3);
    }

    #[test]
    fn test_lookups_outside_grid_fail() {
        let mut grid = WarehouseGrid::parse("#@#", 0).unwrap();
        let outside = Position { x: 3, y: 0 };
        assert_eq!(grid.terrain_at(outside), Err(GridError::OutOfBounds(outside)));
        let negative = Position { x: -1, y: 0 };
        assert_eq!(grid.occupant_at(negative), Err(GridError::OutOfBounds(negative)));
        assert!(grid
            .relocate_occupant(grid.mover_position(), outside)
            .is_err());
    }

    #[test]
    fn test_free_place_needs_floor_and_no_occupant() {
        let grid = WarehouseGrid::parse("#@$. #", 0).unwrap();
        assert_eq!(grid.is_free_place(Position { x: 4, y: 0 }), Ok(true));
        // goal without a box is coverable but not free
        assert_eq!(grid.is_free_place(Position { x: 3, y: 0 }), Ok(false));
        assert_eq!(grid.is_free_place(Position { x: 2, y: 0 }), Ok(false));
        assert_eq!(grid.is_free_place(Position { x: 0, y: 0 }), Ok(false));
    }

    #[test]
    fn test_relocate_moves_mover_cache_with_mover() {
        let mut grid = WarehouseGrid::parse("#@ #", 0).unwrap();
        let from = grid.mover_position();
        let to = Position { x: 2, y: 0 };
        grid.relocate_occupant(from, to).unwrap();
        assert_eq!(grid.mover_position(), to);
        assert_eq!(grid.occupant_at(from), Ok(None));
        assert_eq!(grid.occupant_at(to), Ok(Some(Occupant::Mover)));
    }

    #[test]
    fn test_goal_accounting() {
        let grid = WarehouseGrid::parse("#@* .#", 0).unwrap();
        assert_eq!(grid.count_boxes_on_goals(), 1);
        assert!(!grid.all_goals_covered());

        let solved = WarehouseGrid::parse("#@* *#", 0).unwrap();
        assert_eq!(solved.count_boxes_on_goals(), 2);
        assert!(solved.all_goals_covered());
    }
}
