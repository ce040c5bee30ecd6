use crate::core::{Cell, Direction, MoveOutcome, Occupant, WarehouseGrid};

/// The single transition of the warehouse state machine. Mutates the grid
/// in place on success; a Blocked outcome leaves every slot untouched.
pub fn attempt_move(grid: &mut WarehouseGrid, direction: Direction) -> MoveOutcome {
    let mover = grid.mover_position();
    let adjacent = mover.position_towards(direction, 1);

    if !grid.is_in_bounds(adjacent) {
        return MoveOutcome::Blocked { direction, mover };
    }

    match grid.occupant(adjacent) {
        None => {
            if !grid.cell(adjacent).can_be_covered() {
                return MoveOutcome::Blocked { direction, mover };
            }
            grid.relocate(mover, adjacent);
            MoveOutcome::SteppedOnly {
                direction,
                mover: adjacent,
            }
        }
        Some(Occupant::Box) => {
            let beyond = mover.position_towards(direction, 2);
            let push_legal = grid.is_in_bounds(beyond)
                && grid.cell(beyond).can_be_covered()
                && grid.occupant(beyond).is_none();
            if !push_legal {
                return MoveOutcome::Blocked { direction, mover };
            }

            // Box first, then the mover steps into its vacated cell
            grid.relocate(adjacent, beyond);
            grid.relocate(mover, adjacent);

            // A step can never cover a new goal, so the win scan only
            // runs when a box just landed on one.
            if grid.cell(beyond) == Cell::Goal && grid.all_goals_covered() {
                MoveOutcome::PushedAndWon {
                    direction,
                    mover: adjacent,
                    box_from: adjacent,
                    box_to: beyond,
                }
            } else {
                MoveOutcome::Pushed {
                    direction,
                    mover: adjacent,
                    box_from: adjacent,
                    box_to: beyond,
                }
            }
        }
        // Single mover by construction, nothing else can be adjacent.
        Some(Occupant::Mover) => MoveOutcome::Blocked { direction, mover },
    }
}
