mod json_export;
mod model_helpers;
mod models;
mod update;
mod warehouse;

pub use json_export::{from_json_data, get_json_data, GridSnapshot};
pub use models::{Cell, Direction, GridError, MoveOutcome, Occupant, Position};
pub use update::attempt_move;
pub use warehouse::WarehouseGrid;
