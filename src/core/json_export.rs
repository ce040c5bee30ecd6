use crate::core::{GridError, WarehouseGrid};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a warehouse: the level number plus the XSB
/// rows. Enough to reconstruct the grid, so it doubles as a save format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub level_number: usize,
    pub rows: Vec<String>,
}

impl GridSnapshot {
    pub fn of(grid: &WarehouseGrid) -> GridSnapshot {
        GridSnapshot {
            level_number: grid.level_number(),
            rows: grid
                .to_xsb_string()
                .lines()
                .map(|row| row.to_string())
                .collect(),
        }
    }

    pub fn restore(&self) -> Result<WarehouseGrid, GridError> {
        WarehouseGrid::parse(&self.rows.join("\n"), self.level_number)
    }
}

pub fn get_json_data(grid: &WarehouseGrid) -> String {
    let snapshot = GridSnapshot::of(grid);
    serde_json::to_string_pretty(&snapshot).unwrap()
}

pub fn from_json_data(data: &str) -> Result<WarehouseGrid, Box<dyn std::error::Error>> {
    let snapshot: GridSnapshot = serde_json::from_str(data)?;
    Ok(snapshot.restore()?)
}
