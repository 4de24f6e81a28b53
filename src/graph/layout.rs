use crate::node::Position;

/// Nodes per grid row.
pub const GRID_COLUMNS: usize = 3;
pub const GRID_SPACING_X: f64 = 600.0;
pub const GRID_SPACING_Y: f64 = 400.0;
pub const GRID_ORIGIN: Position = Position::new(50.0, 50.0);

/// Places the node with zero-based `index` on a three-column grid.
pub fn grid_position(index: usize) -> Position {
    let row = index / GRID_COLUMNS;
    let col = index % GRID_COLUMNS;
    Position {
        x: col as f64 * GRID_SPACING_X + GRID_ORIGIN.x,
        y: row as f64 * GRID_SPACING_Y + GRID_ORIGIN.y,
    }
}
