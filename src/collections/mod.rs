pub mod grid;
pub mod line;

pub use self::grid::Grid;
pub use self::line::Line;
