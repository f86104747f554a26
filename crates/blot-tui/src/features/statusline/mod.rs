//! One-line status bar: last operation message plus a busy spinner.

pub mod render;
pub mod state;

pub use render::render_status_line;
pub use state::StatusState;
