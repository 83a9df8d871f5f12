//! Terminal UI: a 3x3 grid with a movable cursor, the running score, and
//! round controls.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
