//! Terminal front end: reads state from the engine, forwards column
//! selections into it, and owns all transient visual state.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
