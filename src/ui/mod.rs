//! Terminal UI for playing Drop Token with the arrow keys.

mod app;
mod board_widget;
mod game_view;

pub use app::App;
