//! Terminal UI: a game view that reacts to engine events.

mod app;
mod game_view;

pub use app::App;
