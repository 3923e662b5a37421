//! UI screens.

mod app;
mod client_screen;
mod utils;

pub use app::App;
pub use client_screen::{ClientScreen, Destination};
