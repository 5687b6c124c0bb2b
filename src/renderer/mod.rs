//! macroquad rendering module
//!
//! `layout` holds window-independent geometry and text; `screen` draws.

pub mod layout;
pub mod screen;

pub use screen::{Assets, ScreenRenderer, load_font, load_sprite};
