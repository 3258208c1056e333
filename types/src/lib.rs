pub mod formatting;
pub mod ui;

pub use ui::{Color, WindowGeometry};
