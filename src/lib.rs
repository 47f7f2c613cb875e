pub mod angle;
pub mod canvas;
pub mod canvas_primitives;
pub mod config;
pub mod format;
pub mod geometry;
pub mod layout;
mod registry;
pub mod scene;
pub mod screen;
pub mod theme;
pub mod ticker;
pub mod time;
pub mod widget;

pub use canvas::Canvas;
pub use canvas_primitives::CanvasPrimitives;
pub use config::Config;
pub use screen::ClockScreen;
pub use theme::{Bgra, Theme};
pub use widget::Widget;
