//! Terminal UI for heft.
//!
//! - [render]: the frame layout and the ranked table
//! - [widgets]: status line, help line and the confirm popup

pub mod render;
pub mod widgets;

pub use render::{ScreenAreas, layout_areas, render};
