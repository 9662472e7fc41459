//! Caption timeline
//!
//! The pure core (`viewport`, `mapper`, `interaction`, `render`, `sync`)
//! knows nothing about the UI toolkit; `canvas` and `panel` host it in Dioxus.

mod canvas;
pub mod interaction;
pub mod mapper;
mod panel;
mod playback_controls;
pub mod render;
pub mod sync;
pub mod viewport;

pub use interaction::{MouseInteraction, MouseSelection, PointerButton, PointerEvent, TimelineEvent};
pub use mapper::CoordinateMapper;
pub use panel::TimelinePanel;
pub use render::{render, DrawCommand, Scene};
pub use sync::PlayheadSynchronizer;
pub use viewport::{ScrollState, Viewport};
