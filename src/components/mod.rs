//! UI components grouped by feature domain.
pub mod common;

mod caption_list;
mod title_bar;
mod status_bar;

pub use caption_list::CaptionList;
pub use title_bar::TitleBar;
pub use status_bar::StatusBar;
