//! Data models for the gallery client
//!
//! Wire types exchanged with the two endpoints, plus the locally selected file.

mod upload;
mod video;

pub use upload::*;
pub use video::*;
