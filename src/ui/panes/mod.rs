//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart with highlight coloring
//! - [`header`]: algorithm name, counters and speed
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function that only reads
//! the data it is given.

pub mod bars;
pub mod header;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use header::{render_header, HeaderRenderData};
pub use status::{render_status_bar, PlayState};
