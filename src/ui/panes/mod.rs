//! TUI pane rendering modules
//!
//! Every pane is a stateless render function over data read from the
//! playback controller.
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as colored bars, plus the subset-sum running total
//! - [`code`]: pseudocode listing with the current line highlighted
//! - [`controls`]: algorithm/size/speed/target settings and the input editor
//! - [`status`]: status bar with keybindings and the phase badge

pub mod bars;
pub mod code;
pub mod controls;
pub mod status;

pub use bars::{render_bars_pane, BarColoring, BarRole, BarsView};
pub use code::render_code_pane;
pub use controls::{render_controls_bar, InputState};
pub use status::render_status_bar;
