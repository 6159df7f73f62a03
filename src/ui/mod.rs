//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]**: application state, keyboard event loop, settings input mode
//! - **[`panes`]**: stateless render functions for each visible pane (controls,
//!   bars, pseudocode, status bar)
//! - **[`pseudocode`]**: listings and the operation-to-line mapping
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::playback::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod pseudocode;
pub mod theme;

pub use app::App;
