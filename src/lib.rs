//! # Introduction
//!
//! algotty animates classic algorithms in the terminal.  Each algorithm is an
//! instrumented generator that yields one [`operation::Operation`] per
//! observable step; a playback controller pulls those operations on a timer
//! or one at a time, and a [ratatui](https://docs.rs/ratatui) UI draws the
//! array as bars next to the algorithm's pseudocode.
//!
//! ## Pipeline
//!
//! ```text
//! Settings → Base array → Generator → Operations → Controller → Snapshots → TUI
//! ```
//!
//! 1. [`array`]: the base array and its random generation.
//! 2. [`algorithms`]: Bubble, Selection, Insertion, Merge and Quick sort plus
//!    Subset Sum, each as a lazy, resumable [`algorithms::Generator`].
//! 3. [`operation`]: the events a generator yields, with status texts.
//! 4. [`playback`]: the Idle/Running/Paused/Finished state machine with
//!    start, pause, step, reset and randomize.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 6. [`errors`]: conditions signaled to the user.

pub mod algorithms;
pub mod array;
pub mod errors;
pub mod operation;
pub mod playback;
pub mod ui;
