//! Playback of algorithm runs
//!
//! - [`controller`]: the [`Controller`] state machine (Idle / Running /
//!   Paused / Finished) and the [`Run`] it owns
//! - [`settings`]: user-adjustable [`Settings`] (algorithm, size, speed,
//!   target) and text input parsing
//!
//! # Consumption Modes
//!
//! ```text
//! start()  ─► Running ──poll(now)──► pull ─► schedule ─┐
//!                ▲                                       │
//!                └───────────────────────────────────────┘
//! step()   ─► pull exactly one ─► Paused (or Finished)
//! reset()  ─► drop run, new base array ─► Idle
//! ```
//!
//! Every applied operation is published as a [`Snapshot`] and can be drained
//! with [`Controller::take_snapshots`].

pub mod controller;
pub mod settings;

pub use controller::{Controller, Phase, Run, Snapshot, TimerId};
pub use settings::{Field, Settings};
