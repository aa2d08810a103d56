#![warn(missing_docs)]

//! # bubbletea-visual-timer
//!
//! A visual countdown timer component for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications. The timer draws a bar (and an optional remaining-time label)
//! inside a fixed frame, animates it as time elapses, and fires exactly once
//! when the countdown reaches zero.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture pattern with `init()`, `update()`
//! and `view()`. Ticks are ordinary bubbletea messages: [`timer::Model::start`]
//! returns the command that schedules the first one, and every tick processed by
//! [`timer::Model::update`] schedules the next until the timer fires or is
//! stopped.
//!
//! ## Features
//!
//! - **Bar animation styles**: straight, backwards, and reflection
//! - **Styling at any time**: colors, corner radius, thickness, padding, caps
//! - **Deterministic cancellation**: stopping discards ticks already in flight
//! - **Weak delegates**: the timer never keeps its delegate alive
//! - **Auto-hide** when the timer fires
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_visual_timer::prelude::*;
//! use std::time::Duration;
//!
//! let mut timer = bar_new(
//!     BarAnimationStyle::Reflection,
//!     Rect::new(0, 0, 40, 7),
//!     Duration::from_secs(5),
//! );
//! timer.timer_shape_active_color = "#FF8800".to_string();
//! timer.autohide_when_fired = true;
//!
//! let _first_tick = timer.start();
//! assert!(timer.timer_is_active());
//!
//! timer.stop_and_hide();
//! assert!(timer.is_hidden());
//! assert_eq!(timer.time_remaining(), Duration::from_secs(5));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_visual_timer::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//! use std::time::Duration;
//!
//! struct App {
//!     timer: VisualTimer,
//!     finished: bool,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = bar_new(
//!             BarAnimationStyle::Straight,
//!             Rect::new(0, 0, 40, 7),
//!             Duration::from_secs(10),
//!         );
//!         let cmd = timer.start();
//!         (Self { timer, finished: false }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<TimerFiredMsg>().is_some() {
//!             self.finished = true;
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` level, individual ticks at `trace`. Install any logger to
//! see them.

pub mod bar;
mod canvas;
pub mod error;
pub mod style;
pub mod timer;

pub use bar::{new as bar_new, Bar};
pub use error::{Error, Result};
pub use style::{BarAnimationStyle, CapStyle, Rect, TimerStyle};
pub use timer::{
    create as timer_create, create_with_options as timer_create_with_options,
    FiredMsg as TimerFiredMsg, Model as VisualTimer, Shape, TickMsg as TimerTickMsg,
    TimerDelegate, TimerOption, TimerState,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_visual_timer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bar::{active_segments, new as bar_new, Bar};
    pub use crate::error::{Error, Result};
    pub use crate::style::{BarAnimationStyle, CapStyle, Rect, TimerStyle, CLEAR};
    pub use crate::timer::{
        create as timer_create, create_with_options as timer_create_with_options,
        with_active_color, with_autohide, with_background_color, with_corner_radius,
        with_inactive_color, with_interval, with_label_color, without_label,
        FiredMsg as TimerFiredMsg, Model as VisualTimer, TickMsg as TimerTickMsg, TimerDelegate,
        TimerOption, TimerState,
    };
}
