//! Visual countdown timer component for Bubble Tea applications.
//!
//! A visual timer counts down from a configured duration and draws its progress
//! as a shape (currently a bar) inside a fixed frame. When the countdown reaches
//! zero the timer fires: it notifies its delegate exactly once, optionally hides
//! itself, and emits a [`FiredMsg`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_visual_timer::timer::create;
//! use bubbletea_visual_timer::style::{Rect, TimerStyle};
//! use std::time::Duration;
//!
//! let mut timer = create(TimerStyle::Bar, Rect::new(0, 0, 40, 7), Duration::from_secs(30))
//!     .expect("bar timers are supported");
//! assert!(!timer.timer_is_active());
//!
//! let _tick = timer.start();
//! assert!(timer.timer_is_active());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_visual_timer::bar;
//! use bubbletea_visual_timer::style::{BarAnimationStyle, Rect};
//! use bubbletea_visual_timer::timer::{FiredMsg, Model};
//! use std::time::Duration;
//!
//! struct MyApp {
//!     timer: Model,
//!     done: bool,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = bar::new(
//!             BarAnimationStyle::Straight,
//!             Rect::new(0, 0, 40, 7),
//!             Duration::from_secs(10),
//!         );
//!         let cmd = timer.start();
//!         (Self { timer, done: false }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(fired) = msg.downcast_ref::<FiredMsg>() {
//!             if fired.id == self.timer.id() {
//!                 self.done = true;
//!             }
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
//! # Delegates
//!
//! A delegate is registered as a weak reference. The timer never keeps it
//! alive; once the last strong reference is dropped, firing simply skips the
//! callback.
//!
//! ```rust
//! use bubbletea_visual_timer::timer::{Model, TimerDelegate};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! struct Counter(AtomicUsize);
//!
//! impl TimerDelegate for Counter {
//!     fn visual_timer_fired(&self, _timer: &Model) {
//!         self.0.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let counter = Arc::new(Counter(AtomicUsize::new(0)));
//! let mut timer = Model::default();
//! timer.set_delegate(&counter);
//! ```

use crate::bar::Bar;
use crate::canvas::{Canvas, Layer, Palette};
use crate::error::{non_negative, Error, Result};
use crate::style::{
    BarAnimationStyle, CapStyle, Rect, TimerStyle, DEFAULT_ACTIVE_COLOR,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_INACTIVE_COLOR, DEFAULT_LABEL_COLOR,
};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use log::{debug, trace};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Ticks per second used when no interval is configured.
pub const FPS: u64 = 30;

/// Default tick interval (1/30 s).
pub const DEFAULT_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / FPS);

const DEFAULT_FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 40,
    height: 7,
};

/// Formats the remaining time for the timer label.
///
/// Time is rounded up so the label reads `0.0s` only once the timer is done.
/// Below a minute it shows tenths of a second; above, `m:ss` or `h:mm:ss`.
fn format_remaining(d: Duration) -> String {
    let millis = d.as_millis();

    if millis < 60_000 {
        let tenths = (millis + 99) / 100;
        return format!("{}.{}s", tenths / 10, tenths % 10);
    }

    let secs = (millis + 999) / 1000;
    let (hours, minutes, secs) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Message sent on every timer tick to advance the countdown.
///
/// Tick messages carry the timer's ID and the generation of the schedule that
/// produced them. Starting or stopping a timer moves it to a new generation, so
/// ticks that were already in flight are discarded when they arrive.
///
/// Each tick also carries the instant it was delivered. The countdown is
/// measured against that instant, so late ticks never slow the timer down.
///
/// Hosts that drive time themselves (tests, custom loops) can obtain a tick for
/// the current schedule with [`Model::tick_msg`] or [`Model::tick_msg_at`].
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The unique identifier of the timer this tick belongs to.
    pub id: i64,
    tag: i64,
    at: Instant,
}

/// Wall-clock anchor of the run in progress.
#[derive(Debug, Clone, Copy)]
struct RunClock {
    started: Instant,
    remaining_at_start: Duration,
    last_tick: Instant,
}

/// Message sent once when a timer's countdown reaches zero.
///
/// # Examples
///
/// ```rust
/// use bubbletea_visual_timer::timer::{FiredMsg, Model};
/// use bubbletea_rs::Msg;
///
/// fn handle(timer: &Model, msg: &Msg) -> bool {
///     msg.downcast_ref::<FiredMsg>()
///         .map(|fired| fired.id == timer.id())
///         .unwrap_or(false)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FiredMsg {
    /// The unique identifier of the timer that fired.
    pub id: i64,
}

/// Receives events from a visual timer.
///
/// Delegates are held weakly, so implementors must be shareable across the
/// runtime's threads.
pub trait TimerDelegate: Send + Sync {
    /// Called exactly once per completed run, after the timer has become
    /// inactive (and hidden, when auto-hide is set).
    fn visual_timer_fired(&self, timer: &Model);
}

/// Run state of a visual timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerState {
    /// Not started, or stopped. Remaining time equals the configured duration.
    #[default]
    Idle,
    /// Counting down.
    Running,
    /// The last run reached zero. A new `start` begins another run.
    Fired,
}

/// Shape drawn by a visual timer, selected at construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Shape {
    /// Horizontal bar.
    Bar(Bar),
}

impl Shape {
    fn for_style(style: TimerStyle) -> Result<Self> {
        match style {
            TimerStyle::Bar => Ok(Shape::Bar(Bar::default())),
        }
    }

    fn draw(&self, canvas: &mut Canvas, fraction: f64, label: Option<&str>) {
        match self {
            Shape::Bar(bar) => {
                let layout = bar.layout(canvas.width(), canvas.height(), label.is_some());
                if let (Some(row), Some(text)) = (layout.label_row, label) {
                    canvas.put_centered(row, text, Layer::Label);
                }
                bar.paint(canvas, fraction, &layout);
            }
        }
    }
}

/// Configuration options for visual timers.
///
/// Options are applied in order by [`create_with_options`], following the same
/// option pattern as the other components of this crate.
#[derive(Debug, Clone)]
pub enum TimerOption {
    /// Sets the tick interval. Must not be zero.
    WithInterval(Duration),
    /// Sets the background view color.
    WithBackgroundColor(String),
    /// Sets the background view corner radius.
    WithCornerRadius(f64),
    /// Sets the color of the inactive part of the shape.
    WithInactiveColor(String),
    /// Sets the color of the animated part of the shape.
    WithActiveColor(String),
    /// Hides the remaining-time label.
    WithoutLabel,
    /// Sets the label color.
    WithLabelColor(String),
    /// Hides the view when the timer fires.
    WithAutohide,
}

impl TimerOption {
    fn apply(&self, m: &mut Model) -> Result<()> {
        match self {
            TimerOption::WithInterval(interval) => m.set_interval(*interval)?,
            TimerOption::WithBackgroundColor(color) => m.background_view_color = color.clone(),
            TimerOption::WithCornerRadius(radius) => m.set_background_view_corner_radius(*radius)?,
            TimerOption::WithInactiveColor(color) => m.timer_shape_inactive_color = color.clone(),
            TimerOption::WithActiveColor(color) => m.timer_shape_active_color = color.clone(),
            TimerOption::WithoutLabel => m.show_timer_label = false,
            TimerOption::WithLabelColor(color) => m.timer_label_color = color.clone(),
            TimerOption::WithAutohide => m.autohide_when_fired = true,
        }
        Ok(())
    }
}

/// Sets the tick interval. A zero interval makes construction fail.
pub fn with_interval(interval: Duration) -> TimerOption {
    TimerOption::WithInterval(interval)
}

/// Sets the background view color. Use [`crate::style::CLEAR`] for none.
pub fn with_background_color(color: impl Into<String>) -> TimerOption {
    TimerOption::WithBackgroundColor(color.into())
}

/// Sets the background view corner radius, in columns.
pub fn with_corner_radius(radius: f64) -> TimerOption {
    TimerOption::WithCornerRadius(radius)
}

/// Sets the inactive shape color.
pub fn with_inactive_color(color: impl Into<String>) -> TimerOption {
    TimerOption::WithInactiveColor(color.into())
}

/// Sets the active shape color.
pub fn with_active_color(color: impl Into<String>) -> TimerOption {
    TimerOption::WithActiveColor(color.into())
}

/// Hides the remaining-time label.
pub fn without_label() -> TimerOption {
    TimerOption::WithoutLabel
}

/// Sets the label color.
pub fn with_label_color(color: impl Into<String>) -> TimerOption {
    TimerOption::WithLabelColor(color.into())
}

/// Hides the view when the timer fires.
pub fn with_autohide() -> TimerOption {
    TimerOption::WithAutohide
}

/// Visual countdown timer.
///
/// The model owns the countdown (configured duration, remaining time, run
/// state), the styling of its background, shape and label, and the shape
/// renderer. All state changes happen either in direct calls or in
/// [`Model::update`], on the runtime's single update loop.
///
/// # State Machine
///
/// - `Idle` → `Running` on [`Model::start`]
/// - `Running` → `Idle` on [`Model::stop_timer_view`] or [`Model::stop_and_hide`]
/// - `Running` → `Fired` when the remaining time reaches zero
/// - `Fired` → `Running` on [`Model::start`], beginning a new run
///
/// # Examples
///
/// ```rust
/// use bubbletea_visual_timer::timer::{create_with_options, with_interval, TimerState};
/// use bubbletea_visual_timer::style::{Rect, TimerStyle};
/// use std::time::Duration;
///
/// let mut timer = create_with_options(
///     TimerStyle::Bar,
///     Rect::new(0, 0, 40, 7),
///     Duration::from_secs(2),
///     &[with_interval(Duration::from_secs(1))],
/// )
/// .unwrap();
///
/// let _ = timer.start();
/// timer.update(Box::new(timer.tick_msg()));
/// assert_eq!(timer.time_remaining(), Duration::from_secs(1));
///
/// timer.update(Box::new(timer.tick_msg()));
/// assert_eq!(timer.state(), TimerState::Fired);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Color of the containing view around the shape.
    pub background_view_color: String,
    /// Color of the shape's inactive track.
    pub timer_shape_inactive_color: String,
    /// Color of the shape's animated part.
    pub timer_shape_active_color: String,
    /// Whether to draw the remaining-time label.
    pub show_timer_label: bool,
    /// Color of the label text.
    pub timer_label_color: String,
    /// Whether to hide the view once the timer fires.
    pub autohide_when_fired: bool,

    id: i64,
    tag: i64,
    interval: Duration,
    clock: Option<RunClock>,
    style: TimerStyle,
    shape: Shape,
    frame: Rect,
    duration: Duration,
    time_remaining: Duration,
    state: TimerState,
    hidden: bool,
    background_view_corner_radius: f64,
    delegate: Option<Weak<dyn TimerDelegate>>,
}

/// Constructs a timer of the given style.
///
/// # Errors
///
/// Returns [`Error::UnsupportedStyle`] if `style` has no implementation.
pub fn create(style: TimerStyle, frame: Rect, time_remaining: Duration) -> Result<Model> {
    create_with_options(style, frame, time_remaining, &[])
}

/// Constructs a timer of the given style and applies `opts` in order.
///
/// # Errors
///
/// Returns [`Error::UnsupportedStyle`] for an unimplemented style and
/// [`Error::InvalidStyle`] when an option carries an invalid value.
pub fn create_with_options(
    style: TimerStyle,
    frame: Rect,
    time_remaining: Duration,
    opts: &[TimerOption],
) -> Result<Model> {
    let shape = Shape::for_style(style)?;
    let mut m = Model::with_shape(style, shape, frame, time_remaining);
    for opt in opts {
        opt.apply(&mut m)?;
    }
    Ok(m)
}

impl Model {
    pub(crate) fn with_shape(
        style: TimerStyle,
        shape: Shape,
        frame: Rect,
        time_remaining: Duration,
    ) -> Self {
        Self {
            background_view_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            timer_shape_inactive_color: DEFAULT_INACTIVE_COLOR.to_string(),
            timer_shape_active_color: DEFAULT_ACTIVE_COLOR.to_string(),
            show_timer_label: true,
            timer_label_color: DEFAULT_LABEL_COLOR.to_string(),
            autohide_when_fired: false,
            id: next_id(),
            tag: 0,
            interval: DEFAULT_INTERVAL,
            clock: None,
            style,
            shape,
            frame,
            duration: time_remaining,
            time_remaining,
            state: TimerState::Idle,
            hidden: false,
            background_view_corner_radius: 0.0,
            delegate: None,
        }
    }

    /// Unique ID of this timer instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Style the timer was constructed with.
    pub fn style(&self) -> TimerStyle {
        self.style
    }

    /// Shape renderer of this timer.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sets the time between ticks. The countdown itself follows the wall
    /// clock, so the interval only controls how often the view refreshes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for a zero interval.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(Error::invalid("interval", format!("{:?}", interval)));
        }
        self.interval = interval;
        Ok(())
    }

    /// Time left in the current run.
    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Duration a run starts from, and what stopping resets to.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Reconfigures the duration. Any run in progress is stopped.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.stop_timer_view();
    }

    /// Current run state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether the timer is counting down.
    pub fn timer_is_active(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Fraction of the duration still remaining, in `[0, 1]`. A zero duration
    /// reports `0`.
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.time_remaining.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Frame of the view.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Moves or resizes the view.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Whether the view is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Shows or hides the view without touching the countdown.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Corner radius of the background view, in columns.
    pub fn background_view_corner_radius(&self) -> f64 {
        self.background_view_corner_radius
    }

    /// Sets the corner radius of the background view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for negative or non-finite values.
    pub fn set_background_view_corner_radius(&mut self, radius: f64) -> Result<()> {
        self.background_view_corner_radius =
            non_negative("background_view_corner_radius", radius)?;
        Ok(())
    }

    /// Registers `delegate` to be told when the timer fires.
    ///
    /// Only a weak reference is kept.
    pub fn set_delegate<D: TimerDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        let weak: Weak<dyn TimerDelegate> = weak;
        self.delegate = Some(weak);
    }

    /// Removes the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Returns the bar styling if this is a bar timer.
    pub fn bar(&self) -> Option<&Bar> {
        match &self.shape {
            Shape::Bar(bar) => Some(bar),
        }
    }

    /// Returns mutable bar styling if this is a bar timer.
    pub fn bar_mut(&mut self) -> Option<&mut Bar> {
        match &mut self.shape {
            Shape::Bar(bar) => Some(bar),
        }
    }

    fn require_bar(&mut self) -> Result<&mut Bar> {
        let style = self.style;
        self.bar_mut()
            .ok_or_else(|| Error::UnsupportedStyle(format!("{} has no bar", style)))
    }

    /// Bar animation style, for bar timers.
    pub fn bar_animation_style(&self) -> Option<BarAnimationStyle> {
        self.bar().map(Bar::animation_style)
    }

    /// Sets the bar animation style. Takes effect on the next render and does
    /// not alter the countdown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStyle`] if this is not a bar timer.
    pub fn set_bar_animation_style(&mut self, style: BarAnimationStyle) -> Result<()> {
        self.require_bar()?.set_animation_style(style);
        Ok(())
    }

    /// Sets the bar thickness, in rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for negative values and
    /// [`Error::UnsupportedStyle`] if this is not a bar timer.
    pub fn set_bar_thickness(&mut self, thickness: f64) -> Result<()> {
        self.require_bar()?.set_thickness(thickness)
    }

    /// Sets the bar padding, in columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyle`] for negative values and
    /// [`Error::UnsupportedStyle`] if this is not a bar timer.
    pub fn set_bar_padding(&mut self, padding: f64) -> Result<()> {
        self.require_bar()?.set_padding(padding)
    }

    /// Sets the bar cap style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedStyle`] if this is not a bar timer.
    pub fn set_bar_cap_style(&mut self, cap_style: CapStyle) -> Result<()> {
        self.require_bar()?.set_cap_style(cap_style);
        Ok(())
    }

    /// Starts the countdown and returns the command that delivers the first
    /// tick.
    ///
    /// Starting a running timer resumes from the remaining time of its last
    /// tick on a fresh tick schedule. Starting a fired timer begins a new run
    /// from the configured duration. A hidden view is shown again.
    ///
    /// With nothing left to count down the timer fires right away and the
    /// returned command delivers the [`FiredMsg`].
    pub fn start(&mut self) -> Cmd {
        if self.state == TimerState::Fired {
            self.time_remaining = self.duration;
        }
        self.state = TimerState::Running;
        self.hidden = false;
        self.tag += 1;

        let now = Instant::now();
        self.clock = Some(RunClock {
            started: now,
            remaining_at_start: self.time_remaining,
            last_tick: now,
        });
        debug!(
            "visual timer {}: started with {:?} remaining",
            self.id, self.time_remaining
        );

        if self.time_remaining.is_zero() {
            return self.fire();
        }
        self.tick()
    }

    /// Stops the countdown and resets the remaining time to the configured
    /// duration. Ticks already scheduled are discarded. Visibility is left
    /// unchanged.
    pub fn stop_timer_view(&mut self) {
        if self.state == TimerState::Running {
            debug!(
                "visual timer {}: stopped with {:?} remaining",
                self.id, self.time_remaining
            );
        }
        self.tag += 1;
        self.state = TimerState::Idle;
        self.clock = None;
        self.time_remaining = self.duration;
    }

    /// Stops the countdown like [`Model::stop_timer_view`] and hides the view.
    pub fn stop_and_hide(&mut self) {
        self.stop_timer_view();
        self.hidden = true;
        debug!("visual timer {}: hidden", self.id);
    }

    /// Tick message for the current schedule, stamped one interval after the
    /// last processed tick (or the start of the run).
    ///
    /// Feeding these back advances the countdown by exactly one interval each,
    /// independent of the wall clock.
    pub fn tick_msg(&self) -> TickMsg {
        let at = match self.clock {
            Some(clock) => clock.last_tick + self.interval,
            None => Instant::now(),
        };
        self.tick_msg_at(at)
    }

    /// Tick message for the current schedule, stamped with `at`.
    pub fn tick_msg_at(&self, at: Instant) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
            at,
        }
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        // Never sleep past the deadline. Only called with time remaining, so
        // the delay is never zero.
        let delay = self.interval.min(self.time_remaining);
        bubbletea_tick(delay, move |_| {
            Box::new(TickMsg {
                id,
                tag,
                at: Instant::now(),
            }) as Msg
        })
    }

    fn fire(&mut self) -> Cmd {
        self.state = TimerState::Fired;
        self.tag += 1;
        self.clock = None;
        if self.autohide_when_fired {
            self.hidden = true;
        }
        debug!("visual timer {}: fired", self.id);

        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.visual_timer_fired(self);
        }

        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FiredMsg { id }) as Msg
        })
    }

    /// Processes tick messages for this timer.
    ///
    /// Returns the next tick command while counting down, the [`FiredMsg`]
    /// command when the countdown reaches zero, and `None` for messages that
    /// belong to another timer, to a cancelled schedule, or to nothing at all.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id != self.id {
            return None;
        }
        let clock = match self.clock.as_mut() {
            Some(clock) if tick.tag == self.tag && self.state == TimerState::Running => clock,
            _ => {
                trace!(
                    "visual timer {}: discarding stale tick (tag {}, current {})",
                    self.id,
                    tick.tag,
                    self.tag
                );
                return None;
            }
        };

        let elapsed = tick.at.saturating_duration_since(clock.started);
        clock.last_tick = clock.last_tick.max(tick.at);
        self.time_remaining = clock.remaining_at_start.saturating_sub(elapsed);
        trace!(
            "visual timer {}: {:?} remaining",
            self.id,
            self.time_remaining
        );

        if self.time_remaining.is_zero() {
            return Some(self.fire());
        }
        Some(self.tick())
    }

    /// Renders the frame: background, shape and label. A hidden timer renders
    /// as an empty string.
    pub fn view(&self) -> String {
        if self.hidden || self.frame.is_empty() {
            return String::new();
        }

        let mut canvas = Canvas::new(self.frame.width as usize, self.frame.height as usize);
        canvas.fill_background(self.background_view_corner_radius);

        let label = self
            .show_timer_label
            .then(|| format_remaining(self.time_remaining));
        self.shape
            .draw(&mut canvas, self.fraction(), label.as_deref());

        canvas.render(&Palette {
            background: &self.background_view_color,
            inactive: &self.timer_shape_inactive_color,
            active: &self.timer_shape_active_color,
            label: &self.timer_label_color,
        })
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::default();
        let cmd = model.start();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    /// A 60 second straight bar timer in a 40x7 frame.
    fn default() -> Self {
        Model::with_shape(
            TimerStyle::Bar,
            Shape::Bar(Bar::default()),
            DEFAULT_FRAME,
            Duration::from_secs(60),
        )
    }
}
