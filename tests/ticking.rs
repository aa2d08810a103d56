use bubbletea_rs::{Cmd, Msg};
use bubbletea_visual_timer::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Fired(AtomicUsize);

impl TimerDelegate for Fired {
    fn visual_timer_fired(&self, _timer: &VisualTimer) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn short_timer() -> VisualTimer {
    timer_create_with_options(
        TimerStyle::Bar,
        Rect::new(0, 0, 30, 3),
        Duration::from_millis(30),
        &[with_interval(Duration::from_millis(10)), with_autohide()],
    )
    .expect("bar timers are supported")
}

/// Drives `timer` with its own tick commands until it fires, returning the
/// fired timer's id.
async fn run_until_fired(timer: &mut VisualTimer, first: Cmd) -> Option<i64> {
    let mut cmd = Some(first);
    let mut steps = 0;

    while let Some(next) = cmd.take() {
        let msg: Option<Msg> = next.await;
        let msg = msg?;
        if let Some(fired) = msg.downcast_ref::<TimerFiredMsg>() {
            return Some(fired.id);
        }
        cmd = timer.update(msg);
        steps += 1;
        assert!(steps < 1_000, "timer never fired");
    }
    None
}

#[tokio::test]
async fn test_real_ticks_run_timer_to_completion() {
    init_logging();
    let delegate = Arc::new(Fired(AtomicUsize::new(0)));
    let mut timer = short_timer();
    timer.set_delegate(&delegate);

    let started = Instant::now();
    let first = timer.start();
    let fired_id = run_until_fired(&mut timer, first).await;

    assert_eq!(fired_id, Some(timer.id()));
    assert!(started.elapsed() >= Duration::from_millis(30));
    assert!(!timer.timer_is_active());
    assert!(timer.is_hidden());
    assert_eq!(delegate.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_tick_scheduled_before_stop_is_discarded() {
    init_logging();
    let delegate = Arc::new(Fired(AtomicUsize::new(0)));
    let mut timer = short_timer();
    timer.set_delegate(&delegate);

    let pending = timer.start();
    timer.stop_and_hide();

    let msg: Option<Msg> = pending.await;
    let msg = msg.expect("tick command yields a message");
    assert!(timer.update(msg).is_none());

    assert!(!timer.timer_is_active());
    assert_eq!(timer.time_remaining(), Duration::from_millis(30));
    assert_eq!(delegate.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fires_on_time_at_default_cadence() {
    init_logging();
    let duration = Duration::from_millis(200);
    let tolerance = Duration::from_millis(150);
    let delegate = Arc::new(Fired(AtomicUsize::new(0)));
    let mut timer = timer_create(TimerStyle::Bar, Rect::new(0, 0, 30, 3), duration)
        .expect("bar timers are supported");
    timer.set_delegate(&delegate);

    let started = Instant::now();
    let first = timer.start();
    let fired_id = run_until_fired(&mut timer, first).await;
    let elapsed = started.elapsed();

    assert_eq!(fired_id, Some(timer.id()));
    assert!(elapsed >= duration, "fired early after {:?}", elapsed);
    assert!(elapsed < duration + tolerance, "fired late after {:?}", elapsed);
    assert!(!timer.timer_is_active());
    assert_eq!(timer.time_remaining(), Duration::ZERO);
    assert_eq!(delegate.0.load(Ordering::SeqCst), 1);
}
