use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use bubbletea_visual_timer::prelude::*;
use crossterm::event::KeyCode;
use std::time::Duration;

struct App {
    timer: VisualTimer,
    fired: usize,
}

fn next_animation(style: BarAnimationStyle) -> BarAnimationStyle {
    match style {
        BarAnimationStyle::Straight => BarAnimationStyle::Backwards,
        BarAnimationStyle::Backwards => BarAnimationStyle::Reflection,
        BarAnimationStyle::Reflection => BarAnimationStyle::Straight,
    }
}

fn next_cap(cap: CapStyle) -> CapStyle {
    match cap {
        CapStyle::Butt => CapStyle::Round,
        CapStyle::Round => CapStyle::Square,
        CapStyle::Square => CapStyle::Butt,
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut timer = bar_new(
            BarAnimationStyle::Straight,
            Rect::new(0, 0, 50, 5),
            Duration::from_secs(5),
        );
        timer.background_view_color = CLEAR.to_string();
        timer.timer_shape_active_color = "#7571F9".to_string();
        timer
            .set_bar_thickness(1.0)
            .expect("bar thickness is non-negative");
        timer
            .set_bar_padding(4.0)
            .expect("bar padding is non-negative");

        let cmd = timer.start();
        (Self { timer, fired: 0 }, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(fired) = msg.downcast_ref::<TimerFiredMsg>() {
            if fired.id == self.timer.id() {
                self.fired += 1;
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Char(' ') => return Some(self.timer.start()),
                KeyCode::Char('s') => self.timer.stop_timer_view(),
                KeyCode::Char('h') => self.timer.stop_and_hide(),
                KeyCode::Char('a') => {
                    if let Some(style) = self.timer.bar_animation_style() {
                        self.timer
                            .set_bar_animation_style(next_animation(style))
                            .expect("countdown timer is a bar");
                    }
                }
                KeyCode::Char('c') => {
                    if let Some(cap) = self.timer.bar().map(Bar::cap_style) {
                        self.timer
                            .set_bar_cap_style(next_cap(cap))
                            .expect("countdown timer is a bar");
                    }
                }
                KeyCode::Char('l') => self.timer.show_timer_label = !self.timer.show_timer_label,
                _ => {}
            }
            return None;
        }

        self.timer.update(msg)
    }

    fn view(&self) -> String {
        let style = self
            .timer
            .bar_animation_style()
            .map(|s| format!("{:?}", s))
            .unwrap_or_default();
        format!(
            "{}\n\nstyle: {}  fired: {}\n\nspace start • s stop • h stop and hide • a animation • c caps • l label • q quit\n",
            self.timer.view(),
            style,
            self.fired
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
