use dioxus::prelude::*;

use crate::browser::{use_element_id, use_first_visible};

/// Frame time the per-frame increment is derived from (60 fps).
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

/// Count from zero to `target` over roughly `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    running: f64,
    shown: u64,
    phase: Phase,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        let frames = duration_ms as f64 / FRAME_MS;
        let increment = if frames >= 1.0 {
            target as f64 / frames
        } else {
            target as f64
        };
        Self {
            target,
            increment,
            running: 0.0,
            shown: 0,
            phase: Phase::Idle,
        }
    }

    /// Begin counting. Returns `true` only on the first call for a non-zero
    /// target; later calls never restart the animation.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if self.target == 0 {
            self.phase = Phase::Done;
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.running += self.increment;
        if self.running < self.target as f64 {
            self.shown = (self.running.ceil() as u64).min(self.target);
        } else {
            self.shown = self.target;
            self.phase = Phase::Done;
        }
    }

    pub fn value(&self) -> u64 {
        self.shown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn display(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.shown)
    }
}

/// Animated numeric stat that counts up once it is half visible.
#[component]
pub fn StatCounter(
    value: u64,
    #[props(default)] suffix: String,
    #[props(default = 2000)] duration: u64,
) -> Element {
    let config = crate::use_config();
    let id = use_element_id("stat");
    let visible = use_first_visible(id.clone(), 0.5);
    let mut counter = use_signal(move || CountUp::new(value, duration));

    use_effect(move || {
        if !visible() || !counter.write().start() {
            return;
        }
        spawn(async move {
            loop {
                gloo_timers::future::sleep(config.counter_frame()).await;
                let mut c = counter.write();
                c.tick();
                if c.is_done() {
                    break;
                }
            }
        });
    });

    let text = counter.read().display(&suffix);
    rsx! {
        span { id: "{id}", class: "stat_counter", "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(c: &mut CountUp) -> Vec<u64> {
        let mut seen = Vec::new();
        while !c.is_done() {
            c.tick();
            seen.push(c.value());
        }
        seen
    }

    #[test]
    fn counts_to_exact_target_and_stops() {
        let mut c = CountUp::new(100, 2000);
        assert_eq!(c.display("+"), "0+");
        assert!(c.start());
        let seen = run(&mut c);
        // 2000ms at 60fps is about 120 frames
        assert!((120..=121).contains(&seen.len()), "{} frames", seen.len());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(c.display("+"), "100+");
        c.tick();
        assert_eq!(c.value(), 100);
    }

    #[test]
    fn rounds_up_each_frame() {
        let mut c = CountUp::new(1000, 2000);
        c.start();
        c.tick();
        // 1000 / 120 = 8.33..
        assert_eq!(c.value(), 9);
    }

    #[test]
    fn never_restarts() {
        let mut c = CountUp::new(50, 500);
        assert!(c.start());
        run(&mut c);
        assert!(!c.start());
        assert_eq!(c.value(), 50);
        assert_eq!(c.phase(), Phase::Done);
    }

    #[test]
    fn zero_target_does_not_animate() {
        let mut c = CountUp::new(0, 2000);
        assert!(!c.start());
        assert!(c.is_done());
        assert_eq!(c.display(""), "0");
    }

    #[test]
    fn tick_before_start_is_noop() {
        let mut c = CountUp::new(10, 2000);
        c.tick();
        assert_eq!(c.value(), 0);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut c = CountUp::new(3, 0);
        c.start();
        c.tick();
        assert_eq!(c.value(), 3);
        assert!(c.is_done());
    }
}
