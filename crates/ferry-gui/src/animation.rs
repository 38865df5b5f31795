//! Timed reveal/collapse transition for the progress section
//!
//! The transition is driven by the UI thread's own repaint loop: each
//! frame reads the current eased value and requests another repaint while
//! the animation runs. No thread ever sleeps for it.

use std::time::Instant;

const DEFAULT_DURATION: f32 = 0.25;

/// Eases a value between 0.0 (hidden) and 1.0 (shown)
pub struct Reveal {
    shown: bool,
    from: f32,
    start: Instant,
    duration: f32,
}

impl Reveal {
    pub fn new(shown: bool) -> Self {
        Self {
            shown,
            from: if shown { 1.0 } else { 0.0 },
            start: Instant::now(),
            duration: 0.0,
        }
    }

    /// Retarget the transition. Restarting mid-animation continues from
    /// the current value rather than jumping.
    pub fn set(&mut self, shown: bool) {
        if shown == self.shown {
            return;
        }
        self.from = self.value();
        self.shown = shown;
        self.start = Instant::now();
        self.duration = DEFAULT_DURATION;
    }

    /// Current eased value in 0..=1
    pub fn value(&self) -> f32 {
        let target = if self.shown { 1.0 } else { 0.0 };
        if self.duration <= 0.0 {
            return target;
        }
        let t = (self.start.elapsed().as_secs_f32() / self.duration).clamp(0.0, 1.0);
        self.from + (target - self.from) * ease_in_out(t)
    }

    pub fn is_animating(&self) -> bool {
        self.duration > 0.0 && self.start.elapsed().as_secs_f32() < self.duration
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn new_reveal_is_settled() {
        let reveal = Reveal::new(false);
        assert_eq!(reveal.value(), 0.0);
        assert!(!reveal.is_animating());

        let reveal = Reveal::new(true);
        assert_eq!(reveal.value(), 1.0);
    }

    #[test]
    fn set_starts_transition_toward_target() {
        let mut reveal = Reveal::new(false);
        reveal.set(true);
        assert!(reveal.is_animating());
        std::thread::sleep(Duration::from_millis(300));
        assert!(!reveal.is_animating());
        assert_eq!(reveal.value(), 1.0);
    }

    #[test]
    fn redundant_set_does_not_restart() {
        let mut reveal = Reveal::new(true);
        reveal.set(true);
        assert!(!reveal.is_animating());
        assert_eq!(reveal.value(), 1.0);
    }
}
