//! Frame-counted scheduling tick for the enemy phase.

/// One-shot countdown measured in update frames.
///
/// The timer is always explicitly armed or disarmed; it never repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseTimer {
    remaining: Option<u32>,
}

impl PhaseTimer {
    pub fn disarmed() -> Self {
        Self { remaining: None }
    }

    /// Fires on the `frames`-th tick from now (the next tick when zero).
    pub fn arm(&mut self, frames: u32) {
        self.remaining = Some(frames.max(1));
    }

    pub fn disarm(&mut self) {
        self.remaining = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Counts one frame down. Returns true exactly once, when the timer
    /// fires, and disarms it.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(1) => {
                self.remaining = None;
                true
            }
            Some(frames) => {
                self.remaining = Some(frames - 1);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_the_armed_frames() {
        let mut timer = PhaseTimer::disarmed();
        timer.arm(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.is_armed());
        assert!(!timer.tick());
    }

    #[test]
    fn zero_frames_fire_on_the_next_tick() {
        let mut timer = PhaseTimer::default();
        timer.arm(0);
        assert!(timer.tick());
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = PhaseTimer::disarmed();
        timer.arm(2);
        timer.disarm();
        assert!(!timer.tick());
        assert!(!timer.tick());
    }
}
