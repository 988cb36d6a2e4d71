//! Frame clock
//!
//! The browser hands each animation-frame callback a monotonic timestamp in
//! milliseconds. The simulation wants one delta in seconds per frame.

use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, clamped to `[0, MAX_FRAME_DT]`.
    /// The first call returns one nominal frame.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => NOMINAL_DT,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the previous timestamp, e.g. after the tab was hidden
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
