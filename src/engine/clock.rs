//! The single authoritative scene clock.

/// Monotonic scene time in seconds since animation start.
///
/// Only the frame driver writes it. Input that is non-finite or runs
/// backwards is ignored (logged, treated as a zero-length step), so the
/// clock never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneClock {
    elapsed: f32,
}

impl SceneClock {
    /// Clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scene time.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Move to absolute time `elapsed`, returning the step taken.
    pub fn advance_to(&mut self, elapsed: f32) -> f32 {
        if !elapsed.is_finite() {
            log::warn!("ignoring non-finite clock input {elapsed}");
            return 0.0;
        }
        if elapsed < self.elapsed {
            log::warn!(
                "ignoring clock regression from {} to {elapsed}",
                self.elapsed
            );
            return 0.0;
        }
        let dt = elapsed - self.elapsed;
        self.elapsed = elapsed;
        dt
    }

    /// Move forward by `dt`, returning the step actually taken.
    pub fn advance_by(&mut self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring invalid frame delta {dt}");
            return 0.0;
        }
        self.elapsed += dt;
        dt
    }
}
