/// A small tween for adapter-driven smooth scrolling.
///
/// Offsets are absolute scroll positions; `from` may be larger than `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Builds a tween from a host-supplied duration that may be zero or negative.
    ///
    /// Such durations finish on the first sample.
    pub fn with_signed_duration(
        from: u64,
        to: u64,
        start_ms: u64,
        duration_ms: i32,
        easing: Easing,
    ) -> Self {
        let duration_ms = u64::try_from(duration_ms).unwrap_or(0);
        Self::new(from, to, start_ms, duration_ms, easing)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear progress in `[0, 1]`, before easing.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));

        let from = self.from as f64;
        let to = self.to as f64;
        let v = from + (to - from) * f64::from(eased);
        // Round half up; `f64::round` is not available without std.
        (v + 0.5).max(0.0) as u64
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    SmoothStep,
    EaseInOutCubic,
    /// Quadratic ease-out, close to what mobile list scrollers use for programmatic scrolls.
    Decelerate,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Decelerate => {
                let u = 1.0 - t;
                1.0 - u * u
            }
        }
    }
}
