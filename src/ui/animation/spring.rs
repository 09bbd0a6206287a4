use std::time::Duration;

pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
pub const STIFFNESS_VERY_LOW: f32 = 50.0;
pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;

/// Longest settle time reported for any spring.
const MAX_SETTLE: Duration = Duration::from_secs(10);
const SETTLE_SCAN_STEP: Duration = Duration::from_millis(5);

/// Damped harmonic oscillator moving from 0 to 1 with unit mass.
///
/// Progress is evaluated in closed form, so the same elapsed time always gives
/// the same value regardless of frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, below 1.0 overshoots, above 1.0 creeps in.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Remaining distance (as a fraction of the travel) treated as arrived.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            position_threshold: 0.005,
        }
    }

    /// Slow, slightly bouncy slide used for rows.
    pub fn slide() -> Self {
        Self::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_VERY_LOW)
    }

    /// Whole-list fade.
    pub fn fade() -> Self {
        Self::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_MEDIUM_LOW)
    }

    /// Progress toward the target after `elapsed`. Starts at 0, may overshoot 1.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f64();
        if t <= 0.0 {
            return 0.0;
        }
        let zeta = f64::from(self.damping_ratio);
        let omega = f64::from(self.stiffness).sqrt();

        let displacement = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            decay * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else if zeta == 1.0 {
            (-omega * t).exp() * (1.0 + omega * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        };

        (1.0 - displacement) as f32
    }

    /// Time after which the remaining distance stays under the threshold.
    pub fn settle_time(&self) -> Duration {
        let zeta = f64::from(self.damping_ratio);
        let omega = f64::from(self.stiffness).sqrt();
        let threshold = f64::from(self.position_threshold);

        if zeta < 1.0 {
            // Envelope of the under-damped displacement.
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            let secs = (amplitude / threshold).ln() / (zeta * omega);
            return Duration::try_from_secs_f64(secs.max(0.0))
                .map_or(MAX_SETTLE, |settle| settle.min(MAX_SETTLE));
        }

        let mut elapsed = Duration::ZERO;
        while elapsed < MAX_SETTLE {
            if (1.0 - self.progress(elapsed)).abs() < self.position_threshold {
                return elapsed;
            }
            elapsed += SETTLE_SCAN_STEP;
        }
        MAX_SETTLE
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::slide()
    }
}
