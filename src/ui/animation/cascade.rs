use std::time::Duration;

use super::spring::SpringSpec;
use crate::config::AnimationConfig;

/// Tuning of an entrance cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeSpec {
    /// Start delay between neighbouring rows.
    pub stagger: Duration,
    /// Row height in lines. Row `i` starts `row_height * (i + 1)` lines below
    /// its slot.
    pub row_height: u16,
    pub slide: SpringSpec,
    pub fade: SpringSpec,
}

impl Default for CascadeSpec {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for CascadeSpec {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            stagger: config.stagger(),
            row_height: config.row_height,
            slide: SpringSpec::new(config.damping_ratio, config.stiffness),
            fade: SpringSpec::fade(),
        }
    }
}

/// Entrance parameters of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEntrance {
    pub index: usize,
    /// Reveal order. Never smaller than the rank of the row above.
    pub rank: usize,
    pub delay: Duration,
    /// Lines below the final slot where the row starts.
    pub initial_offset: u16,
}

/// Entrance of the row at `index`. Depends on nothing but its arguments.
pub fn entrance_for(index: usize, spec: &CascadeSpec) -> ItemEntrance {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    let lines = u64::from(spec.row_height).saturating_mul(index as u64 + 1);
    ItemEntrance {
        index,
        rank: index,
        delay: spec.stagger.saturating_mul(steps),
        initial_offset: u16::try_from(lines).unwrap_or(u16::MAX),
    }
}

/// Build the cascade for a list of `len` rows.
pub fn schedule_cascade(len: usize, spec: &CascadeSpec) -> Cascade {
    Cascade {
        spec: *spec,
        entrances: (0..len).map(|index| entrance_for(index, spec)).collect(),
    }
}

/// Entrance plan for one published list.
#[derive(Debug, Clone, PartialEq)]
pub struct Cascade {
    spec: CascadeSpec,
    entrances: Vec<ItemEntrance>,
}

impl Cascade {
    pub fn len(&self) -> usize {
        self.entrances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrances.is_empty()
    }

    pub fn entrances(&self) -> &[ItemEntrance] {
        &self.entrances
    }

    /// Lines between row `index` and its final slot after `elapsed`.
    ///
    /// Rows outside the cascade are already in place. Overshoot past the slot
    /// is clamped to zero.
    pub fn offset_at(&self, index: usize, elapsed: Duration) -> u16 {
        let Some(entrance) = self.entrances.get(index) else {
            return 0;
        };
        let Some(moving) = elapsed.checked_sub(entrance.delay) else {
            return entrance.initial_offset;
        };
        if moving >= self.spec.slide.settle_time() {
            return 0;
        }
        let remaining = 1.0 - self.spec.slide.progress(moving);
        let lines = (f32::from(entrance.initial_offset) * remaining).round();
        lines.clamp(0.0, f32::from(entrance.initial_offset)) as u16
    }

    /// Opacity of the whole list, 0.0 to 1.0.
    pub fn list_alpha(&self, elapsed: Duration) -> f32 {
        if self.is_empty() {
            return 1.0;
        }
        self.spec.fade.progress(elapsed).clamp(0.0, 1.0)
    }

    /// Time until the last row has settled. Zero for an empty list.
    pub fn duration(&self) -> Duration {
        match self.entrances.last() {
            Some(last) => last.delay + self.spec.slide.settle_time(),
            None => Duration::ZERO,
        }
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}
