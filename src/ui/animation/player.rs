use std::time::{Duration, Instant};

use super::cascade::{schedule_cascade, Cascade, CascadeSpec};

/// Runs at most one cascade at a time.
///
/// `start` is called once per fresh list publication; it throws away whatever
/// was running, so two publications never share or continue a cascade.
#[derive(Debug)]
pub struct CascadePlayer {
    spec: CascadeSpec,
    active: Option<ActiveCascade>,
    generation: u64,
}

#[derive(Debug)]
struct ActiveCascade {
    cascade: Cascade,
    started_at: Instant,
}

/// A cascade sampled at one instant.
#[derive(Debug, Clone, Copy)]
pub struct CascadeFrame<'a> {
    cascade: &'a Cascade,
    elapsed: Duration,
}

impl CascadePlayer {
    pub fn new(spec: CascadeSpec) -> Self {
        Self {
            spec,
            active: None,
            generation: 0,
        }
    }

    /// Begin a new cascade for `len` rows. Returns its generation.
    pub fn start(&mut self, len: usize, now: Instant) -> u64 {
        self.generation += 1;
        self.active = Some(ActiveCascade {
            cascade: schedule_cascade(len, &self.spec),
            started_at: now,
        });
        tracing::debug!(generation = self.generation, rows = len, "Entrance cascade started");
        self.generation
    }

    /// Drop the running cascade, e.g. when the list leaves the screen.
    pub fn stop(&mut self) {
        self.active = None;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame(&self, now: Instant) -> Option<CascadeFrame<'_>> {
        self.active.as_ref().map(|active| CascadeFrame {
            cascade: &active.cascade,
            elapsed: now.saturating_duration_since(active.started_at),
        })
    }

    /// True while some row is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.frame(now).is_some_and(|frame| !frame.is_complete())
    }
}

impl CascadeFrame<'_> {
    pub fn row_offset(&self, index: usize) -> u16 {
        self.cascade.offset_at(index, self.elapsed)
    }

    pub fn alpha(&self) -> f32 {
        self.cascade.list_alpha(self.elapsed)
    }

    pub fn is_complete(&self) -> bool {
        self.cascade.is_complete(self.elapsed)
    }
}
