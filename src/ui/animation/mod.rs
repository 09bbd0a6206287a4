//! Staggered entrance animation for the roster rows.
//!
//! [`schedule_cascade`] is a pure function of list length and tuning: it hands
//! every row a rank, a start delay and a starting offset. [`SpringSpec`] turns
//! elapsed time into progress. [`CascadePlayer`] keeps one running cascade per
//! fresh list publication.

mod cascade;
mod player;
mod spring;

pub use cascade::{entrance_for, schedule_cascade, Cascade, CascadeSpec, ItemEntrance};
pub use player::{CascadeFrame, CascadePlayer};
pub use spring::{SpringSpec, DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_MEDIUM_LOW, STIFFNESS_VERY_LOW};
