//! Proportional sub-period generation, applied identically at every level.
//!
//! child duration = (child_full_period / total_period) * parent_duration

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::VimshottariConfig;
use crate::graha::Graha;

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate proportional children for a parent period.
///
/// `sequence`: ordered grahas and their full-cycle periods (in days).
/// `total_period_days`: sum of all sequence periods.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_period_days: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for (order_0, &(lord, full_period)) in sequence.iter().enumerate() {
        let end = cursor + (full_period / total_period_days) * parent_duration;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: (order_0 as u16) + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// The 9-graha sequence rotated to start at `parent_lord`.
pub fn build_cyclic_sequence(config: &VimshottariConfig, parent_lord: Graha) -> Vec<(Graha, f64)> {
    let full = config.entity_sequence();
    let start = config.position(parent_lord).unwrap_or(0);
    (0..full.len()).map(|i| full[(start + i) % full.len()]).collect()
}

/// The 9 sub-periods of `parent`; empty at the deepest level.
pub fn children_of(parent: &DashaPeriod, config: &VimshottariConfig) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    let seq = build_cyclic_sequence(config, parent.lord);
    proportional_children(parent, &seq, config.total_days(), child_level)
}
