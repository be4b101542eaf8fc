//! Top-down lookup of the periods active at an instant.
//!
//! One walk serves every level: find the active period among the current
//! candidates, subdivide it, repeat with its children.

use super::subperiod::children_of;
use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::VimshottariConfig;

/// Period of `periods` whose `[start, end)` contains `jd`.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<DashaPeriod> {
    periods.iter().find(|p| p.contains(jd)).copied()
}

/// Active period per level; `None` when the instant is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActiveDashas {
    pub periods: [Option<DashaPeriod>; 4],
}

impl ActiveDashas {
    pub fn at(&self, level: DashaLevel) -> Option<&DashaPeriod> {
        self.periods[level as usize].as_ref()
    }

    pub fn mahadasha(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Mahadasha)
    }

    pub fn antardasha(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Antardasha)
    }

    pub fn pratyantardasha(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Pratyantardasha)
    }

    pub fn sookshma(&self) -> Option<&DashaPeriod> {
        self.at(DashaLevel::Sookshma)
    }

    /// Found periods, coarsest first.
    pub fn chain(&self) -> impl Iterator<Item = &DashaPeriod> {
        self.periods.iter().map_while(Option::as_ref)
    }
}

/// Walk from the mahadashas down to `max_level`.
pub fn active_dashas(
    mahadashas: &[DashaPeriod],
    config: &VimshottariConfig,
    jd: f64,
    max_level: DashaLevel,
) -> ActiveDashas {
    let mut active = ActiveDashas::default();
    let mut candidates = mahadashas.to_vec();

    while let Some(period) = find_active_period(&candidates, jd) {
        active.periods[period.level as usize] = Some(period);
        if period.level >= max_level {
            break;
        }
        candidates = children_of(&period, config);
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::timeline::vimshottari_mahadashas;
    use crate::dasha::vimshottari::vimshottari_config;

    const BIRTH: f64 = 2_447_893.0;

    fn timeline() -> Vec<DashaPeriod> {
        vimshottari_mahadashas(BIRTH, 123.4, vimshottari_config(), 2).unwrap()
    }

    #[test]
    fn all_levels_found_inside_window() {
        let md = timeline();
        let jd = BIRTH + 12_345.6;
        let a = active_dashas(&md, vimshottari_config(), jd, DashaLevel::Sookshma);
        assert_eq!(a.chain().count(), 4);
        let mut parent = a.mahadasha().unwrap();
        for child in a.chain().skip(1) {
            assert!(child.start_jd >= parent.start_jd && child.end_jd <= parent.end_jd);
            assert!(child.contains(jd));
            parent = child;
        }
    }

    #[test]
    fn before_birth_is_none() {
        let a = active_dashas(&timeline(), vimshottari_config(), BIRTH - 1.0, DashaLevel::Sookshma);
        assert!(a.mahadasha().is_none());
        assert!(a.sookshma().is_none());
        assert_eq!(a.chain().count(), 0);
    }

    #[test]
    fn after_window_is_none() {
        let md = timeline();
        let end = md.last().unwrap().end_jd;
        let a = active_dashas(&md, vimshottari_config(), end, DashaLevel::Sookshma);
        assert!(a.mahadasha().is_none());
    }

    #[test]
    fn max_level_limits_depth() {
        let a = active_dashas(&timeline(), vimshottari_config(), BIRTH + 100.0, DashaLevel::Antardasha);
        assert!(a.antardasha().is_some());
        assert!(a.pratyantardasha().is_none());
    }

    #[test]
    fn birth_instant_is_first_of_everything() {
        let md = timeline();
        let a = active_dashas(&md, vimshottari_config(), BIRTH, DashaLevel::Sookshma);
        assert_eq!(a.mahadasha().unwrap().lord, md[0].lord);
        // The partial birth period is subdivided over its remaining span
        assert_eq!(a.antardasha().unwrap().lord, md[0].lord);
    }
}
