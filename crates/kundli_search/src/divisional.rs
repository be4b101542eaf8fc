//! Divisional charts derived from a natal chart.
//!
//! Grahas and the ascendant are mapped through the same varga rule; houses
//! are counted from the divisional ascendant's sign.

use kundli_vedic_base::{
    Division, Graha, RashiInfo, VargaScheme, equal_house_signs, house_of_sign, varga_longitude,
    varga_rashi_info,
};

use crate::chart::BirthChart;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivisionalPlacement {
    pub graha: Graha,
    pub longitude_deg: f64,
    pub rashi: RashiInfo,
    /// 1-12 from the divisional ascendant.
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionalChart {
    pub division: Division,
    pub scheme: VargaScheme,
    pub ascendant_longitude_deg: f64,
    pub ascendant: RashiInfo,
    /// Element `i` is the sign index of house `i + 1`.
    pub house_signs: [u8; 12],
    /// Same order as [`BirthChart::grahas`].
    pub placements: Vec<DivisionalPlacement>,
}

pub fn divisional_chart(
    chart: &BirthChart,
    division: Division,
    scheme: VargaScheme,
) -> DivisionalChart {
    let natal_asc = chart.ascendant.sidereal_deg;
    let ascendant_longitude_deg = varga_longitude(natal_asc, division, scheme);
    let ascendant = varga_rashi_info(natal_asc, division, scheme);
    let asc_sign = ascendant.rashi_index;

    let placements = chart
        .grahas
        .iter()
        .map(|p| {
            let longitude_deg = varga_longitude(p.sidereal_longitude_deg, division, scheme);
            let rashi = varga_rashi_info(p.sidereal_longitude_deg, division, scheme);
            DivisionalPlacement {
                graha: p.graha,
                longitude_deg,
                rashi,
                house: house_of_sign(rashi.rashi_index, asc_sign),
            }
        })
        .collect();

    DivisionalChart {
        division,
        scheme,
        ascendant_longitude_deg,
        ascendant,
        house_signs: equal_house_signs(asc_sign),
        placements,
    }
}
