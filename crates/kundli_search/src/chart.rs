//! Sidereal birth chart: ascendant, equal houses and the nine graha placements.
//!
//! Seven classical bodies are queried sidereally. Rahu is the true node;
//! Ketu is never queried and sits 180 degrees from Rahu with Rahu's speed.
//! Both nodes are always retrograde.

use kundli_core::{Body, BodyState, EphemerisGateway, GeoLocation, HouseSystem};
use kundli_time::{BirthInput, ResolvedInstant, TimeResolver};
use kundli_vedic_base::{
    ALL_RASHIS, Graha, MoonPlacement, NakshatraInfo, Rashi, RashiInfo, SAPTA_GRAHAS,
    equal_house_signs, house_of_sign, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, rashi_lord,
};
use tracing::debug;

use crate::error::SearchError;

/// House system requested from the gateway for the ascendant.
pub const CHART_HOUSE_SYSTEM: HouseSystem = HouseSystem::Equal;

/// Gateway body for a graha; `None` for Ketu, which is derived from Rahu.
pub const fn graha_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu => Some(Body::TrueNode),
        Graha::Ketu => None,
    }
}

/// One graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPlacement {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub sidereal_longitude_deg: f64,
    /// Sidereal longitude plus ayanamsha, [0, 360).
    pub tropical_longitude_deg: f64,
    pub latitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub rashi: RashiInfo,
    /// 1-12, counted from the ascendant sign.
    pub house: u8,
    pub nakshatra: NakshatraInfo,
}

/// One equal house.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseEntry {
    /// 1-12.
    pub number: u8,
    pub rashi: Rashi,
    /// Sidereal longitude of the start of the house sign.
    pub start_longitude_deg: f64,
    pub lord: Graha,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ascendant {
    pub sidereal_deg: f64,
    pub tropical_deg: f64,
    pub rashi: RashiInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    pub input: BirthInput,
    pub instant: ResolvedInstant,
    pub ayanamsha_deg: f64,
    pub house_system: HouseSystem,
    pub ascendant: Ascendant,
    pub houses: [HouseEntry; 12],
    /// All nine grahas, indexed by [`Graha::index`].
    pub grahas: Vec<GrahaPlacement>,
}

impl BirthChart {
    pub fn graha(&self, graha: Graha) -> &GrahaPlacement {
        &self.grahas[graha.index() as usize]
    }

    pub fn moon(&self) -> &GrahaPlacement {
        self.graha(Graha::Chandra)
    }

    /// Moon sign and nakshatra indices, the inputs of ashtakoota matching.
    pub fn moon_placement(&self) -> MoonPlacement {
        let moon = self.moon();
        MoonPlacement {
            sign_index: moon.rashi.rashi_index,
            nakshatra_index: moon.nakshatra.nakshatra_index,
        }
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.input.latitude_deg, self.input.longitude_deg, 0.0)
    }
}

/// Resolve the birth instant and build the chart.
pub fn birth_chart<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    resolver: &TimeResolver,
    input: &BirthInput,
) -> Result<BirthChart, SearchError> {
    let instant = resolver.resolve(input.local_datetime(), &input.timezone, input.longitude_deg)?;
    chart_at_instant(gateway, input, instant)
}

/// Build the chart for an already resolved instant.
pub fn chart_at_instant<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    input: &BirthInput,
    instant: ResolvedInstant,
) -> Result<BirthChart, SearchError> {
    let jd = instant.jd_ut;
    let location = GeoLocation::new(input.latitude_deg, input.longitude_deg, 0.0);

    let ayanamsha_deg = gateway.ayanamsha(jd)?;
    let angles = gateway.houses(jd, &location, CHART_HOUSE_SYSTEM)?;
    let tropical_asc = normalize_360(angles.ascendant_tropical_deg);
    let sidereal_asc = normalize_360(tropical_asc - ayanamsha_deg);
    let asc_rashi = rashi_from_longitude(sidereal_asc);
    let asc_sign = asc_rashi.rashi_index;

    let mut grahas = Vec::with_capacity(9);
    for graha in SAPTA_GRAHAS {
        let Some(body) = graha_body(graha) else {
            continue;
        };
        let state = gateway.position(jd, body, true)?;
        let retrograde = state.speed_deg_per_day < 0.0;
        grahas.push(place(graha, state, ayanamsha_deg, asc_sign, retrograde));
    }

    let node = gateway.position(jd, Body::TrueNode, true)?;
    let rahu = BodyState {
        latitude_deg: 0.0,
        ..node
    };
    let ketu = BodyState {
        longitude_deg: normalize_360(node.longitude_deg + 180.0),
        latitude_deg: 0.0,
        speed_deg_per_day: node.speed_deg_per_day,
    };
    grahas.push(place(Graha::Rahu, rahu, ayanamsha_deg, asc_sign, true));
    grahas.push(place(Graha::Ketu, ketu, ayanamsha_deg, asc_sign, true));

    debug!(
        jd_ut = jd,
        ascendant = sidereal_asc,
        ayanamsha = ayanamsha_deg,
        "birth chart assembled"
    );

    Ok(BirthChart {
        input: input.clone(),
        instant,
        ayanamsha_deg,
        house_system: CHART_HOUSE_SYSTEM,
        ascendant: Ascendant {
            sidereal_deg: sidereal_asc,
            tropical_deg: tropical_asc,
            rashi: asc_rashi,
        },
        houses: equal_houses(asc_sign),
        grahas,
    })
}

fn place(
    graha: Graha,
    state: BodyState,
    ayanamsha_deg: f64,
    asc_sign: u8,
    retrograde: bool,
) -> GrahaPlacement {
    let lon = normalize_360(state.longitude_deg);
    let rashi = rashi_from_longitude(lon);
    GrahaPlacement {
        graha,
        sidereal_longitude_deg: lon,
        tropical_longitude_deg: normalize_360(lon + ayanamsha_deg),
        latitude_deg: state.latitude_deg,
        speed_deg_per_day: state.speed_deg_per_day,
        retrograde,
        rashi,
        house: house_of_sign(rashi.rashi_index, asc_sign),
        nakshatra: nakshatra_from_longitude(lon),
    }
}

fn equal_houses(asc_sign: u8) -> [HouseEntry; 12] {
    let signs = equal_house_signs(asc_sign);
    std::array::from_fn(|i| {
        let rashi = ALL_RASHIS[signs[i] as usize];
        HouseEntry {
            number: i as u8 + 1,
            rashi,
            start_longitude_deg: f64::from(signs[i]) * 30.0,
            lord: rashi_lord(rashi),
        }
    })
}
