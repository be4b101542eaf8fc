//! The facade: one value holding the gateway, resolver and configuration.

use chrono::{NaiveDateTime, Utc};
use kundli_config::KundliConfig;
use kundli_core::{EphemerisGateway, GeoLocation};
use kundli_search::{
    birth_chart, compatibility, dasha_for_birth, divisional_chart, muhurat_for_date,
    panchang_for_date,
};
use kundli_time::{TimeResolver, parse_date, utc_to_jd, validate_location};
use kundli_vedic_base::{Division, EventType};
use tracing::{info_span, warn};

use crate::dto::{
    BirthChartDto, CompatibilityDto, DashaDto, DivisionalChartDto, MuhuratDto, PanchangDto,
};
use crate::error::{ErrorBody, KundliError, Outcome};
use crate::request::BirthRequest;

/// Every operation returns an [`Outcome`]; none panics or propagates errors.
///
/// Shareable across threads when `G` is: the only interior state is the
/// resolver's timezone handle cache.
#[derive(Debug)]
pub struct Kundli<G> {
    gateway: G,
    resolver: TimeResolver,
    config: KundliConfig,
}

impl<G: EphemerisGateway> Kundli<G> {
    /// Default configuration.
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, KundliConfig::default())
    }

    pub fn with_config(gateway: G, config: KundliConfig) -> Self {
        Self {
            gateway,
            resolver: config.time_resolver(),
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &KundliConfig {
        &self.config
    }

    pub fn resolver(&self) -> &TimeResolver {
        &self.resolver
    }

    pub fn birth_chart(&self, req: &BirthRequest) -> Outcome<BirthChartDto> {
        let _span = info_span!("birth_chart", date = %req.date, tz = %req.timezone).entered();
        finish("birth_chart", self.try_birth_chart(req))
    }

    /// Dasha report with the periods active at `reference_utc` (now if `None`).
    pub fn dasha(&self, req: &BirthRequest, reference_utc: Option<NaiveDateTime>) -> Outcome<DashaDto> {
        let _span = info_span!("dasha", date = %req.date).entered();
        finish("dasha", self.try_dasha(req, reference_utc))
    }

    pub fn divisional_chart(&self, req: &BirthRequest, factor: u16) -> Outcome<DivisionalChartDto> {
        let _span = info_span!("divisional_chart", factor).entered();
        finish("divisional_chart", self.try_divisional(req, factor))
    }

    pub fn panchang(
        &self,
        date: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Outcome<PanchangDto> {
        let _span = info_span!("panchang", date, tz = timezone).entered();
        finish(
            "panchang",
            self.try_panchang(date, latitude, longitude, timezone),
        )
    }

    /// Unknown event names score as `general`.
    pub fn muhurat(
        &self,
        date: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        event_type: &str,
    ) -> Outcome<MuhuratDto> {
        let _span = info_span!("muhurat", date, event_type).entered();
        finish(
            "muhurat",
            self.try_muhurat(date, latitude, longitude, timezone, event_type),
        )
    }

    pub fn compatibility(
        &self,
        first: &BirthRequest,
        second: &BirthRequest,
    ) -> Outcome<CompatibilityDto> {
        let _span = info_span!("compatibility").entered();
        finish("compatibility", self.try_compatibility(first, second))
    }

    fn try_birth_chart(&self, req: &BirthRequest) -> Result<BirthChartDto, KundliError> {
        let input = req.to_input()?;
        let chart = birth_chart(&self.gateway, &self.resolver, &input)?;
        Ok(BirthChartDto::from(&chart))
    }

    fn try_dasha(
        &self,
        req: &BirthRequest,
        reference_utc: Option<NaiveDateTime>,
    ) -> Result<DashaDto, KundliError> {
        let input = req.to_input()?;
        let reference = reference_utc.unwrap_or_else(|| Utc::now().naive_utc());
        let report = dasha_for_birth(
            &self.gateway,
            &self.resolver,
            &self.config,
            &input,
            utc_to_jd(&reference),
        )?;
        DashaDto::from_report(&report, self.config.mahadasha_report_limit)
    }

    fn try_divisional(&self, req: &BirthRequest, factor: u16) -> Result<DivisionalChartDto, KundliError> {
        let division = Division::from_factor(factor)?;
        let input = req.to_input()?;
        let chart = birth_chart(&self.gateway, &self.resolver, &input)?;
        let d = divisional_chart(&chart, division, self.config.varga_scheme);
        Ok(DivisionalChartDto::from(&d))
    }

    fn try_panchang(
        &self,
        date: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<PanchangDto, KundliError> {
        let date = parse_date(date)?;
        validate_location(latitude, longitude)?;
        let location = GeoLocation::new(latitude, longitude, 0.0);
        let day = panchang_for_date(
            &self.gateway,
            &self.resolver,
            &self.config,
            date,
            &location,
            timezone.trim(),
        )?;
        Ok(PanchangDto::from(&day))
    }

    fn try_muhurat(
        &self,
        date: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        event_type: &str,
    ) -> Result<MuhuratDto, KundliError> {
        let date = parse_date(date)?;
        validate_location(latitude, longitude)?;
        let location = GeoLocation::new(latitude, longitude, 0.0);
        let day = muhurat_for_date(
            &self.gateway,
            &self.resolver,
            &self.config,
            date,
            &location,
            timezone.trim(),
            EventType::from_name(event_type),
        )?;
        Ok(MuhuratDto::from(&day))
    }

    fn try_compatibility(
        &self,
        first: &BirthRequest,
        second: &BirthRequest,
    ) -> Result<CompatibilityDto, KundliError> {
        let a = first.to_input()?;
        let b = second.to_input()?;
        let report = compatibility(&self.gateway, &self.resolver, &a, &b)?;
        Ok(CompatibilityDto::from(&report))
    }
}

fn finish<T>(operation: &'static str, result: Result<T, KundliError>) -> Outcome<T> {
    match result {
        Ok(v) => Outcome::Success(v),
        Err(e) => {
            let body = ErrorBody::from(&e);
            warn!(operation, kind = body.error.name(), error = %e, "operation failed");
            Outcome::Failure(body)
        }
    }
}
