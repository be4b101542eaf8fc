//! Integration tests for the facade operations and their serialized form.

use chrono::NaiveDate;
use kundli_core::{Body, RiseSetKind};
use kundli_rs::*;
use serde_json::Value;

const AYANAMSHA: f64 = 23.7;
// 1990-01-15 10:30 IST
const BIRTH_JD: f64 = 2_447_906.708_333_333;

fn birth() -> BirthRequest {
    BirthRequest::new("1990-01-15", "10:30", 28.6139, 77.209, "Asia/Kolkata")
}

fn chart_gateway() -> SnapshotEphemeris {
    SnapshotEphemeris::new(BIRTH_JD)
        .with_ayanamsha(AYANAMSHA)
        .with_ascendant(125.0 + AYANAMSHA)
        .with_body(Body::Sun, 280.5, 0.0, 1.02)
        .with_body(Body::Moon, 51.4, -4.2, 13.1)
        .with_body(Body::Mars, 100.0, 1.0, -0.3)
        .with_body(Body::Mercury, 265.0, 0.0, 1.2)
        .with_body(Body::Jupiter, 85.0, 0.0, -0.1)
        .with_body(Body::Venus, 300.0, 0.0, 1.1)
        .with_body(Body::Saturn, 270.0, 0.0, 0.12)
        .with_body(Body::TrueNode, 310.0, 0.0, -0.053)
}

/// Stationary Sun at 10 and Moon at 140; sunrise 06:15, sunset 18:25 local.
fn panchang_gateway() -> SnapshotEphemeris {
    SnapshotEphemeris::new(2_460_389.5)
        .with_body(Body::Sun, 10.0, 0.0, 0.0)
        .with_body(Body::Moon, 140.0, 0.0, 0.0)
        .with_event(Body::Sun, RiseSetKind::Rise, 375.0 / 1440.0)
        .with_event(Body::Sun, RiseSetKind::Set, 1105.0 / 1440.0)
        .without_event(Body::Moon, RiseSetKind::Rise)
}

fn reference(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn assert_error(v: &Value, kind: &str) {
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 2, "error body must be exactly {{error, detail}}: {v}");
    assert_eq!(obj["error"], kind);
    assert!(obj["detail"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn facade_is_send_and_sync() {
    fn check<T: Send + Sync>() {}
    check::<Kundli<SnapshotEphemeris>>();
}

// ---------------------------------------------------------------------------
// Birth chart
// ---------------------------------------------------------------------------

#[test]
fn birth_chart_report() {
    let k = Kundli::new(chart_gateway());
    let chart = k.birth_chart(&birth()).into_result().unwrap();

    assert_eq!(chart.ascendant_sign, "Simha");
    assert_eq!(chart.ascendant, 125.0);
    assert_eq!(chart.ascendant_degrees, 5.0);
    assert_eq!(chart.ayanamsha, 23.7);
    assert_eq!(chart.house_system, "Equal");
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.houses[0].lord, "Sun");
    assert_eq!(chart.planets.len(), 9);
    assert_eq!(chart.moon_nakshatra, "Rohini");
    assert_eq!(chart.moon_nakshatra_pada, 4);
    assert_eq!(chart.instant.offset_source, "timezone_database");
    assert_eq!(chart.instant.timezone_offset, 5.5);

    let moon = &chart.planets[1];
    assert_eq!(moon.name, "Moon");
    assert_eq!(moon.sign, "Vrishabha");
    assert_eq!(moon.house, 10);
    assert_eq!(moon.degrees_in_sign, 21.4);
    assert_eq!(moon.longitude_tropical, 75.1);

    let ketu = &chart.planets[8];
    assert_eq!(ketu.name, "Ketu");
    assert!(ketu.retrograde);
    assert_eq!(ketu.longitude, 130.0);
}

#[test]
fn birth_chart_serializes_flat() {
    let k = Kundli::new(chart_gateway());
    let v = serde_json::to_value(k.birth_chart(&birth())).unwrap();
    assert_eq!(v["ascendant_sign"], "Simha");
    assert_eq!(v["planets"][2]["name"], "Mars");
    assert_eq!(v["planets"][2]["retrograde"], true);
    assert_eq!(v["input"]["date"], "1990-01-15");
    assert_eq!(v["input"]["time"], "10:30:00");
    assert!(v.get("error").is_none());
}

#[test]
fn bad_inputs_are_input_parse_errors() {
    let k = Kundli::new(chart_gateway());

    let mut req = birth();
    req.date = "1990-02-30".into();
    assert_error(&serde_json::to_value(k.birth_chart(&req)).unwrap(), "input_parse");

    let mut req = birth();
    req.time = "25:61".into();
    assert_error(&serde_json::to_value(k.birth_chart(&req)).unwrap(), "input_parse");

    let mut req = birth();
    req.latitude = 123.0;
    assert_error(&serde_json::to_value(k.birth_chart(&req)).unwrap(), "input_parse");
}

#[test]
fn gateway_failure_is_ephemeris_error() {
    let k = Kundli::new(SnapshotEphemeris::new(BIRTH_JD).with_body(Body::Moon, 0.0, 0.0, 13.0));
    let out = k.birth_chart(&birth());
    let body = out.failure().unwrap();
    assert_eq!(body.error, ErrorKind::Ephemeris);
    assert!(body.detail.contains("Sun"));
}

#[test]
fn static_table_offsets_from_config() {
    let cfg = KundliConfig::from_toml_str("[timezone_offsets]\n\"Local/Ashram\" = 5.5\n").unwrap();
    let k = Kundli::with_config(chart_gateway(), cfg);
    let mut req = birth();
    req.timezone = "Local/Ashram".into();
    let chart = k.birth_chart(&req).into_result().unwrap();
    assert_eq!(chart.instant.offset_source, "static_table");
    assert!(!chart.instant.dst_active);
    assert_eq!(chart.ascendant_sign, "Simha");
}

// ---------------------------------------------------------------------------
// Dasha
// ---------------------------------------------------------------------------

#[test]
fn dasha_report() {
    let k = Kundli::new(chart_gateway());
    let d = k.dasha(&birth(), reference(1990, 6, 1)).into_result().unwrap();

    assert_eq!(d.moon_nakshatra, "Rohini");
    assert_eq!(d.nakshatra_lord, "Moon");
    assert_eq!(d.mahadashas.len(), 18);
    assert_eq!(d.mahadashas[0].lord, "Moon");
    assert_eq!(d.mahadashas[0].years, 1.45);
    assert_eq!(d.mahadashas[1].lord, "Mars");
    assert_eq!(d.mahadashas[1].years, 7.0);
    assert_eq!(d.antardashas.len(), 9);
    assert_eq!(d.antardashas[0].level, "Antardasha");

    let current = &d.current;
    assert_eq!(current.mahadasha.as_ref().map(|p| p.lord), Some("Moon"));
    assert!(current.antardasha.is_some());
    assert!(current.pratyantardasha.is_some());
    assert!(current.sookshma.is_some());
}

#[test]
fn dasha_before_birth_has_no_current_period() {
    let k = Kundli::new(chart_gateway());
    let d = k.dasha(&birth(), reference(1980, 1, 1)).into_result().unwrap();
    assert!(d.current.mahadasha.is_none());
    assert!(d.current.sookshma.is_none());
    assert!(d.antardashas.is_empty());

    let v = serde_json::to_value(&d).unwrap();
    assert!(v["current"]["mahadasha"].is_null());
}

#[test]
fn dasha_defaults_to_now() {
    let k = Kundli::new(chart_gateway());
    let d = k.dasha(&birth(), None).into_result().unwrap();
    // Birth 1990 plus 240 years of timeline covers today.
    assert!(d.current.mahadasha.is_some());
}

// ---------------------------------------------------------------------------
// Divisional
// ---------------------------------------------------------------------------

#[test]
fn navamsa_report() {
    let k = Kundli::new(chart_gateway());
    let d = k.divisional_chart(&birth(), 9).into_result().unwrap();
    assert_eq!(d.chart_type, "D9");
    assert_eq!(d.name, "Navamsa");
    assert_eq!(d.scheme, "linear");
    assert_eq!(d.ascendant_sign, "Vrishabha");
    assert_eq!(d.houses[0], "Vrishabha");
    assert_eq!(d.planets[1].sign, "Karka");
    assert_eq!(d.planets[1].house, 3);
}

#[test]
fn unsupported_division_is_input_parse() {
    let k = Kundli::new(chart_gateway());
    let out = k.divisional_chart(&birth(), 5);
    assert_eq!(out.failure().map(|b| b.error), Some(ErrorKind::InputParse));
}

// ---------------------------------------------------------------------------
// Panchang and muhurat
// ---------------------------------------------------------------------------

#[test]
fn panchang_report() {
    let k = Kundli::new(panchang_gateway());
    let p = k
        .panchang("2024-03-20", 28.6139, 77.209, "Asia/Kolkata")
        .into_result()
        .unwrap();

    assert_eq!(p.tithi, "Ekadashi");
    assert_eq!(p.tithi_number, 11);
    assert_eq!(p.paksha, "Shukla");
    assert_eq!(p.nakshatra, "Purva Phalguni");
    assert_eq!(p.yoga, "Dhruva");
    assert_eq!(p.karana, "Vishti");
    assert_eq!(p.vara_english, "Wednesday");
    assert_eq!(p.sunrise.as_deref(), Some("06:15"));
    assert_eq!(p.sunset.as_deref(), Some("18:25"));
    assert_eq!(p.moonrise, None);
    assert_eq!(p.rahu_kaal, "12:00-13:30");
    assert_eq!(p.gulika_kaal, "10:30-12:00");
    assert_eq!(p.yamaghanda, "07:30-09:00");

    let v = serde_json::to_value(&p).unwrap();
    assert!(v["moonrise"].is_null());
}

#[test]
fn panchang_rejects_bad_location() {
    let k = Kundli::new(panchang_gateway());
    let v = serde_json::to_value(k.panchang("2024-03-20", 95.0, 77.2, "Asia/Kolkata")).unwrap();
    assert_error(&v, "input_parse");
    let v = serde_json::to_value(k.panchang("20-03-2024", 28.6, 77.2, "Asia/Kolkata")).unwrap();
    assert_error(&v, "input_parse");
}

#[test]
fn muhurat_report() {
    let k = Kundli::new(panchang_gateway());
    let m = k
        .muhurat("2024-03-20", 28.6139, 77.209, "Asia/Kolkata", "marriage")
        .into_result()
        .unwrap();

    assert_eq!(m.event_type, "marriage");
    assert_eq!(m.daylight, "observed");
    assert_eq!(m.muhurats.len(), 8);
    assert_eq!(m.muhurats[0].start_time, "06:15");
    assert_eq!(m.muhurats[0].end_time, "07:46");
    assert_eq!(m.muhurats[7].end_time, "18:25");
    assert_eq!(m.muhurats[4].quality, "poor");
    assert_eq!(m.summary.total_muhurats, 8);
    assert_eq!(
        (m.summary.excellent, m.summary.good, m.summary.moderate, m.summary.poor),
        (0, 4, 2, 2)
    );
    assert!(m.best_times.is_empty());
}

#[test]
fn unknown_event_scores_as_general() {
    let k = Kundli::new(panchang_gateway());
    let m = k
        .muhurat("2024-03-20", 28.6139, 77.209, "Asia/Kolkata", "picnic")
        .into_result()
        .unwrap();
    assert_eq!(m.event_type, "general");
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[test]
fn compatibility_report() {
    let k = Kundli::new(chart_gateway());
    let second = BirthRequest::new("1992-06-01", "08:00", 40.71, -74.0, "America/New_York");
    let c = k.compatibility(&birth(), &second).into_result().unwrap();

    assert_eq!(c.max_points, 36.0);
    assert_eq!(c.details.len(), 8);
    assert_eq!(c.details[4].name, "Graha Maitri");
    assert_eq!(c.details[7].max, 8.0);
    let sum: f64 = c.details.iter().map(|d| d.points).sum();
    assert!((sum - c.total_points).abs() < 0.05);
    assert!((0.0..=36.0).contains(&c.total_points));
    assert_eq!(c.person1_moon.nakshatra, "Rohini");
    assert!(c.mangal_dosha.person1);
}

#[test]
fn identical_partners() {
    let k = Kundli::new(chart_gateway());
    let c = k.compatibility(&birth(), &birth()).into_result().unwrap();
    assert_eq!(c.total_points, 28.0);
    assert_eq!(c.compatibility_level, "Excellent");
    assert!(c.mangal_dosha.compatible);
}

#[test]
fn request_defaults_from_json() {
    let req: BirthRequest =
        serde_json::from_str(r#"{"date":"1990-01-15","latitude":28.6,"longitude":77.2}"#).unwrap();
    assert_eq!(req.time, "12:00:00");
    assert_eq!(req.timezone, "Asia/Kolkata");
}
