use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_config::KundliConfig;
use kundli_core::{Body, GeoLocation, RiseSetKind, SnapshotEphemeris};
use kundli_search::{birth_chart, dasha_for_birth, divisional_chart, muhurat_for_date};
use kundli_time::{BirthInput, TimeResolver};
use kundli_vedic_base::{Division, EventType, VargaScheme};

const EPOCH: f64 = 2_447_906.708_333_333;

fn snapshot() -> SnapshotEphemeris {
    SnapshotEphemeris::new(EPOCH)
        .with_ayanamsha(23.7)
        .with_ascendant(148.7)
        .with_body(Body::Sun, 280.5, 0.0, 1.02)
        .with_body(Body::Moon, 51.4, -4.2, 13.1)
        .with_body(Body::Mars, 100.0, 1.0, -0.3)
        .with_body(Body::Mercury, 265.0, 0.0, 1.2)
        .with_body(Body::Jupiter, 85.0, 0.0, -0.1)
        .with_body(Body::Venus, 300.0, 0.0, 1.1)
        .with_body(Body::Saturn, 270.0, 0.0, 0.12)
        .with_body(Body::TrueNode, 310.0, 0.0, -0.053)
        .with_event(Body::Sun, RiseSetKind::Rise, 0.26)
        .with_event(Body::Sun, RiseSetKind::Set, 0.77)
        .with_event(Body::Moon, RiseSetKind::Rise, 0.41)
}

fn chart_bench(c: &mut Criterion) {
    let eph = snapshot();
    let resolver = TimeResolver::new();
    let cfg = KundliConfig::default();
    let Ok(input) = BirthInput::parse("1990-01-15", "10:30", 28.6139, 77.209, "Asia/Kolkata")
    else {
        return;
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("birth_chart", |b| {
        b.iter(|| birth_chart(black_box(&eph), &resolver, black_box(&input)))
    });
    group.bench_function("dasha_for_birth", |b| {
        b.iter(|| dasha_for_birth(&eph, &resolver, &cfg, black_box(&input), EPOCH + 12_000.0))
    });
    if let Ok(chart) = birth_chart(&eph, &resolver, &input) {
        group.bench_function("navamsa", |b| {
            b.iter(|| divisional_chart(black_box(&chart), Division::D9, VargaScheme::Linear))
        });
    }
    group.finish();
}

fn muhurat_bench(c: &mut Criterion) {
    let eph = snapshot();
    let resolver = TimeResolver::new();
    let cfg = KundliConfig::default();
    let loc = GeoLocation::new(28.6139, 77.209, 0.0);
    let Some(date) = NaiveDate::from_ymd_opt(1990, 1, 15) else {
        return;
    };

    c.bench_function("muhurat_for_date", |b| {
        b.iter(|| {
            muhurat_for_date(
                &eph,
                &resolver,
                &cfg,
                black_box(date),
                &loc,
                "Asia/Kolkata",
                EventType::Marriage,
            )
        })
    });
}

criterion_group!(benches, chart_bench, muhurat_bench);
criterion_main!(benches);
