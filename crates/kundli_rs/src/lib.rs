//! Top-level kundli operations over plain scalars.
//!
//! Wraps an [`EphemerisGateway`] together with a [`TimeResolver`] and a
//! [`KundliConfig`], and exposes the six report operations with string and
//! decimal-degree inputs. Every operation returns an [`Outcome`]: the report
//! DTO, or an `{error, detail}` body. Both serialize with serde.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundli_rs::*;
//!
//! let kundli = Kundli::new(my_gateway);
//! let req = BirthRequest::new("1990-01-15", "10:30", 28.6139, 77.2090, "Asia/Kolkata");
//! match kundli.birth_chart(&req) {
//!     Outcome::Success(chart) => println!("ascendant {}", chart.ascendant_sign),
//!     Outcome::Failure(e) => eprintln!("{}: {}", e.error.name(), e.detail),
//! }
//! ```

pub mod dto;
pub mod error;
pub mod kundli;
pub mod request;

pub use dto::{
    BirthChartDto, CompatibilityDto, CurrentDashaDto, DashaDto, DashaPeriodDto,
    DivisionalChartDto, DivisionalPlanetDto, HouseDto, InputDto, InstantDto, KootaDto,
    MangalDoshaDto, MoonDto, MuhuratDto, MuhuratSummaryDto, MuhuratWindowDto, PanchangDto,
    PlanetDto, format_clock_minutes, round_to,
};
pub use error::{ErrorBody, ErrorKind, KundliError, Outcome};
pub use kundli::Kundli;
pub use request::BirthRequest;

// Re-export the collaborator types callers need to build a `Kundli`.
pub use kundli_config::{ConfigError, KundliConfig};
pub use kundli_core::{EphemerisError, EphemerisGateway, GeoLocation, SnapshotEphemeris};
pub use kundli_time::TimeResolver;
