//! Run context: one clock read at entry, threaded through every stage.
//!
//! All timestamp math in the pipeline compares against `RunContext::now`, so a
//! run behaves deterministically no matter how long fetching takes, and tests
//! can inject an arbitrary instant via [`RunContext::with_now`].

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

/// The fixed reference zone for all rendered timestamps (EST, UTC-05:00).
pub fn reference_zone() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

/// Coverage cutoff: November 8, 11:00 AM in the reference zone, current year.
const COVERAGE_END_MONTH: u32 = 11;
const COVERAGE_END_DAY: u32 = 8;
const COVERAGE_END_HOUR: u32 = 11;

/// Immutable per-run state computed once at program entry.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Run-start instant in the reference zone.
    pub now: DateTime<FixedOffset>,
    /// Hard cutoff after which the run is a no-op.
    pub coverage_end: DateTime<FixedOffset>,
    /// Directory both output files are written into.
    pub output_dir: String,
}

impl RunContext {
    /// Build a context from the wall clock.
    pub fn new(output_dir: String) -> Self {
        Self::with_now(Utc::now().with_timezone(&reference_zone()), output_dir)
    }

    /// Build a context with an injected run-start instant.
    ///
    /// The coverage cutoff is derived from the injected instant's calendar
    /// year, so tests exercise the gate the same way a real run does.
    pub fn with_now(now: DateTime<FixedOffset>, output_dir: String) -> Self {
        let coverage_end = now
            .timezone()
            .with_ymd_and_hms(
                now.year(),
                COVERAGE_END_MONTH,
                COVERAGE_END_DAY,
                COVERAGE_END_HOUR,
                0,
                0,
            )
            .unwrap();
        Self {
            now,
            coverage_end,
            output_dir,
        }
    }

    /// True when the run falls after the coverage cutoff and must no-op.
    pub fn outside_coverage(&self) -> bool {
        self.now > self.coverage_end
    }
}
