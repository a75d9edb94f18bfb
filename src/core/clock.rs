//! Injectable clock: system time behind a trait so report timestamps and
//! date-derived file names are deterministic under test.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Source of the current UTC time.
pub trait Clock {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;

    /// RFC 3339 UTC timestamp with millisecond precision and `Z` suffix,
    /// e.g. `2026-08-06T12:00:00.000Z`.
    fn timestamp(&self) -> String {
        self.now_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Calendar date in UTC; used for report file naming.
    fn today(&self) -> NaiveDate {
        self.now_utc().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pin the clock to an RFC 3339 timestamp, e.g. `2026-08-06T12:00:00Z`.
    pub fn from_rfc3339(raw: &str) -> Result<Self, chrono::ParseError> {
        let parsed = DateTime::parse_from_rfc3339(raw)?;
        Ok(Self::new(parsed.with_timezone(&Utc)))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}
