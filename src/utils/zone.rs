//! The shop's time zone. Every day boundary and wall-clock conversion in
//! the crate goes through here so truncation happens in one zone only.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopZone {
    Local,
    Fixed(FixedOffset),
}

impl ShopZone {
    /// Parse an optional `±HH:MM` offset; `None` means the machine's zone.
    pub fn from_offset(offset: Option<&str>) -> AppResult<Self> {
        let Some(raw) = offset else {
            return Ok(ShopZone::Local);
        };

        let raw = raw.trim();
        let (sign, rest) = match raw.split_at_checked(1) {
            Some(("+", rest)) => (1, rest),
            Some(("-", rest)) => (-1, rest),
            _ => return Err(AppError::Config(format!("Invalid utc_offset '{}'", raw))),
        };

        let t = NaiveTime::parse_from_str(rest, "%H:%M")
            .map_err(|_| AppError::Config(format!("Invalid utc_offset '{}'", raw)))?;
        let secs = sign * (crate::utils::time::minutes_of_day(t) as i32) * 60;

        FixedOffset::east_opt(secs)
            .map(ShopZone::Fixed)
            .ok_or_else(|| AppError::Config(format!("Invalid utc_offset '{}'", raw)))
    }

    /// Shop-local wall clock for an absolute instant.
    pub fn local(&self, ts: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            ShopZone::Local => ts.with_timezone(&Local).naive_local(),
            ShopZone::Fixed(off) => ts.with_timezone(off).naive_local(),
        }
    }

    /// Absolute instant for a shop-local wall clock. `None` inside a DST gap.
    pub fn to_utc(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            ShopZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            ShopZone::Fixed(off) => off
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.local(&Utc::now()).date()
    }

    /// UTC bounds `[from 00:00:00.000, to 23:59:59.999]` of a span of shop-local days.
    pub fn days_range_utc(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.to_utc(from.and_time(NaiveTime::MIN))?;
        let end = self.to_utc(to.and_hms_milli_opt(23, 59, 59, 999)?)?;
        Some((start, end))
    }
}
