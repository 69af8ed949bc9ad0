use std::fmt::{self, Display};
use std::marker::PhantomData;

use anyhow::{Result, bail};
use chrono::{Datelike, Local, TimeZone, Utc};

/// The per-variant format. Variants change rendering only; construction and
/// field handling are shared by `Date<S>`.
pub trait DateStyle {
    fn fmt(year: i32, month: u32, day: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

#[derive(Debug, Clone, Copy)]
pub struct Iso;

impl DateStyle for Iso {
    fn fmt(year: i32, month: u32, day: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", year, month, day)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MonthDayYear;

impl DateStyle for MonthDayYear {
    fn fmt(year: i32, month: u32, day: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", month, day, year)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DayMonthYear;

impl DateStyle for DayMonthYear {
    fn fmt(year: i32, month: u32, day: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", day, month, year)
    }
}

/// A calendar date rendered through the style picked at the type level.
/// Fields are not validated; out of range values render as given.
#[derive(Debug, Clone, Copy)]
pub struct Date<S: DateStyle = Iso> {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    style: PhantomData<S>,
}

pub type IsoDate = Date<Iso>;
pub type MonthDayYearDate = Date<MonthDayYear>;
pub type DayMonthYearDate = Date<DayMonthYear>;

impl<S: DateStyle> Date<S> {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            style: PhantomData,
        }
    }

    /// Builds the calling variant from a Unix timestamp, using the local
    /// calendar fields.
    pub fn from_timestamp(ts: i64) -> Result<Self> {
        let tm = match Local.timestamp_opt(ts, 0).single() {
            Some(tm) => tm,
            None => bail!("Timestamp {} is out of range", ts),
        };

        Ok(Self::new(tm.year(), tm.month(), tm.day()))
    }

    pub fn today() -> Result<Self> {
        Self::from_timestamp(Utc::now().timestamp())
    }
}

impl<S: DateStyle> Display for Date<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        S::fmt(self.year, self.month, self.day, f)
    }
}
