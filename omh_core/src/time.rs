//! Time descriptors: when a measurement applies.
//!
//! A [`TimeFrame`] is either a single instant or a [`TimeInterval`]. An
//! interval can only be obtained through its named constructors, which
//! validate their arguments, so every live interval is well formed.

use crate::schema::parse_schema_value;
use crate::types::PartOfDay;
use crate::unit_value::{DurationUnitValue, UnitValueDocument};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::hash::{Hash, Hasher};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render an instant the way documents carry it (`2013-02-05T07:25:00Z`)
pub fn format_date_time(date_time: &DateTime<FixedOffset>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_date_time(field: &str, text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text)
        .map_err(|e| Error::invalid(field, format!("\"{text}\" is not an RFC 3339 date-time: {e}")))
}

fn parse_date(field: &str, text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| Error::invalid(field, format!("\"{text}\" is not a full date: {e}")))
}

/// A date-time compared by instant and UTC offset, so that values which
/// render differently are never equal
#[derive(Clone, Copy, Debug)]
struct OffsetInstant(DateTime<FixedOffset>);

impl PartialEq for OffsetInstant {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.offset() == other.0.offset()
    }
}

impl Eq for OffsetInstant {}

impl Hash for OffsetInstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.0.offset().local_minus_utc().hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum IntervalRepr {
    StartAndEnd {
        start: OffsetInstant,
        end: OffsetInstant,
    },
    StartAndDuration {
        start: OffsetInstant,
        duration: DurationUnitValue,
    },
    EndAndDuration {
        end: OffsetInstant,
        duration: DurationUnitValue,
    },
    DateAndPartOfDay {
        date: NaiveDate,
        part_of_day: PartOfDay,
    },
}

/// A span of time described in one of several mutually exclusive ways
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval(IntervalRepr);

fn check_duration(duration: &DurationUnitValue) -> Result<()> {
    if duration.is_negative() {
        return Err(Error::invalid("duration", "must be non-negative"));
    }
    Ok(())
}

impl TimeInterval {
    /// Interval between two instants; `end` may not precede `start`
    pub fn of_start_and_end(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Self> {
        if end < start {
            return Err(Error::invalid(
                "end_date_time",
                "must not be before start_date_time",
            ));
        }
        Ok(Self(IntervalRepr::StartAndEnd {
            start: OffsetInstant(start),
            end: OffsetInstant(end),
        }))
    }

    pub fn of_start_and_duration(
        start: DateTime<FixedOffset>,
        duration: DurationUnitValue,
    ) -> Result<Self> {
        check_duration(&duration)?;
        Ok(Self(IntervalRepr::StartAndDuration {
            start: OffsetInstant(start),
            duration,
        }))
    }

    pub fn of_end_and_duration(
        end: DateTime<FixedOffset>,
        duration: DurationUnitValue,
    ) -> Result<Self> {
        check_duration(&duration)?;
        Ok(Self(IntervalRepr::EndAndDuration {
            end: OffsetInstant(end),
            duration,
        }))
    }

    pub fn of_date_and_part_of_day(date: NaiveDate, part_of_day: PartOfDay) -> Self {
        Self(IntervalRepr::DateAndPartOfDay { date, part_of_day })
    }

    pub fn start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match &self.0 {
            IntervalRepr::StartAndEnd { start, .. } | IntervalRepr::StartAndDuration { start, .. } => {
                Some(start.0)
            }
            _ => None,
        }
    }

    pub fn end_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match &self.0 {
            IntervalRepr::StartAndEnd { end, .. } | IntervalRepr::EndAndDuration { end, .. } => {
                Some(end.0)
            }
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<&DurationUnitValue> {
        match &self.0 {
            IntervalRepr::StartAndDuration { duration, .. }
            | IntervalRepr::EndAndDuration { duration, .. } => Some(duration),
            _ => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match &self.0 {
            IntervalRepr::DateAndPartOfDay { date, .. } => Some(*date),
            _ => None,
        }
    }

    pub fn part_of_day(&self) -> Option<PartOfDay> {
        match &self.0 {
            IntervalRepr::DateAndPartOfDay { part_of_day, .. } => Some(*part_of_day),
            _ => None,
        }
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match &self.0 {
            IntervalRepr::StartAndEnd { start, end } => {
                map.serialize_entry("start_date_time", &format_date_time(&start.0))?;
                map.serialize_entry("end_date_time", &format_date_time(&end.0))?;
            }
            IntervalRepr::StartAndDuration { start, duration } => {
                map.serialize_entry("start_date_time", &format_date_time(&start.0))?;
                map.serialize_entry("duration", duration)?;
            }
            IntervalRepr::EndAndDuration { end, duration } => {
                map.serialize_entry("end_date_time", &format_date_time(&end.0))?;
                map.serialize_entry("duration", duration)?;
            }
            IntervalRepr::DateAndPartOfDay { date, part_of_day } => {
                map.serialize_entry("date", &date.format(DATE_FORMAT).to_string())?;
                map.serialize_entry("part_of_day", part_of_day)?;
            }
        }
        map.end()
    }
}

/// The temporal descriptor attached to a measure
///
/// Two frames are equal only when they would serialize identically: instants
/// must agree on both the moment and the UTC offset.
#[derive(Clone, Debug)]
pub enum TimeFrame {
    DateTime(DateTime<FixedOffset>),
    TimeInterval(TimeInterval),
}

impl PartialEq for TimeFrame {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TimeFrame::DateTime(a), TimeFrame::DateTime(b)) => {
                OffsetInstant(*a) == OffsetInstant(*b)
            }
            (TimeFrame::TimeInterval(a), TimeFrame::TimeInterval(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TimeFrame {}

impl Hash for TimeFrame {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            TimeFrame::DateTime(date_time) => OffsetInstant(*date_time).hash(state),
            TimeFrame::TimeInterval(interval) => interval.hash(state),
        }
    }
}

impl TimeFrame {
    pub fn date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeFrame::DateTime(date_time) => Some(*date_time),
            TimeFrame::TimeInterval(_) => None,
        }
    }

    pub fn time_interval(&self) -> Option<&TimeInterval> {
        match self {
            TimeFrame::DateTime(_) => None,
            TimeFrame::TimeInterval(interval) => Some(interval),
        }
    }
}

impl From<DateTime<FixedOffset>> for TimeFrame {
    fn from(date_time: DateTime<FixedOffset>) -> Self {
        TimeFrame::DateTime(date_time)
    }
}

impl From<DateTime<Utc>> for TimeFrame {
    fn from(date_time: DateTime<Utc>) -> Self {
        TimeFrame::DateTime(date_time.fixed_offset())
    }
}

impl From<TimeInterval> for TimeFrame {
    fn from(interval: TimeInterval) -> Self {
        TimeFrame::TimeInterval(interval)
    }
}

impl Serialize for TimeFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            TimeFrame::DateTime(date_time) => {
                map.serialize_entry("date_time", &format_date_time(date_time))?
            }
            TimeFrame::TimeInterval(interval) => map.serialize_entry("time_interval", interval)?,
        }
        map.end()
    }
}

/// Wire shape of a time frame before validation
#[derive(Debug, Deserialize)]
pub(crate) struct TimeFrameDocument {
    date_time: Option<String>,
    time_interval: Option<TimeIntervalDocument>,
}

#[derive(Debug, Deserialize)]
struct TimeIntervalDocument {
    start_date_time: Option<String>,
    end_date_time: Option<String>,
    duration: Option<UnitValueDocument>,
    date: Option<String>,
    part_of_day: Option<String>,
}

impl TimeFrameDocument {
    pub(crate) fn into_time_frame(self, field: &str) -> Result<TimeFrame> {
        match (self.date_time, self.time_interval) {
            (Some(date_time), None) => {
                let field = format!("{field}.date_time");
                Ok(TimeFrame::DateTime(parse_date_time(&field, &date_time)?))
            }
            (None, Some(interval)) => {
                let field = format!("{field}.time_interval");
                Ok(TimeFrame::TimeInterval(interval.into_time_interval(&field)?))
            }
            (Some(_), Some(_)) => Err(Error::Structural(format!(
                "{field} is ambiguous: both date_time and time_interval are present"
            ))),
            (None, None) => Err(Error::Structural(format!(
                "{field} must contain either date_time or time_interval"
            ))),
        }
    }
}

impl TimeIntervalDocument {
    fn into_time_interval(self, field: &str) -> Result<TimeInterval> {
        let path = |name: &str| format!("{field}.{name}");

        // Each variant is identified by its exact key set.
        let interval = match (
            self.start_date_time,
            self.end_date_time,
            self.duration,
            self.date,
            self.part_of_day,
        ) {
            (Some(start), Some(end), None, None, None) => TimeInterval::of_start_and_end(
                parse_date_time(&path("start_date_time"), &start)?,
                parse_date_time(&path("end_date_time"), &end)?,
            ),
            (Some(start), None, Some(duration), None, None) => TimeInterval::of_start_and_duration(
                parse_date_time(&path("start_date_time"), &start)?,
                duration.into_unit_value(&path("duration"))?,
            ),
            (None, Some(end), Some(duration), None, None) => TimeInterval::of_end_and_duration(
                parse_date_time(&path("end_date_time"), &end)?,
                duration.into_unit_value(&path("duration"))?,
            ),
            (None, None, None, Some(date), Some(part_of_day)) => {
                Ok(TimeInterval::of_date_and_part_of_day(
                    parse_date(&path("date"), &date)?,
                    parse_schema_value::<PartOfDay>(&path("part_of_day"), &part_of_day)?,
                ))
            }
            _ => {
                return Err(Error::Structural(format!(
                    "{field} does not match any interval shape; expected start_date_time and \
                     end_date_time, a date-time and duration, or date and part_of_day"
                )))
            }
        };

        interval.map_err(|e| match e {
            Error::InvalidArgument { field: name, reason } => Error::InvalidArgument {
                field: path(&name),
                reason,
            },
            other => other,
        })
    }
}

/// Decode an optional time frame property
pub(crate) fn time_frame_from_document(
    field: &str,
    document: Option<TimeFrameDocument>,
) -> Result<Option<TimeFrame>> {
    document.map(|doc| doc.into_time_frame(field)).transpose()
}
