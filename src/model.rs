use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Hour of day on a 24h clock — the only time unit.
pub type Hour = u8;

/// Days of the week, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Only the first three letters decide, case-insensitive:
    /// `"Monday"`, `"mon"`, and `"MON"` all parse to `Mon`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.trim().chars().take(3).map(|c| c.to_ascii_lowercase()).collect();
        match key.as_str() {
            "mon" => Ok(Weekday::Mon),
            "tue" => Ok(Weekday::Tue),
            "wed" => Ok(Weekday::Wed),
            "thu" => Ok(Weekday::Thu),
            "fri" => Ok(Weekday::Fri),
            "sat" => Ok(Weekday::Sat),
            "sun" => Ok(Weekday::Sun),
            _ => Err(ScheduleError::UnknownDay(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        };
        f.write_str(name)
    }
}

/// Half-open hour range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSpan {
    pub start: Hour,
    pub end: Hour,
}

impl HourSpan {
    /// Rejects `start >= end`: an empty or inverted range is caller error.
    pub fn new(start: Hour, end: Hour) -> Result<Self, ScheduleError> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn covers(&self, hour: Hour) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Integer hours inside the span, ascending.
    pub fn hours(&self) -> std::ops::Range<Hour> {
        self.start..self.end
    }
}

/// One contiguous block of availability on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub day: Weekday,
    pub span: HourSpan,
}

impl Interval {
    pub fn new(day: Weekday, start: Hour, end: Hour) -> Result<Self, ScheduleError> {
        Ok(Self {
            day,
            span: HourSpan::new(start, end)?,
        })
    }

    pub fn covers(&self, day: Weekday, hour: Hour) -> bool {
        self.day == day && self.span.covers(hour)
    }
}

/// One collaborator's free time: an ordered list of intervals.
///
/// Overlapping or duplicate intervals are legal and never merged; coverage
/// is their union, so a collaborator contributes at most one head per hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub intervals: Vec<Interval>,
}

impl Availability {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn covers(&self, day: Weekday, hour: Hour) -> bool {
        self.intervals.iter().any(|i| i.covers(day, hour))
    }

    /// Days on which this collaborator has at least one interval, ascending.
    pub fn days(&self) -> BTreeSet<Weekday> {
        self.intervals.iter().map(|i| i.day).collect()
    }

    /// Distinct hours covered on `day`, ascending. Overlapping intervals
    /// contribute each hour once.
    pub fn hours_on(&self, day: Weekday) -> BTreeSet<Hour> {
        self.intervals
            .iter()
            .filter(|i| i.day == day)
            .flat_map(|i| i.span.hours())
            .collect()
    }
}

/// A project team: one leader plus the participants working with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Requested meetings per week. Carried for callers; the slot search
    /// schedules a single weekly meeting and does not consult it.
    pub num_meetings: u32,
    pub leader: Availability,
    pub participants: Vec<Availability>,
}

/// A meeting room. Accepted alongside projects but never consulted:
/// room assignment is not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub available: bool,
}

/// Everything one scheduling run operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub projects: Vec<Project>,
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(day: Weekday, start: Hour, end: Hour) -> Interval {
        Interval::new(day, start, end).unwrap()
    }

    #[test]
    fn span_half_open() {
        let s = HourSpan::new(9, 10).unwrap();
        assert!(s.covers(9));
        assert!(!s.covers(10)); // half-open
        assert!(!s.covers(8));
    }

    #[test]
    fn span_rejects_inverted() {
        assert!(matches!(
            HourSpan::new(10, 10),
            Err(ScheduleError::InvalidInterval { start: 10, end: 10 })
        ));
        assert!(HourSpan::new(12, 9).is_err());
    }

    #[test]
    fn span_hours_ascending() {
        let s = HourSpan::new(8, 11).unwrap();
        assert_eq!(s.hours().collect::<Vec<_>>(), vec![8, 9, 10]);
    }

    #[test]
    fn weekday_parses_long_and_short_names() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Mon);
        assert_eq!("tue".parse::<Weekday>().unwrap(), Weekday::Tue);
        assert_eq!("WEDNESDAY".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert!(" sun ".parse::<Weekday>().is_ok());
        assert!(matches!(
            "someday".parse::<Weekday>(),
            Err(ScheduleError::UnknownDay(_))
        ));
    }

    #[test]
    fn weekday_calendar_order() {
        assert!(Weekday::Mon < Weekday::Tue);
        assert!(Weekday::Fri < Weekday::Sat);
        assert!(Weekday::Sat < Weekday::Sun);
    }

    #[test]
    fn availability_union_coverage() {
        let a = Availability::new(vec![
            interval(Weekday::Mon, 8, 10),
            interval(Weekday::Mon, 9, 12), // overlaps the first
            interval(Weekday::Wed, 14, 15),
        ]);
        assert!(a.covers(Weekday::Mon, 8));
        assert!(a.covers(Weekday::Mon, 11));
        assert!(!a.covers(Weekday::Mon, 12));
        assert!(!a.covers(Weekday::Tue, 9));
        assert!(a.covers(Weekday::Wed, 14));
    }

    #[test]
    fn availability_days_and_hours_deduplicate() {
        let a = Availability::new(vec![
            interval(Weekday::Tue, 9, 11),
            interval(Weekday::Tue, 10, 12),
            interval(Weekday::Mon, 8, 9),
        ]);
        assert_eq!(
            a.days().into_iter().collect::<Vec<_>>(),
            vec![Weekday::Mon, Weekday::Tue]
        );
        assert_eq!(
            a.hours_on(Weekday::Tue).into_iter().collect::<Vec<_>>(),
            vec![9, 10, 11]
        );
        assert!(a.hours_on(Weekday::Fri).is_empty());
    }

    #[test]
    fn empty_availability() {
        let a = Availability::default();
        assert!(a.is_empty());
        assert!(a.days().is_empty());
        assert!(!a.covers(Weekday::Mon, 9));
    }

    #[test]
    fn weekday_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Weekday::Mon).unwrap(), "\"mon\"");
        assert_eq!(
            serde_json::from_str::<Weekday>("\"thu\"").unwrap(),
            Weekday::Thu
        );
    }
}
