//! Weekly availability schedule for a tutor.
//!
//! The persisted wire form is a JSON object mapping lowercase English
//! weekday names to lists of `["HH:MM", "HH:MM"]` pairs:
//!
//! ```json
//! {"monday": [["09:00", "12:00"], ["14:00", "18:00"]], "friday": []}
//! ```
//!
//! Blocks are kept exactly as stored: they are not sorted, merged or
//! de-duplicated, and a day's blocks may overlap. The slot resolver walks
//! them in stored order.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use tf_shared::utils::validation;

use crate::errors::{DomainError, DomainResult};

/// Clock time format used throughout the schedule wire form
const TIME_FORMAT: &str = "%H:%M";

/// One open interval of availability within a day, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeBlock {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parse a `["HH:MM", "HH:MM"]` pair
    fn from_pair(pair: &[String]) -> DomainResult<Self> {
        if pair.len() != 2 {
            return Err(DomainError::validation(
                "schedule block must be a [start, end] pair",
            ));
        }
        let start = parse_clock_time(&pair[0])?;
        let end = parse_clock_time(&pair[1])?;
        Ok(Self { start, end })
    }

    fn to_pair(self) -> [String; 2] {
        [
            self.start.format(TIME_FORMAT).to_string(),
            self.end.format(TIME_FORMAT).to_string(),
        ]
    }
}

/// Parse a zero-padded 24h "HH:MM" string
pub fn parse_clock_time(value: &str) -> DomainResult<NaiveTime> {
    if !validation::is_valid_clock_time(value) {
        return Err(DomainError::validation(format!(
            "invalid clock time: {value}"
        )));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| DomainError::validation(format!("invalid clock time: {value}")))
}

/// A tutor's recurring weekly availability.
///
/// Owned and replaced wholesale by the tutor; never versioned or diffed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    days: HashMap<String, Vec<TimeBlock>>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON wire form.
    ///
    /// Fails on malformed JSON or unparseable times; read paths that
    /// tolerate corrupt data map the error to an empty schedule themselves.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let wire: HashMap<String, Vec<Vec<String>>> = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("invalid schedule JSON: {e}")))?;

        let mut days = HashMap::with_capacity(wire.len());
        for (day, pairs) in wire {
            let blocks = pairs
                .iter()
                .map(|pair| TimeBlock::from_pair(pair))
                .collect::<DomainResult<Vec<_>>>()?;
            days.insert(day.to_lowercase(), blocks);
        }
        Ok(Self { days })
    }

    /// Serialize back to the persisted wire form
    pub fn to_json(&self) -> String {
        let wire: HashMap<&str, Vec<[String; 2]>> = self
            .days
            .iter()
            .map(|(day, blocks)| {
                (
                    day.as_str(),
                    blocks.iter().map(|b| b.to_pair()).collect(),
                )
            })
            .collect();
        // A map of strings cannot fail to serialize
        serde_json::to_string(&wire).unwrap_or_else(|_| "{}".to_string())
    }

    /// Set the blocks for a weekday, replacing any existing entry
    pub fn set_day(&mut self, day: impl Into<String>, blocks: Vec<TimeBlock>) {
        self.days.insert(day.into().to_lowercase(), blocks);
    }

    /// Blocks for a lowercase weekday name, in stored order.
    ///
    /// A missing day and an empty day both yield an empty slice.
    pub fn blocks_for(&self, weekday: &str) -> &[TimeBlock] {
        self.days.get(weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the schedule has any block on any day
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> NaiveTime {
        parse_clock_time(value).unwrap()
    }

    #[test]
    fn test_parse_wire_form() {
        let schedule = WeeklySchedule::from_json(
            r#"{"monday": [["09:00", "12:00"], ["14:00", "18:00"]], "friday": []}"#,
        )
        .unwrap();

        let monday = schedule.blocks_for("monday");
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0], TimeBlock::new(t("09:00"), t("12:00")));
        assert_eq!(monday[1], TimeBlock::new(t("14:00"), t("18:00")));

        assert!(schedule.blocks_for("friday").is_empty());
        assert!(schedule.blocks_for("sunday").is_empty());
    }

    #[test]
    fn test_day_names_are_lowercased() {
        let schedule =
            WeeklySchedule::from_json(r#"{"Monday": [["09:00", "10:00"]]}"#).unwrap();
        assert_eq!(schedule.blocks_for("monday").len(), 1);
    }

    #[test]
    fn test_stored_order_is_preserved() {
        // Later block listed first; parsing must not sort
        let schedule = WeeklySchedule::from_json(
            r#"{"tuesday": [["14:00", "16:00"], ["09:00", "11:00"]]}"#,
        )
        .unwrap();

        let tuesday = schedule.blocks_for("tuesday");
        assert_eq!(tuesday[0].start, t("14:00"));
        assert_eq!(tuesday[1].start, t("09:00"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(WeeklySchedule::from_json("{not json").is_err());
        assert!(WeeklySchedule::from_json(r#"{"monday": [["9am", "12pm"]]}"#).is_err());
        assert!(WeeklySchedule::from_json(r#"{"monday": [["09:00"]]}"#).is_err());
    }

    #[test]
    fn test_clock_times_must_be_zero_padded() {
        assert!(parse_clock_time("09:00").is_ok());
        assert!(parse_clock_time("9:00").is_err());
        assert!(parse_clock_time("24:00").is_err());
        assert!(
            WeeklySchedule::from_json(r#"{"monday": [["9:00", "12:00"]]}"#).is_err()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut schedule = WeeklySchedule::new();
        schedule.set_day("monday", vec![TimeBlock::new(t("09:00"), t("12:00"))]);

        let parsed = WeeklySchedule::from_json(&schedule.to_json()).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[test]
    fn test_is_empty() {
        let mut schedule = WeeklySchedule::new();
        assert!(schedule.is_empty());
        schedule.set_day("monday", vec![]);
        assert!(schedule.is_empty());
        schedule.set_day("tuesday", vec![TimeBlock::new(t("08:00"), t("09:00"))]);
        assert!(!schedule.is_empty());
    }
}
