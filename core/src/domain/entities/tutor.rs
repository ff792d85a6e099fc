//! Tutor profile entity with subjects, rates and the availability schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::WeeklySchedule;

/// Tutor-specific information and settings.
///
/// `availability_schedule` is stored as an opaque JSON blob in the wire form
/// `{"monday": [["09:00","12:00"], ...]}` and parsed on read; corrupt data
/// is tolerated by the read paths (it yields empty availability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorProfile {
    /// Owning user (tutors share the users table)
    pub user_id: Uuid,

    /// Subjects offered
    pub subjects: Vec<String>,

    /// Hourly rate in the platform currency
    pub hourly_rate: f64,

    /// Serialized weekly schedule blob, if the tutor has set one
    pub availability_schedule: Option<String>,

    /// Whether the tutor has passed verification
    pub is_verified: bool,

    /// Average rating, if any sessions have been rated
    pub rating: Option<f64>,

    /// Total completed sessions
    pub total_sessions: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl TutorProfile {
    /// Creates a new unverified tutor profile
    pub fn new(user_id: Uuid, subjects: Vec<String>, hourly_rate: f64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            subjects,
            hourly_rate,
            availability_schedule: None,
            is_verified: false,
            rating: None,
            total_sessions: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the weekly schedule wholesale
    pub fn set_schedule(&mut self, schedule: &WeeklySchedule) {
        self.availability_schedule = Some(schedule.to_json());
        self.updated_at = Utc::now();
    }

    /// Parse the stored schedule blob.
    ///
    /// Returns `None` when no schedule is set or the stored blob does not
    /// parse; callers treat both the same way (no availability).
    pub fn schedule(&self) -> Option<WeeklySchedule> {
        self.availability_schedule
            .as_deref()
            .and_then(|raw| WeeklySchedule::from_json(raw).ok())
    }

    /// Update subjects and rate
    pub fn update_offering(&mut self, subjects: Vec<String>, hourly_rate: f64) {
        self.subjects = subjects;
        self.hourly_rate = hourly_rate;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = TutorProfile::new(Uuid::new_v4(), vec!["math".to_string()], 45.0);
        assert!(!profile.is_verified);
        assert_eq!(profile.total_sessions, 0);
        assert!(profile.rating.is_none());
        assert!(profile.schedule().is_none());
    }

    #[test]
    fn test_schedule_round_trip() {
        let mut profile = TutorProfile::new(Uuid::new_v4(), vec!["physics".to_string()], 60.0);
        let schedule =
            WeeklySchedule::from_json(r#"{"monday": [["09:00", "12:00"]]}"#).unwrap();

        profile.set_schedule(&schedule);
        let parsed = profile.schedule().unwrap();
        assert_eq!(parsed.blocks_for("monday").len(), 1);
    }

    #[test]
    fn test_corrupt_schedule_parses_to_none() {
        let mut profile = TutorProfile::new(Uuid::new_v4(), vec![], 30.0);
        profile.availability_schedule = Some("{not json".to_string());
        assert!(profile.schedule().is_none());
    }
}
