//! Journal record types, one flat struct per storage slot. Each slot holds
//! an ordered list of one record kind behind a schema version; decoding is
//! strict and a structurally invalid slot is rejected, never defaulted.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// The storage slots the journal exposes, one per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    TrainingSessions,
    CheckIns,
    Goals,
    FilmNotes,
    Recruiting,
}

impl SlotKind {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "training-sessions" => Ok(SlotKind::TrainingSessions),
            "check-ins" => Ok(SlotKind::CheckIns),
            "goals" => Ok(SlotKind::Goals),
            "film-notes" => Ok(SlotKind::FilmNotes),
            "recruiting" => Ok(SlotKind::Recruiting),
            other => Err(AppError::NotFound(format!(
                "Unknown journal slot '{}'",
                other
            ))),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            SlotKind::TrainingSessions => "training_sessions.json",
            SlotKind::CheckIns => "check_ins.json",
            SlotKind::Goals => "goals.json",
            SlotKind::FilmNotes => "film_notes.json",
            SlotKind::Recruiting => "recruiting.json",
        }
    }
}

/// A whole storage slot: schema version plus the full record list. Writes
/// replace the slot in its entirety.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedSlot<T> {
    pub schema_version: u32,
    pub records: Vec<T>,
}

impl<T> VersionedSlot<T> {
    pub fn empty() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            records: Vec::new(),
        }
    }
}

/// Behavior shared by every journal record: server-minted ids and field
/// validation before a slot is written.
pub trait JournalRecord: Serialize + DeserializeOwned + Validate {
    fn ensure_id(&mut self);
}

fn mint_id(id: &mut String) {
    if id.trim().is_empty() {
        *id = Uuid::new_v4().to_string();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TrainingSession {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 50))]
    pub session_type: String,
    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: u32,
    #[validate(range(min = 1, max = 10))]
    pub intensity: u8,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub notes: String,
}

impl JournalRecord for TrainingSession {
    fn ensure_id(&mut self) {
        mint_id(&mut self.id);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MoodCheckIn {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 30))]
    pub mood: String,
    #[validate(range(min = 1, max = 10))]
    pub energy: u8,
    #[validate(range(min = 1, max = 10))]
    pub soreness: u8,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub note: String,
}

impl JournalRecord for MoodCheckIn {
    fn ensure_id(&mut self) {
        mint_id(&mut self.id);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub target_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[serde(default)]
    pub done: bool,
}

impl JournalRecord for Goal {
    fn ensure_id(&mut self) {
        mint_id(&mut self.id);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FilmNote {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub opponent: String,
    #[validate(length(min = 1, max = 200))]
    pub situation: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub takeaway: String,
}

impl JournalRecord for FilmNote {
    fn ensure_id(&mut self) {
        mint_id(&mut self.id);
    }
}

/// Single-record slot: the slot holds at most one profile, stored as a
/// one-element list for uniformity with the other kinds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RecruitingProfile {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 2000, max = 2100))]
    pub grad_year: u16,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub weight_class: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub record: String,
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub highlights: String,
}

impl JournalRecord for RecruitingProfile {
    fn ensure_id(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_kind_parse() {
        assert_eq!(
            SlotKind::parse("training-sessions").unwrap(),
            SlotKind::TrainingSessions
        );
        assert_eq!(SlotKind::parse("check-ins").unwrap(), SlotKind::CheckIns);
        assert!(SlotKind::parse("unknown").is_err());
    }

    #[test]
    fn test_ensure_id_mints_only_when_blank() {
        let mut session = TrainingSession {
            id: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            session_type: "practice".to_string(),
            duration_minutes: 90,
            intensity: 7,
            notes: String::new(),
        };
        session.ensure_id();
        assert!(!session.id.is_empty());

        let kept = session.id.clone();
        session.ensure_id();
        assert_eq!(session.id, kept);
    }

    #[test]
    fn test_strict_decode_rejects_unknown_fields() {
        let result: Result<Goal, _> = serde_json::from_str(
            r#"{"id":"g1","title":"state podium","category":"season","done":false,"extra":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_intensity() {
        let session = TrainingSession {
            id: "t1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            session_type: "practice".to_string(),
            duration_minutes: 90,
            intensity: 11,
            notes: String::new(),
        };
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_empty_slot_uses_current_schema_version() {
        let slot: VersionedSlot<Goal> = VersionedSlot::empty();
        assert_eq!(slot.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(slot.records.is_empty());
    }
}
