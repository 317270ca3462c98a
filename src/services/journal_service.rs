use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::journal::{
            FilmNote, Goal, JournalRecord, MoodCheckIn, RecruitingProfile, SlotKind,
            TrainingSession, VersionedSlot, CURRENT_SCHEMA_VERSION,
        },
        dto::response::StatsResponse,
    },
    repositories::SlotRepository,
};

/// Typed access to the journal slots. All schema checks happen here: the
/// repository below stores opaque documents, and handlers above only see
/// already-validated slots.
pub struct JournalService {
    repository: Arc<dyn SlotRepository>,
}

impl JournalService {
    pub fn new(repository: Arc<dyn SlotRepository>) -> Self {
        Self { repository }
    }

    /// Load a slot as a JSON document for the wire. A never-written slot
    /// reads as an empty slot at the current schema version.
    pub fn load_slot(&self, kind: SlotKind) -> AppResult<serde_json::Value> {
        match kind {
            SlotKind::TrainingSessions => self.load_typed::<TrainingSession>(kind),
            SlotKind::CheckIns => self.load_typed::<MoodCheckIn>(kind),
            SlotKind::Goals => self.load_typed::<Goal>(kind),
            SlotKind::FilmNotes => self.load_typed::<FilmNote>(kind),
            SlotKind::Recruiting => self.load_typed::<RecruitingProfile>(kind),
        }
    }

    /// Validate and persist a whole slot, replacing whatever was stored.
    /// Returns the saved slot (with server-minted record ids filled in).
    pub fn save_slot(
        &self,
        kind: SlotKind,
        payload: serde_json::Value,
    ) -> AppResult<serde_json::Value> {
        match kind {
            SlotKind::TrainingSessions => self.save_typed::<TrainingSession>(kind, payload),
            SlotKind::CheckIns => self.save_typed::<MoodCheckIn>(kind, payload),
            SlotKind::Goals => self.save_typed::<Goal>(kind, payload),
            SlotKind::FilmNotes => self.save_typed::<FilmNote>(kind, payload),
            SlotKind::Recruiting => self.save_typed::<RecruitingProfile>(kind, payload),
        }
    }

    /// Weekly session count and mood tallies over the stored slots.
    pub fn stats(&self) -> AppResult<StatsResponse> {
        self.stats_as_of(Utc::now().date_naive())
    }

    pub fn stats_as_of(&self, today: NaiveDate) -> AppResult<StatsResponse> {
        let sessions = self.read_typed::<TrainingSession>(SlotKind::TrainingSessions)?;
        let week = today.iso_week();
        let sessions_this_week = sessions
            .records
            .iter()
            .filter(|s| s.date.iso_week() == week)
            .count();

        let check_ins = self.read_typed::<MoodCheckIn>(SlotKind::CheckIns)?;
        let mut mood_counts: BTreeMap<String, u32> = BTreeMap::new();
        for check_in in &check_ins.records {
            *mood_counts.entry(check_in.mood.clone()).or_insert(0) += 1;
        }

        Ok(StatsResponse {
            sessions_this_week,
            mood_counts,
        })
    }

    fn read_typed<T: JournalRecord>(&self, kind: SlotKind) -> AppResult<VersionedSlot<T>> {
        let Some(document) = self.repository.load_raw(kind)? else {
            return Ok(VersionedSlot::empty());
        };
        let slot: VersionedSlot<T> = serde_json::from_str(&document).map_err(|e| {
            AppError::StorageError(format!(
                "stored slot '{}' is corrupt: {}",
                kind.file_name(),
                e
            ))
        })?;
        check_schema_version(slot.schema_version)?;
        Ok(slot)
    }

    fn load_typed<T: JournalRecord>(&self, kind: SlotKind) -> AppResult<serde_json::Value> {
        let slot = self.read_typed::<T>(kind)?;
        serde_json::to_value(&slot).map_err(|e| AppError::InternalError(e.to_string()))
    }

    fn save_typed<T: JournalRecord>(
        &self,
        kind: SlotKind,
        payload: serde_json::Value,
    ) -> AppResult<serde_json::Value> {
        let mut slot: VersionedSlot<T> = serde_json::from_value(payload)
            .map_err(|e| AppError::ValidationError(format!("Invalid slot payload: {}", e)))?;
        check_schema_version(slot.schema_version)?;

        if kind == SlotKind::Recruiting && slot.records.len() > 1 {
            return Err(AppError::ValidationError(
                "Recruiting slot holds at most one profile".to_string(),
            ));
        }

        for record in &mut slot.records {
            record.ensure_id();
            record.validate()?;
        }

        let document =
            serde_json::to_string(&slot).map_err(|e| AppError::InternalError(e.to_string()))?;
        self.repository.save_raw(kind, &document)?;

        serde_json::to_value(&slot).map_err(|e| AppError::InternalError(e.to_string()))
    }
}

fn check_schema_version(version: u32) -> AppResult<()> {
    if version != CURRENT_SCHEMA_VERSION {
        return Err(AppError::ValidationError(format!(
            "Unsupported slot schema version {} (expected {})",
            version, CURRENT_SCHEMA_VERSION
        )));
    }
    Ok(())
}
