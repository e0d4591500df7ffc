//! Weekly and special-date schedule assembly.
//!
//! Builds the structure templates receive from `getOfficeHoursData`: one entry
//! per visible weekday, one per upcoming special date, each with its normalized
//! interval list and a localized day name.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::collaborators::{Clock, Translator};
use crate::error::{OfficeHoursError, Result};
use crate::interval::NormalizedInterval;
use crate::normalize::normalize_entries;
use crate::settings::OfficeHoursSettings;

/// Prefix of the translation keys holding localized day names.
pub const DAY_NAME_KEY_PREFIX: &str = "PLUGIN_OFFICE_HOURS.DAYS.";

/// One visible weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_key: String,
    pub language_key: String,
    pub day_name: String,
    #[serde(rename = "entries")]
    pub intervals: Vec<NormalizedInterval>,
}

/// An override for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOpening {
    pub date: NaiveDate,
    pub language_key: String,
    pub day_name: String,
    #[serde(rename = "entries")]
    pub intervals: Vec<NormalizedInterval>,
}

/// The template data root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub openinghours: Vec<DaySchedule>,
    pub special_openings: Vec<SpecialOpening>,
    /// Always empty; the `closed` configuration is not processed.
    pub closed_days: Vec<Value>,
}

/// What to do with a special date that lies before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PastDatePolicy {
    /// Return no schedule at all, discarding the weekly part too.
    #[default]
    Abort,
    /// Leave out just that special date.
    Skip,
}

/// Assembles a [`WeeklySchedule`] from a settings snapshot.
pub struct ScheduleBuilder<'a> {
    translator: &'a dyn Translator,
    clock: &'a dyn Clock,
    past_date_policy: PastDatePolicy,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(translator: &'a dyn Translator, clock: &'a dyn Clock) -> Self {
        Self {
            translator,
            clock,
            past_date_policy: PastDatePolicy::default(),
        }
    }

    pub fn with_past_date_policy(mut self, policy: PastDatePolicy) -> Self {
        self.past_date_policy = policy;
        self
    }

    /// Build the schedule.
    ///
    /// Returns `None` when a special date lies before today and the policy is
    /// [`PastDatePolicy::Abort`].
    pub fn build(&self, settings: &OfficeHoursSettings) -> Option<WeeklySchedule> {
        let trim_time = settings.trim_time;

        let openinghours = settings
            .openinghours
            .iter()
            .filter(|(_, day)| !day.hidden)
            .map(|(day_key, day)| {
                let language_key = day_key.to_uppercase();
                DaySchedule {
                    day_key: day_key.clone(),
                    day_name: self.day_name(&language_key),
                    language_key,
                    intervals: normalize_entries(&day.entries, trim_time),
                }
            })
            .collect();

        let today = self.clock.today();
        let mut special_openings = Vec::with_capacity(settings.special_openings.len());

        for special in &settings.special_openings {
            let date = match parse_date(&special.date) {
                Ok(date) => date,
                Err(e) => {
                    warn!(error = %e, "dropping special opening");
                    continue;
                }
            };

            if date < today {
                match self.past_date_policy {
                    PastDatePolicy::Abort => {
                        warn!(%date, %today, "special opening lies in the past, no schedule produced");
                        return None;
                    }
                    PastDatePolicy::Skip => continue,
                }
            }

            let language_key = date.format("%A").to_string().to_uppercase();
            special_openings.push(SpecialOpening {
                date,
                day_name: self.day_name(&language_key),
                language_key,
                intervals: normalize_entries(&special.entries, trim_time),
            });
        }

        Some(WeeklySchedule {
            openinghours,
            special_openings,
            closed_days: Vec::new(),
        })
    }

    fn day_name(&self, language_key: &str) -> String {
        self.translator
            .translate(&format!("{}{}", DAY_NAME_KEY_PREFIX, language_key))
    }
}

/// Parse a "YYYY-MM-DD" special-opening date.
fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| OfficeHoursError::InvalidDate(date.to_string()))
}
