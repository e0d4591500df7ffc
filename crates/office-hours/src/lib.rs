//! # office-hours
//!
//! Turns raw, human-entered opening-hour ranges into a validated, conflict-free,
//! display-ready schedule for CMS templates.
//!
//! Each configured row is parsed, direction-corrected, checked against the rows
//! already accepted for the same day, optionally trimmed for display, and finally
//! ordered by start time. Rows that cannot be used are dropped individually, so
//! one bad row never breaks the whole schedule.
//!
//! ## Quick start
//!
//! ```rust
//! use office_hours::{normalize_entries, RawInterval};
//!
//! let entries = vec![
//!     RawInterval::new("18:00", "13:00"),
//!     RawInterval::new("09:00", "12:00"),
//!     RawInterval::new("11:00", "12:30"),
//! ];
//! let day = normalize_entries(&entries, true);
//!
//! let shown: Vec<(&str, &str)> = day
//!     .iter()
//!     .map(|i| (i.start_display.as_str(), i.end_display.as_str()))
//!     .collect();
//! assert_eq!(shown, vec![("09", "12"), ("13", "18")]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — "HH:MM" string → minute of day
//! - [`validator`] — per-row accept / correct / drop decision
//! - [`sorter`] — ascending order by start minute
//! - [`display`] — "HH:00" → "HH" trimming
//! - [`normalize`] — the per-day pipeline built from the above
//! - [`schedule`] — weekly and special-date schedule assembly
//! - [`settings`] — typed snapshot of the plugin configuration
//! - [`collaborators`] — config, translator, clock and template-registry seams
//! - [`plugin`] — plugin lifecycle and `getOfficeHoursData` registration
//! - [`error`] — Error types

pub mod collaborators;
pub mod display;
pub mod error;
pub mod interval;
pub mod normalize;
pub mod plugin;
pub mod schedule;
pub mod settings;
pub mod sorter;
pub mod time;
pub mod validator;

pub use collaborators::{
    Clock, ConfigProvider, FixedClock, FunctionRegistry, JsonConfig, MapTranslator, SystemClock,
    TemplateFunction, TemplateRegistry, Translator, ZonedClock,
};
pub use error::OfficeHoursError;
pub use interval::{NormalizedInterval, RawInterval};
pub use normalize::{normalize_entries, normalize_entries_detailed, DroppedEntry, NormalizedDay};
pub use plugin::OfficeHoursPlugin;
pub use schedule::{DaySchedule, PastDatePolicy, ScheduleBuilder, SpecialOpening, WeeklySchedule};
pub use settings::OfficeHoursSettings;
pub use time::parse_minutes;
pub use validator::{validate, DropReason, Outcome};
