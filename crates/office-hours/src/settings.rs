//! Typed snapshot of the plugin configuration under `plugins.office-hours`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::collaborators::ConfigProvider;
use crate::error::{OfficeHoursError, Result};
use crate::interval::RawInterval;

/// Root of the plugin's configuration tree.
pub const CONFIG_ROOT: &str = "plugins.office-hours";

/// One configured weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DayConfig {
    #[serde(default, deserialize_with = "truthy_flag")]
    pub hidden: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<RawInterval>,
}

/// One configured special date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpecialOpeningConfig {
    /// Expected as `YYYY-MM-DD`; validated when the schedule is built.
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<RawInterval>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficeHoursSettings {
    /// Weekdays keyed by lowercase day key, in configuration order.
    pub openinghours: Vec<(String, DayConfig)>,
    pub special_openings: Vec<SpecialOpeningConfig>,
    /// Read but not processed.
    pub closed: Value,
    pub trim_time: bool,
    /// Skip past special dates instead of aborting the whole result.
    pub skip_past_special_openings: bool,
}

impl OfficeHoursSettings {
    /// Read a fresh snapshot from the host configuration.
    ///
    /// Missing keys fall back to empty lists and `false`.
    ///
    /// # Errors
    /// Returns `OfficeHoursError::Config` when a value has the wrong shape, e.g.
    /// `openinghours` is not a mapping or a special date has no `date`.
    pub fn from_provider(config: &dyn ConfigProvider) -> Result<Self> {
        let read = |key: &str| config.get(&format!("{}.{}", CONFIG_ROOT, key));

        let openinghours = match read("openinghours") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Object(days)) => days
                .into_iter()
                .map(|(day, value)| {
                    let path = format!("{}.openinghours.{}", CONFIG_ROOT, day);
                    let day_config = from_value::<DayConfig>(value, &path)?;
                    Ok((day, day_config))
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(OfficeHoursError::Config {
                    path: format!("{}.openinghours", CONFIG_ROOT),
                    message: format!("expected a mapping of day keys, found {}", kind(&other)),
                })
            }
        };

        let special_openings = match read("specialOpenings") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => {
                from_value::<Vec<SpecialOpeningConfig>>(value, &format!("{}.specialOpenings", CONFIG_ROOT))?
            }
        };

        Ok(Self {
            openinghours,
            special_openings,
            closed: read("closed").unwrap_or(Value::Null),
            trim_time: read("trimTime").as_ref().is_some_and(truthy),
            skip_past_special_openings: read("skipPastSpecialOpenings")
                .as_ref()
                .is_some_and(truthy),
        })
    }
}

fn from_value<T: serde::de::DeserializeOwned>(value: Value, path: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| OfficeHoursError::Config {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Loose truthiness for flags edited by hand: `true`, non-zero numbers,
/// non-empty strings other than `"0"`, non-empty lists and mappings.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
    }
}

fn truthy_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|value| truthy(&value))
}

// An emptied list in the admin editor is stored as null.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
