//! Seams between the schedule core and the host CMS.
//!
//! The core never talks to a concrete CMS. It reads configuration through
//! [`ConfigProvider`], resolves day names through [`Translator`], asks [`Clock`]
//! for the current date, and registers its template function with a
//! [`TemplateRegistry`]. The implementations in this module back the CLI, the
//! WASM bindings and the tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::error::{OfficeHoursError, Result};

/// Read access to the host's configuration tree.
pub trait ConfigProvider: Send + Sync {
    /// Look up a dotted path such as `plugins.office-hours.trimTime`.
    fn get(&self, path: &str) -> Option<Value>;
}

/// Resolves translation keys to localized strings.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// A zero-argument function invoked lazily by the template renderer.
pub type TemplateFunction = Arc<dyn Fn() -> Option<Value> + Send + Sync>;

/// The host's template engine, as far as function registration goes.
pub trait TemplateRegistry {
    fn add_function(&mut self, name: &str, function: TemplateFunction);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// A configuration tree held in memory, addressed by dotted paths.
///
/// Path segments are split on `.` only, so keys such as `office-hours` are
/// looked up verbatim. Object key order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonConfig {
    root: Value,
}

impl JsonConfig {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map(Self::from_value)
            .map_err(|e| OfficeHoursError::Config {
                path: String::new(),
                message: e.to_string(),
            })
    }

    /// Parse a TOML document. Dates must be quoted strings.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str::<Value>(toml)
            .map(Self::from_value)
            .map_err(|e| OfficeHoursError::Config {
                path: String::new(),
                message: e.to_string(),
            })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Set the value at a dotted path, creating intermediate mappings and
    /// replacing non-mapping values on the way.
    pub fn set(&mut self, path: &str, value: Value) {
        let mut node = &mut self.root;
        for segment in path.split('.').filter(|segment| !segment.is_empty()) {
            if !node.is_object() {
                *node = Value::Object(serde_json::Map::new());
            }
            let Some(map) = node.as_object_mut() else {
                return;
            };
            node = map.entry(segment.to_string()).or_insert(Value::Null);
        }
        *node = value;
    }
}

impl ConfigProvider for JsonConfig {
    fn get(&self, path: &str) -> Option<Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |node, segment| node.get(segment))
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translator backed by a key → string map.
///
/// Unknown keys translate to themselves, which keeps templates readable when a
/// language file is incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTranslator {
    strings: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }

    /// English day names under `PLUGIN_OFFICE_HOURS.DAYS.*`.
    pub fn english() -> Self {
        let strings = [
            ("MONDAY", "Monday"),
            ("TUESDAY", "Tuesday"),
            ("WEDNESDAY", "Wednesday"),
            ("THURSDAY", "Thursday"),
            ("FRIDAY", "Friday"),
            ("SATURDAY", "Saturday"),
            ("SUNDAY", "Sunday"),
        ]
        .into_iter()
        .map(|(key, name)| (format!("PLUGIN_OFFICE_HOURS.DAYS.{}", key), name.to_string()))
        .collect();
        Self { strings }
    }

    /// Add or replace entries, e.g. from a language file.
    pub fn extend(&mut self, strings: impl IntoIterator<Item = (String, String)>) {
        self.strings.extend(strings);
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

/// The host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Today's date in a fixed IANA timezone, independent of the host's zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    /// # Errors
    /// Returns `OfficeHoursError::Config` if `timezone` is not a valid IANA identifier.
    pub fn new(timezone: &str) -> Result<Self> {
        let tz: Tz = timezone.parse().map_err(|_| OfficeHoursError::Config {
            path: "timezone".to_string(),
            message: format!("unknown timezone '{}'", timezone),
        })?;
        Ok(Self { tz })
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Template registry
// ---------------------------------------------------------------------------

/// In-memory template registry; renders by calling functions by name.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, TemplateFunction>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Invoke a registered function. Returns `None` if nothing is registered
    /// under `name` or the function itself returned nothing.
    pub fn call(&self, name: &str) -> Option<Value> {
        self.functions.get(name).and_then(|f| f())
    }
}

impl TemplateRegistry for FunctionRegistry {
    fn add_function(&mut self, name: &str, function: TemplateFunction) {
        self.functions.insert(name.to_string(), function);
    }
}
