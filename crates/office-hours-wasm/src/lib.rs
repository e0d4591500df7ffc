//! WASM bindings for office-hours.
//!
//! Exposes entry normalization and the `getOfficeHoursData` template data to
//! JavaScript via `wasm-bindgen`, so admin front ends can preview a schedule
//! while it is being edited. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p office-hours-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/office-hours-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/office_hours_wasm.wasm
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use office_hours::{
    normalize_entries_detailed, FixedClock, JsonConfig, MapTranslator, NormalizedInterval,
    OfficeHoursPlugin, RawInterval,
};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DroppedDto {
    index: usize,
    start: String,
    end: String,
    reason: String,
}

#[derive(Serialize)]
struct NormalizedDayDto {
    entries: Vec<NormalizedInterval>,
    dropped: Vec<DroppedDto>,
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Normalize one day's rows.
///
/// `entries_json` must be a JSON array of `{start, end}` objects with "HH:MM"
/// strings. Returns a JSON string `{entries, dropped}` where `entries` are the
/// accepted intervals in display order and `dropped` lists every rejected row
/// with its 0-based index and a human-readable reason.
#[wasm_bindgen(js_name = "normalizeEntries")]
pub fn normalize_entries(entries_json: &str, trim_time: bool) -> Result<String, JsValue> {
    let entries: Vec<RawInterval> =
        serde_json::from_str(entries_json).map_err(|e| js_error("Invalid entries JSON", e))?;

    let day = normalize_entries_detailed(&entries, trim_time);
    let dto = NormalizedDayDto {
        entries: day.intervals,
        dropped: day
            .dropped
            .into_iter()
            .map(|d| DroppedDto {
                index: d.index,
                reason: d.reason.to_string(),
                start: d.raw.start,
                end: d.raw.end,
            })
            .collect(),
    };

    to_json(&dto)
}

/// Compute the `getOfficeHoursData` template data.
///
/// `config_json` is the plugin's own configuration section (`openinghours`,
/// `specialOpenings`, `trimTime`, ...). `today` is a "YYYY-MM-DD" date; the
/// browser's date is not used so results match the server. `translations_json`
/// optionally maps translation keys to strings on top of the English defaults.
///
/// Returns the JSON template data, or `"null"` when a past special date aborts
/// the computation.
#[wasm_bindgen(js_name = "getOfficeHoursData")]
pub fn get_office_hours_data(
    config_json: &str,
    today: &str,
    translations_json: Option<String>,
) -> Result<String, JsValue> {
    let section: Value =
        serde_json::from_str(config_json).map_err(|e| js_error("Invalid config JSON", e))?;
    let today = NaiveDate::parse_from_str(today, "%Y-%m-%d")
        .map_err(|e| js_error(&format!("Invalid date '{}'", today), e))?;

    let mut translator = MapTranslator::english();
    if let Some(json) = translations_json.as_deref() {
        let strings: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| js_error("Invalid translations JSON", e))?;
        translator.extend(strings);
    }

    let plugin = OfficeHoursPlugin::new(
        Arc::new(JsonConfig::from_value(
            json!({"plugins": {"office-hours": section}}),
        )),
        Arc::new(translator),
        Arc::new(FixedClock(today)),
    );

    to_json(&plugin.office_hours_data())
}
