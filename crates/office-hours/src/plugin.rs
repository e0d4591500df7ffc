//! Plugin lifecycle: event subscription, admin-mode gating, and registration of
//! the `getOfficeHoursData` template function.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::collaborators::{Clock, ConfigProvider, TemplateRegistry, Translator};
use crate::schedule::{PastDatePolicy, ScheduleBuilder, WeeklySchedule};
use crate::settings::OfficeHoursSettings;

/// Name under which the template function is registered.
pub const TEMPLATE_FUNCTION_NAME: &str = "getOfficeHoursData";

/// Host event that triggers initialization.
pub const PLUGINS_INITIALIZED_EVENT: &str = "onPluginsInitialized";

/// Host event after which the template engine accepts functions.
pub const TEMPLATE_INITIALIZED_EVENT: &str = "onTwigInitialized";

/// The office-hours plugin, holding its collaborators.
#[derive(Clone)]
pub struct OfficeHoursPlugin {
    config: Arc<dyn ConfigProvider>,
    translator: Arc<dyn Translator>,
    clock: Arc<dyn Clock>,
    template_hook_enabled: bool,
}

impl OfficeHoursPlugin {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        translator: Arc<dyn Translator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            translator,
            clock,
            template_hook_enabled: false,
        }
    }

    /// Events the plugin subscribes to up front, with their priority.
    pub fn subscribed_events() -> &'static [(&'static str, i32)] {
        &[(PLUGINS_INITIALIZED_EVENT, 0)]
    }

    /// Events enabled after initialization. Empty until
    /// [`on_plugins_initialized`](Self::on_plugins_initialized) ran outside admin mode.
    pub fn enabled_events(&self) -> &'static [(&'static str, i32)] {
        if self.template_hook_enabled {
            &[(TEMPLATE_INITIALIZED_EVENT, 0)]
        } else {
            &[]
        }
    }

    /// Handle plugin initialization. The admin panel never renders office
    /// hours, so nothing is enabled there. Returns whether the template hook is
    /// now enabled.
    pub fn on_plugins_initialized(&mut self, is_admin: bool) -> bool {
        self.template_hook_enabled = !is_admin;
        self.template_hook_enabled
    }

    /// Register `getOfficeHoursData` with the template engine.
    ///
    /// The function is evaluated lazily at render time, reading a fresh
    /// configuration snapshot on every call. Does nothing unless the template
    /// hook was enabled.
    pub fn on_template_initialized(&self, registry: &mut dyn TemplateRegistry) {
        if !self.template_hook_enabled {
            return;
        }

        let plugin = self.clone();
        registry.add_function(
            TEMPLATE_FUNCTION_NAME,
            Arc::new(move || {
                let schedule = plugin.office_hours_data()?;
                match serde_json::to_value(&schedule) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!(error = %e, "failed to serialize office hours");
                        None
                    }
                }
            }),
        );
        debug!(name = TEMPLATE_FUNCTION_NAME, "registered template function");
    }

    /// Compute the template data from the current configuration.
    ///
    /// Returns `None` when the configuration cannot be read or a past special
    /// date aborts the computation.
    pub fn office_hours_data(&self) -> Option<WeeklySchedule> {
        let settings = match OfficeHoursSettings::from_provider(self.config.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "unreadable office-hours configuration");
                return None;
            }
        };

        let policy = if settings.skip_past_special_openings {
            PastDatePolicy::Skip
        } else {
            PastDatePolicy::Abort
        };

        ScheduleBuilder::new(self.translator.as_ref(), self.clock.as_ref())
            .with_past_date_policy(policy)
            .build(&settings)
    }
}
