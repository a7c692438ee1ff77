// ==========================================
// Pensum Planner - Settings API
// ==========================================
// Thin surface over the ConfigManager: global settings,
// the special-function catalogue, and the reference year.
// ==========================================

use crate::config::ConfigManager;
use crate::domain::function::SpecialFunctionDefinition;
use crate::domain::settings::GlobalSettings;

use crate::api::error::ApiResult;
use std::sync::Arc;

pub struct SettingsApi {
    config: Arc<ConfigManager>,
}

impl SettingsApi {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self { config }
    }

    pub fn get_global_settings(&self) -> ApiResult<GlobalSettings> {
        Ok(self.config.get_global_settings()?)
    }

    pub fn update_global_settings(&self, settings: &GlobalSettings) -> ApiResult<()> {
        self.config.set_global_settings(settings)?;
        tracing::info!(annual_hours = settings.annual_hours, "global settings updated");
        Ok(())
    }

    pub fn get_special_functions(&self) -> ApiResult<Vec<SpecialFunctionDefinition>> {
        Ok(self.config.get_special_functions()?)
    }

    pub fn update_special_functions(
        &self,
        definitions: &[SpecialFunctionDefinition],
    ) -> ApiResult<()> {
        self.config.set_special_functions(definitions)?;
        tracing::info!(count = definitions.len(), "special function catalogue updated");
        Ok(())
    }

    pub fn get_reference_year(&self) -> ApiResult<i32> {
        Ok(self.config.get_reference_year()?)
    }

    pub fn set_reference_year(&self, year: i32) -> ApiResult<()> {
        self.config.set_reference_year(year)?;
        tracing::info!(year, "reference year updated");
        Ok(())
    }
}
