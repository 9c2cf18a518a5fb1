use std::sync::Arc;

use tracing::info;

use crate::application::ports::settings_ports::HostSettingsPort;
use crate::application::ports::trash_ports::TrashUseCase;
use crate::application::services::trash_service::TrashService;
use crate::common::config::AppConfig;
use crate::common::errors::DomainError;
use crate::domain::repositories::trash_repository::TrashRepository;
use crate::infrastructure::repositories::trash_fs_repository::TrashFsRepository;
use crate::infrastructure::services::host_settings_service::ConfigHostSettings;

/// Fábrica para los diferentes componentes de la aplicación
pub struct AppServiceFactory {
    config: AppConfig,
}

impl AppServiceFactory {
    /// Crea una nueva fábrica de servicios con la configuración dada
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Inicializa el repositorio de la papelera en su ubicación XDG
    pub fn create_trash_repository(&self) -> Result<Arc<dyn TrashRepository>, DomainError> {
        let location = self.config.trash.location()?;
        info!("Using trash directory {}", location.root().display());
        Ok(Arc::new(TrashFsRepository::new(location)))
    }

    /// Inicializa el acceso a los ajustes del anfitrión
    pub fn create_host_settings(&self) -> Arc<dyn HostSettingsPort> {
        Arc::new(ConfigHostSettings::new(&self.config.features))
    }

    /// Construye el estado completo de la aplicación
    pub fn build_app_state(&self) -> Result<AppState, DomainError> {
        let trash_service = Arc::new(TrashService::new(
            self.create_trash_repository()?,
            self.create_host_settings(),
        ));

        Ok(AppState::new(self.config.clone(), trash_service))
    }
}

/// Estado compartido por los manejadores HTTP
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub trash_service: Arc<dyn TrashUseCase>,
}

impl AppState {
    pub fn new(config: AppConfig, trash_service: Arc<dyn TrashUseCase>) -> Self {
        Self {
            config: Arc::new(config),
            trash_service,
        }
    }
}
