use crate::application::ports::settings_ports::HostSettingsPort;
use crate::common::config::FeaturesConfig;

/// Ajustes del anfitrión fijados al arrancar a partir de la configuración
#[derive(Debug, Clone)]
pub struct ConfigHostSettings {
    delete_to_trash: bool,
}

impl ConfigHostSettings {
    pub fn new(features: &FeaturesConfig) -> Self {
        Self {
            delete_to_trash: features.delete_to_trash,
        }
    }
}

impl HostSettingsPort for ConfigHostSettings {
    fn delete_to_trash(&self) -> bool {
        self.delete_to_trash
    }
}
