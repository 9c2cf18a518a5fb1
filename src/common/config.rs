use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::warn;

use crate::common::errors::{DomainError, Result};
use crate::domain::services::trash_location::TrashLocation;

/// Espacio de nombres de la API, igual al que usa el frontend del notebook
pub const API_NAMESPACE: &str = "jupyterlab-trash-mgmt-extension";

/// Configuración del servidor HTTP
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Dirección en la que escucha el servidor
    pub host: IpAddr,
    /// Puerto TCP
    pub port: u16,
    /// URL base del servidor anfitrión (ej: "/" o "/user/alice/")
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8086,
            base_url: "/".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Ruta bajo la que se montan los endpoints de la papelera
    ///
    /// Siempre empieza por `/`, aunque `base_url` no lo haga.
    pub fn base_route(&self) -> String {
        let base = self.base_url.trim_matches('/');
        if base.is_empty() {
            format!("/{}", API_NAMESPACE)
        } else {
            format!("/{}/{}", base, API_NAMESPACE)
        }
    }
}

/// Ubicación de la papelera XDG, tal como la entrega el entorno
#[derive(Debug, Clone, Default)]
pub struct TrashConfig {
    /// Valor de XDG_DATA_HOME, si está definido
    pub data_home: Option<PathBuf>,
    /// Directorio personal del usuario
    pub home_dir: Option<PathBuf>,
}

impl TrashConfig {
    /// Resuelve la raíz de la papelera sin tocar el sistema de archivos
    pub fn location(&self) -> Result<TrashLocation> {
        TrashLocation::resolve(self.data_home.as_deref(), self.home_dir.as_deref())
    }
}

/// Ajustes del anfitrión que la papelera sólo consulta
#[derive(Debug, Clone)]
pub struct FeaturesConfig {
    /// Equivale a `delete_to_trash` del gestor de contenidos del anfitrión
    pub delete_to_trash: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self { delete_to_trash: true }
    }
}

/// Configuración global de la aplicación
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub trash: TrashConfig,
    pub features: FeaturesConfig,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(host) = env::var("OXITRASH_HOST") {
            match host.parse::<IpAddr>() {
                Ok(addr) => config.server.host = addr,
                Err(e) => warn!("Invalid OXITRASH_HOST '{}': {}, using default", host, e),
            }
        }

        if let Ok(port) = env::var("OXITRASH_PORT") {
            match port.parse::<u16>() {
                Ok(p) => config.server.port = p,
                Err(e) => warn!("Invalid OXITRASH_PORT '{}': {}, using default", port, e),
            }
        }

        if let Ok(base_url) = env::var("OXITRASH_BASE_URL") {
            config.server.base_url = base_url;
        }

        if let Ok(flag) = env::var("OXITRASH_DELETE_TO_TRASH") {
            match parse_bool(&flag) {
                Some(value) => config.features.delete_to_trash = value,
                None => warn!("Invalid OXITRASH_DELETE_TO_TRASH '{}', using default", flag),
            }
        }

        config.trash = TrashConfig {
            data_home: env::var_os("XDG_DATA_HOME").map(PathBuf::from),
            home_dir: dirs::home_dir(),
        };

        config
    }

    /// Valida que la ubicación de la papelera se pueda resolver
    pub fn validate(&self) -> Result<()> {
        self.trash.location().map(|_| ()).map_err(|e| {
            DomainError::validation_error("Config", format!("Invalid trash configuration: {}", e.message))
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_route_joins_namespace() {
        let mut server = ServerConfig::default();
        assert_eq!(server.base_route(), "/jupyterlab-trash-mgmt-extension");

        server.base_url = "/user/alice/".to_string();
        assert_eq!(server.base_route(), "/user/alice/jupyterlab-trash-mgmt-extension");

        server.base_url = "user/alice/".to_string();
        assert_eq!(server.base_route(), "/user/alice/jupyterlab-trash-mgmt-extension");

        server.base_url = String::new();
        assert_eq!(server.base_route(), "/jupyterlab-trash-mgmt-extension");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_validate_requires_some_base_path() {
        let config = AppConfig {
            trash: TrashConfig { data_home: None, home_dir: None },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            trash: TrashConfig { data_home: Some(PathBuf::from("/data")), home_dir: None },
            ..AppConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
