use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dtos::trash_dto::{
    EmptyTrashResultDto, RestoreResultDto, TrashItemDto, TrashListingDto, TrashStatusDto,
};
use crate::application::ports::settings_ports::HostSettingsPort;
use crate::application::ports::trash_ports::TrashUseCase;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::trashed_item::TrashedItem;
use crate::domain::repositories::trash_repository::TrashRepository;
use crate::domain::services::size_service::format_size;
use crate::domain::services::trash_location::validate_trash_path;

/// Servicio de aplicación para operaciones de papelera
///
/// No guarda estado entre peticiones: cada llamada lee el disco de nuevo.
pub struct TrashService {
    trash_repository: Arc<dyn TrashRepository>,
    host_settings: Arc<dyn HostSettingsPort>,
}

impl TrashService {
    pub fn new(
        trash_repository: Arc<dyn TrashRepository>,
        host_settings: Arc<dyn HostSettingsPort>,
    ) -> Self {
        Self {
            trash_repository,
            host_settings,
        }
    }

    /// Ejecuta una operación bloqueante del repositorio fuera del runtime
    async fn run_blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TrashRepository) -> Result<T> + Send + 'static,
    {
        let repository = self.trash_repository.clone();
        tokio::task::spawn_blocking(move || op(repository.as_ref()))
            .await
            .map_err(|e| DomainError::internal_error("Trash", format!("Trash task failed: {}", e)))?
    }
}

/// Ordena por fecha de borrado descendente comparando cadenas
///
/// La ordenación es estable y las fechas vacías quedan al final.
pub fn sort_by_deletion_date(items: &mut [TrashedItem]) {
    items.sort_by(|a, b| b.info.deletion_date.cmp(&a.info.deletion_date));
}

/// Construye el listado con totales a partir de las entidades
pub fn build_listing(mut items: Vec<TrashedItem>) -> TrashListingDto {
    sort_by_deletion_date(&mut items);

    let total_size: u64 = items.iter().map(|item| item.size).sum();
    let items: Vec<TrashItemDto> = items.into_iter().map(TrashItemDto::from).collect();

    TrashListingDto {
        item_count: items.len(),
        total_size,
        total_size_formatted: format_size(total_size),
        items,
    }
}

#[async_trait]
impl TrashUseCase for TrashService {
    #[instrument(skip(self))]
    async fn get_status(&self) -> TrashStatusDto {
        TrashStatusDto {
            trash_enabled: self.host_settings.delete_to_trash(),
        }
    }

    #[instrument(skip(self))]
    async fn get_trash_items(&self) -> Result<TrashListingDto> {
        debug!("Obteniendo elementos en papelera");

        let items = self.run_blocking(|repo| Ok(repo.list_items())).await?;
        let listing = build_listing(items);

        debug!("Encontrados {} elementos ({})", listing.item_count, listing.total_size_formatted);
        Ok(listing)
    }

    #[instrument(skip(self))]
    async fn restore_item(&self, trash_path: &str) -> Result<RestoreResultDto> {
        info!("Restaurando elemento {}", trash_path);
        validate_trash_path(trash_path)?;

        let id = trash_path.to_string();
        let restored_to = self.run_blocking(move |repo| repo.restore_item(&id)).await?;

        Ok(RestoreResultDto {
            success: true,
            restored_to,
        })
    }

    #[instrument(skip(self))]
    async fn delete_permanently(&self, trash_path: &str) -> Result<()> {
        info!("Eliminando permanentemente elemento {}", trash_path);
        validate_trash_path(trash_path)?;

        let id = trash_path.to_string();
        self.run_blocking(move |repo| repo.delete_item(&id)).await
    }

    #[instrument(skip(self))]
    async fn empty_trash(&self) -> Result<EmptyTrashResultDto> {
        info!("Vaciando papelera");

        let outcome = self.run_blocking(|repo| Ok(repo.empty_trash())).await?;
        Ok(EmptyTrashResultDto::from(outcome))
    }
}
