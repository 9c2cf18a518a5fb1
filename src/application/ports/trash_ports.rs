use async_trait::async_trait;

use crate::application::dtos::trash_dto::{
    EmptyTrashResultDto, RestoreResultDto, TrashListingDto, TrashStatusDto,
};
use crate::common::errors::Result;

/// Port for trash-related use cases
#[async_trait]
pub trait TrashUseCase: Send + Sync {
    /// Report whether the host deletes files to the trash
    async fn get_status(&self) -> TrashStatusDto;

    /// List items in the trash, most recently deleted first
    async fn get_trash_items(&self) -> Result<TrashListingDto>;

    /// Restore an item from trash to its original location
    async fn restore_item(&self, trash_path: &str) -> Result<RestoreResultDto>;

    /// Permanently delete an item from trash
    async fn delete_permanently(&self, trash_path: &str) -> Result<()>;

    /// Permanently delete everything in the trash
    async fn empty_trash(&self) -> Result<EmptyTrashResultDto>;
}
