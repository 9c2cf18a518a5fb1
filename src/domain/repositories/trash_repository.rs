use crate::domain::entities::trashed_item::{EmptyTrashOutcome, TrashedItem};
use crate::common::errors::Result;

/// Acceso bloqueante a la papelera XDG
///
/// Las implementaciones hacen E/S síncrona; la capa de aplicación decide en
/// qué hilo se ejecutan.
#[cfg_attr(test, mockall::automock)]
pub trait TrashRepository: Send + Sync {
    /// Elementos de `files/` en el orden en que los devuelve el directorio
    fn list_items(&self) -> Vec<TrashedItem>;

    /// Devuelve el elemento a su ruta original y retorna esa ruta
    fn restore_item(&self, trash_path: &str) -> Result<String>;

    /// Borra definitivamente un elemento y su `.trashinfo`
    fn delete_item(&self, trash_path: &str) -> Result<()>;

    /// Borra todo el contenido de `files/` e `info/`
    fn empty_trash(&self) -> EmptyTrashOutcome;
}
