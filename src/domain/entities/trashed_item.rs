/// Metadatos leídos de un fichero `.trashinfo`
///
/// Ambos campos quedan vacíos cuando el fichero falta o no se puede leer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrashInfo {
    /// Ruta original ya decodificada
    pub original_path: String,
    /// Fecha de borrado tal cual aparece en el fichero
    pub deletion_date: String,
}

/// Elemento presente en `files/` junto con sus metadatos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashedItem {
    /// Nombre de la entrada dentro de `files/`
    pub name: String,
    pub info: TrashInfo,
    pub size: u64,
    pub is_dir: bool,
}

impl TrashedItem {
    /// Identificador relativo a la papelera (coincide con el nombre)
    pub fn trash_path(&self) -> &str {
        &self.name
    }
}

/// Resultado de vaciar la papelera
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyTrashOutcome {
    pub deleted_count: usize,
    /// Un mensaje `"<nombre>: <error>"` por cada elemento que no se pudo borrar
    pub errors: Vec<String>,
}

impl EmptyTrashOutcome {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
