use std::path::{Component, Path, PathBuf};

use crate::common::errors::{DomainError, Result};

/// Extensión de los ficheros de metadatos de la papelera
pub const TRASHINFO_EXTENSION: &str = "trashinfo";

/// Ubicación de la papelera XDG (`<data_home>/Trash`)
///
/// Sólo calcula rutas: nunca crea ni consulta directorios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashLocation {
    root: PathBuf,
}

impl TrashLocation {
    /// Crea una ubicación a partir de una raíz ya conocida
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resuelve `<data_home>/Trash`
    ///
    /// `data_home` es el valor de XDG_DATA_HOME; si falta o está vacío se usa
    /// `<home>/.local/share`.
    pub fn resolve(data_home: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        let data_home = match data_home.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => path.to_path_buf(),
            None => home
                .filter(|p| !p.as_os_str().is_empty())
                .map(|h| h.join(".local").join("share"))
                .ok_or_else(|| DomainError::internal_error(
                    "Trash",
                    "Cannot determine data home: XDG_DATA_HOME is unset and no home directory is known",
                ))?,
        };

        Ok(Self::new(data_home.join("Trash")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directorio con el contenido de los elementos
    pub fn files_dir(&self) -> PathBuf {
        self.root.join("files")
    }

    /// Directorio con los ficheros `.trashinfo`
    pub fn info_dir(&self) -> PathBuf {
        self.root.join("info")
    }

    /// Ruta del contenido de un elemento dentro de `files/`
    pub fn payload_path(&self, trash_path: &str) -> Result<PathBuf> {
        validate_trash_path(trash_path)?;
        Ok(self.files_dir().join(trash_path))
    }

    /// Ruta del `.trashinfo` de un elemento dentro de `info/`
    pub fn info_path(&self, trash_path: &str) -> Result<PathBuf> {
        validate_trash_path(trash_path)?;
        Ok(self.info_dir().join(format!("{}.{}", trash_path, TRASHINFO_EXTENSION)))
    }
}

/// Comprueba que un identificador no esté vacío y nombre una entrada directa
/// de `files/`
///
/// Un identificador con varios segmentos podría atravesar un enlace simbólico
/// guardado en la papelera, así que sólo se admite un único `Component::Normal`.
pub fn validate_trash_path(trash_path: &str) -> Result<()> {
    if trash_path.is_empty() {
        return Err(DomainError::validation_error("TrashItem", "No trash_path provided"));
    }

    let mut components = Path::new(trash_path).components();
    let single_entry = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_entry {
        return Err(DomainError::validation_error("TrashItem", "Invalid trash_path")
            .with_id(trash_path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;

    #[test]
    fn test_resolve_with_data_home_override() {
        let location = TrashLocation::resolve(
            Some(Path::new("/custom/data")),
            Some(Path::new("/home/user")),
        ).unwrap();

        assert_eq!(location.root(), Path::new("/custom/data/Trash"));
    }

    #[test]
    fn test_resolve_falls_back_to_home() {
        let location = TrashLocation::resolve(None, Some(Path::new("/home/user"))).unwrap();
        assert_eq!(location.root(), Path::new("/home/user/.local/share/Trash"));

        // Un XDG_DATA_HOME vacío cuenta como no definido
        let location = TrashLocation::resolve(Some(Path::new("")), Some(Path::new("/home/user"))).unwrap();
        assert_eq!(location.root(), Path::new("/home/user/.local/share/Trash"));
    }

    #[test]
    fn test_resolve_without_any_base_fails() {
        assert!(TrashLocation::resolve(None, None).is_err());
    }

    #[test]
    fn test_item_paths() {
        let location = TrashLocation::new("/t/Trash");

        assert_eq!(location.files_dir(), PathBuf::from("/t/Trash/files"));
        assert_eq!(location.info_dir(), PathBuf::from("/t/Trash/info"));
        assert_eq!(location.payload_path("a b.txt").unwrap(), PathBuf::from("/t/Trash/files/a b.txt"));
        assert_eq!(
            location.info_path("a b.txt").unwrap(),
            PathBuf::from("/t/Trash/info/a b.txt.trashinfo")
        );
    }

    #[test]
    fn test_invalid_identifiers_are_rejected() {
        let location = TrashLocation::new("/t/Trash");

        let err = location.payload_path("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert_eq!(err.message, "No trash_path provided");

        for bad in ["../secret", "/etc/passwd", "a/../../b", "link/precious.txt", "./a", ".", ".."] {
            let err = location.payload_path(bad).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidInput, "{} should be rejected", bad);
            assert_eq!(err.message, "Invalid trash_path");
        }
    }
}
