use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Tamaño en bytes de un elemento de la papelera
///
/// Un directorio suma los ficheros regulares de todo su árbol; los enlaces
/// simbólicos no se siguen y no cuentan. Cualquier error de E/S hace que esa
/// entrada aporte 0, y una ruta inexistente mide 0.
pub fn item_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => dir_size(path),
        Ok(metadata) => metadata.len(),
        Err(_) => 0,
    }
}

/// Suma recursiva de los ficheros regulares bajo `path`
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}

/// Formatea un tamaño en unidades legibles (base 1024)
pub fn format_size(size_bytes: u64) -> String {
    if size_bytes < 1024 {
        return format!("{} B", size_bytes);
    }

    let mut size = size_bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} PB", size)
}
