use std::collections::HashMap;
use std::fs;
use std::path::Path;

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::domain::entities::trashed_item::TrashInfo;

const TRASH_INFO_SECTION: &str = "Trash Info";
const PATH_KEY: &str = "path";
const DELETION_DATE_KEY: &str = "deletiondate";

/// Reads a `.trashinfo` sidecar.
///
/// Never fails: a missing file, a missing `[Trash Info]` section or any
/// syntax error yields empty fields. Values are taken verbatim, so `%`
/// sequences are only percent-decoded, never interpolated.
pub fn parse_trash_info(info_path: &Path) -> TrashInfo {
    let content = match fs::read_to_string(info_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Cannot read trashinfo {}: {}", info_path.display(), e);
            return TrashInfo::default();
        }
    };

    parse_trash_info_str(&content).unwrap_or_else(|| {
        debug!("Ignoring malformed trashinfo {}", info_path.display());
        TrashInfo::default()
    })
}

/// Parses sidecar text; `None` when the document is not valid INI.
pub fn parse_trash_info_str(content: &str) -> Option<TrashInfo> {
    let document = IniDocument::parse(content)?;

    let Some(section) = document.section(TRASH_INFO_SECTION) else {
        return Some(TrashInfo::default());
    };

    let raw_path = section.get(PATH_KEY).map(String::as_str).unwrap_or("");
    Some(TrashInfo {
        original_path: percent_decode_str(raw_path).decode_utf8_lossy().into_owned(),
        deletion_date: section.get(DELETION_DATE_KEY).cloned().unwrap_or_default(),
    })
}

/// Minimal INI reader: `[section]` headers, `key=value` / `key: value`
/// pairs with case-insensitive keys, `#`/`;` comment lines and indented
/// continuation lines. Duplicate sections or keys, keys outside a section
/// and lines without a delimiter make the whole document invalid.
#[derive(Debug, Default)]
struct IniDocument {
    sections: Vec<(String, HashMap<String, String>)>,
}

impl IniDocument {
    fn parse(content: &str) -> Option<Self> {
        let mut document = IniDocument::default();
        let mut current: Option<usize> = None;
        let mut last_key: Option<String> = None;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = line.starts_with(|c: char| c.is_whitespace());
            if indented {
                if let (Some(idx), Some(key)) = (current, last_key.as_ref()) {
                    let value = document.sections[idx].1.get_mut(key)?;
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') && trimmed.len() > 2 {
                let name = &trimmed[1..trimmed.len() - 1];
                if document.section(name).is_some() {
                    return None;
                }
                document.sections.push((name.to_string(), HashMap::new()));
                current = Some(document.sections.len() - 1);
                last_key = None;
                continue;
            }

            let idx = current?;
            let split_at = trimmed.find(['=', ':'])?;
            let key = trimmed[..split_at].trim().to_lowercase();
            if key.is_empty() {
                return None;
            }
            let value = trimmed[split_at + 1..].trim().to_string();

            let entries = &mut document.sections[idx].1;
            if entries.contains_key(&key) {
                return None;
            }
            entries.insert(key.clone(), value);
            last_key = Some(key);
        }

        Some(document)
    }

    fn section(&self, name: &str) -> Option<&HashMap<String, String>> {
        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, entries)| entries)
    }
}
