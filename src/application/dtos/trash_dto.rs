use serde::{Deserialize, Serialize};

use crate::domain::entities::trashed_item::{EmptyTrashOutcome, TrashedItem};
use crate::domain::services::size_service::format_size;

/// DTO representing an item in the trash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashItemDto {
    pub name: String,
    pub trash_path: String,
    pub original_path: String,
    pub deletion_date: String,
    pub size: u64,
    pub size_formatted: String,
    pub is_dir: bool,
}

impl From<TrashedItem> for TrashItemDto {
    fn from(item: TrashedItem) -> Self {
        Self {
            trash_path: item.trash_path().to_string(),
            name: item.name,
            original_path: item.info.original_path,
            deletion_date: item.info.deletion_date,
            size: item.size,
            size_formatted: format_size(item.size),
            is_dir: item.is_dir,
        }
    }
}

/// Full trash listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashListingDto {
    pub items: Vec<TrashItemDto>,
    pub total_size: u64,
    pub total_size_formatted: String,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrashStatusDto {
    pub trash_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreResultDto {
    pub success: bool,
    pub restored_to: String,
}

/// Result of emptying the trash; `errors` is omitted when everything was deleted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyTrashResultDto {
    pub success: bool,
    pub deleted_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<EmptyTrashOutcome> for EmptyTrashResultDto {
    fn from(outcome: EmptyTrashOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            deleted_count: outcome.deleted_count,
            errors: outcome.errors,
        }
    }
}

/// Request body for restore and delete
#[derive(Debug, Default, Deserialize)]
pub struct TrashPathRequest {
    #[serde(default)]
    pub trash_path: Option<serde_json::Value>,
}

impl TrashPathRequest {
    /// Trash identifier; missing or non-string values count as empty
    pub fn trash_path(&self) -> &str {
        self.trash_path
            .as_ref()
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_result_omits_errors_when_successful() {
        let ok = EmptyTrashResultDto::from(EmptyTrashOutcome { deleted_count: 2, errors: vec![] });
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"success": true, "deleted_count": 2}));

        let failed = EmptyTrashResultDto::from(EmptyTrashOutcome {
            deleted_count: 1,
            errors: vec!["locked: Permission denied (os error 13)".to_string()],
        });
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({
                "success": false,
                "deleted_count": 1,
                "errors": ["locked: Permission denied (os error 13)"]
            })
        );
    }

    #[test]
    fn test_trash_path_request_tolerates_odd_values() {
        let req: TrashPathRequest = serde_json::from_str(r#"{"trash_path": "a.txt"}"#).unwrap();
        assert_eq!(req.trash_path(), "a.txt");

        let req: TrashPathRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.trash_path(), "");

        let req: TrashPathRequest = serde_json::from_str(r#"{"trash_path": 42}"#).unwrap();
        assert_eq!(req.trash_path(), "");
    }
}
