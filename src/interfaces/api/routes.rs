use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::common::di::AppState;
use crate::interfaces::api::handlers::trash_handler;

/// Creates the trash API routes (relative to the base route)
pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(trash_handler::get_trash_status))
        .route("/list", get(trash_handler::get_trash_items))
        .route("/restore", post(trash_handler::restore_from_trash))
        .route("/delete", post(trash_handler::delete_permanently))
        .route("/empty", post(trash_handler::empty_trash))
}

/// Builds the application router with the API mounted under the configured base route
pub fn create_app(state: AppState) -> Router {
    let base_route = state.config.server.base_route();
    tracing::info!("Mounting trash API under {}", base_route);

    Router::new()
        .nest(&base_route, create_api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::{tempdir, TempDir};
    use tower::ServiceExt;

    use crate::application::services::trash_service::TrashService;
    use crate::common::config::{AppConfig, FeaturesConfig};
    use crate::domain::services::trash_location::TrashLocation;
    use crate::infrastructure::repositories::trash_fs_repository::TrashFsRepository;
    use crate::infrastructure::services::host_settings_service::ConfigHostSettings;

    const BASE: &str = "/jupyterlab-trash-mgmt-extension";

    struct TestApp {
        tmp: TempDir,
        location: TrashLocation,
        app: Router,
    }

    impl TestApp {
        fn new(delete_to_trash: bool) -> Self {
            let tmp = tempdir().unwrap();
            let location = TrashLocation::resolve(Some(tmp.path()), None).unwrap();
            fs::create_dir_all(location.files_dir()).unwrap();
            fs::create_dir_all(location.info_dir()).unwrap();

            let features = FeaturesConfig { delete_to_trash };
            let service = TrashService::new(
                Arc::new(TrashFsRepository::new(location.clone())),
                Arc::new(ConfigHostSettings::new(&features)),
            );
            let config = AppConfig { features, ..AppConfig::default() };
            let app = create_app(AppState::new(config, Arc::new(service)));

            Self { tmp, location, app }
        }

        fn trash_file(&self, name: &str, original: &Path, date: &str) {
            fs::write(self.location.files_dir().join(name), "content").unwrap();
            fs::write(
                self.location.info_dir().join(format!("{}.trashinfo", name)),
                format!("[Trash Info]\nPath={}\nDeletionDate={}\n", original.display(), date),
            ).unwrap();
        }

        async fn call(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let body = match body {
                Some(value) => Body::from(value.to_string()),
                None => Body::empty(),
            };
            let request = Request::builder()
                .method(method)
                .uri(format!("{}{}", BASE, uri))
                .header("content-type", "application/json")
                .body(body)
                .unwrap();

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        }
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let (status, body) = TestApp::new(true).call("GET", "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"trash_enabled": true}));

        let (_, body) = TestApp::new(false).call("GET", "/status", None).await;
        assert_eq!(body, json!({"trash_enabled": false}));
    }

    #[tokio::test]
    async fn test_base_url_without_leading_slash() {
        let test_app = TestApp::new(true);
        let mut config = AppConfig::default();
        config.server.base_url = "user/alice/".to_string();
        let service = TrashService::new(
            Arc::new(TrashFsRepository::new(test_app.location.clone())),
            Arc::new(ConfigHostSettings::new(&config.features)),
        );
        let app = create_app(AppState::new(config, Arc::new(service)));

        let request = Request::builder()
            .uri(format!("/user/alice{}/status", BASE))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_endpoint() {
        let app = TestApp::new(true);
        app.trash_file("old.txt", Path::new("/home/user/old.txt"), "2024-01-14T09:00:00");
        app.trash_file("new.txt", Path::new("/home/user/new.txt"), "2024-01-15T10:30:00");

        let (status, body) = app.call("GET", "/list", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["item_count"], 2);
        assert_eq!(body["total_size"], 14);
        assert_eq!(body["total_size_formatted"], "14 B");
        assert_eq!(body["items"][0], json!({
            "name": "new.txt",
            "trash_path": "new.txt",
            "original_path": "/home/user/new.txt",
            "deletion_date": "2024-01-15T10:30:00",
            "size": 7,
            "size_formatted": "7 B",
            "is_dir": false
        }));
        assert_eq!(body["items"][1]["name"], "old.txt");
    }

    #[tokio::test]
    async fn test_restore_endpoint_status_codes() {
        let app = TestApp::new(true);
        let target = app.tmp.path().join("home").join("doc.txt");
        app.trash_file("doc.txt", &target, "2024-01-15T10:30:00");

        let (status, body) = app.call("POST", "/restore", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No trash_path provided"}));

        let (status, body) = app.call("POST", "/restore", Some(json!({"trash_path": "nope.txt"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Item not found in trash"}));

        fs::write(app.location.files_dir().join("orphan.txt"), "x").unwrap();
        let (status, body) = app.call("POST", "/restore", Some(json!({"trash_path": "orphan.txt"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Cannot determine original path"}));

        let (status, body) = app.call("POST", "/restore", Some(json!({"trash_path": "doc.txt"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "restored_to": target.display().to_string()}));
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_restore_conflict() {
        let app = TestApp::new(true);
        let target = app.tmp.path().join("taken.txt");
        fs::write(&target, "occupied").unwrap();
        app.trash_file("taken.txt", &target, "2024-01-15T10:30:00");

        let (status, body) = app.call("POST", "/restore", Some(json!({"trash_path": "taken.txt"}))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], format!("Destination already exists: {}", target.display()));
        assert!(app.location.files_dir().join("taken.txt").exists());
    }

    #[tokio::test]
    async fn test_delete_endpoint() {
        let app = TestApp::new(true);
        app.trash_file("gone.txt", Path::new("/home/user/gone.txt"), "2024-01-15T10:30:00");

        let (status, body) = app.call("POST", "/delete", Some(json!({"trash_path": "gone.txt"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        assert!(!app.location.files_dir().join("gone.txt").exists());
        assert!(!app.location.info_dir().join("gone.txt.trashinfo").exists());

        let (status, _) = app.call("POST", "/delete", Some(json!({"trash_path": "gone.txt"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = app.call("POST", "/delete", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No trash_path provided"}));
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let app = TestApp::new(true);
        let request = Request::builder()
            .method("POST")
            .uri(format!("{}/delete", BASE))
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_endpoint() {
        let app = TestApp::new(true);
        app.trash_file("a.txt", Path::new("/home/user/a.txt"), "2024-01-15T10:30:00");
        app.trash_file("b.txt", Path::new("/home/user/b.txt"), "2024-01-14T09:00:00");

        let (status, body) = app.call("POST", "/empty", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "deleted_count": 2}));
        assert_eq!(fs::read_dir(app.location.files_dir()).unwrap().count(), 0);
        assert_eq!(fs::read_dir(app.location.info_dir()).unwrap().count(), 0);
    }
}
