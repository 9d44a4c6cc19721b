//! Tests for image storage providers

use vsearch_domain::ports::providers::ImageStorageProvider;
use vsearch_domain::value_objects::ImageReference;
use vsearch_providers::image_storage::InlineImageStorage;

// 1x1 transparent PNG
const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[tokio::test]
async fn inline_keeps_payload() {
    let storage = InlineImageStorage::new();
    let payload = format!("data:image/png;base64,{PNG_BASE64}");

    let reference = storage.store("p1", &payload).await.unwrap();
    assert_eq!(reference, ImageReference::Inline(payload));
    assert!(!storage.produces_urls());
    storage.delete("p1").await.unwrap();
}

#[cfg(feature = "storage-filesystem")]
mod filesystem {
    use super::*;
    use vsearch_providers::image_storage::FilesystemImageStorage;

    #[tokio::test]
    async fn writes_decoded_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemImageStorage::new(dir.path(), "http://cdn.local/images/");

        let reference = storage
            .store("p1", &format!("data:image/png;base64,{PNG_BASE64}"))
            .await
            .unwrap();

        assert_eq!(
            reference,
            ImageReference::Url("http://cdn.local/images/products/p1.png".to_string())
        );
        let bytes = std::fs::read(dir.path().join("products/p1.png")).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[tokio::test]
    async fn bare_payload_defaults_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemImageStorage::new(dir.path(), "http://cdn.local");

        let reference = storage.store("p2", PNG_BASE64).await.unwrap();
        assert_eq!(reference.url(), Some("http://cdn.local/products/p2.jpg"));
        assert!(dir.path().join("products/p2.jpg").exists());
    }

    #[tokio::test]
    async fn delete_removes_any_extension() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemImageStorage::new(dir.path(), "http://cdn.local");
        storage
            .store("p3", &format!("data:image/webp;base64,{PNG_BASE64}"))
            .await
            .unwrap();

        storage.delete("p3").await.unwrap();
        assert!(!dir.path().join("products/p3.webp").exists());
    }

    #[tokio::test]
    async fn delete_of_unknown_image_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemImageStorage::new(dir.path(), "http://cdn.local");
        storage.delete("never-stored").await.unwrap();
    }

    #[tokio::test]
    async fn invalid_base64_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemImageStorage::new(dir.path(), "http://cdn.local");
        let err = storage.store("p4", "not base64 !!").await.unwrap_err();
        assert!(err.is_validation());
    }
}
