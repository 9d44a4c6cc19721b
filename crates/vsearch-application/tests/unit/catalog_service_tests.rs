//! Tests for the catalog use cases

use std::sync::Arc;

use vsearch_application::ports::services::CatalogServiceInterface;
use vsearch_application::use_cases::CatalogServiceImpl;
use vsearch_domain::error::Error;
use vsearch_domain::repositories::ProductRepository;
use vsearch_domain::value_objects::ImageReference;
use vsearch_providers::embedding::NullEmbeddingProvider;
use vsearch_providers::repository::InMemoryProductRepository;

use crate::test_utils::{
    DIMS, FailingEmbedding, RecordingStorage, inline_storage, memory_repository, null_embedding,
};

#[tokio::test]
async fn add_embeds_and_stores_product() {
    let repository = memory_repository();
    let service = CatalogServiceImpl::new(null_embedding(), repository.clone(), inline_storage());

    let view = service
        .add_product("  Red Shoe ", "data:image/png;base64,AAAA")
        .await
        .unwrap();

    assert_eq!(view.name, "Red Shoe");
    assert_eq!(
        view.image,
        ImageReference::Inline("data:image/png;base64,AAAA".to_string())
    );
    assert!(uuid::Uuid::parse_str(&view.id).is_ok());

    let stored = repository.get_by_id(&view.id).await.unwrap().unwrap();
    assert_eq!(
        stored.embedding,
        NullEmbeddingProvider::new(DIMS).vector_for("data:image/png;base64,AAAA")
    );
}

#[tokio::test]
async fn add_requires_name_and_image() {
    let service = CatalogServiceImpl::new(null_embedding(), memory_repository(), inline_storage());

    let err = service.add_product("   ", "AAAA").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref message } if message == "Product name is required"));

    let err = service.add_product("Shoe", "").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref message } if message == "Image is required"));
}

#[tokio::test]
async fn add_fails_when_embedding_fails() {
    let repository = memory_repository();
    let service = CatalogServiceImpl::new(
        Arc::new(FailingEmbedding::default()),
        repository.clone(),
        inline_storage(),
    );

    let err = service.add_product("Shoe", "AAAA").await.unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }));
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn rejected_record_discards_stored_image() {
    // Repository expects a different length than the provider emits
    let repository = Arc::new(InMemoryProductRepository::new(DIMS + 1));
    let storage = Arc::new(RecordingStorage::default());
    let service = CatalogServiceImpl::new(null_embedding(), repository, storage.clone());

    let err = service.add_product("Shoe", "AAAA").await.unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
    assert_eq!(storage.deletes(), 1);
}

#[tokio::test]
async fn list_returns_creation_order() {
    let service = CatalogServiceImpl::new(null_embedding(), memory_repository(), inline_storage());
    let first = service.add_product("First", "AAAA").await.unwrap();
    let second = service.add_product("Second", "BBBB").await.unwrap();

    let ids: Vec<String> = service
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(service.product_count().await.unwrap(), 2);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let service = CatalogServiceImpl::new(null_embedding(), memory_repository(), inline_storage());
    let err = service.delete_product("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn image_cleanup_failure_does_not_fail_delete() {
    let repository = memory_repository();
    let storage = Arc::new(RecordingStorage::failing());
    let service = CatalogServiceImpl::new(null_embedding(), repository.clone(), storage.clone());
    let view = service.add_product("Shoe", "AAAA").await.unwrap();

    service.delete_product(&view.id).await.unwrap();

    assert_eq!(storage.deletes(), 1);
    assert!(repository.get_by_id(&view.id).await.unwrap().is_none());
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn clear_removes_everything_and_cleans_images() {
    let repository = memory_repository();
    let storage = Arc::new(RecordingStorage::default());
    let service = CatalogServiceImpl::new(null_embedding(), repository.clone(), storage.clone());
    for name in ["a", "b", "c"] {
        service.add_product(name, name).await.unwrap();
    }

    assert_eq!(service.clear_catalog().await.unwrap(), 3);
    assert_eq!(repository.count().await.unwrap(), 0);
    assert_eq!(storage.deletes(), 3);
}
