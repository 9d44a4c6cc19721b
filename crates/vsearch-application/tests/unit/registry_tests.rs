//! Tests for registry resolution from the application side

use vsearch_application::ports::registry::{
    EmbeddingProviderConfig, ImageStorageProviderConfig, ProductRepositoryConfig,
    resolve_embedding_provider, resolve_image_storage_provider, resolve_product_repository,
};

#[test]
fn unknown_names_are_rejected() {
    assert!(resolve_embedding_provider(&EmbeddingProviderConfig::new("missing")).is_err());
    assert!(resolve_product_repository(&ProductRepositoryConfig::new("missing")).is_err());
    assert!(resolve_image_storage_provider(&ImageStorageProviderConfig::new("missing")).is_err());
}

#[test]
fn memory_repository_opens_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ProductRepositoryConfig::new("memory")
        .with_dimensions(4)
        .with_data_file(dir.path().join("products.json"));

    let repository = resolve_product_repository(&config).unwrap();
    assert_eq!(repository.provider_name(), "memory");
}

#[test]
fn corrupt_data_file_fails_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    std::fs::write(&path, "[{").unwrap();

    let config = ProductRepositoryConfig::new("memory")
        .with_dimensions(4)
        .with_data_file(path);
    assert!(resolve_product_repository(&config).is_err());
}
