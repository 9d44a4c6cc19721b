//! Tests for the pgvector product repository
//!
//! Requires `VSEARCH_TEST_DATABASE_URL` pointing at a disposable database
//! with the pgvector extension available; the `products` table is cleared.
//! Everything runs in one test so no two tests share the table concurrently.

use std::time::Duration;

use chrono::Utc;
use vsearch_domain::entities::Product;
use vsearch_domain::repositories::ProductRepository;
use vsearch_domain::value_objects::ImageReference;
use vsearch_providers::repository::{InMemoryProductRepository, PgVectorProductRepository};

fn database_url() -> Option<String> {
    std::env::var("VSEARCH_TEST_DATABASE_URL").ok()
}

fn product(name: &str, embedding: Vec<f32>, offset_ms: i64) -> Product {
    let id = uuid::Uuid::new_v4().to_string();
    Product::new(
        id.clone(),
        name,
        ImageReference::Url(format!("http://cdn.local/products/{id}.jpg")),
        embedding,
    )
    // Postgres keeps microseconds
    .with_created_at(
        chrono::DateTime::from_timestamp_micros(Utc::now().timestamp_micros() + offset_ms * 1000)
            .unwrap(),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn behaves_like_linear_scan() {
    let Some(url) = database_url() else {
        eprintln!("VSEARCH_TEST_DATABASE_URL not set, skipping");
        return;
    };

    let indexed = tokio::task::spawn_blocking(move || {
        PgVectorProductRepository::connect(&url, 3, 2, Duration::from_secs(10))
    })
    .await
    .unwrap()
    .unwrap();
    let linear = InMemoryProductRepository::new(3);
    indexed.clear().await.unwrap();

    let catalog = vec![
        product("product1", vec![1.0, 0.0, 0.0], 0),
        product("product2", vec![0.0, 1.0, 0.0], 1),
        product("product3", vec![0.9, 0.1, 0.0], 2),
        product("product4", vec![0.3, 0.3, 0.9], 3),
    ];
    for p in &catalog {
        indexed.add(p.clone()).await.unwrap();
        linear.add(p.clone()).await.unwrap();
    }

    // Ranking equivalence
    for query in [[1.0, 0.0, 0.0], [0.2, 0.7, 0.1], [0.0, 0.0, 1.0]] {
        let a = indexed.find_similar(&query, 10).await.unwrap();
        let b = linear.find_similar(&query, 10).await.unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.product.id, y.product.id);
            assert!((x.score - y.score).abs() < 1e-3);
        }
    }

    // Round trip
    let first = &catalog[0];
    let fetched = indexed.get_by_id(&first.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, first.name);
    assert_eq!(fetched.image, first.image);
    assert_eq!(fetched.embedding, first.embedding);

    let listed: Vec<String> = indexed.list().await.unwrap().into_iter().map(|p| p.id).collect();
    let expected: Vec<String> = catalog.iter().map(|p| p.id.clone()).collect();
    assert_eq!(listed, expected);

    // Delete
    assert!(indexed.delete(&first.id).await.unwrap());
    assert!(!indexed.delete(&first.id).await.unwrap());
    assert!(!indexed.delete("not-a-uuid").await.unwrap());
    assert!(indexed.get_by_id(&first.id).await.unwrap().is_none());
    assert_eq!(indexed.count().await.unwrap(), catalog.len() - 1);

    // Inline images cannot be stored
    let inline = Product::new(
        uuid::Uuid::new_v4().to_string(),
        "inline",
        ImageReference::Inline("AAAA".to_string()),
        vec![1.0, 0.0, 0.0],
    );
    assert!(indexed.add(inline).await.unwrap_err().is_validation());

    assert_eq!(indexed.clear().await.unwrap().len(), catalog.len() - 1);
    assert!(indexed.find_similar(&[1.0, 0.0, 0.0], 10).await.unwrap().is_empty());

    // A zero vector scores 0 and ranks between positive and negative scores
    let linear = InMemoryProductRepository::new(3);
    let signed = vec![
        product("same", vec![1.0, 0.0, 0.0], 0),
        product("zero", vec![0.0, 0.0, 0.0], 1),
        product("opposite", vec![-1.0, 0.0, 0.0], 2),
    ];
    for p in &signed {
        indexed.add(p.clone()).await.unwrap();
        linear.add(p.clone()).await.unwrap();
    }
    let a = indexed.find_similar(&[1.0, 0.0, 0.0], 10).await.unwrap();
    let b = linear.find_similar(&[1.0, 0.0, 0.0], 10).await.unwrap();
    let scores: Vec<f64> = a.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1.0, 0.0, -1.0]);
    let names = |rs: &[vsearch_domain::value_objects::SearchResult]| {
        rs.iter().map(|r| r.product.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&a), names(&b));
    indexed.clear().await.unwrap();

    // The maximum topK is served even past the default HNSW candidate list
    for i in 0..60i16 {
        let angle = f32::from(i) / 60.0;
        indexed
            .add(product(&format!("bulk{i}"), vec![1.0, angle, 0.5], i64::from(i)))
            .await
            .unwrap();
    }
    assert_eq!(indexed.find_similar(&[1.0, 0.2, 0.5], 50).await.unwrap().len(), 50);
    indexed.clear().await.unwrap();
}
