//! Property-Based Tests for the catalog service
//!
//! Checks the featured flag and snapshot invariants over random toggle
//! sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use tokio_test::block_on;
use uuid::Uuid;

use super::test_support::{request, Harness};
use crate::cache::{KeyValueCache, FEATURED_PRODUCTS_KEY};
use crate::catalog::CatalogStore;
use crate::models::Product;

const CATALOG_SIZE: usize = 5;

fn seeded() -> (Harness, Vec<Uuid>) {
    let harness = Harness::new();
    let ids = block_on(async {
        let mut ids = Vec::new();
        for i in 0..CATALOG_SIZE {
            let name = format!("product-{}", i);
            let product = harness
                .service
                .create(request(&name, "x", None))
                .await
                .unwrap();
            ids.push(product.id);
        }
        ids
    });
    (harness, ids)
}

fn snapshot_ids(harness: &Harness) -> HashSet<Uuid> {
    let entry = block_on(harness.cache.inner.get(FEATURED_PRODUCTS_KEY))
        .unwrap()
        .expect("snapshot written after toggle");
    let products: Vec<Product> = serde_json::from_str(&entry.value).unwrap();
    products.into_iter().map(|p| p.id).collect()
}

fn store_featured_ids(harness: &Harness) -> HashSet<Uuid> {
    block_on(harness.catalog.inner.find_featured())
        .unwrap()
        .products
        .into_iter()
        .map(|p| p.id)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // After every toggle completes, the cached snapshot holds exactly the
    // products the store has flagged as featured.
    #[test]
    fn prop_snapshot_tracks_featured_set(
        toggles in prop::collection::vec(0..CATALOG_SIZE, 1..30)
    ) {
        let (harness, ids) = seeded();

        for index in toggles {
            block_on(harness.service.toggle_featured(ids[index])).unwrap();
            prop_assert_eq!(snapshot_ids(&harness), store_featured_ids(&harness));
        }
    }

    // Toggling the same product twice restores its original flag.
    #[test]
    fn prop_toggle_is_involution(
        prefix in prop::collection::vec(0..CATALOG_SIZE, 0..10),
        target in 0..CATALOG_SIZE
    ) {
        let (harness, ids) = seeded();
        for index in prefix {
            block_on(harness.service.toggle_featured(ids[index])).unwrap();
        }

        let before = block_on(harness.catalog.inner.find_by_id(ids[target]))
            .unwrap()
            .unwrap()
            .is_featured;
        block_on(harness.service.toggle_featured(ids[target])).unwrap();
        let after = block_on(harness.service.toggle_featured(ids[target])).unwrap();

        prop_assert_eq!(after.is_featured, before);
        prop_assert_eq!(snapshot_ids(&harness), store_featured_ids(&harness));
    }
}
