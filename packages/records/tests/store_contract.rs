// ABOUTME: Integration tests for the dataset store contract
// ABOUTME: Exercises list/get/save end to end over the mock dataset

use cotdesk_core::{ProductCategory, SaveError};
use cotdesk_records::{page_slice, DatasetStore, ListFilters, PageRequest};
use pretty_assertions::assert_eq;

#[test]
fn test_store_serves_the_full_mock_dataset() {
    let store = DatasetStore::with_mock_data();

    assert!(store.list_cots().len() >= 20);
    assert_eq!(store.list_questioners().len(), 6);
    assert_eq!(store.list_products().len(), 13);

    // Every read accessor resolves the references the records carry.
    for cot in store.list_cots() {
        assert!(store.get_questioner(&cot.questioner_id).is_some());
        for id in &cot.product_ids {
            assert!(store.get_product(id).is_some());
        }
    }
}

#[test]
fn test_filter_and_paginate_over_the_store() {
    let store = DatasetStore::with_mock_data();
    let filters = ListFilters {
        product_category: Some(ProductCategory::Securities),
        ..Default::default()
    };

    let filtered: Vec<_> = store
        .list_cots()
        .iter()
        .filter(|c| filters.matches(c, store.list_questioners()))
        .collect();
    assert!(!filtered.is_empty());
    for cot in &filtered {
        assert_eq!(cot.product_category, ProductCategory::Securities);
    }

    let page = page_slice(&filtered, &PageRequest::with_page_and_size(1, 10));
    assert!(page.len() <= 10);
}

#[test]
fn test_save_round_trip_through_the_contract() {
    let mut store = DatasetStore::with_mock_data();

    let mut draft = store.get_cot("cot1").unwrap().clone();
    draft.cot_steps.push(String::new());
    draft.answer_text = "보완된 답변입니다.".to_string();
    store.save_cot(&draft).unwrap();

    let stored = store.get_cot("cot1").unwrap();
    assert_eq!(stored.cot_steps.len(), draft.cot_steps.len());
    assert_eq!(stored.answer_text, "보완된 답변입니다.");
}

#[test]
fn test_save_rejects_mismatched_category_with_message() {
    let mut store = DatasetStore::with_mock_data();

    let mut draft = store.get_cot("cot1").unwrap().clone();
    assert_eq!(draft.product_category, ProductCategory::Securities);
    draft.product_ids.push("p12".to_string()); // an insurance product

    let err = store.save_cot(&draft).unwrap_err();
    assert_eq!(err, SaveError::CategoryMismatch);
    assert_eq!(
        err.to_string(),
        "선택된 상품의 상품분류가 CoT의 상품분류와 일치하지 않습니다."
    );
}
