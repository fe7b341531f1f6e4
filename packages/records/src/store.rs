// ABOUTME: The in-memory dataset store backing every view
// ABOUTME: Read contract plus a simulated save with ordered validation

use chrono::Utc;
use cotdesk_core::{validate_cot, CotRecord, Product, Questioner, SaveError};
use tracing::info;

use crate::dataset;

/// Owns the CoT, questioner, and product collections for the session.
///
/// Questioners and products are read-only; CoT records can be written back
/// through [`DatasetStore::save_cot`]. There is no persistence behind the
/// store — a successful save replaces the in-memory record and logs the
/// write.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    cots: Vec<CotRecord>,
    questioners: Vec<Questioner>,
    products: Vec<Product>,
}

impl DatasetStore {
    pub fn new(
        cots: Vec<CotRecord>,
        questioners: Vec<Questioner>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            cots,
            questioners,
            products,
        }
    }

    /// A store loaded with the built-in mock dataset
    pub fn with_mock_data() -> Self {
        Self::new(
            dataset::cot_records(),
            dataset::questioners(),
            dataset::products(),
        )
    }

    pub fn list_cots(&self) -> &[CotRecord] {
        &self.cots
    }

    pub fn get_cot(&self, id: &str) -> Option<&CotRecord> {
        self.cots.iter().find(|c| c.id == id)
    }

    pub fn list_questioners(&self) -> &[Questioner] {
        &self.questioners
    }

    pub fn get_questioner(&self, id: &str) -> Option<&Questioner> {
        self.questioners.iter().find(|q| q.id == id)
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Validate and write back a CoT record.
    ///
    /// Validation failures abort the save before any mutation; the first
    /// failing check is returned as the single error. On success the stored
    /// record is replaced (or appended, for a new id) with a fresh
    /// `updated_at`.
    pub fn save_cot(&mut self, record: &CotRecord) -> Result<(), SaveError> {
        validate_cot(record, &self.products)?;

        let mut saved = record.clone();
        saved.updated_at = Utc::now();
        match self.cots.iter_mut().find(|c| c.id == record.id) {
            Some(slot) => *slot = saved,
            None => self.cots.push(saved),
        }

        info!(
            id = %record.id,
            steps = record.cot_steps.len(),
            products = record.product_ids.len(),
            "saved CoT record"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotdesk_core::ProductCategory;

    #[test]
    fn test_get_cot_found_and_missing() {
        let store = DatasetStore::with_mock_data();
        assert!(store.get_cot("cot1").is_some());
        assert!(store.get_cot("nope").is_none());
    }

    #[test]
    fn test_save_replaces_record_and_bumps_updated_at() {
        let mut store = DatasetStore::with_mock_data();
        let mut record = store.get_cot("cot1").unwrap().clone();
        let before = record.updated_at;
        record.question_text = "수정된 질문".to_string();

        store.save_cot(&record).unwrap();

        let stored = store.get_cot("cot1").unwrap();
        assert_eq!(stored.question_text, "수정된 질문");
        assert!(stored.updated_at > before);
    }

    #[test]
    fn test_failed_save_leaves_store_untouched() {
        let mut store = DatasetStore::with_mock_data();
        let pristine = store.get_cot("cot1").unwrap().clone();

        let mut record = pristine.clone();
        record.question_text = "  ".to_string();
        assert_eq!(store.save_cot(&record), Err(SaveError::QuestionRequired));
        assert_eq!(store.get_cot("cot1").unwrap(), &pristine);

        let mut record = pristine.clone();
        record.product_category = ProductCategory::Insurance; // p1/p2 are securities
        assert_eq!(store.save_cot(&record), Err(SaveError::CategoryMismatch));
        assert_eq!(store.get_cot("cot1").unwrap(), &pristine);
    }

    #[test]
    fn test_save_appends_new_record() {
        let mut store = DatasetStore::with_mock_data();
        let count = store.list_cots().len();
        let mut record = store.get_cot("cot1").unwrap().clone();
        record.id = "cot-new".to_string();

        store.save_cot(&record).unwrap();
        assert_eq!(store.list_cots().len(), count + 1);
        assert!(store.get_cot("cot-new").is_some());
    }
}
