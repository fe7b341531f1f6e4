use crate::types::{CotRecord, Product};
use thiserror::Error;

/// Save-time validation failures for a CoT draft.
///
/// Exactly two kinds exist; both are user-recoverable and surface their
/// Korean message verbatim in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("질문은 필수 입력 항목입니다")]
    QuestionRequired,
    #[error("선택된 상품의 상품분류가 CoT의 상품분류와 일치하지 않습니다.")]
    CategoryMismatch,
}

/// Validates a CoT draft against the save contract.
///
/// Checks run in order and the first failure wins:
/// 1. question text must be non-empty after trimming;
/// 2. every selected product that resolves against `products` must share
///    the draft's product category. Unresolvable ids are skipped.
pub fn validate_cot(draft: &CotRecord, products: &[Product]) -> Result<(), SaveError> {
    if draft.question_text.trim().is_empty() {
        return Err(SaveError::QuestionRequired);
    }

    if !draft.product_ids.is_empty() {
        let mismatch = draft
            .product_ids
            .iter()
            .filter_map(|id| products.iter().find(|p| &p.id == id))
            .any(|p| p.product_category != draft.product_category);
        if mismatch {
            return Err(SaveError::CategoryMismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CotStatus, ProductCategory, ProductType, QuestionType};
    use chrono::{TimeZone, Utc};

    fn cot(category: ProductCategory, question: &str, product_ids: &[&str]) -> CotRecord {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        CotRecord {
            id: "cot-test".to_string(),
            questioner_id: "q1".to_string(),
            product_ids: product_ids.iter().map(|s| s.to_string()).collect(),
            product_category: category,
            question_type: QuestionType::CustomerCharacteristics,
            question_text: question.to_string(),
            cot_steps: vec![],
            answer_text: String::new(),
            cot_status: CotStatus::Draft,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn product(id: &str, category: ProductCategory, product_type: ProductType) -> Product {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Product {
            id: id.to_string(),
            name: format!("상품 {}", id),
            product_category: category,
            product_type,
            maturity: String::new(),
            yield_desc: String::new(),
            risk_grade: String::new(),
            tax_benefit: String::new(),
            payment_type: String::new(),
            loss_rate: String::new(),
            liquidity: String::new(),
            search_keywords: String::new(),
            note: String::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let products = vec![product("p1", ProductCategory::Securities, ProductType::Equity)];
        let draft = cot(ProductCategory::Securities, "채권형 펀드 추천해주세요", &["p1"]);
        assert!(validate_cot(&draft, &products).is_ok());
    }

    #[test]
    fn test_empty_question_is_rejected() {
        let draft = cot(ProductCategory::Securities, "", &[]);
        let err = validate_cot(&draft, &[]).unwrap_err();
        assert_eq!(err, SaveError::QuestionRequired);
        assert_eq!(err.to_string(), "질문은 필수 입력 항목입니다");
    }

    #[test]
    fn test_whitespace_question_is_rejected() {
        let draft = cot(ProductCategory::Securities, "   \n\t ", &[]);
        assert_eq!(validate_cot(&draft, &[]), Err(SaveError::QuestionRequired));
    }

    #[test]
    fn test_question_check_runs_before_category_check() {
        // Both violations present; the question error must win.
        let products = vec![product("p9", ProductCategory::Insurance, ProductType::Cancer)];
        let draft = cot(ProductCategory::Securities, " ", &["p9"]);
        assert_eq!(validate_cot(&draft, &products), Err(SaveError::QuestionRequired));
    }

    #[test]
    fn test_category_mismatch_is_rejected() {
        let products = vec![
            product("p1", ProductCategory::Securities, ProductType::Equity),
            product("p9", ProductCategory::Insurance, ProductType::Cancer),
        ];
        let draft = cot(ProductCategory::Securities, "암보험도 같이 보여줘", &["p1", "p9"]);
        let err = validate_cot(&draft, &products).unwrap_err();
        assert_eq!(err, SaveError::CategoryMismatch);
        assert_eq!(
            err.to_string(),
            "선택된 상품의 상품분류가 CoT의 상품분류와 일치하지 않습니다."
        );
    }

    #[test]
    fn test_unresolvable_product_ids_are_skipped() {
        let products = vec![product("p1", ProductCategory::Securities, ProductType::Equity)];
        let draft = cot(ProductCategory::Securities, "질문", &["p1", "ghost"]);
        assert!(validate_cot(&draft, &products).is_ok());
    }

    #[test]
    fn test_no_products_selected_skips_category_check() {
        let draft = cot(ProductCategory::Insurance, "질문", &[]);
        assert!(validate_cot(&draft, &[]).is_ok());
    }
}
