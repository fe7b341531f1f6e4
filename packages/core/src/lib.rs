// ABOUTME: Core domain types and validation for Cotdesk
// ABOUTME: Foundational package shared by the record store and the TUI

pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    AgeBand, CotRecord, CotStatus, EnumParseError, Gender, Product, ProductCategory, ProductType,
    QuestionType, Questioner,
};

// Re-export utilities
pub use utils::generate_record_id;

// Re-export validation
pub use validation::{validate_cot, SaveError};
