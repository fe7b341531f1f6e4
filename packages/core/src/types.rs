use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a wire value does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} value: {value}")]
pub struct EnumParseError {
    pub kind: &'static str,
    pub value: String,
}

impl EnumParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        EnumParseError {
            kind,
            value: value.to_string(),
        }
    }
}

/// Top-level classification of a financial product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Securities,
    Insurance,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 2] = [ProductCategory::Securities, ProductCategory::Insurance];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Securities => "SECURITIES",
            ProductCategory::Insurance => "INSURANCE",
        }
    }

    /// Korean display label used throughout the UI
    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::Securities => "증권",
            ProductCategory::Insurance => "보험",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SECURITIES" => Ok(ProductCategory::Securities),
            "INSURANCE" => Ok(ProductCategory::Insurance),
            _ => Err(EnumParseError::new("product category", s)),
        }
    }
}

/// The six question archetypes a CoT record is tagged with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    CustomerCharacteristics,
    InvestmentPreference,
    ProductComparison,
    AgeLifecycle,
    InvestmentProduct,
    HealthProtection,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::CustomerCharacteristics,
        QuestionType::InvestmentPreference,
        QuestionType::ProductComparison,
        QuestionType::AgeLifecycle,
        QuestionType::InvestmentProduct,
        QuestionType::HealthProtection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::CustomerCharacteristics => "CUSTOMER_CHARACTERISTICS",
            QuestionType::InvestmentPreference => "INVESTMENT_PREFERENCE",
            QuestionType::ProductComparison => "PRODUCT_COMPARISON",
            QuestionType::AgeLifecycle => "AGE_LIFECYCLE",
            QuestionType::InvestmentProduct => "INVESTMENT_PRODUCT",
            QuestionType::HealthProtection => "HEALTH_PROTECTION",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::CustomerCharacteristics => "고객특성 강조형",
            QuestionType::InvestmentPreference => "투자성향 및 조건기반형",
            QuestionType::ProductComparison => "상품 비교 추천형",
            QuestionType::AgeLifecycle => "연령별 및 생애주기 저축성 상품 추천형",
            QuestionType::InvestmentProduct => "투자성 상품 추천형",
            QuestionType::HealthProtection => "건강 및 질병보장 대비형",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|qt| qt.as_str() == s)
            .ok_or_else(|| EnumParseError::new("question type", s))
    }
}

/// Review lifecycle state of a CoT record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CotStatus {
    Draft,
    ReviewRequested,
    Approved,
    Rejected,
}

impl Default for CotStatus {
    fn default() -> Self {
        CotStatus::Draft
    }
}

impl CotStatus {
    pub const ALL: [CotStatus; 4] = [
        CotStatus::Draft,
        CotStatus::ReviewRequested,
        CotStatus::Approved,
        CotStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CotStatus::Draft => "DRAFT",
            CotStatus::ReviewRequested => "REVIEW_REQUESTED",
            CotStatus::Approved => "APPROVED",
            CotStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CotStatus::Draft => "작성중",
            CotStatus::ReviewRequested => "리뷰요청",
            CotStatus::Approved => "승인",
            CotStatus::Rejected => "반려",
        }
    }
}

impl fmt::Display for CotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CotStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CotStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| EnumParseError::new("cot status", s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(EnumParseError::new("gender", s)),
        }
    }
}

/// Ten-year age bands of a questioner persona
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeBand {
    #[serde(rename = "AGE_10")]
    Age10,
    #[serde(rename = "AGE_20")]
    Age20,
    #[serde(rename = "AGE_30")]
    Age30,
    #[serde(rename = "AGE_40")]
    Age40,
    #[serde(rename = "AGE_50")]
    Age50,
    #[serde(rename = "AGE_60")]
    Age60,
    #[serde(rename = "AGE_70")]
    Age70,
    #[serde(rename = "AGE_80_PLUS")]
    Age80Plus,
}

impl AgeBand {
    pub const ALL: [AgeBand; 8] = [
        AgeBand::Age10,
        AgeBand::Age20,
        AgeBand::Age30,
        AgeBand::Age40,
        AgeBand::Age50,
        AgeBand::Age60,
        AgeBand::Age70,
        AgeBand::Age80Plus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgeBand::Age10 => "AGE_10",
            AgeBand::Age20 => "AGE_20",
            AgeBand::Age30 => "AGE_30",
            AgeBand::Age40 => "AGE_40",
            AgeBand::Age50 => "AGE_50",
            AgeBand::Age60 => "AGE_60",
            AgeBand::Age70 => "AGE_70",
            AgeBand::Age80Plus => "AGE_80_PLUS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Age10 => "10대",
            AgeBand::Age20 => "20대",
            AgeBand::Age30 => "30대",
            AgeBand::Age40 => "40대",
            AgeBand::Age50 => "50대",
            AgeBand::Age60 => "60대",
            AgeBand::Age70 => "70대",
            AgeBand::Age80Plus => "80대 이상",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeBand {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| EnumParseError::new("age band", s))
    }
}

/// The thirteen product types; each belongs to exactly one category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    // Securities
    Equity,
    Bond,
    Reit,
    ShortTerm,
    Derivative,
    TrustPension,
    // Insurance
    Annuity,
    WholeLife,
    Term,
    Disease,
    Health,
    Cancer,
    Variable,
}

impl ProductType {
    pub const ALL: [ProductType; 13] = [
        ProductType::Equity,
        ProductType::Bond,
        ProductType::Reit,
        ProductType::ShortTerm,
        ProductType::Derivative,
        ProductType::TrustPension,
        ProductType::Annuity,
        ProductType::WholeLife,
        ProductType::Term,
        ProductType::Disease,
        ProductType::Health,
        ProductType::Cancer,
        ProductType::Variable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Equity => "EQUITY",
            ProductType::Bond => "BOND",
            ProductType::Reit => "REIT",
            ProductType::ShortTerm => "SHORT_TERM",
            ProductType::Derivative => "DERIVATIVE",
            ProductType::TrustPension => "TRUST_PENSION",
            ProductType::Annuity => "ANNUITY",
            ProductType::WholeLife => "WHOLE_LIFE",
            ProductType::Term => "TERM",
            ProductType::Disease => "DISEASE",
            ProductType::Health => "HEALTH",
            ProductType::Cancer => "CANCER",
            ProductType::Variable => "VARIABLE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductType::Equity => "주식형",
            ProductType::Bond => "채권형",
            ProductType::Reit => "재간접",
            ProductType::ShortTerm => "단기금융",
            ProductType::Derivative => "파생형",
            ProductType::TrustPension => "신탁/퇴직연금",
            ProductType::Annuity => "연금",
            ProductType::WholeLife => "종신",
            ProductType::Term => "정기",
            ProductType::Disease => "질병",
            ProductType::Health => "건강",
            ProductType::Cancer => "암",
            ProductType::Variable => "변액",
        }
    }

    /// The category this type belongs to
    pub fn category(self) -> ProductCategory {
        match self {
            ProductType::Equity
            | ProductType::Bond
            | ProductType::Reit
            | ProductType::ShortTerm
            | ProductType::Derivative
            | ProductType::TrustPension => ProductCategory::Securities,
            ProductType::Annuity
            | ProductType::WholeLife
            | ProductType::Term
            | ProductType::Disease
            | ProductType::Health
            | ProductType::Cancer
            | ProductType::Variable => ProductCategory::Insurance,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|pt| pt.as_str() == s)
            .ok_or_else(|| EnumParseError::new("product type", s))
    }
}

/// A Chain-of-Thought training record under curation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CotRecord {
    pub id: String,
    #[serde(rename = "questionerId")]
    pub questioner_id: String,
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,
    #[serde(rename = "productCategory")]
    pub product_category: ProductCategory,
    #[serde(rename = "questionType")]
    pub question_type: QuestionType,
    #[serde(rename = "questionText")]
    pub question_text: String,
    #[serde(rename = "cotSteps")]
    pub cot_steps: Vec<String>,
    #[serde(rename = "answerText")]
    pub answer_text: String,
    #[serde(rename = "cotStatus", default)]
    pub cot_status: CotStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A questioner persona a CoT record is attributed to (read-only here)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Questioner {
    pub id: String,
    pub gender: Gender,
    #[serde(rename = "ageBand")]
    pub age_band: AgeBand,
    #[serde(rename = "productCategory")]
    pub product_category: ProductCategory,
    #[serde(rename = "customerRiskProfile")]
    pub customer_risk_profile: String,
    #[serde(rename = "crossSubscription")]
    pub cross_subscription: String,
    #[serde(rename = "productList")]
    pub product_list: Vec<String>,
    #[serde(rename = "productCount")]
    pub product_count: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A financial product a CoT record may reference (read-only here)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(rename = "productCategory")]
    pub product_category: ProductCategory,
    #[serde(rename = "productType")]
    pub product_type: ProductType,
    pub maturity: String,
    #[serde(rename = "yield")]
    pub yield_desc: String,
    #[serde(rename = "riskGrade")]
    pub risk_grade: String,
    #[serde(rename = "taxBenefit")]
    pub tax_benefit: String,
    #[serde(rename = "paymentType")]
    pub payment_type: String,
    #[serde(rename = "lossRate")]
    pub loss_rate: String,
    pub liquidity: String,
    #[serde(rename = "searchKeywords")]
    pub search_keywords: String,
    pub note: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_values_round_trip() {
        for band in AgeBand::ALL {
            assert_eq!(band.as_str().parse::<AgeBand>().unwrap(), band);
        }
        for qt in QuestionType::ALL {
            assert_eq!(qt.as_str().parse::<QuestionType>().unwrap(), qt);
        }
        for st in CotStatus::ALL {
            assert_eq!(st.as_str().parse::<CotStatus>().unwrap(), st);
        }
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&AgeBand::Age80Plus).unwrap();
        assert_eq!(json, "\"AGE_80_PLUS\"");
        let json = serde_json::to_string(&CotStatus::ReviewRequested).unwrap();
        assert_eq!(json, "\"REVIEW_REQUESTED\"");
        let parsed: ProductType = serde_json::from_str("\"SHORT_TERM\"").unwrap();
        assert_eq!(parsed, ProductType::ShortTerm);
    }

    #[test]
    fn test_unknown_wire_value_is_rejected() {
        let err = "STOCKS".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err.value, "STOCKS");
    }

    #[test]
    fn test_product_type_category_mapping() {
        assert_eq!(
            ProductType::Equity.category(),
            ProductCategory::Securities
        );
        assert_eq!(
            ProductType::TrustPension.category(),
            ProductCategory::Securities
        );
        assert_eq!(ProductType::Cancer.category(), ProductCategory::Insurance);
        assert_eq!(
            ProductType::Variable.category(),
            ProductCategory::Insurance
        );

        let securities = ProductType::ALL
            .iter()
            .filter(|pt| pt.category() == ProductCategory::Securities)
            .count();
        assert_eq!(securities, 6);
        assert_eq!(ProductType::ALL.len() - securities, 7);
    }

    #[test]
    fn test_default_status_is_draft() {
        assert_eq!(CotStatus::default(), CotStatus::Draft);
    }
}
