// ABOUTME: List filter state and its query-string mirror
// ABOUTME: Keys: product_category, question_type, gender, age_band

use cotdesk_core::{AgeBand, CotRecord, Gender, ProductCategory, QuestionType, Questioner};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// The four independent optional filters of the CoT listing.
///
/// `None` means "all" and is absent from the query string. Filters compose
/// with logical AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilters {
    pub product_category: Option<ProductCategory>,
    pub question_type: Option<QuestionType>,
    pub gender: Option<Gender>,
    pub age_band: Option<AgeBand>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.product_category.is_none()
            && self.question_type.is_none()
            && self.gender.is_none()
            && self.age_band.is_none()
    }

    /// Whether any filter that must be resolved through the questioner is set
    pub fn has_questioner_filter(&self) -> bool {
        self.gender.is_some() || self.age_band.is_some()
    }

    /// Seed filters from a query string. A leading `?` is tolerated;
    /// unknown keys and unparsable values are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut filters = ListFilters::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "product_category" => filters.product_category = value.parse().ok(),
                "question_type" => filters.question_type = value.parse().ok(),
                "gender" => filters.gender = value.parse().ok(),
                "age_band" => filters.age_band = value.parse().ok(),
                _ => {}
            }
        }
        filters
    }

    /// Mirror the active filters back into a query string.
    /// Inactive filters are omitted entirely.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = self.product_category {
            serializer.append_pair("product_category", category.as_str());
        }
        if let Some(question_type) = self.question_type {
            serializer.append_pair("question_type", question_type.as_str());
        }
        if let Some(gender) = self.gender {
            serializer.append_pair("gender", gender.as_str());
        }
        if let Some(age_band) = self.age_band {
            serializer.append_pair("age_band", age_band.as_str());
        }
        serializer.finish()
    }

    /// Whether `cot` satisfies every active filter.
    ///
    /// Gender and age-band filters resolve the record's questioner by id; a
    /// record whose questioner cannot be found fails whenever either is set.
    pub fn matches(&self, cot: &CotRecord, questioners: &[Questioner]) -> bool {
        if let Some(category) = self.product_category {
            if cot.product_category != category {
                return false;
            }
        }
        if let Some(question_type) = self.question_type {
            if cot.question_type != question_type {
                return false;
            }
        }
        if self.has_questioner_filter() {
            let Some(questioner) = questioners.iter().find(|q| q.id == cot.questioner_id) else {
                return false;
            };
            if let Some(gender) = self.gender {
                if questioner.gender != gender {
                    return false;
                }
            }
            if let Some(age_band) = self.age_band {
                if questioner.age_band != age_band {
                    return false;
                }
            }
        }
        true
    }
}
