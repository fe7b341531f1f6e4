use cotdesk_core::{AgeBand, CotRecord, Gender, ProductCategory, QuestionType, Questioner};
use cotdesk_records::{page_slice, ListFilters, PageMeta, PageRequest, PAGE_SIZES};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Sortable columns of the CoT listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum SortKey {
    ProductCategory,
    QuestionType,
    CotStatus,
    UpdatedAt,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::ProductCategory => "상품분류",
            SortKey::QuestionType => "질문유형",
            SortKey::CotStatus => "상태",
            SortKey::UpdatedAt => "수정일",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Advance an optional filter through `all` and back to "all records".
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let index = all.iter().position(|x| *x == value).unwrap_or(0);
            if index + 1 < all.len() {
                Some(all[index + 1])
            } else {
                None
            }
        }
    }
}

/// View state of the CoT listing.
///
/// Pure state plus update methods; rendering reads it, tests drive it
/// directly. Filtering, sorting, and pagination are re-derived from the
/// full collections on every render via [`ListViewState::filtered`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewState {
    pub filters: ListFilters,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub page: PageRequest,
    /// Row cursor within the visible page
    pub cursor: usize,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::from_query("")
    }

    /// Seed the view from a filter query string (absent keys mean "all")
    pub fn from_query(query: &str) -> Self {
        ListViewState {
            filters: ListFilters::from_query_string(query),
            sort_key: SortKey::UpdatedAt,
            sort_direction: SortDirection::Descending,
            page: PageRequest::new(),
            cursor: 0,
        }
    }

    /// The query string mirroring the active filters
    pub fn query_string(&self) -> String {
        self.filters.to_query_string()
    }

    fn after_filter_change(&mut self) {
        self.page.page = 1;
        self.cursor = 0;
    }

    pub fn cycle_product_category(&mut self) {
        self.filters.product_category =
            cycle_option(self.filters.product_category, &ProductCategory::ALL);
        self.after_filter_change();
    }

    pub fn cycle_question_type(&mut self) {
        self.filters.question_type = cycle_option(self.filters.question_type, &QuestionType::ALL);
        self.after_filter_change();
    }

    pub fn cycle_gender(&mut self) {
        self.filters.gender = cycle_option(self.filters.gender, &Gender::ALL);
        self.after_filter_change();
    }

    pub fn cycle_age_band(&mut self) {
        self.filters.age_band = cycle_option(self.filters.age_band, &AgeBand::ALL);
        self.after_filter_change();
    }

    pub fn clear_filters(&mut self) {
        self.filters = ListFilters::default();
        self.after_filter_change();
    }

    /// Apply a sort column: the active column flips direction, a different
    /// column becomes active ascending. Either way the page resets to 1.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
        self.page.page = 1;
        self.cursor = 0;
    }

    /// Advance the page size through 10 -> 20 -> 50 -> 10
    pub fn cycle_page_size(&mut self) {
        let index = PAGE_SIZES
            .iter()
            .position(|s| *s == self.page.size)
            .unwrap_or(0);
        self.page.size = PAGE_SIZES[(index + 1) % PAGE_SIZES.len()];
        self.cursor = 0;
    }

    /// Move to the next page; no-op at the last page
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page.page < total_pages {
            self.page.page += 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// Move to the previous page; no-op at page 1
    pub fn previous_page(&mut self) -> bool {
        if self.page.page > 1 {
            self.page.page -= 1;
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// The filtered, sorted row set over the full collections
    pub fn filtered<'a>(
        &self,
        cots: &'a [CotRecord],
        questioners: &[Questioner],
    ) -> Vec<&'a CotRecord> {
        let mut rows: Vec<&CotRecord> = cots
            .iter()
            .filter(|c| self.filters.matches(c, questioners))
            .collect();
        rows.sort_by(|a, b| {
            let ordering = match self.sort_key {
                SortKey::ProductCategory => {
                    a.product_category.as_str().cmp(b.product_category.as_str())
                }
                SortKey::QuestionType => a.question_type.as_str().cmp(b.question_type.as_str()),
                SortKey::CotStatus => a.cot_status.as_str().cmp(b.cot_status.as_str()),
                SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }

    pub fn page_meta(&self, filtered_len: usize) -> PageMeta {
        PageMeta::new(&self.page, filtered_len)
    }

    /// The window of the filtered rows on the current page
    pub fn visible<'a, 'b>(&self, filtered: &'b [&'a CotRecord]) -> &'b [&'a CotRecord] {
        page_slice(filtered, &self.page)
    }

    /// Record id under the row cursor, if any row is visible
    pub fn selected_id(&self, visible: &[&CotRecord]) -> Option<String> {
        if visible.is_empty() {
            return None;
        }
        let index = self.cursor.min(visible.len() - 1);
        Some(visible[index].id.clone())
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, visible_len: usize) {
        if visible_len > 0 && self.cursor + 1 < visible_len {
            self.cursor += 1;
        }
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use cotdesk_core::CotStatus;
    use cotdesk_records::dataset;
    use pretty_assertions::assert_eq;

    fn fixtures() -> (Vec<CotRecord>, Vec<Questioner>) {
        (dataset::cot_records(), dataset::questioners())
    }

    /// `count` records with distinct update timestamps, for pagination math
    fn synthetic_cots(count: usize) -> Vec<CotRecord> {
        let template = dataset::cot_records().remove(0);
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                let mut cot = template.clone();
                cot.id = format!("syn{}", i);
                cot.updated_at = base + Duration::minutes(i as i64);
                cot
            })
            .collect()
    }

    #[test]
    fn test_filters_are_sound_and_complete() {
        let (cots, questioners) = fixtures();
        let category_options = [None, Some(ProductCategory::Securities)];
        let gender_options = [None, Some(Gender::Female)];
        let band_options = [None, Some(AgeBand::Age40)];

        for category in category_options {
            for gender in gender_options {
                for age_band in band_options {
                    let mut view = ListViewState::new();
                    view.filters = ListFilters {
                        product_category: category,
                        question_type: None,
                        gender,
                        age_band,
                    };

                    let rows = view.filtered(&cots, &questioners);
                    // Soundness: every row satisfies all active predicates.
                    for row in &rows {
                        assert!(view.filters.matches(row, &questioners));
                    }
                    // Completeness: nothing that matches was left out.
                    let expected = cots
                        .iter()
                        .filter(|c| view.filters.matches(c, &questioners))
                        .count();
                    assert_eq!(rows.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_default_sort_is_updated_at_descending() {
        let (cots, questioners) = fixtures();
        let view = ListViewState::new();
        assert_eq!(view.sort_key, SortKey::UpdatedAt);
        assert_eq!(view.sort_direction, SortDirection::Descending);

        let rows = view.filtered(&cots, &questioners);
        for pair in rows.windows(2) {
            assert!(pair[0].updated_at >= pair[1].updated_at);
        }
    }

    #[test]
    fn test_sort_toggle_reverses_and_is_idempotent() {
        let (cots, questioners) = fixtures();
        let mut view = ListViewState::new();
        view.sort_by(SortKey::UpdatedAt); // was active desc -> now asc

        let ascending: Vec<_> = view
            .filtered(&cots, &questioners)
            .iter()
            .map(|c| c.id.clone())
            .collect();

        // Re-applying without change is idempotent.
        let again: Vec<_> = view
            .filtered(&cots, &questioners)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ascending, again);

        // Toggling reverses (timestamps in the dataset are distinct).
        view.sort_by(SortKey::UpdatedAt);
        let descending: Vec<_> = view
            .filtered(&cots, &questioners)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_sorting_a_new_column_resets_to_ascending() {
        let mut view = ListViewState::new();
        view.sort_by(SortKey::UpdatedAt);
        assert_eq!(view.sort_direction, SortDirection::Ascending);

        view.sort_by(SortKey::CotStatus);
        assert_eq!(view.sort_key, SortKey::CotStatus);
        assert_eq!(view.sort_direction, SortDirection::Ascending);

        view.sort_by(SortKey::CotStatus);
        assert_eq!(view.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_orders_by_wire_value() {
        let (cots, questioners) = fixtures();
        let mut view = ListViewState::new();
        view.sort_by(SortKey::CotStatus); // ascending

        let rows = view.filtered(&cots, &questioners);
        for pair in rows.windows(2) {
            assert!(pair[0].cot_status.as_str() <= pair[1].cot_status.as_str());
        }
        // APPROVED sorts before DRAFT as a plain string comparison.
        assert_eq!(rows.first().unwrap().cot_status, CotStatus::Approved);
    }

    #[test]
    fn test_pagination_of_45_records_at_size_20() {
        let cots = synthetic_cots(45);
        let questioners = dataset::questioners();
        let view = ListViewState::new();

        let rows = view.filtered(&cots, &questioners);
        let meta = view.page_meta(rows.len());
        assert_eq!(meta.total_pages, 3);

        let mut view = view;
        view.next_page(meta.total_pages);
        view.next_page(meta.total_pages);
        assert_eq!(view.page.page, 3);
        assert_eq!(view.visible(&rows).len(), 5);

        // Bounded at the last page.
        assert!(!view.next_page(meta.total_pages));
        assert_eq!(view.page.page, 3);
    }

    #[test]
    fn test_previous_page_is_bounded_at_one() {
        let mut view = ListViewState::new();
        assert!(!view.previous_page());
        assert_eq!(view.page.page, 1);

        view.next_page(3);
        assert!(view.previous_page());
        assert_eq!(view.page.page, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = ListViewState::new();
        view.next_page(5);
        view.next_page(5);
        assert_eq!(view.page.page, 3);

        view.cycle_product_category();
        assert_eq!(view.page.page, 1);

        view.next_page(5);
        view.cycle_age_band();
        assert_eq!(view.page.page, 1);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut view = ListViewState::new();
        view.next_page(5);
        view.sort_by(SortKey::QuestionType);
        assert_eq!(view.page.page, 1);
    }

    #[test]
    fn test_page_size_change_keeps_page_in_bounds() {
        let cots = synthetic_cots(45);
        let questioners = dataset::questioners();
        let mut view = ListViewState::new();
        view.next_page(3);
        view.next_page(3);

        // 20 -> 50: one page total; the clamped window still renders rows.
        view.cycle_page_size();
        assert_eq!(view.page.size, 50);
        let rows = view.filtered(&cots, &questioners);
        assert_eq!(view.page_meta(rows.len()).page, 1);
        assert_eq!(view.visible(&rows).len(), 45);
    }

    #[test]
    fn test_cycle_page_size_walks_the_fixed_set() {
        let mut view = ListViewState::new();
        assert_eq!(view.page.size, 20);
        view.cycle_page_size();
        assert_eq!(view.page.size, 50);
        view.cycle_page_size();
        assert_eq!(view.page.size, 10);
        view.cycle_page_size();
        assert_eq!(view.page.size, 20);
    }

    #[test]
    fn test_query_seeding_and_mirroring() {
        let view = ListViewState::from_query("product_category=SECURITIES&gender=MALE");
        assert_eq!(
            view.filters.product_category,
            Some(ProductCategory::Securities)
        );
        assert_eq!(view.filters.gender, Some(Gender::Male));
        assert_eq!(view.query_string(), "product_category=SECURITIES&gender=MALE");

        let mut view = view;
        view.cycle_gender(); // MALE -> FEMALE
        assert_eq!(
            view.query_string(),
            "product_category=SECURITIES&gender=FEMALE"
        );
        view.cycle_gender(); // FEMALE -> all; key disappears
        assert_eq!(view.query_string(), "product_category=SECURITIES");
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut view = ListViewState::new();
        view.cycle_product_category();
        assert_eq!(
            view.filters.product_category,
            Some(ProductCategory::Securities)
        );
        view.cycle_product_category();
        assert_eq!(
            view.filters.product_category,
            Some(ProductCategory::Insurance)
        );
        view.cycle_product_category();
        assert_eq!(view.filters.product_category, None);
    }

    #[test]
    fn test_cursor_and_selection() {
        let (cots, questioners) = fixtures();
        let view = ListViewState::new();
        let rows = view.filtered(&cots, &questioners);
        let visible = view.visible(&rows);

        let mut view = view.clone();
        assert_eq!(view.selected_id(visible).as_deref(), Some(visible[0].id.as_str()));

        view.cursor_down(visible.len());
        assert_eq!(view.cursor, 1);
        view.cursor_up();
        view.cursor_up(); // bounded at 0
        assert_eq!(view.cursor, 0);

        assert_eq!(view.selected_id(&[]), None);
    }

    #[test]
    fn test_rows_with_missing_questioner_are_excluded_under_questioner_filters() {
        let (mut cots, questioners) = fixtures();
        cots[0].questioner_id = "gone".to_string();
        let orphan_id = cots[0].id.clone();

        let mut view = ListViewState::new();
        // No questioner filter: the orphan row is present.
        assert!(view
            .filtered(&cots, &questioners)
            .iter()
            .any(|c| c.id == orphan_id));

        view.filters.gender = Some(Gender::Male);
        assert!(!view
            .filtered(&cots, &questioners)
            .iter()
            .any(|c| c.id == orphan_id));
    }
}
