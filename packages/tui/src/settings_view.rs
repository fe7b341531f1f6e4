use cotdesk_core::{AgeBand, Gender, Product, ProductCategory, ProductType, Questioner};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Submenu entries of the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum SettingsMenu {
    Basic,
    Questioners,
    Products,
}

impl SettingsMenu {
    pub fn label(self) -> &'static str {
        match self {
            SettingsMenu::Basic => "기본 설정",
            SettingsMenu::Questioners => "질문자 리스트",
            SettingsMenu::Products => "상품 리스트",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SettingsMenu::Basic => SettingsMenu::Questioners,
            SettingsMenu::Questioners => SettingsMenu::Products,
            SettingsMenu::Products => SettingsMenu::Basic,
        }
    }
}

/// Rows of the basic-settings pane, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BasicRow {
    AuthorName,
    QuestionerEditable,
    ProductEditable,
    FontSize,
    DarkMode,
}

impl BasicRow {
    pub const ALL: [BasicRow; 5] = [
        BasicRow::AuthorName,
        BasicRow::QuestionerEditable,
        BasicRow::ProductEditable,
        BasicRow::FontSize,
        BasicRow::DarkMode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BasicRow::AuthorName => "작성자 이름",
            BasicRow::QuestionerEditable => "질문자 수정가능여부",
            BasicRow::ProductEditable => "상품 수정가능여부",
            BasicRow::FontSize => "글꼴 크기",
            BasicRow::DarkMode => "다크 모드",
        }
    }
}

/// Filters over the read-only reference listings. One shared state serves
/// both listings, as in the original settings screen: category applies to
/// both, gender/age-band to questioners, type to products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceFilters {
    pub product_category: Option<ProductCategory>,
    pub gender: Option<Gender>,
    pub age_band: Option<AgeBand>,
    pub product_type: Option<ProductType>,
}

impl ReferenceFilters {
    pub fn matches_questioner(&self, questioner: &Questioner) -> bool {
        if let Some(category) = self.product_category {
            if questioner.product_category != category {
                return false;
            }
        }
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
        true
    }

    pub fn matches_product(&self, product: &Product) -> bool {
        if let Some(category) = self.product_category {
            if product.product_category != category {
                return false;
            }
        }
        if let Some(product_type) = self.product_type {
            if product.product_type != product_type {
                return false;
            }
        }
        true
    }
}

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

/// View state of the settings screen
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsViewState {
    pub menu: SettingsMenu,
    /// Focused row in the basic-settings pane
    pub basic_cursor: usize,
    pub filters: ReferenceFilters,
    /// Row cursor in the active reference listing
    pub cursor: usize,
}

impl SettingsViewState {
    pub fn new() -> Self {
        SettingsViewState {
            menu: SettingsMenu::Basic,
            basic_cursor: 0,
            filters: ReferenceFilters::default(),
            cursor: 0,
        }
    }

    pub fn next_menu(&mut self) {
        self.menu = self.menu.next();
        self.cursor = 0;
    }

    pub fn current_basic_row(&self) -> BasicRow {
        BasicRow::ALL[self.basic_cursor.min(BasicRow::ALL.len() - 1)]
    }

    pub fn basic_cursor_up(&mut self) {
        self.basic_cursor = self.basic_cursor.saturating_sub(1);
    }

    pub fn basic_cursor_down(&mut self) {
        if self.basic_cursor + 1 < BasicRow::ALL.len() {
            self.basic_cursor += 1;
        }
    }

    pub fn cycle_category_filter(&mut self) {
        self.filters.product_category =
            cycle_option(self.filters.product_category, &ProductCategory::ALL);
        self.cursor = 0;
    }

    pub fn cycle_gender_filter(&mut self) {
        self.filters.gender = cycle_option(self.filters.gender, &Gender::ALL);
        self.cursor = 0;
    }

    pub fn cycle_age_band_filter(&mut self) {
        self.filters.age_band = cycle_option(self.filters.age_band, &AgeBand::ALL);
        self.cursor = 0;
    }

    pub fn cycle_product_type_filter(&mut self) {
        self.filters.product_type = cycle_option(self.filters.product_type, &ProductType::ALL);
        self.cursor = 0;
    }

    pub fn filtered_questioners<'a>(&self, questioners: &'a [Questioner]) -> Vec<&'a Questioner> {
        questioners
            .iter()
            .filter(|q| self.filters.matches_questioner(q))
            .collect()
    }

    pub fn filtered_products<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.filters.matches_product(p))
            .collect()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Id of the listing row under the cursor
    pub fn selected_questioner_id(&self, questioners: &[Questioner]) -> Option<String> {
        let filtered = self.filtered_questioners(questioners);
        filtered
            .get(self.cursor.min(filtered.len().saturating_sub(1)))
            .map(|q| q.id.clone())
    }

    pub fn selected_product_id(&self, products: &[Product]) -> Option<String> {
        let filtered = self.filtered_products(products);
        filtered
            .get(self.cursor.min(filtered.len().saturating_sub(1)))
            .map(|p| p.id.clone())
    }
}

impl Default for SettingsViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotdesk_records::dataset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_cycles_through_all_panes() {
        let mut view = SettingsViewState::new();
        assert_eq!(view.menu, SettingsMenu::Basic);
        view.next_menu();
        assert_eq!(view.menu, SettingsMenu::Questioners);
        view.next_menu();
        assert_eq!(view.menu, SettingsMenu::Products);
        view.next_menu();
        assert_eq!(view.menu, SettingsMenu::Basic);
    }

    #[test]
    fn test_questioner_listing_filters_compose() {
        let questioners = dataset::questioners();
        let mut view = SettingsViewState::new();

        assert_eq!(view.filtered_questioners(&questioners).len(), questioners.len());

        view.filters.product_category = Some(ProductCategory::Insurance);
        view.filters.gender = Some(Gender::Female);
        let filtered = view.filtered_questioners(&questioners);
        assert!(!filtered.is_empty());
        for q in &filtered {
            assert_eq!(q.product_category, ProductCategory::Insurance);
            assert_eq!(q.gender, Gender::Female);
        }
    }

    #[test]
    fn test_product_listing_filters_compose() {
        let products = dataset::products();
        let mut view = SettingsViewState::new();

        view.filters.product_category = Some(ProductCategory::Securities);
        let filtered = view.filtered_products(&products);
        assert_eq!(filtered.len(), 6);

        view.filters.product_type = Some(ProductType::Bond);
        let filtered = view.filtered_products(&products);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p2");

        // A type that contradicts the category filter yields nothing.
        view.filters.product_type = Some(ProductType::Cancer);
        assert!(view.filtered_products(&products).is_empty());
    }

    #[test]
    fn test_filter_change_resets_listing_cursor() {
        let mut view = SettingsViewState::new();
        view.cursor_down(10);
        view.cursor_down(10);
        assert_eq!(view.cursor, 2);

        view.cycle_gender_filter();
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_row_selection_resolves_ids() {
        let questioners = dataset::questioners();
        let products = dataset::products();
        let mut view = SettingsViewState::new();

        assert_eq!(view.selected_questioner_id(&questioners).as_deref(), Some("q1"));
        view.cursor_down(questioners.len());
        assert_eq!(view.selected_questioner_id(&questioners).as_deref(), Some("q2"));

        view.cursor = 0;
        view.filters.product_category = Some(ProductCategory::Insurance);
        assert_eq!(view.selected_product_id(&products).as_deref(), Some("p7"));

        assert_eq!(view.selected_questioner_id(&[]), None);
    }

    #[test]
    fn test_basic_rows_navigation_is_bounded() {
        let mut view = SettingsViewState::new();
        assert_eq!(view.current_basic_row(), BasicRow::AuthorName);
        view.basic_cursor_up();
        assert_eq!(view.basic_cursor, 0);

        for _ in 0..10 {
            view.basic_cursor_down();
        }
        assert_eq!(view.current_basic_row(), BasicRow::DarkMode);
    }
}
