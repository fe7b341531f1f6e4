use std::time::Instant;

use chrono::Utc;
use cotdesk_core::{generate_record_id, CotRecord, CotStatus, ProductCategory, QuestionType};
use cotdesk_records::DatasetStore;
use cotdesk_settings::Preferences;
use tracing::debug;

use crate::detail_view::DetailViewState;
use crate::list_view::ListViewState;
use crate::settings_view::SettingsViewState;
use crate::ui::widgets::{ConfirmationDialog, DialogResult};

/// The screens of the workbench
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    CotList,
    CotDetail,
    Settings,
    /// Read-only detail opened from the settings questioner listing
    QuestionerDetail,
    /// Read-only detail opened from the settings product listing
    ProductDetail,
}

/// Application state: the store, one state struct per screen, and the
/// session preferences. All transitions are synchronous methods; the only
/// time-based behavior is forwarded through [`AppState::on_tick`].
pub struct AppState {
    pub store: DatasetStore,
    pub screen: Screen,
    pub list: ListViewState,
    pub detail: Option<DetailViewState>,
    pub settings: SettingsViewState,
    pub preferences: Preferences,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    /// Id shown on the read-only questioner/product detail screens
    pub reference_id: Option<String>,
    /// Live mirror of the list filters as a query string
    pub query_mirror: String,
}

impl AppState {
    pub fn new(store: DatasetStore, initial_query: &str) -> Self {
        let list = ListViewState::from_query(initial_query);
        let query_mirror = list.query_string();
        AppState {
            store,
            screen: Screen::CotList,
            list,
            detail: None,
            settings: SettingsViewState::new(),
            preferences: Preferences::default(),
            confirmation_dialog: None,
            reference_id: None,
            query_mirror,
        }
    }

    /// Refresh the query mirror after any list filter change
    pub fn sync_query_mirror(&mut self) {
        self.query_mirror = self.list.query_string();
    }

    /// Open the detail editor for a record id
    pub fn open_detail(&mut self, id: &str) {
        debug!(id, "opening CoT detail");
        self.detail = Some(DetailViewState::load(&self.store, id));
        self.screen = Screen::CotDetail;
    }

    /// Open the editor on a freshly drafted record. The record reaches the
    /// store only through a successful save.
    pub fn create_cot(&mut self) {
        let now = Utc::now();
        let record = CotRecord {
            id: generate_record_id(),
            questioner_id: String::new(),
            product_ids: Vec::new(),
            product_category: ProductCategory::Securities,
            question_type: QuestionType::CustomerCharacteristics,
            question_text: String::new(),
            cot_steps: Vec::new(),
            answer_text: String::new(),
            cot_status: CotStatus::default(),
            created_at: now,
            updated_at: now,
        };
        debug!(id = %record.id, "drafting new CoT record");
        self.detail = Some(DetailViewState::new_record(record));
        self.screen = Screen::CotDetail;
    }

    /// Ask to leave the detail screen. A dirty draft prompts a blocking
    /// confirmation; a clean one leaves immediately.
    pub fn request_leave_detail(&mut self) {
        let dirty = self.detail.as_ref().map(|d| d.is_dirty()).unwrap_or(false);
        if dirty {
            self.confirmation_dialog = Some(
                ConfirmationDialog::new(
                    "변경사항 확인",
                    "변경사항을 저장하지 않고 나가시겠습니까?",
                )
                .dangerous()
                .with_buttons("나가기", "취소"),
            );
        } else {
            self.close_detail();
        }
    }

    /// Discard the draft and return to the list
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::CotList;
    }

    /// Apply a dialog outcome: confirm discards the draft and navigates,
    /// cancel leaves view and draft untouched.
    pub fn resolve_leave_dialog(&mut self, result: DialogResult) {
        match result {
            DialogResult::Confirmed => {
                self.confirmation_dialog = None;
                self.close_detail();
            }
            DialogResult::Cancelled => {
                self.confirmation_dialog = None;
            }
            DialogResult::Pending => {}
        }
    }

    pub fn open_settings(&mut self) {
        self.screen = Screen::Settings;
    }

    pub fn open_questioner_detail(&mut self, id: &str) {
        self.reference_id = Some(id.to_string());
        self.screen = Screen::QuestionerDetail;
    }

    pub fn open_product_detail(&mut self, id: &str) {
        self.reference_id = Some(id.to_string());
        self.screen = Screen::ProductDetail;
    }

    pub fn back_to_settings(&mut self) {
        self.reference_id = None;
        self.screen = Screen::Settings;
    }

    /// Periodic tick; drives the save-banner dismissal of an open detail
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(detail) = &mut self.detail {
            detail.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail_view::SAVE_BANNER_DURATION;
    use pretty_assertions::assert_eq;

    fn app() -> AppState {
        AppState::new(DatasetStore::with_mock_data(), "")
    }

    #[test]
    fn test_initial_query_seeds_list_and_mirror() {
        let state = AppState::new(
            DatasetStore::with_mock_data(),
            "product_category=INSURANCE&age_band=AGE_40",
        );
        assert_eq!(
            state.query_mirror,
            "product_category=INSURANCE&age_band=AGE_40"
        );
        assert!(state.list.filters.product_category.is_some());
    }

    #[test]
    fn test_open_detail_switches_screen() {
        let mut state = app();
        state.open_detail("cot1");
        assert_eq!(state.screen, Screen::CotDetail);
        assert!(state.detail.as_ref().unwrap().is_found());
    }

    #[test]
    fn test_leaving_clean_detail_needs_no_confirmation() {
        let mut state = app();
        state.open_detail("cot1");
        state.request_leave_detail();
        assert!(state.confirmation_dialog.is_none());
        assert_eq!(state.screen, Screen::CotList);
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_leaving_dirty_detail_prompts() {
        let mut state = app();
        state.open_detail("cot1");
        state.detail.as_mut().unwrap().set_question_text("바뀜");

        state.request_leave_detail();
        assert!(state.confirmation_dialog.is_some());
        // Still on the detail screen until the dialog resolves.
        assert_eq!(state.screen, Screen::CotDetail);
    }

    #[test]
    fn test_confirming_discards_the_draft() {
        let mut state = app();
        state.open_detail("cot1");
        state.detail.as_mut().unwrap().set_question_text("버려질 수정");
        state.request_leave_detail();

        state.resolve_leave_dialog(DialogResult::Confirmed);
        assert_eq!(state.screen, Screen::CotList);
        assert!(state.detail.is_none());
        // The store never saw the edit.
        assert_ne!(state.store.get_cot("cot1").unwrap().question_text, "버려질 수정");
    }

    #[test]
    fn test_declining_keeps_view_and_draft() {
        let mut state = app();
        state.open_detail("cot1");
        state.detail.as_mut().unwrap().set_question_text("계속 편집");
        state.request_leave_detail();

        state.resolve_leave_dialog(DialogResult::Cancelled);
        assert_eq!(state.screen, Screen::CotDetail);
        assert_eq!(
            state.detail.as_ref().unwrap().draft().unwrap().question_text,
            "계속 편집"
        );
        assert!(state.detail.as_ref().unwrap().is_dirty());
    }

    #[test]
    fn test_tick_is_forwarded_to_the_detail_banner() {
        let mut state = app();
        state.open_detail("cot1");
        let t0 = Instant::now();
        state
            .detail
            .as_mut()
            .unwrap()
            .save(&mut state.store, t0)
            .unwrap();
        assert!(state.detail.as_ref().unwrap().banner_visible());

        state.on_tick(t0 + SAVE_BANNER_DURATION);
        assert!(!state.detail.as_ref().unwrap().banner_visible());
    }

    #[test]
    fn test_created_record_reaches_store_only_on_save() {
        let mut state = app();
        let count = state.store.list_cots().len();
        state.create_cot();
        assert_eq!(state.screen, Screen::CotDetail);

        let id = state.detail.as_ref().unwrap().record_id().to_string();
        assert!(state.store.get_cot(&id).is_none());

        // An empty question blocks the first save.
        let detail = state.detail.as_mut().unwrap();
        assert!(detail.save(&mut state.store, Instant::now()).is_err());
        assert_eq!(state.store.list_cots().len(), count);

        let detail = state.detail.as_mut().unwrap();
        detail.set_question_text("새로 작성한 질문");
        detail.save(&mut state.store, Instant::now()).unwrap();
        assert_eq!(state.store.list_cots().len(), count + 1);
        assert!(state.store.get_cot(&id).is_some());
    }

    #[test]
    fn test_reference_detail_navigation() {
        let mut state = app();
        state.open_settings();
        state.open_questioner_detail("q2");
        assert_eq!(state.screen, Screen::QuestionerDetail);
        assert_eq!(state.reference_id.as_deref(), Some("q2"));

        state.back_to_settings();
        assert_eq!(state.screen, Screen::Settings);
        assert!(state.reference_id.is_none());
    }
}
