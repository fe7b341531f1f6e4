use std::time::{Duration, Instant};

use cotdesk_core::{CotRecord, CotStatus, ProductCategory, QuestionType, SaveError};
use cotdesk_records::DatasetStore;

/// How long the save-success banner stays up
pub const SAVE_BANNER_DURATION: Duration = Duration::from_secs(3);

/// A pending success-banner dismissal, keyed by save-attempt identity.
///
/// Each save replaces the banner wholesale and bumps the attempt, so the
/// deadline of an earlier save can never dismiss a newer banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveBanner {
    pub attempt: u64,
    pub expires_at: Instant,
}

/// The three panels of the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPanel {
    Questioners,
    Editor,
    Products,
}

impl DetailPanel {
    pub fn next(self) -> Self {
        match self {
            DetailPanel::Questioners => DetailPanel::Editor,
            DetailPanel::Editor => DetailPanel::Products,
            DetailPanel::Products => DetailPanel::Questioners,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DetailPanel::Questioners => DetailPanel::Products,
            DetailPanel::Editor => DetailPanel::Questioners,
            DetailPanel::Products => DetailPanel::Editor,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DetailPanel::Questioners => "질문자 선택",
            DetailPanel::Editor => "CoT 편집",
            DetailPanel::Products => "상품 선택",
        }
    }
}

/// Fields of the editor form, in display order. The step rows expand and
/// contract with the draft's reasoning steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    ProductCategory,
    QuestionType,
    QuestionText,
    Step(usize),
    AnswerText,
    CotStatus,
}

impl EditorField {
    pub fn is_text(self) -> bool {
        matches!(
            self,
            EditorField::QuestionText | EditorField::AnswerText | EditorField::Step(_)
        )
    }
}

/// View state of the detail screen; exclusive owner of the draft.
///
/// The original record stays untouched until a save succeeds; dirty state
/// is structural inequality between draft and original, so reverting a
/// field through the same edit path clears the flag exactly.
#[derive(Debug, Clone)]
pub struct DetailViewState {
    record_id: String,
    original: Option<CotRecord>,
    draft: Option<CotRecord>,
    pub panel: DetailPanel,
    pub field_index: usize,
    pub questioner_cursor: usize,
    pub product_cursor: usize,
    save_attempts: u64,
    save_banner: Option<SaveBanner>,
    last_error: Option<SaveError>,
}

impl DetailViewState {
    /// Load the record with `id` from the store. An unknown id yields the
    /// not-found state: no draft, and every edit operation is inert.
    pub fn load(store: &DatasetStore, id: &str) -> Self {
        let original = store.get_cot(id).cloned();
        DetailViewState {
            record_id: id.to_string(),
            draft: original.clone(),
            original,
            panel: DetailPanel::Editor,
            field_index: 0,
            questioner_cursor: 0,
            product_cursor: 0,
            save_attempts: 0,
            save_banner: None,
            last_error: None,
        }
    }

    /// Start editing a freshly drafted record that is not in the store yet.
    /// It reaches the store only through a successful save.
    pub fn new_record(record: CotRecord) -> Self {
        DetailViewState {
            record_id: record.id.clone(),
            draft: Some(record.clone()),
            original: Some(record),
            panel: DetailPanel::Editor,
            field_index: 0,
            questioner_cursor: 0,
            product_cursor: 0,
            save_attempts: 0,
            save_banner: None,
            last_error: None,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn is_found(&self) -> bool {
        self.original.is_some()
    }

    pub fn draft(&self) -> Option<&CotRecord> {
        self.draft.as_ref()
    }

    /// Whether the draft differs structurally from the loaded record
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn last_error(&self) -> Option<&SaveError> {
        self.last_error.as_ref()
    }

    pub fn save_attempts(&self) -> u64 {
        self.save_attempts
    }

    pub fn banner_visible(&self) -> bool {
        self.save_banner.is_some()
    }

    pub fn save_banner(&self) -> Option<SaveBanner> {
        self.save_banner
    }

    // ----- editor form geometry -----

    /// Number of addressable form fields (five fixed plus one per step)
    pub fn field_count(&self) -> usize {
        match &self.draft {
            Some(draft) => 5 + draft.cot_steps.len(),
            None => 0,
        }
    }

    pub fn field_at(&self, index: usize) -> Option<EditorField> {
        let steps = self.draft.as_ref()?.cot_steps.len();
        match index {
            0 => Some(EditorField::ProductCategory),
            1 => Some(EditorField::QuestionType),
            2 => Some(EditorField::QuestionText),
            i if i < 3 + steps => Some(EditorField::Step(i - 3)),
            i if i == 3 + steps => Some(EditorField::AnswerText),
            i if i == 4 + steps => Some(EditorField::CotStatus),
            _ => None,
        }
    }

    pub fn current_field(&self) -> Option<EditorField> {
        self.field_at(self.field_index)
    }

    pub fn next_field(&mut self) {
        if self.field_index + 1 < self.field_count() {
            self.field_index += 1;
        }
    }

    pub fn previous_field(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    /// Text of the focused field, when it is a text field
    pub fn current_text(&self) -> Option<&str> {
        let draft = self.draft.as_ref()?;
        match self.current_field()? {
            EditorField::QuestionText => Some(&draft.question_text),
            EditorField::AnswerText => Some(&draft.answer_text),
            EditorField::Step(i) => draft.cot_steps.get(i).map(|s| s.as_str()),
            _ => None,
        }
    }

    /// Write `text` into the focused field, when it is a text field
    pub fn set_current_text(&mut self, text: &str) {
        let Some(field) = self.current_field() else {
            return;
        };
        match field {
            EditorField::QuestionText => self.set_question_text(text),
            EditorField::AnswerText => self.set_answer_text(text),
            EditorField::Step(i) => {
                self.set_step(i, text);
            }
            _ => {}
        }
    }

    // ----- draft edits -----

    pub fn set_question_text(&mut self, text: &str) {
        if let Some(draft) = &mut self.draft {
            draft.question_text = text.to_string();
        }
    }

    pub fn set_answer_text(&mut self, text: &str) {
        if let Some(draft) = &mut self.draft {
            draft.answer_text = text.to_string();
        }
    }

    pub fn cycle_product_category(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.product_category = match draft.product_category {
                ProductCategory::Securities => ProductCategory::Insurance,
                ProductCategory::Insurance => ProductCategory::Securities,
            };
        }
    }

    pub fn cycle_question_type(&mut self) {
        if let Some(draft) = &mut self.draft {
            let index = QuestionType::ALL
                .iter()
                .position(|qt| *qt == draft.question_type)
                .unwrap_or(0);
            draft.question_type = QuestionType::ALL[(index + 1) % QuestionType::ALL.len()];
        }
    }

    pub fn cycle_status(&mut self) {
        if let Some(draft) = &mut self.draft {
            let index = CotStatus::ALL
                .iter()
                .position(|st| *st == draft.cot_status)
                .unwrap_or(0);
            draft.cot_status = CotStatus::ALL[(index + 1) % CotStatus::ALL.len()];
        }
    }

    /// Append a new empty reasoning step at the end
    pub fn add_step(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.cot_steps.push(String::new());
        }
    }

    /// Remove the step at `index`, shifting subsequent steps left
    pub fn remove_step(&mut self, index: usize) -> bool {
        let Some(draft) = &mut self.draft else {
            return false;
        };
        if index >= draft.cot_steps.len() {
            return false;
        }
        draft.cot_steps.remove(index);
        // Keep the form cursor on an existing field.
        self.field_index = self.field_index.min(self.field_count().saturating_sub(1));
        true
    }

    /// Remove the last step, as the editor's delete control does
    pub fn remove_last_step(&mut self) -> bool {
        let len = match &self.draft {
            Some(draft) => draft.cot_steps.len(),
            None => 0,
        };
        len > 0 && self.remove_step(len - 1)
    }

    /// Edit the text of the step at `index` in place
    pub fn set_step(&mut self, index: usize, text: &str) -> bool {
        let Some(draft) = &mut self.draft else {
            return false;
        };
        match draft.cot_steps.get_mut(index) {
            Some(step) => {
                *step = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Attach a questioner, unconditionally replacing any prior selection
    pub fn select_questioner(&mut self, id: &str) {
        if let Some(draft) = &mut self.draft {
            draft.questioner_id = id.to_string();
        }
    }

    /// Toggle a product's membership: append if absent, remove if present.
    /// Insertion order of the remaining selections is preserved.
    pub fn toggle_product(&mut self, id: &str) {
        if let Some(draft) = &mut self.draft {
            if let Some(pos) = draft.product_ids.iter().position(|p| p == id) {
                draft.product_ids.remove(pos);
            } else {
                draft.product_ids.push(id.to_string());
            }
        }
    }

    // ----- save and banner timer -----

    /// Validate and save the draft through the store contract.
    ///
    /// On failure the draft is untouched and the single error is kept for
    /// inline display. On success the dirty flag clears (the draft becomes
    /// the new original) and the success banner is scheduled to dismiss
    /// `SAVE_BANNER_DURATION` after `now`.
    pub fn save(&mut self, store: &mut DatasetStore, now: Instant) -> Result<(), SaveError> {
        let Some(draft) = &self.draft else {
            return Ok(());
        };
        self.last_error = None;

        match store.save_cot(draft) {
            Ok(()) => {
                self.original = self.draft.clone();
                self.save_attempts += 1;
                self.save_banner = Some(SaveBanner {
                    attempt: self.save_attempts,
                    expires_at: now + SAVE_BANNER_DURATION,
                });
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Advance the banner timer; dismisses the banner once its own
    /// deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(banner) = self.save_banner {
            if now >= banner.expires_at {
                self.save_banner = None;
            }
        }
    }

    // ----- panel cursors -----

    pub fn focus_next_panel(&mut self) {
        self.panel = self.panel.next();
    }

    pub fn focus_previous_panel(&mut self) {
        self.panel = self.panel.previous();
    }

    pub fn questioner_cursor_up(&mut self) {
        self.questioner_cursor = self.questioner_cursor.saturating_sub(1);
    }

    pub fn questioner_cursor_down(&mut self, len: usize) {
        if len > 0 && self.questioner_cursor + 1 < len {
            self.questioner_cursor += 1;
        }
    }

    pub fn product_cursor_up(&mut self) {
        self.product_cursor = self.product_cursor.saturating_sub(1);
    }

    pub fn product_cursor_down(&mut self, len: usize) {
        if len > 0 && self.product_cursor + 1 < len {
            self.product_cursor += 1;
        }
    }
}
