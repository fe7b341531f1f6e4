use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Instant;
use tui_input::backend::crossterm::EventHandler as InputEventHandler;
use tui_input::Input;

use cotdesk_records::DatasetStore;

use crate::detail_view::{DetailPanel, EditorField};
use crate::events::{AppEvent, EventHandler};
use crate::list_view::SortKey;
use crate::settings_view::{BasicRow, SettingsMenu};
use crate::state::{AppState, Screen};
use crate::ui;

/// Main TUI application struct
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    tick_rate: u64,
    /// Editing buffer for the focused text field; synced from the draft on
    /// every focus change and written back on every keystroke.
    input: Input,
}

impl App {
    pub fn new(store: DatasetStore, initial_query: &str, tick_rate: u64) -> Self {
        Self {
            state: AppState::new(store, initial_query),
            should_quit: false,
            tick_rate,
            input: Input::default(),
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut event_handler = EventHandler::new(self.tick_rate);

        while !self.should_quit {
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
            })?;

            if let Some(event) = event_handler.next().await {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Tick => self.state.on_tick(Instant::now()),
                }
            }
        }

        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Route one key press through the dialog, then the active screen
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // A confirmation dialog blocks everything else.
        if let Some(dialog) = &mut self.state.confirmation_dialog {
            let result = dialog.handle_key(key.code);
            self.state.resolve_leave_dialog(result);
            return;
        }

        match self.state.screen {
            Screen::CotList => self.handle_list_key(key),
            Screen::CotDetail => self.handle_detail_key(key),
            Screen::Settings => self.handle_settings_key(key),
            Screen::QuestionerDetail | Screen::ProductDetail => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.state.back_to_settings();
                }
            }
        }
    }

    // ----- CoT list -----

    fn visible_list_len(&self) -> usize {
        let rows = self
            .state
            .list
            .filtered(self.state.store.list_cots(), self.state.store.list_questioners());
        self.state.list.visible(&rows).len()
    }

    fn list_total_pages(&self) -> usize {
        let rows = self
            .state
            .list
            .filtered(self.state.store.list_cots(), self.state.store.list_questioners());
        self.state.list.page_meta(rows.len()).total_pages
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('s') => {
                self.state.open_settings();
                self.sync_settings_input();
            }
            KeyCode::Char('c') => {
                self.state.list.cycle_product_category();
                self.state.sync_query_mirror();
            }
            KeyCode::Char('t') => {
                self.state.list.cycle_question_type();
                self.state.sync_query_mirror();
            }
            KeyCode::Char('g') => {
                self.state.list.cycle_gender();
                self.state.sync_query_mirror();
            }
            KeyCode::Char('a') => {
                self.state.list.cycle_age_band();
                self.state.sync_query_mirror();
            }
            KeyCode::Char('x') => {
                self.state.list.clear_filters();
                self.state.sync_query_mirror();
            }
            KeyCode::Char('n') => {
                self.state.create_cot();
                self.sync_detail_input();
            }
            KeyCode::Char('z') => self.state.list.cycle_page_size(),
            KeyCode::Char('1') => self.state.list.sort_by(SortKey::ProductCategory),
            KeyCode::Char('2') => self.state.list.sort_by(SortKey::QuestionType),
            KeyCode::Char('3') => self.state.list.sort_by(SortKey::CotStatus),
            KeyCode::Char('4') => self.state.list.sort_by(SortKey::UpdatedAt),
            KeyCode::Up => self.state.list.cursor_up(),
            KeyCode::Down => {
                let len = self.visible_list_len();
                self.state.list.cursor_down(len);
            }
            KeyCode::Left => {
                self.state.list.previous_page();
            }
            KeyCode::Right => {
                let total = self.list_total_pages();
                self.state.list.next_page(total);
            }
            KeyCode::Enter => {
                let selected = {
                    let rows = self.state.list.filtered(
                        self.state.store.list_cots(),
                        self.state.store.list_questioners(),
                    );
                    let visible = self.state.list.visible(&rows);
                    self.state.list.selected_id(visible)
                };
                if let Some(id) = selected {
                    self.state.open_detail(&id);
                    self.sync_detail_input();
                }
            }
            _ => {}
        }
    }

    // ----- CoT detail -----

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    let now = Instant::now();
                    if let Some(detail) = &mut self.state.detail {
                        let _ = detail.save(&mut self.state.store, now);
                    }
                }
                KeyCode::Char('n') => {
                    if let Some(detail) = &mut self.state.detail {
                        detail.add_step();
                    }
                    self.sync_detail_input();
                }
                KeyCode::Char('d') => {
                    if let Some(detail) = &mut self.state.detail {
                        match detail.current_field() {
                            Some(EditorField::Step(i)) => {
                                detail.remove_step(i);
                            }
                            _ => {
                                detail.remove_last_step();
                            }
                        }
                    }
                    self.sync_detail_input();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.request_leave_detail(),
            KeyCode::Tab => {
                if let Some(detail) = &mut self.state.detail {
                    detail.focus_next_panel();
                }
                self.sync_detail_input();
            }
            KeyCode::BackTab => {
                if let Some(detail) = &mut self.state.detail {
                    detail.focus_previous_panel();
                }
                self.sync_detail_input();
            }
            _ => {
                let panel = match &self.state.detail {
                    Some(detail) => detail.panel,
                    None => return,
                };
                match panel {
                    DetailPanel::Questioners => self.handle_questioner_panel_key(key),
                    DetailPanel::Editor => self.handle_editor_key(key),
                    DetailPanel::Products => self.handle_product_panel_key(key),
                }
            }
        }
    }

    fn handle_questioner_panel_key(&mut self, key: KeyEvent) {
        let len = self.state.store.list_questioners().len();
        match key.code {
            KeyCode::Up => {
                if let Some(detail) = &mut self.state.detail {
                    detail.questioner_cursor_up();
                }
            }
            KeyCode::Down => {
                if let Some(detail) = &mut self.state.detail {
                    detail.questioner_cursor_down(len);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self
                    .state
                    .detail
                    .as_ref()
                    .and_then(|d| self.state.store.list_questioners().get(d.questioner_cursor))
                    .map(|q| q.id.clone());
                if let (Some(detail), Some(id)) = (&mut self.state.detail, id) {
                    detail.select_questioner(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_product_panel_key(&mut self, key: KeyEvent) {
        let len = self.state.store.list_products().len();
        match key.code {
            KeyCode::Up => {
                if let Some(detail) = &mut self.state.detail {
                    detail.product_cursor_up();
                }
            }
            KeyCode::Down => {
                if let Some(detail) = &mut self.state.detail {
                    detail.product_cursor_down(len);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self
                    .state
                    .detail
                    .as_ref()
                    .and_then(|d| self.state.store.list_products().get(d.product_cursor))
                    .map(|p| p.id.clone());
                if let (Some(detail), Some(id)) = (&mut self.state.detail, id) {
                    detail.toggle_product(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                if let Some(detail) = &mut self.state.detail {
                    detail.previous_field();
                }
                self.sync_detail_input();
            }
            KeyCode::Down | KeyCode::Enter => {
                if let Some(detail) = &mut self.state.detail {
                    detail.next_field();
                }
                self.sync_detail_input();
            }
            _ => {
                let field = self.state.detail.as_ref().and_then(|d| d.current_field());
                match field {
                    Some(field) if field.is_text() => self.handle_text_key(key),
                    Some(EditorField::ProductCategory) => {
                        if cycles(key.code) {
                            if let Some(detail) = &mut self.state.detail {
                                detail.cycle_product_category();
                            }
                        }
                    }
                    Some(EditorField::QuestionType) => {
                        if cycles(key.code) {
                            if let Some(detail) = &mut self.state.detail {
                                detail.cycle_question_type();
                            }
                        }
                    }
                    Some(EditorField::CotStatus) => {
                        if cycles(key.code) {
                            if let Some(detail) = &mut self.state.detail {
                                detail.cycle_status();
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Feed a key into the text buffer and write the result to the draft
    fn handle_text_key(&mut self, key: KeyEvent) {
        let event = CrosstermEvent::Key(key);
        if self.input.handle_event(&event).is_some() {
            let value = self.input.value().to_string();
            if let Some(detail) = &mut self.state.detail {
                detail.set_current_text(&value);
            }
        }
    }

    /// Reload the text buffer from the focused detail field
    fn sync_detail_input(&mut self) {
        let text = self.state.detail.as_ref().and_then(|d| {
            if d.panel == DetailPanel::Editor {
                d.current_text().map(|s| s.to_string())
            } else {
                None
            }
        });
        self.input = Input::new(text.unwrap_or_default());
    }

    // ----- settings -----

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.screen = Screen::CotList;
                return;
            }
            KeyCode::Tab => {
                self.state.settings.next_menu();
                self.sync_settings_input();
                return;
            }
            _ => {}
        }

        match self.state.settings.menu {
            SettingsMenu::Basic => self.handle_basic_settings_key(key),
            SettingsMenu::Questioners => self.handle_questioner_listing_key(key),
            SettingsMenu::Products => self.handle_product_listing_key(key),
        }
    }

    fn handle_basic_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.state.settings.basic_cursor_up();
                self.sync_settings_input();
            }
            KeyCode::Down => {
                self.state.settings.basic_cursor_down();
                self.sync_settings_input();
            }
            _ => match self.state.settings.current_basic_row() {
                BasicRow::AuthorName => {
                    let event = CrosstermEvent::Key(key);
                    if self.input.handle_event(&event).is_some() {
                        self.state.preferences.author_name = self.input.value().to_string();
                    }
                }
                BasicRow::QuestionerEditable => {
                    if toggles(key.code) {
                        self.state.preferences.toggle_questioner_editable();
                    }
                }
                BasicRow::ProductEditable => {
                    if toggles(key.code) {
                        self.state.preferences.toggle_product_editable();
                    }
                }
                BasicRow::FontSize => match key.code {
                    KeyCode::Left => self.state.preferences.adjust_font_size(-1),
                    KeyCode::Right => self.state.preferences.adjust_font_size(1),
                    _ => {}
                },
                BasicRow::DarkMode => {
                    if toggles(key.code) {
                        self.state.preferences.toggle_dark_mode();
                    }
                }
            },
        }
    }

    fn handle_questioner_listing_key(&mut self, key: KeyEvent) {
        let len = self
            .state
            .settings
            .filtered_questioners(self.state.store.list_questioners())
            .len();
        match key.code {
            KeyCode::Up => self.state.settings.cursor_up(),
            KeyCode::Down => self.state.settings.cursor_down(len),
            KeyCode::Char('c') => self.state.settings.cycle_category_filter(),
            KeyCode::Char('g') => self.state.settings.cycle_gender_filter(),
            KeyCode::Char('a') => self.state.settings.cycle_age_band_filter(),
            KeyCode::Enter => {
                let id = self
                    .state
                    .settings
                    .selected_questioner_id(self.state.store.list_questioners());
                if let Some(id) = id {
                    self.state.open_questioner_detail(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_product_listing_key(&mut self, key: KeyEvent) {
        let len = self
            .state
            .settings
            .filtered_products(self.state.store.list_products())
            .len();
        match key.code {
            KeyCode::Up => self.state.settings.cursor_up(),
            KeyCode::Down => self.state.settings.cursor_down(len),
            KeyCode::Char('c') => self.state.settings.cycle_category_filter(),
            KeyCode::Char('t') => self.state.settings.cycle_product_type_filter(),
            KeyCode::Enter => {
                let id = self
                    .state
                    .settings
                    .selected_product_id(self.state.store.list_products());
                if let Some(id) = id {
                    self.state.open_product_detail(&id);
                }
            }
            _ => {}
        }
    }

    /// Reload the text buffer from the author-name preference
    fn sync_settings_input(&mut self) {
        let editing_name = self.state.settings.menu == SettingsMenu::Basic
            && self.state.settings.current_basic_row() == BasicRow::AuthorName;
        let text = if editing_name {
            self.state.preferences.author_name.clone()
        } else {
            String::new()
        };
        self.input = Input::new(text);
    }
}

fn cycles(code: KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' '))
}

fn toggles(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(DatasetStore::with_mock_data(), "", 250)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn press_ctrl(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::CONTROL));
    }

    fn open_cot1(app: &mut App) {
        app.state.open_detail("cot1");
        app.sync_detail_input();
    }

    #[test]
    fn test_quit_from_list() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_filter_keys_update_query_mirror() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state.query_mirror, "product_category=SECURITIES");
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.state.query_mirror, "product_category=SECURITIES&gender=MALE");
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state.query_mirror, "");
    }

    #[test]
    fn test_enter_opens_the_selected_record() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.screen, Screen::CotDetail);
        assert!(app.state.detail.as_ref().unwrap().is_found());
    }

    #[test]
    fn test_typing_edits_the_focused_text_field() {
        let mut app = app();
        open_cot1(&mut app); // editor panel focused
        // Move to the question-text field (index 2).
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        let before = app
            .state
            .detail
            .as_ref()
            .unwrap()
            .draft()
            .unwrap()
            .question_text
            .clone();

        press(&mut app, KeyCode::Char('!'));
        let after = app
            .state
            .detail
            .as_ref()
            .unwrap()
            .draft()
            .unwrap()
            .question_text
            .clone();
        assert_eq!(after, format!("{}!", before));
        assert!(app.state.detail.as_ref().unwrap().is_dirty());

        // Deleting the character reverts the draft; the dirty flag clears.
        press(&mut app, KeyCode::Backspace);
        assert!(!app.state.detail.as_ref().unwrap().is_dirty());
    }

    #[test]
    fn test_ctrl_s_saves_and_shows_banner() {
        let mut app = app();
        open_cot1(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state.detail.as_ref().unwrap().is_dirty());

        press_ctrl(&mut app, KeyCode::Char('s'));
        let detail = app.state.detail.as_ref().unwrap();
        assert!(!detail.is_dirty());
        assert!(detail.banner_visible());
    }

    #[test]
    fn test_escape_on_dirty_draft_opens_dialog_and_routes_keys_to_it() {
        let mut app = app();
        open_cot1(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(app.state.confirmation_dialog.is_some());

        // Enter lands on the dialog's cancel button, not the editor.
        press(&mut app, KeyCode::Enter);
        assert!(app.state.confirmation_dialog.is_none());
        assert_eq!(app.state.screen, Screen::CotDetail);

        // Confirming actually leaves.
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.screen, Screen::CotList);
        assert!(app.state.detail.is_none());
    }

    #[test]
    fn test_step_shortcuts() {
        let mut app = app();
        open_cot1(&mut app);
        let steps = |app: &App| {
            app.state
                .detail
                .as_ref()
                .unwrap()
                .draft()
                .unwrap()
                .cot_steps
                .len()
        };
        assert_eq!(steps(&app), 3);

        press_ctrl(&mut app, KeyCode::Char('n'));
        assert_eq!(steps(&app), 4);
        press_ctrl(&mut app, KeyCode::Char('d'));
        assert_eq!(steps(&app), 3);
    }

    #[test]
    fn test_product_toggle_through_keys() {
        let mut app = app();
        open_cot1(&mut app);
        press(&mut app, KeyCode::Tab); // editor -> products
        press(&mut app, KeyCode::Enter); // toggle p1 off (cot1 had it)
        let ids = app
            .state
            .detail
            .as_ref()
            .unwrap()
            .draft()
            .unwrap()
            .product_ids
            .clone();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn test_settings_font_size_and_dark_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state.screen, Screen::Settings);

        // Down to the font-size row, widen twice.
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.preferences.font_size, 16);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.state.preferences.dark_mode);
    }

    #[test]
    fn test_settings_author_name_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        for c in "김민수".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.state.preferences.author_name, "김민수");
    }

    #[test]
    fn test_reference_detail_round_trip() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab); // questioner listing
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.screen, Screen::QuestionerDetail);
        assert_eq!(app.state.reference_id.as_deref(), Some("q2"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.screen, Screen::Settings);
    }
}
