pub mod detail;
pub mod list;
pub mod reference;
pub mod settings;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::state::{AppState, Screen};
use crate::theme::Theme;
use widgets::{ConfirmationDialogWidget, StatusBarWidget};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = Theme::for_preferences(&state.preferences);

    // Paint the whole frame so the dark-mode palette applies globally.
    let background =
        Block::default().style(Style::default().bg(theme.background).fg(theme.text));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area (flexible)
            Constraint::Length(1), // Status bar (fixed height)
        ])
        .split(frame.area());

    match state.screen {
        Screen::CotList => list::render(frame, state, &theme, chunks[0]),
        Screen::CotDetail => detail::render(frame, state, &theme, chunks[0]),
        Screen::Settings => settings::render(frame, state, &theme, chunks[0]),
        Screen::QuestionerDetail => reference::render_questioner(frame, state, &theme, chunks[0]),
        Screen::ProductDetail => reference::render_product(frame, state, &theme, chunks[0]),
    }

    frame.render_widget(StatusBarWidget::new(state, &theme), chunks[1]);

    // Render the confirmation dialog on top if one is active.
    if let Some(dialog) = &state.confirmation_dialog {
        frame.render_widget(ConfirmationDialogWidget::new(dialog, &theme), frame.area());
    }
}
