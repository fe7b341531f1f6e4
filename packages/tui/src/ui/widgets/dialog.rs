use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// Result of user interaction with the confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
    /// Dialog is still waiting for user input
    Pending,
}

/// Which button is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    /// Cancel is the default focus so Enter never discards by accident
    Cancel,
    Confirm,
}

/// A blocking yes/no prompt rendered over the active screen
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Dangerous actions render the confirm button in the error color
    pub dangerous: bool,
    pub focus: DialogFocus,
}

impl ConfirmationDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        ConfirmationDialog {
            title: title.into(),
            message: message.into(),
            confirm_text: "확인".to_string(),
            cancel_text: "취소".to_string(),
            dangerous: false,
            focus: DialogFocus::Cancel,
        }
    }

    pub fn dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    pub fn with_buttons(mut self, confirm_text: impl Into<String>, cancel_text: impl Into<String>) -> Self {
        self.confirm_text = confirm_text.into();
        self.cancel_text = cancel_text.into();
        self
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            DialogFocus::Cancel => DialogFocus::Confirm,
            DialogFocus::Confirm => DialogFocus::Cancel,
        };
    }

    /// Route a key press; Tab switches focus, Enter/Space pick the focused
    /// button, Esc always cancels.
    pub fn handle_key(&mut self, key: KeyCode) -> DialogResult {
        match key {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.next_focus();
                DialogResult::Pending
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                DialogFocus::Cancel => DialogResult::Cancelled,
                DialogFocus::Confirm => DialogResult::Confirmed,
            },
            KeyCode::Esc => DialogResult::Cancelled,
            _ => DialogResult::Pending,
        }
    }
}

/// Widget rendering a centered confirmation dialog
pub struct ConfirmationDialogWidget<'a> {
    dialog: &'a ConfirmationDialog,
    theme: &'a Theme,
}

impl<'a> ConfirmationDialogWidget<'a> {
    pub fn new(dialog: &'a ConfirmationDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }
}

impl<'a> Widget for ConfirmationDialogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.dialog.message.chars().count() as u16 + 8)
            .max(40)
            .min(area.width.saturating_sub(4));
        let height = 8u16.min(area.height.saturating_sub(2));
        let dialog_area = Rect {
            x: (area.width.saturating_sub(width)) / 2,
            y: (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(dialog_area, buf);

        let border_color = if self.dialog.dangerous {
            self.theme.error
        } else {
            self.theme.warning
        };
        let block = Block::default()
            .title(self.dialog.title.clone())
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // Message
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Shortcuts
            ])
            .split(inner);

        Paragraph::new(self.dialog.message.clone())
            .style(Style::default().fg(self.theme.text))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .render(chunks[0], buf);

        let cancel_style = if self.dialog.focus == DialogFocus::Cancel {
            Style::default()
                .bg(self.theme.highlight_bg)
                .fg(self.theme.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.dim)
        };
        let confirm_color = if self.dialog.dangerous {
            self.theme.error
        } else {
            self.theme.success
        };
        let confirm_style = if self.dialog.focus == DialogFocus::Confirm {
            Style::default()
                .bg(confirm_color)
                .fg(self.theme.highlight_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(confirm_color)
        };

        let buttons = Line::from(vec![
            Span::styled(format!("[{}]", self.dialog.cancel_text), cancel_style),
            Span::raw("   "),
            Span::styled(format!("[{}]", self.dialog.confirm_text), confirm_style),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new("Tab: 이동 • Enter: 선택 • Esc: 취소")
            .style(Style::default().fg(self.theme.dim))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> ConfirmationDialog {
        ConfirmationDialog::new("변경사항 확인", "변경사항을 저장하지 않고 나가시겠습니까?")
            .dangerous()
            .with_buttons("나가기", "취소")
    }

    #[test]
    fn test_cancel_is_focused_first() {
        let mut d = dialog();
        assert_eq!(d.focus, DialogFocus::Cancel);
        // Enter on the default focus cancels, never discards.
        assert_eq!(d.handle_key(KeyCode::Enter), DialogResult::Cancelled);
    }

    #[test]
    fn test_tab_then_enter_confirms() {
        let mut d = dialog();
        assert_eq!(d.handle_key(KeyCode::Tab), DialogResult::Pending);
        assert_eq!(d.focus, DialogFocus::Confirm);
        assert_eq!(d.handle_key(KeyCode::Enter), DialogResult::Confirmed);
    }

    #[test]
    fn test_escape_always_cancels() {
        let mut d = dialog();
        d.handle_key(KeyCode::Tab);
        assert_eq!(d.handle_key(KeyCode::Esc), DialogResult::Cancelled);
    }

    #[test]
    fn test_unrelated_keys_keep_the_dialog_pending() {
        let mut d = dialog();
        assert_eq!(d.handle_key(KeyCode::Char('x')), DialogResult::Pending);
        assert_eq!(d.handle_key(KeyCode::Up), DialogResult::Pending);
    }
}
