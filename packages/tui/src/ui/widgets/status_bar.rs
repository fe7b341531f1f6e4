use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::state::{AppState, Screen};
use crate::theme::Theme;

/// Bottom status bar: breadcrumb, live filter query, dirty marker, and
/// context-aware key hints.
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn breadcrumb(&self) -> String {
        match &self.state.screen {
            Screen::CotList => " CoT 리스트".to_string(),
            Screen::CotDetail => match &self.state.detail {
                Some(detail) if detail.is_found() => format!(" CoT 상세: {}", detail.record_id()),
                _ => " CoT 상세".to_string(),
            },
            Screen::Settings => format!(" 설정 › {}", self.state.settings.menu.label()),
            Screen::QuestionerDetail => match &self.state.reference_id {
                Some(id) => format!(" 질문자: {}", id),
                None => " 질문자".to_string(),
            },
            Screen::ProductDetail => match &self.state.reference_id {
                Some(id) => format!(" 상품: {}", id),
                None => " 상품".to_string(),
            },
        }
    }

    fn context(&self) -> Option<String> {
        match &self.state.screen {
            Screen::CotList if !self.state.query_mirror.is_empty() => {
                Some(format!("?{}", self.state.query_mirror))
            }
            Screen::CotDetail => self
                .state
                .detail
                .as_ref()
                .filter(|d| d.is_dirty())
                .map(|_| "수정중".to_string()),
            _ => None,
        }
    }

    fn shortcuts(&self) -> &'static str {
        if self.state.confirmation_dialog.is_some() {
            return "Tab: 이동 • Enter: 선택 • Esc: 취소";
        }
        match &self.state.screen {
            Screen::CotList => {
                "↑↓: 이동 • Enter: 상세 • n: 새 CoT • ←→: 페이지 • c/t/g/a: 필터 • 1-4: 정렬 • z: 크기 • s: 설정 • q: 종료"
            }
            Screen::CotDetail => {
                "Tab: 패널 • ↑↓: 이동 • Ctrl+S: 저장 • Ctrl+N: 단계 추가 • Ctrl+D: 단계 삭제 • Esc: 뒤로가기"
            }
            Screen::Settings => "Tab: 서브메뉴 • ↑↓: 이동 • Enter: 선택 • c/g/a/t: 필터 • Esc: 뒤로",
            Screen::QuestionerDetail | Screen::ProductDetail => "Esc: 설정으로 돌아가기",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let shortcuts = self.shortcuts();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(shortcuts.chars().count() as u16),
            ])
            .split(area);

        let mut left = self.breadcrumb();
        if let Some(context) = self.context() {
            left = format!("{} • {}", left, context);
        }

        Paragraph::new(left)
            .style(Style::default().fg(self.theme.dim))
            .render(chunks[0], buf);

        Paragraph::new(shortcuts)
            .style(Style::default().fg(self.theme.dim))
            .render(chunks[1], buf);
    }
}
