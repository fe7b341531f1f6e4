use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::detail_view::{DetailPanel, DetailViewState, EditorField};
use crate::state::AppState;
use crate::theme::Theme;

/// Render the detail screen: banners on top, then the three panels
/// (questioner selection, editor, product selection).
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let Some(detail) = &state.detail else {
        return;
    };

    if !detail.is_found() {
        let block = Block::default()
            .title("CoT 상세")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let paragraph = Paragraph::new("CoT를 찾을 수 없습니다.")
            .block(block)
            .style(Style::default().fg(theme.dim));
        frame.render_widget(paragraph, area);
        return;
    }

    let banners = banner_lines(detail, theme);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banners.len() as u16),
            Constraint::Min(5),
        ])
        .split(area);

    if !banners.is_empty() {
        frame.render_widget(Paragraph::new(banners), chunks[0]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    render_questioner_panel(frame, state, detail, theme, columns[0]);
    render_editor_panel(frame, detail, theme, columns[1]);
    render_product_panel(frame, state, detail, theme, columns[2]);
}

fn banner_lines<'a>(detail: &'a DetailViewState, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if detail.banner_visible() {
        lines.push(Line::from(Span::styled(
            " 저장되었습니다! ",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(error) = detail.last_error() {
        lines.push(Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    }
    if detail.is_dirty() {
        lines.push(Line::from(Span::styled(
            " 저장되지 않은 변경사항이 있습니다 ",
            Style::default().fg(theme.warning),
        )));
    }
    lines
}

fn panel_block<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    Block::default()
        .title(title)
        .title_style(if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        })
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn render_questioner_panel(
    frame: &mut Frame,
    state: &AppState,
    detail: &DetailViewState,
    theme: &Theme,
    area: Rect,
) {
    let focused = detail.panel == DetailPanel::Questioners;
    let block = panel_block(DetailPanel::Questioners.title().to_string(), focused, theme);
    let selected_id = detail.draft().map(|d| d.questioner_id.clone());

    let items: Vec<ListItem> = state
        .store
        .list_questioners()
        .iter()
        .map(|questioner| {
            let selected = selected_id.as_deref() == Some(questioner.id.as_str());
            let marker = if selected { "● " } else { "○ " };
            let style = if selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(format!("{}ID: {}", marker, questioner.id), style)),
                Line::from(Span::styled(
                    format!(
                        "  성별: {} · 연령대: {}",
                        questioner.gender.label(),
                        questioner.age_band.label()
                    ),
                    Style::default().fg(theme.dim),
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg),
    );

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(detail.questioner_cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_editor_panel(frame: &mut Frame, detail: &DetailViewState, theme: &Theme, area: Rect) {
    let focused = detail.panel == DetailPanel::Editor;
    let block = panel_block(DetailPanel::Editor.title().to_string(), focused, theme);
    let Some(draft) = detail.draft() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    for index in 0..detail.field_count() {
        let Some(field) = detail.field_at(index) else {
            continue;
        };
        let active = focused && index == detail.field_index;
        let label_style = if active {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let value_style = if active {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let cursor = if active { "▸ " } else { "  " };

        let (label, value) = match field {
            EditorField::ProductCategory => (
                "상품분류".to_string(),
                format!("◂ {} ▸", draft.product_category.label()),
            ),
            EditorField::QuestionType => (
                "질문유형".to_string(),
                format!("◂ {} ▸", draft.question_type.label()),
            ),
            EditorField::QuestionText => ("질문".to_string(), draft.question_text.clone()),
            EditorField::Step(i) => (
                format!("CoT 단계 {}", i + 1),
                draft.cot_steps.get(i).cloned().unwrap_or_default(),
            ),
            EditorField::AnswerText => ("답변".to_string(), draft.answer_text.clone()),
            EditorField::CotStatus => (
                "CoT 상태".to_string(),
                format!("◂ {} ▸", draft.cot_status.label()),
            ),
        };

        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(label, label_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(value, value_style),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_product_panel(
    frame: &mut Frame,
    state: &AppState,
    detail: &DetailViewState,
    theme: &Theme,
    area: Rect,
) {
    let focused = detail.panel == DetailPanel::Products;
    let selected_ids = detail
        .draft()
        .map(|d| d.product_ids.clone())
        .unwrap_or_default();

    let title = if selected_ids.is_empty() {
        DetailPanel::Products.title().to_string()
    } else {
        format!("{} ({})", DetailPanel::Products.title(), selected_ids.join(", "))
    };
    let block = panel_block(title, focused, theme);

    let items: Vec<ListItem> = state
        .store
        .list_products()
        .iter()
        .map(|product| {
            let selected = selected_ids.iter().any(|id| id == &product.id);
            let marker = if selected { "[x] " } else { "[ ] " };
            let style = if selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(format!("{}{}", marker, product.name), style)),
                Line::from(Span::styled(
                    format!(
                        "    분류: {} · 유형: {}",
                        product.product_category.label(),
                        product.product_type.label()
                    ),
                    Style::default().fg(theme.dim),
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg),
    );

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(detail.product_cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
