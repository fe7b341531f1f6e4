use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use strum::IntoEnumIterator;

use cotdesk_core::CotStatus;

use crate::list_view::SortKey;
use crate::state::AppState;
use crate::theme::Theme;

/// Render the CoT list screen: filter bar, sortable table, pagination footer
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(3),    // Table
            Constraint::Length(3), // Pagination footer
        ])
        .split(area);

    render_filter_bar(frame, state, theme, chunks[0]);
    render_table(frame, state, theme, chunks[1]);
    render_footer(frame, state, theme, chunks[2]);
}

fn render_filter_bar(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let filters = &state.list.filters;
    let all = "전체";

    let entry = |key: &'static str, label: &'static str, value: Option<&'static str>| {
        vec![
            Span::styled(format!("[{}] ", key), Style::default().fg(theme.dim)),
            Span::styled(format!("{}: ", label), Style::default().fg(theme.text)),
            Span::styled(
                value.unwrap_or(all),
                if value.is_some() {
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.dim)
                },
            ),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(entry("c", "상품분류", filters.product_category.map(|v| v.label())));
    spans.extend(entry("t", "질문유형", filters.question_type.map(|v| v.label())));
    spans.extend(entry("g", "성별", filters.gender.map(|v| v.label())));
    spans.extend(entry("a", "연령대", filters.age_band.map(|v| v.label())));

    let block = Block::default()
        .title("필터")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn status_color(status: CotStatus, theme: &Theme) -> Color {
    match status {
        CotStatus::Approved => theme.success,
        CotStatus::ReviewRequested => theme.warning,
        CotStatus::Draft => theme.dim,
        CotStatus::Rejected => theme.error,
    }
}

fn render_table(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let rows_all = state
        .list
        .filtered(state.store.list_cots(), state.store.list_questioners());
    let visible = state.list.visible(&rows_all);

    let title = format!("CoT 리스트 ({})", rows_all.len());
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if visible.is_empty() {
        let paragraph = Paragraph::new("데이터가 없습니다.")
            .block(block)
            .style(Style::default().fg(theme.dim))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let header_cells: Vec<Cell> = SortKey::iter()
        .enumerate()
        .map(|(i, key)| {
            let mut text = format!("{} {}", i + 1, key.label());
            if state.list.sort_key == key {
                text.push(' ');
                text.push_str(state.list.sort_direction.indicator());
            }
            let style = if state.list.sort_key == key {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            };
            Cell::from(text).style(style)
        })
        .collect();
    let header = Row::new(header_cells).height(1);

    let row_height = 1 + Theme::row_padding(&state.preferences);
    let rows: Vec<Row> = visible
        .iter()
        .map(|cot| {
            Row::new(vec![
                Cell::from(cot.product_category.label()),
                Cell::from(cot.question_type.label()),
                Cell::from(cot.cot_status.label())
                    .style(Style::default().fg(status_color(cot.cot_status, theme))),
                Cell::from(cot.updated_at.format("%Y. %m. %d.").to_string())
                    .style(Style::default().fg(theme.dim)),
            ])
            .height(row_height)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(30),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.list.cursor.min(visible.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let rows_all = state
        .list
        .filtered(state.store.list_cots(), state.store.list_questioners());
    let meta = state.list.page_meta(rows_all.len());

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.dim)
        }
    };

    let line = Line::from(vec![
        Span::styled("페이지 크기: ", Style::default().fg(theme.text)),
        Span::styled(
            format!("{}", meta.page_size),
            Style::default().fg(theme.accent),
        ),
        Span::raw("   "),
        Span::styled("이전", nav_style(meta.has_previous_page)),
        Span::styled(
            format!("  {} / {}  ", meta.page, meta.total_pages.max(1)),
            Style::default().fg(theme.text),
        ),
        Span::styled("다음", nav_style(meta.has_next_page)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
