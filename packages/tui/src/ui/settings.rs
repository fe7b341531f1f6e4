use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState};
use strum::IntoEnumIterator;

use cotdesk_settings::{FONT_SIZE_MAX, FONT_SIZE_MIN};

use crate::settings_view::{BasicRow, SettingsMenu};
use crate::state::AppState;
use crate::theme::Theme;

/// Render the settings screen: submenu on the left, the active pane on the
/// right (basic settings or one of the read-only listings).
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(area);

    render_submenu(frame, state, theme, columns[0]);
    match state.settings.menu {
        SettingsMenu::Basic => render_basic(frame, state, theme, columns[1]),
        SettingsMenu::Questioners => render_questioners(frame, state, theme, columns[1]),
        SettingsMenu::Products => render_products(frame, state, theme, columns[1]),
    }
}

fn render_submenu(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title("서브메뉴")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let items: Vec<ListItem> = SettingsMenu::iter()
        .map(|menu| {
            let active = state.settings.menu == menu;
            let style = if active {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if active { "▸ " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, menu.label()),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn font_size_gauge(size: u8) -> String {
    let filled = (size - FONT_SIZE_MIN) as usize;
    let total = (FONT_SIZE_MAX - FONT_SIZE_MIN) as usize;
    let mut gauge = String::new();
    for i in 0..=total {
        gauge.push(if i == filled { '█' } else { '─' });
    }
    gauge
}

fn render_basic(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title("기본 설정")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let prefs = &state.preferences;

    let mut lines: Vec<Line> = Vec::new();
    for row in BasicRow::iter() {
        let active = state.settings.current_basic_row() == row;
        let label_style = if active {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let cursor = if active { "▸ " } else { "  " };

        let value = match row {
            BasicRow::AuthorName => {
                if prefs.author_name.is_empty() {
                    "(미입력)".to_string()
                } else {
                    prefs.author_name.clone()
                }
            }
            BasicRow::QuestionerEditable => checkbox(prefs.questioner_editable).to_string(),
            BasicRow::ProductEditable => checkbox(prefs.product_editable).to_string(),
            BasicRow::FontSize => {
                format!("{}px {}", prefs.font_size, font_size_gauge(prefs.font_size))
            }
            BasicRow::DarkMode => checkbox(prefs.dark_mode).to_string(),
        };

        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(format!("{}: ", row.label()), label_style),
            Span::styled(value, Style::default().fg(theme.text)),
        ]));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "Space: 전환 • ←→: 글꼴 크기 • 이름 행에서 입력",
        Style::default().fg(theme.dim),
    )));

    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn filter_line<'a>(parts: Vec<(&'static str, &'static str, Option<&'static str>)>, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (key, label, value) in parts {
        spans.push(Span::styled(format!("[{}] ", key), Style::default().fg(theme.dim)));
        spans.push(Span::styled(format!("{}: ", label), Style::default().fg(theme.text)));
        spans.push(Span::styled(
            value.unwrap_or("전체"),
            if value.is_some() {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.dim)
            },
        ));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn render_questioners(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let filters = &state.settings.filters;
    let filter_bar = Block::default()
        .title("질문자 목록")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(
        Paragraph::new(filter_line(
            vec![
                ("c", "상품분류", filters.product_category.map(|v| v.label())),
                ("g", "성별", filters.gender.map(|v| v.label())),
                ("a", "연령대", filters.age_band.map(|v| v.label())),
            ],
            theme,
        ))
        .block(filter_bar),
        chunks[0],
    );

    let questioners = state
        .settings
        .filtered_questioners(state.store.list_questioners());

    let header = Row::new(vec!["ID", "성별", "연령대", "상품분류"]).style(
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = questioners
        .iter()
        .map(|q| {
            Row::new(vec![
                Cell::from(q.id.clone()),
                Cell::from(q.gender.label()),
                Cell::from(q.age_band.label()),
                Cell::from(q.product_category.label()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    )
    .highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg),
    );

    let mut table_state = TableState::default();
    if !questioners.is_empty() {
        table_state.select(Some(state.settings.cursor.min(questioners.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[1], &mut table_state);
}

fn render_products(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let filters = &state.settings.filters;
    let filter_bar = Block::default()
        .title("상품 목록")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    frame.render_widget(
        Paragraph::new(filter_line(
            vec![
                ("c", "상품분류", filters.product_category.map(|v| v.label())),
                ("t", "상품유형", filters.product_type.map(|v| v.label())),
            ],
            theme,
        ))
        .block(filter_bar),
        chunks[0],
    );

    let products = state.settings.filtered_products(state.store.list_products());

    let header = Row::new(vec!["상품명", "분류", "유형"]).style(
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = products
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.product_category.label()),
                Cell::from(p.product_type.label()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    )
    .highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .fg(theme.highlight_fg),
    );

    let mut table_state = TableState::default();
    if !products.is_empty() {
        table_state.select(Some(state.settings.cursor.min(products.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[1], &mut table_state);
}
