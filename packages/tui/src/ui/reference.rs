use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::state::AppState;
use crate::theme::Theme;

fn labeled<'a>(label: &'a str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

/// Read-only questioner detail, reached from the settings listing
pub fn render_questioner(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let id = state.reference_id.as_deref().unwrap_or_default();
    let block = Block::default()
        .title(format!("질문자 상세: {}", id))
        .title_style(Style::default().fg(theme.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let Some(questioner) = state.store.get_questioner(id) else {
        let paragraph = Paragraph::new("질문자를 찾을 수 없습니다.")
            .block(block)
            .style(Style::default().fg(theme.dim));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines = vec![
        labeled("ID", questioner.id.clone(), theme),
        labeled("성별", questioner.gender.label().to_string(), theme),
        labeled("연령대", questioner.age_band.label().to_string(), theme),
        labeled("상품분류", questioner.product_category.label().to_string(), theme),
        labeled("투자성향", questioner.customer_risk_profile.clone(), theme),
        labeled("교차가입", questioner.cross_subscription.clone(), theme),
        labeled(
            "보유상품",
            format!(
                "{} ({}건)",
                questioner.product_list.join(", "),
                questioner.product_count
            ),
            theme,
        ),
        Line::raw(""),
        labeled(
            "등록일",
            questioner.created_at.format("%Y. %m. %d.").to_string(),
            theme,
        ),
        labeled(
            "수정일",
            questioner.updated_at.format("%Y. %m. %d.").to_string(),
            theme,
        ),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Read-only product detail, reached from the settings listing
pub fn render_product(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let id = state.reference_id.as_deref().unwrap_or_default();
    let block = Block::default()
        .title(format!("상품 상세: {}", id))
        .title_style(Style::default().fg(theme.accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let Some(product) = state.store.get_product(id) else {
        let paragraph = Paragraph::new("상품을 찾을 수 없습니다.")
            .block(block)
            .style(Style::default().fg(theme.dim));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        labeled("상품명", product.name.clone(), theme),
        labeled("분류", product.product_category.label().to_string(), theme),
        labeled("유형", product.product_type.label().to_string(), theme),
        labeled("만기", product.maturity.clone(), theme),
        labeled("수익률", product.yield_desc.clone(), theme),
        labeled("위험등급", product.risk_grade.clone(), theme),
        labeled("세제혜택", product.tax_benefit.clone(), theme),
        labeled("납입방식", product.payment_type.clone(), theme),
        labeled("손실률", product.loss_rate.clone(), theme),
        labeled("유동성", product.liquidity.clone(), theme),
        labeled("검색 키워드", product.search_keywords.clone(), theme),
    ];
    if !product.note.is_empty() {
        lines.push(labeled("비고", product.note.clone(), theme));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
