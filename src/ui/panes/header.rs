//! Counter line above the bar chart

use crate::sort::stats::group_thousands;
use crate::sort::SortStats;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the header
pub struct HeaderRenderData<'a> {
    pub algorithm: &'a str,
    pub stats: &'a SortStats,
    pub steps: u64,
    pub item_count: usize,
    pub steps_per_frame: usize,
}

pub(crate) fn header_line(data: &HeaderRenderData) -> Line<'static> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let number = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(
            format!(" {} ", data.algorithm),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ Comparisons: ", label),
        Span::styled(group_thousands(data.stats.comparisons), number),
        Span::styled("  Array Accesses: ", label),
        Span::styled(group_thousands(data.stats.array_accesses), number),
        Span::styled("  Steps: ", label),
        Span::styled(group_thousands(data.steps), number),
        Span::styled("  Items: ", label),
        Span::styled(data.item_count.to_string(), number),
        Span::styled("  Speed: ", label),
        Span::styled(format!("{} steps/frame", data.steps_per_frame), number),
    ])
}

/// Render the header line
pub fn render_header(frame: &mut Frame, area: Rect, data: HeaderRenderData) {
    let paragraph = Paragraph::new(header_line(&data))
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
