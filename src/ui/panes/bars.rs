//! Bar chart of the array being sorted
//!
//! Each value is drawn as a vertical bar whose height is proportional to the
//! value and whose color follows a hue gradient. Indices named by the current
//! [`Highlight`] are drawn in their role color instead.
//!
//! When the array is wider than the pane, every terminal column stands for a
//! run of consecutive indices: it shows the first value of the run and the
//! strongest role of any index in it, so highlights never disappear.

use crate::sort::{Highlight, Role};
use crate::ui::theme::{value_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Partial block glyphs, indexed by eighths of a cell
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Data needed to render the bar pane
pub struct BarsRenderData<'a> {
    pub values: &'a [u32],
    pub highlight: Option<&'a Highlight>,
    pub title: &'a str,
}

/// One drawable bar after fitting the array to the pane width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Column {
    pub value: u32,
    pub role: Option<Role>,
    /// Terminal cells this bar spans horizontally
    pub width: u16,
}

fn role_rank(role: Role) -> u8 {
    match role {
        Role::Pivot => 0,
        Role::Scan => 1,
        Role::Probe => 2,
        Role::Swap => 3,
    }
}

/// Fit `values` into at most `width` terminal columns
pub(crate) fn layout_columns(
    values: &[u32],
    highlight: Option<&Highlight>,
    width: u16,
) -> Vec<Column> {
    let n = values.len();
    let available = width as usize;
    if n == 0 || available == 0 {
        return Vec::new();
    }

    let role_at = |index: usize| highlight.and_then(|h| h.role_at(index));

    if n <= available {
        let bar_width = (available / n) as u16;
        return values
            .iter()
            .enumerate()
            .map(|(index, &value)| Column {
                value,
                role: role_at(index),
                width: bar_width,
            })
            .collect();
    }

    (0..available)
        .map(|column| {
            let start = column * n / available;
            let end = ((column + 1) * n / available).max(start + 1);
            let role = (start..end).filter_map(role_at).min_by_key(|&r| role_rank(r));
            Column {
                value: values[start],
                role,
                width: 1,
            }
        })
        .collect()
}

/// Height of a bar in eighths of a cell, at least one eighth for any value
fn bar_eighths(value: u32, max: u32, height: u16) -> u32 {
    if max == 0 || value == 0 {
        return 0;
    }
    let total = u64::from(height) * 8;
    ((u64::from(value) * total / u64::from(max)).max(1)) as u32
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData, is_done: bool) {
    let border_style = if is_done {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", data.title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let max = data.values.iter().copied().max().unwrap_or(0);
    let columns = layout_columns(data.values, data.highlight, inner.width);
    // Bars wider than two cells get a one-cell gap so neighbours stay distinct
    let gap = u16::from(columns.first().is_some_and(|c| c.width > 2));

    let buffer = frame.buffer_mut();
    let mut x = inner.x;
    for column in columns {
        let color = match column.role {
            Some(role) => DEFAULT_THEME.role_color(role),
            None => value_color(column.value, max),
        };
        let style = Style::default().fg(color);
        let eighths = bar_eighths(column.value, max, inner.height);
        let full_rows = (eighths / 8) as u16;
        let remainder = (eighths % 8) as usize;
        let drawn_width = column.width.saturating_sub(gap).max(1);

        for dx in 0..drawn_width {
            let cx = x + dx;
            for row in 0..full_rows {
                let y = inner.y + inner.height - 1 - row;
                buffer.set_string(cx, y, EIGHTHS[8], style);
            }
            if remainder > 0 && full_rows < inner.height {
                let y = inner.y + inner.height - 1 - full_rows;
                buffer.set_string(cx, y, EIGHTHS[remainder], style);
            }
        }
        x += column.width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_widen_for_short_arrays() {
        let columns = layout_columns(&[3, 1, 2], None, 10);
        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|c| c.width == 3));
    }

    #[test]
    fn test_downsampling_keeps_strongest_role() {
        let values: Vec<u32> = (1..=10).collect();
        let highlight = Highlight::swap(2, 3).with_j(3);
        let columns = layout_columns(&values, Some(&highlight), 5);

        assert_eq!(columns.len(), 5);
        // Column 1 covers indices 2 and 3
        assert_eq!(columns[1].value, 3);
        assert_eq!(columns[1].role, Some(Role::Probe));
        assert_eq!(columns[0].role, None);
    }

    #[test]
    fn test_bar_height_scales_with_value() {
        assert_eq!(bar_eighths(10, 10, 4), 32);
        assert_eq!(bar_eighths(5, 10, 4), 16);
        assert_eq!(bar_eighths(1, 1000, 4), 1);
        assert_eq!(bar_eighths(0, 10, 4), 0);
    }
}
