//! Array pane: one vertical bar per element
//!
//! Bar heights are proportional to the element value. Colors come from
//! [`BarColoring`], which maps the most recent operation to a role per
//! index. When the array is wider than the pane some elements share no
//! column and are skipped; when it is narrow enough values are printed
//! above the bars.

use crate::operation::Operation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use rustc_hash::FxHashMap;

/// Arrays up to this length get value labels
const LABEL_LIMIT: usize = 30;

/// How a bar is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Plain,
    Compared,
    Swapped,
    Settled,
    Chosen,
    Solution,
}

impl BarRole {
    fn color(self) -> Color {
        match self {
            BarRole::Plain => DEFAULT_THEME.bar,
            BarRole::Compared => DEFAULT_THEME.compared,
            BarRole::Swapped => DEFAULT_THEME.swapped,
            BarRole::Settled => DEFAULT_THEME.settled,
            BarRole::Chosen => DEFAULT_THEME.chosen,
            BarRole::Solution => DEFAULT_THEME.solution,
        }
    }
}

/// Per-index bar roles derived from one operation
#[derive(Debug, Clone, Default)]
pub struct BarColoring {
    default: Option<BarRole>,
    marks: FxHashMap<usize, BarRole>,
}

impl BarColoring {
    pub fn for_operation(operation: Option<&Operation>) -> Self {
        let mut coloring = BarColoring::default();
        let Some(operation) = operation else {
            return coloring;
        };

        match operation {
            Operation::Compare(..) | Operation::Highlight(_) => {
                coloring.mark(&operation.indices(), BarRole::Compared);
            }
            Operation::Swap { indices, .. } => {
                coloring.default = Some(BarRole::Settled);
                coloring.mark(&[indices.0, indices.1], BarRole::Swapped);
            }
            Operation::Decide { chosen, .. } | Operation::Check { chosen, .. } => {
                coloring.mark_chosen(chosen, BarRole::Chosen);
            }
            Operation::Solution { chosen, .. } => {
                coloring.mark_chosen(chosen, BarRole::Solution);
            }
            Operation::Shift { .. }
            | Operation::Insert { .. }
            | Operation::MergeWrite { .. }
            | Operation::Done(_) => {}
        }
        coloring
    }

    fn mark(&mut self, indices: &[usize], role: BarRole) {
        for &index in indices {
            self.marks.insert(index, role);
        }
    }

    fn mark_chosen(&mut self, chosen: &[bool], role: BarRole) {
        for (index, _) in chosen.iter().enumerate().filter(|(_, c)| **c) {
            self.marks.insert(index, role);
        }
    }

    pub fn role(&self, index: usize) -> BarRole {
        self.marks
            .get(&index)
            .copied()
            .or(self.default)
            .unwrap_or(BarRole::Plain)
    }
}

/// Columns `[start, end)` covered by bar `index` of `count` bars across `width`
pub fn bar_span(index: usize, count: usize, width: u16) -> (u16, u16) {
    let width = width as usize;
    let start = index * width / count;
    let end = (index + 1) * width / count;
    (start as u16, end as u16)
}

/// Rows filled by a bar of `value` when `max` fills `rows`; nonzero values get at least one
pub fn bar_height(value: u32, max: u32, rows: u16) -> u16 {
    if max == 0 || value == 0 {
        return 0;
    }
    let filled = (value as u64 * rows as u64).div_ceil(max as u64);
    filled.min(rows as u64) as u16
}

/// Bar chart widget over an array
pub struct BarsView<'a> {
    values: &'a [u32],
    coloring: &'a BarColoring,
}

impl<'a> BarsView<'a> {
    pub fn new(values: &'a [u32], coloring: &'a BarColoring) -> Self {
        BarsView { values, coloring }
    }
}

impl Widget for BarsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.values.len();
        if count == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let show_labels = count <= LABEL_LIMIT;
        let rows = if show_labels {
            area.height.saturating_sub(1)
        } else {
            area.height
        };
        let max = self.values.iter().copied().max().unwrap_or(0);

        for (index, &value) in self.values.iter().enumerate() {
            let (start, end) = bar_span(index, count, area.width);
            if start == end {
                continue;
            }
            // Leave a one-column gap between wide bars
            let bar_end = if end - start >= 3 { end - 1 } else { end };
            let style = Style::default().fg(self.coloring.role(index).color());
            let height = bar_height(value, max, rows);

            for row in 0..height {
                let y = area.bottom() - 1 - row;
                for x in start..bar_end {
                    buf.set_string(area.x + x, y, "█", style);
                }
            }

            if show_labels {
                let label = value.to_string();
                let bar_width = (bar_end - start) as usize;
                if label.len() <= bar_width && height < area.height {
                    let x = area.x + start + ((bar_width - label.len()) / 2) as u16;
                    let y = area.bottom() - 1 - height;
                    buf.set_string(x, y, &label, Style::default().fg(DEFAULT_THEME.fg));
                }
            }
        }
    }
}

/// Render the array pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[u32],
    last_operation: Option<&Operation>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let coloring = BarColoring::for_operation(last_operation);
    frame.render_widget(BarsView::new(values, &coloring), inner);

    // Running sum overlay for subset sum
    if let Some(
        Operation::Decide { sum, .. } | Operation::Check { sum, .. } | Operation::Solution { sum, .. },
    ) = last_operation
    {
        let style = if matches!(last_operation, Some(Operation::Solution { .. })) {
            Style::default()
                .fg(DEFAULT_THEME.solution)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.chosen)
        };
        let text = format!("sum = {}", sum);
        let overlay = Rect::new(inner.x, inner.y, inner.width.min(text.len() as u16), 1);
        frame.render_widget(Paragraph::new(text).style(style), overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_coloring() {
        let op = Operation::Swap {
            indices: (1, 3),
            array: vec![1, 2, 3, 4],
        };
        let coloring = BarColoring::for_operation(Some(&op));
        assert_eq!(coloring.role(1), BarRole::Swapped);
        assert_eq!(coloring.role(3), BarRole::Swapped);
        assert_eq!(coloring.role(0), BarRole::Settled);
    }

    #[test]
    fn test_subset_coloring() {
        let check = Operation::Check {
            chosen: vec![true, false, true],
            sum: 4,
        };
        let coloring = BarColoring::for_operation(Some(&check));
        assert_eq!(coloring.role(0), BarRole::Chosen);
        assert_eq!(coloring.role(1), BarRole::Plain);

        let solution = Operation::Solution {
            chosen: vec![false, true],
            sum: 4,
        };
        let coloring = BarColoring::for_operation(Some(&solution));
        assert_eq!(coloring.role(1), BarRole::Solution);
    }

    #[test]
    fn test_no_operation_is_plain() {
        let coloring = BarColoring::for_operation(None);
        assert_eq!(coloring.role(0), BarRole::Plain);
    }

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_span(0, 4, 20), (0, 5));
        assert_eq!(bar_span(3, 4, 20), (15, 20));
        // More bars than columns: some bars get no column
        assert_eq!(bar_span(1, 200, 100), (0, 1));
        assert_eq!(bar_span(0, 200, 100), (0, 0));

        assert_eq!(bar_height(400, 400, 10), 10);
        assert_eq!(bar_height(1, 400, 10), 1);
        assert_eq!(bar_height(0, 400, 10), 0);
        assert_eq!(bar_height(200, 400, 10), 5);
    }

    #[test]
    fn test_render_into_buffer() {
        let values = [1, 2];
        let coloring = BarColoring::default();
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        BarsView::new(&values, &coloring).render(area, &mut buf);

        // Second bar is full height below its label row
        assert_eq!(buf.cell((2, 2)).map(|c| c.symbol()), Some("█"));
        assert_eq!(buf.cell((2, 1)).map(|c| c.symbol()), Some("█"));
        assert_eq!(buf.cell((2, 0)).map(|c| c.symbol()), Some("2"));
        // First bar is half height
        assert_eq!(buf.cell((0, 2)).map(|c| c.symbol()), Some("█"));
        assert_eq!(buf.cell((0, 1)).map(|c| c.symbol()), Some("1"));
    }
}
