//! Pseudocode pane with the current line highlighted

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn word_style(word: &str) -> Style {
    match word {
        "for" | "from" | "to" | "while" | "if" | "and" | "in" | "def" | "use" | "pop" | "push"
        | "swap" | "merge" | "partition" | "choose" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        w if w.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Simple keyword/number highlighting for the pseudocode listings
fn highlight_pseudocode(line: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        if !word.is_empty() {
            let style = word_style(&word);
            spans.push(Span::styled(std::mem::take(&mut word), style));
        }
        spans.push(Span::styled(c.to_string(), Style::default().fg(DEFAULT_THEME.fg)));
    }
    if !word.is_empty() {
        let style = word_style(&word);
        spans.push(Span::styled(word, style));
    }

    Line::from(spans)
}

/// Render the pseudocode pane
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    listing: &[&str],
    current_line: Option<usize>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if listing.is_empty() {
        let paragraph = Paragraph::new("(no algorithm selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = current_line == Some(idx);
            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content = highlight_pseudocode(text);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, idx + 1), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
