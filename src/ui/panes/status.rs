//! Status bar rendering with keybindings and phase indicator

use crate::playback::Phase;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `is_error` switches the message to the error color.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    applied: usize,
    phase: Phase,
    is_error: bool,
    is_editing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: operation count and status
    let left_spans = vec![
        Span::styled(
            format!(" Op {} ", applied),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let binds: &[(&str, &str)] = if is_editing {
        &[(" ↵ ", " apply "), (" esc ", " cancel ")]
    } else {
        &[
            (" ⎵ ", " play "),
            (" → ", " step "),
            (" r ", " reset "),
            (" n ", " new array "),
            (" ⇥ ", " algorithm "),
            (" +/- ", " speed "),
            (" ↑/↓ ", " size "),
            (" e/v/t ", " edit "),
            (" q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in binds.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let (badge, badge_bg) = match phase {
        Phase::Idle => (" READY ", DEFAULT_THEME.success),
        Phase::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        Phase::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
        Phase::Finished => (" END ", DEFAULT_THEME.error),
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(badge_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
