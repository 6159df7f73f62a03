//! Controls bar: the current settings and the inline input editor

use crate::playback::{Field, Settings};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Text being typed into a setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub field: Field,
    pub buffer: String,
}

impl InputState {
    pub fn new(field: Field) -> Self {
        InputState {
            field,
            buffer: String::new(),
        }
    }
}

fn setting_spans(
    label: &str,
    value: String,
    field: Option<Field>,
    input: Option<&InputState>,
) -> Vec<Span<'static>> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let editing = input.filter(|i| field.is_some_and(|f| f == i.field));

    let value_span = match editing {
        Some(input) => Span::styled(
            format!(" {}▏", input.buffer),
            Style::default()
                .bg(DEFAULT_THEME.border_focused)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            format!(" {}", value),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
    };

    vec![Span::styled(format!(" {}:", label), label_style), value_span]
}

/// Render the controls bar at the top
pub fn render_controls_bar(
    frame: &mut Frame,
    area: Rect,
    settings: &Settings,
    input: Option<&InputState>,
) {
    let sep = Span::styled("  │ ", Style::default().fg(DEFAULT_THEME.comment));

    let mut spans = setting_spans("Algorithm", settings.algorithm.clone(), None, input);
    spans.push(sep.clone());
    spans.extend(setting_spans(
        "Array size",
        settings.size.to_string(),
        Some(Field::Size),
        input,
    ));
    spans.push(sep.clone());
    spans.extend(setting_spans(
        "Speed",
        format!("{} ({}ms)", settings.speed(), settings.delay().as_millis()),
        Some(Field::Speed),
        input,
    ));
    spans.push(sep);
    spans.extend(setting_spans(
        "Target (for Subset Sum)",
        settings.target.to_string(),
        Some(Field::Target),
        input,
    ));

    let border_style = if input.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
