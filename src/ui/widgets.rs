//! Small shared widgets: status bar, titled panel, round-over banner.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// `[key] action` pairs joined on one line.
fn hint_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);

    let spans: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(*key, key_style),
                Span::styled(format!(" {}", action), action_style),
            ])
        })
        .collect();
    Line::from(spans)
}

/// Status message on the first row, control hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    controls: &[(&str, &str)],
) {
    let rows = [
        Line::from(Span::styled(message, Style::default().fg(color))),
        hint_line(controls),
    ];
    for (offset, line) in rows.into_iter().enumerate().take(area.height as usize) {
        let row = Rect {
            y: area.y + offset as u16,
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}

/// Dim bordered panel with a title. Returns the area inside the border.
pub fn render_titled_panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Red banner along the bottom of `area`; the play field stays visible above.
pub fn render_round_over_banner(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    const HEIGHT: u16 = 5;
    let height = HEIGHT.min(area.height);
    let banner = Rect {
        y: area.bottom() - height,
        height,
        ..area
    };
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(message),
        hint_line(&[("[R/Click]", "fly again")]),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_spacing() {
        let line = hint_line(&[("[A]", "one"), ("[B]", "two")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[A] one  [B] two");
    }

    #[test]
    fn test_empty_hints() {
        assert!(hint_line(&[]).spans.is_empty());
    }
}
