//! Terminal presentation. Reads a [`RenderSnapshot`], never the engine.

mod play_area;
mod widgets;

use crate::game::{CrashCause, FlapPhase, RenderSnapshot, WingPose};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use widgets::{render_round_over_banner, render_status_bar, render_titled_panel};

const INFO_PANEL_WIDTH: u16 = 24;

/// Session facts shown next to the play field.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub best_score: u32,
    pub round: u32,
    pub crash: Option<CrashCause>,
}

/// Play-field width in columns for a given height, keeping the world's
/// aspect ratio with cells roughly twice as tall as they are wide.
fn play_width(rows: u16, snapshot: &RenderSnapshot) -> u16 {
    (rows as f32 * 2.0 * snapshot.view_width / snapshot.view_height).round() as u16
}

pub fn draw(frame: &mut Frame, snapshot: &RenderSnapshot, hud: &Hud) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyflap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_rows = inner.height.saturating_sub(2);
    let field_cols = play_width(field_rows, snapshot)
        .min(inner.width.saturating_sub(INFO_PANEL_WIDTH))
        .max(1);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(field_cols),
            Constraint::Length(INFO_PANEL_WIDTH),
            Constraint::Min(0),
        ])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h_chunks[0]);

    play_area::render_play_area(frame, v_chunks[0], snapshot);
    if snapshot.round_over {
        render_round_over_banner(frame, v_chunks[0], "CRASH!", &crash_message(snapshot, hud));
    }
    render_status(frame, v_chunks[1], snapshot);
    render_info_panel(frame, h_chunks[1], snapshot, hud);
}

fn crash_message(snapshot: &RenderSnapshot, hud: &Hud) -> String {
    let what = match hud.crash {
        Some(CrashCause::Ground) => "Hit the ground",
        Some(CrashCause::Obstacle) | None => "Clipped a pipe",
    };
    match snapshot.score {
        1 => format!("{} after 1 pipe.", what),
        n => format!("{} after {} pipes.", what, n),
    }
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot) {
    if snapshot.round_over {
        render_status_bar(
            frame,
            area,
            "Round over",
            Color::Red,
            &[("[R/Click]", "Restart"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &[("[Any key]", "Flap"), ("[Q]", "Quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot, hud: &Hud) {
    let inner = render_titled_panel(frame, area, "Info");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let phase = match (snapshot.player.phase, snapshot.player.pose) {
        (FlapPhase::Idle, _) => "gliding",
        (FlapPhase::Flapping, WingPose::Downflap) => "flap ▼",
        (FlapPhase::Flapping, WingPose::Midflap) => "flap ►",
        (FlapPhase::Flapping, WingPose::Upflap) => "flap ▲",
    };

    let rows = [
        ("Score", snapshot.score.to_string()),
        ("Best", hud.best_score.max(snapshot.score).to_string()),
        ("Round", hud.round.to_string()),
        ("", String::new()),
        ("Wings", phase.to_string()),
        ("Tilt", format!("{}°", snapshot.player.rotation)),
        ("Height", format!("{:.0}", snapshot.ground.top - snapshot.player.position.y)),
        ("Pipes", snapshot.obstacles.len().to_string()),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(name, text)| {
            if name.is_empty() {
                return Line::from("");
            }
            Line::from(vec![
                Span::styled(format!(" {:<7}", name), label),
                Span::styled(text, value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, SpriteMetrics};
    use crate::game::RoundController;

    fn snapshot() -> RenderSnapshot {
        RoundController::new(GameConfig::default(), SpriteMetrics::default())
            .unwrap()
            .snapshot()
    }

    #[test]
    fn test_play_width_keeps_aspect() {
        // 288 × 512 world in 32 rows → 36 columns at 2:1 cells.
        assert_eq!(play_width(32, &snapshot()), 36);
    }

    #[test]
    fn test_crash_message_mentions_cause() {
        let mut snap = snapshot();
        snap.score = 3;
        let hud = Hud {
            crash: Some(CrashCause::Ground),
            ..Default::default()
        };
        assert_eq!(crash_message(&snap, &hud), "Hit the ground after 3 pipes.");

        snap.score = 1;
        let hud = Hud {
            crash: Some(CrashCause::Obstacle),
            ..Default::default()
        };
        assert_eq!(crash_message(&snap, &hud), "Clipped a pipe after 1 pipe.");
    }

    #[test]
    fn test_draw_renders_without_panic() {
        use ratatui::{backend::TestBackend, Terminal};

        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let snap = snapshot();
        terminal
            .draw(|frame| draw(frame, &snap, &Hud::default()))
            .unwrap();

        let mut over = snap.clone();
        over.round_over = true;
        terminal
            .draw(|frame| draw(frame, &over, &Hud::default()))
            .unwrap();
    }
}
