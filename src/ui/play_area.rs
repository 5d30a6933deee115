//! Rasterise a [`RenderSnapshot`] onto terminal cells.
//!
//! Each cell samples the world at its center. Layers are painted back to
//! front: sky, ground, barriers, player, score digits.

use crate::core::constants::{SCORE_DIGIT_MARGIN, SCORE_Y_DIVISOR};
use crate::core::geometry::{Rect as WorldRect, Vec2};
use crate::game::{RenderSnapshot, WingPose};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Big score digits: 3 columns × 3 rows each.
const DIGIT_GLYPHS: [[&str; 3]; 10] = [
    ["┏━┓", "┃ ┃", "┗━┛"],
    ["  ┃", "  ┃", "  ┃"],
    ["━━┓", "┏━┛", "┗━━"],
    ["━━┓", " ━┫", "━━┛"],
    ["┃ ┃", "┗━┫", "  ┃"],
    ["┏━━", "┗━┓", "━━┛"],
    ["┏━━", "┣━┓", "┗━┛"],
    ["━━┓", "  ┃", "  ┃"],
    ["┏━┓", "┣━┫", "┗━┛"],
    ["┏━┓", "┗━┫", "━━┛"],
];
const GLYPH_WIDTH: u16 = 3;
const GLYPH_HEIGHT: u16 = 3;

#[derive(Clone, Copy)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Cell {
    fn new(symbol: char, fg: Color) -> Self {
        Self {
            symbol,
            style: Style::default().fg(fg),
        }
    }
}

/// Maps world coordinates to cell indices for one draw.
struct Viewport {
    area: Rect,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(area: Rect, snapshot: &RenderSnapshot) -> Self {
        Self {
            area,
            scale_x: snapshot.view_width / area.width.max(1) as f32,
            scale_y: snapshot.view_height / area.height.max(1) as f32,
        }
    }

    fn world_at(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.scale_x,
            (row as f32 + 0.5) * self.scale_y,
        )
    }

    fn cell_at(&self, world: Vec2) -> Option<(u16, u16)> {
        if world.x < 0.0 || world.y < 0.0 {
            return None;
        }
        let col = (world.x / self.scale_x) as u16;
        let row = (world.y / self.scale_y) as u16;
        (col < self.area.width && row < self.area.height).then_some((col, row))
    }
}

fn contains(rect: &WorldRect, p: Vec2) -> bool {
    p.x >= rect.left && p.x < rect.right() && p.y >= rect.top && p.y < rect.bottom()
}

fn player_symbol(pose: WingPose) -> char {
    match pose {
        WingPose::Upflap => '▲',
        WingPose::Midflap => '►',
        WingPose::Downflap => '▼',
    }
}

/// Left column of each digit glyph so the whole number is centred on
/// `center_col`, most-significant digit first.
pub fn digit_columns(count: usize, center_col: u16, margin: u16) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let total = count as u16 * GLYPH_WIDTH + (count as u16 - 1) * margin;
    let start = center_col.saturating_sub(total / 2);
    (0..count as u16)
        .map(|i| start + i * (GLYPH_WIDTH + margin))
        .collect()
}

pub fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &RenderSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let view = Viewport::new(area, snapshot);
    let width = area.width as usize;
    let mut grid = vec![Cell::new(' ', Color::Reset); width * area.height as usize];

    for row in 0..area.height {
        for col in 0..area.width {
            let world = view.world_at(col, row);
            let cell = &mut grid[row as usize * width + col as usize];

            if contains(&snapshot.ground, world) {
                // Stripes scroll with the backdrop.
                let stripe = ((world.x - snapshot.backdrop_offset) / 12.0) as i32;
                *cell = if row as f32 * view.scale_y <= snapshot.ground.top {
                    Cell::new('▀', Color::Green)
                } else if stripe % 2 == 0 {
                    Cell::new('▒', Color::Yellow)
                } else {
                    Cell::new('░', Color::Yellow)
                };
                continue;
            }

            for barrier in &snapshot.obstacles {
                if contains(&barrier.top, world) || contains(&barrier.bottom, world) {
                    *cell = Cell::new('█', Color::Green);
                    break;
                }
            }
        }
    }

    let body = snapshot.player.hitbox.center();
    if let Some((col, row)) = view.cell_at(body) {
        let color = if snapshot.round_over {
            Color::Red
        } else {
            Color::Yellow
        };
        grid[row as usize * width + col as usize] = Cell {
            symbol: player_symbol(snapshot.player.pose),
            style: Style::default().fg(color).add_modifier(Modifier::BOLD),
        };
    }

    let score_row = (area.height as f32 / SCORE_Y_DIVISOR) as u16;
    let margin = (SCORE_DIGIT_MARGIN / view.scale_x).round().max(1.0) as u16;
    let columns = digit_columns(snapshot.digits.len(), area.width / 2, margin);
    for (digit, col) in snapshot.digits.iter().zip(columns) {
        let glyph = &DIGIT_GLYPHS[*digit as usize % 10];
        for (dy, line) in glyph.iter().enumerate().take(GLYPH_HEIGHT as usize) {
            let row = score_row + dy as u16;
            for (dx, symbol) in line.chars().enumerate() {
                let c = col + dx as u16;
                if row < area.height && c < area.width && symbol != ' ' {
                    grid[row as usize * width + c as usize] = Cell {
                        symbol,
                        style: Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    };
                }
            }
        }
    }

    let lines: Vec<Line> = grid
        .chunks(width)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| Span::styled(cell.symbol.to_string(), cell.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
