//! Terminal rendering for the flappy game.
//!
//! World coordinates are scaled to whatever cell grid the terminal offers;
//! each cell is coloured by sampling the world at the cell centre.

use flappy::game::{FrameSnapshot, GamePhase, Renderer};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;

const SKY: Color = Color::Rgb(135, 206, 235);
const PIPE: Color = Color::Green;
const BIRD: Color = Color::Yellow;
const BEAK: Color = Color::Rgb(255, 165, 0);
const EYE: Color = Color::Black;

/// [`Renderer`] that draws into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    #[cfg(test)]
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, snap: &FrameSnapshot) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_flappy(frame, area, snap);
        })?;
        Ok(())
    }
}

/// Render the whole scene: bordered play area plus a status bar.
pub fn render_flappy(frame: &mut Frame, area: Rect, snap: &FrameSnapshot) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], snap);
    render_score(frame, chunks[0], snap);
    render_overlay(frame, chunks[0], snap);
    render_status_bar(frame, chunks[1], snap);
}

/// Maps world coordinates onto a cell grid.
struct Projection {
    area: Rect,
    x_scale: f64,
    y_scale: f64,
}

impl Projection {
    fn new(area: Rect, snap: &FrameSnapshot) -> Self {
        Self {
            area,
            x_scale: snap.viewport.width as f64 / area.width.max(1) as f64,
            y_scale: snap.viewport.height as f64 / area.height.max(1) as f64,
        }
    }

    /// World point at the centre of a cell.
    fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.x_scale,
            (row as f64 + 0.5) * self.y_scale,
        )
    }

    /// Screen row for a world height, clamped into the area.
    fn row_for(&self, world_y: f64) -> u16 {
        let row = (world_y / self.y_scale).floor().max(0.0) as u16;
        self.area.y + row.min(self.area.height.saturating_sub(1))
    }

    fn same_cell(&self, a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 / self.x_scale).floor() == (b.0 / self.x_scale).floor()
            && (a.1 / self.y_scale).floor() == (b.1 / self.y_scale).floor()
    }
}

/// What occupies a world point.
fn sample(snap: &FrameSnapshot, proj: &Projection, wx: f64, wy: f64) -> Span<'static> {
    let bird = &snap.bird;
    let r = bird.radius;

    let eye = (bird.x + r / 2.0, bird.y - r / 3.0);
    if proj.same_cell((wx, wy), eye) {
        return Span::styled("●", Style::default().fg(EYE).bg(BIRD));
    }

    let in_beak = wx >= bird.x + r / 2.0
        && wx <= bird.x + r * 1.2
        && wy >= bird.y
        && wy <= bird.y + r / 3.0;
    if in_beak {
        return Span::styled("▶", Style::default().fg(BEAK).bg(SKY));
    }

    let dx = wx - bird.x;
    let dy = wy - bird.y;
    if dx * dx + dy * dy <= r * r {
        return Span::styled("█", Style::default().fg(BIRD));
    }

    let in_pipe = snap
        .pipes
        .iter()
        .any(|pipe| pipe.top.contains(wx, wy) || pipe.bottom.contains(wx, wy));
    if in_pipe {
        return Span::styled("█", Style::default().fg(PIPE));
    }

    Span::styled(" ", Style::default().bg(SKY))
}

/// Render the sky, pipes and bird.
fn render_play_area(frame: &mut Frame, area: Rect, snap: &FrameSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let proj = Projection::new(area, snap);

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let (wx, wy) = proj.cell_center(col, row);
                    sample(snap, &proj, wx, wy)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_centered_text(frame: &mut Frame, area: Rect, row: u16, text: &str, style: Style) {
    let paragraph = Paragraph::new(Span::styled(text.to_string(), style))
        .alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect {
            y: row,
            height: 1,
            ..area
        },
    );
}

fn render_score(frame: &mut Frame, area: Rect, snap: &FrameSnapshot) {
    if area.height == 0 {
        return;
    }
    let proj = Projection::new(area, snap);
    render_centered_text(
        frame,
        area,
        proj.row_for(snap.score_y),
        &snap.score.to_string(),
        Style::default()
            .fg(Color::White)
            .bg(SKY)
            .add_modifier(Modifier::BOLD),
    );
}

/// Phase overlay ("Tap to Play", game over summary).
fn render_overlay(frame: &mut Frame, area: Rect, snap: &FrameSnapshot) {
    if area.height == 0 {
        return;
    }
    let proj = Projection::new(area, snap);
    for line in &snap.overlay {
        render_centered_text(
            frame,
            area,
            proj.row_for(line.y),
            &line.text,
            Style::default()
                .fg(Color::White)
                .bg(SKY)
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, snap: &FrameSnapshot) {
    if area.height < 1 {
        return;
    }

    let (status, color) = match snap.phase {
        GamePhase::Waiting => ("Press Space to start!".to_string(), Color::Yellow),
        GamePhase::Playing => (format!("Score: {}", snap.score), Color::Green),
        GamePhase::GameOver => (format!("Crashed with {} points", snap.score), Color::Red),
    };
    let status_line = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls = [
            ("[Space/Click]", "Flap"),
            ("[P]", "Pause"),
            ("[Q]", "Quit"),
        ];
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::game::{PipeView, Rect as WorldRect};
    use flappy::{FlappyGame, GameConfig};
    use ratatui::backend::TestBackend;

    fn renderer() -> TerminalRenderer<TestBackend> {
        TerminalRenderer::new(Terminal::new(TestBackend::new(60, 30)).unwrap())
    }

    fn new_game() -> FlappyGame {
        FlappyGame::new(&GameConfig::seeded(400, 800, 9)).unwrap()
    }

    fn screen_text(renderer: &mut TerminalRenderer<TestBackend>) -> String {
        let buffer = renderer.terminal_mut().backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn count_cells(renderer: &mut TerminalRenderer<TestBackend>, fg: Color) -> usize {
        let buffer = renderer.terminal_mut().backend().buffer().clone();
        buffer
            .content
            .iter()
            .filter(|c| c.fg == fg && c.symbol() == "█")
            .count()
    }

    #[test]
    fn test_waiting_screen_shows_prompt() {
        let mut r = renderer();
        r.render(&new_game().snapshot()).unwrap();
        let text = screen_text(&mut r);
        assert!(text.contains("Tap to Play"));
        assert!(text.contains("Press Space to start!"));
        assert!(text.contains("Flappy"));
    }

    #[test]
    fn test_bird_is_drawn() {
        let mut r = renderer();
        r.render(&new_game().snapshot()).unwrap();
        assert!(count_cells(&mut r, BIRD) > 0);
    }

    #[test]
    fn test_pipes_drawn_when_on_screen() {
        let mut r = renderer();
        let mut snap = new_game().snapshot();
        assert_eq!(count_cells(&mut r, PIPE), 0);

        snap.pipes[0] = PipeView {
            top: WorldRect::new(250, 0, 316, 300),
            bottom: WorldRect::new(250, 500, 316, 800),
        };
        r.render(&snap).unwrap();
        assert!(count_cells(&mut r, PIPE) > 0);
    }

    #[test]
    fn test_game_over_screen_shows_summary() {
        let mut game = new_game();
        game.primary_action();
        while game.phase() == GamePhase::Playing {
            game.tick();
        }
        let mut r = renderer();
        r.render(&game.snapshot()).unwrap();
        let text = screen_text(&mut r);
        assert!(text.contains("Game Over"));
        assert!(text.contains("Tap to Restart"));
        assert!(text.contains("Score: 0"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut r = TerminalRenderer::new(Terminal::new(TestBackend::new(3, 3)).unwrap());
        r.render(&new_game().snapshot()).unwrap();
    }
}
