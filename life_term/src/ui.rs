// ui.rs - Paints the render model: status line, bordered grid and key help
//
// Read-only: nothing here changes the simulation.

use life_core::RenderModel;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

const HELP_WIDTH: u16 = 21;

const HELP: &[(&str, &str)] = &[
    ("move cursor:",   "wasd/arrow keys"),
    ("toggle cell:",   "space"),
    ("play/pause:",    "return"),
    ("faster/slower:", "plus/minus keys"),
    ("next pattern:",  "p"),
    ("stamp pattern:", "o"),
    ("reset:",         "r"),
    ("quit:",          "q / ctrl+c"),
];

pub fn draw(frame: &mut Frame<'_>, model: &RenderModel<'_>, last_key: &str) {
    let [status_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    // Grid plus its border; the terminal clips anything larger
    let grid_width = u16::try_from(model.width + 2).unwrap_or(u16::MAX);
    let grid_height = u16::try_from(model.height + 2).unwrap_or(u16::MAX);
    let [grid_area, _, help_area] = Layout::horizontal([
        Constraint::Length(grid_width),
        Constraint::Length(2),
        Constraint::Length(HELP_WIDTH),
    ])
    .areas(body);
    let grid_area = Rect { height: grid_height.min(grid_area.height), ..grid_area };

    frame.render_widget(Paragraph::new(status_line(model, last_key)), status_area);
    frame.render_widget(
        Paragraph::new(grid_lines(model)).block(Block::bordered().border_type(BorderType::Double)),
        grid_area,
    );
    frame.render_widget(help(), help_area);
}

fn status_line(model: &RenderModel<'_>, last_key: &str) -> String {
    format!(
        "speed: {}ms | {} | generation: {} | population: {} | pattern: {} | last key: {}",
        model.speed,
        model.status.label(),
        model.generation,
        model.population,
        model.pattern,
        last_key,
    )
}

fn grid_lines(model: &RenderModel<'_>) -> Vec<Line<'static>> {
    (0..model.height)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..model.width)
                .map(|x| Span::styled(" ", cell_style(model, x, y)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_style(model: &RenderModel<'_>, x: usize, y: usize) -> Style {
    match (model.is_cursor(x, y), model.is_alive(x, y)) {
        (true, true)   => Style::new().bg(Color::LightRed),
        (true, false)  => Style::new().bg(Color::Red),
        (false, true)  => Style::new().bg(Color::White),
        (false, false) => Style::new(),
    }
}

fn help() -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = HELP
        .iter()
        .flat_map(|&(action, keys)| [Line::from(action), Line::from(keys), Line::default()])
        .collect();
    Paragraph::new(lines).block(Block::bordered())
}
