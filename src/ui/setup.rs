//! Setup screen: configure the attempt before starting.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pool;

use super::{App, Palette, SetupField};

pub(super) fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Form + statistics
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let header = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::border_style())
        .title(Span::styled(
            " prepdrill — aptitude & code-output practice ",
            Palette::title_style(),
        ));
    frame.render_widget(header, chunks[0]);

    let body = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::border_style())
        .title(" Quiz Setup ");
    let inner = body.inner(chunks[1]);
    frame.render_widget(body, chunks[1]);

    let field_style = |field: SetupField| {
        if app.setup_field == field {
            Palette::selected_style()
        } else {
            Palette::text_style()
        }
    };

    let eligible = pool::eligible_count(&app.bank, &app.config);
    let preview = eligible.min(app.config.pool_size);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  Number of questions       ◂ {:>3} ▸  ", app.config.pool_size),
            field_style(SetupField::PoolSize),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "  Time limit (minutes)      ◂ {:>3} ▸  ",
                app.config.time_limit_minutes
            ),
            field_style(SetupField::TimeLimit),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "  Include code-output questions  [{}]  ",
                if app.config.include_code { "x" } else { " " }
            ),
            field_style(SetupField::IncludeCode),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "  Bank: {} questions loaded — current pool: {}",
                app.bank.len(),
                preview
            ),
            Palette::muted_style(),
        )),
    ];
    if !app.status.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  {}", app.status),
            Palette::wrong_style(),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    let hints = Paragraph::new(
        " Enter start · Tab next field · ←/→ adjust · Space toggle · q quit ",
    )
    .style(Palette::muted_style());
    frame.render_widget(hints, chunks[2]);
}
