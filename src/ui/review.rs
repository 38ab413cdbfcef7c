//! Finished screen: aggregate score and per-question review.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::score::Verdict;
use crate::session::QuizSession;

use super::{App, Palette};

pub(super) fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + scorecard
            Constraint::Min(6),    // Review list
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let card = app.session.score();
    let header = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}", card), Palette::text_style())),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Palette::border_style())
            .title(Span::styled(" Quiz Result ", Palette::title_style())),
    );
    frame.render_widget(header, chunks[0]);

    let review = Paragraph::new(review_lines(&app.session))
        .wrap(Wrap { trim: false })
        .scroll((app.review_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Palette::border_style())
                .title(" Review "),
        );
    frame.render_widget(review, chunks[1]);

    let mut footer =
        String::from(" b back · r retake · e export report · ↑/↓ scroll · q quit ");
    if !app.status.is_empty() {
        footer.push_str("— ");
        footer.push_str(&app.status);
    }
    let hints = Paragraph::new(footer).style(Palette::muted_style());
    frame.render_widget(hints, chunks[2]);
}

/// The full review as a flat line list; scrolled by the paragraph.
fn review_lines(session: &QuizSession) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, question) in session.pool().iter().enumerate() {
        let verdict = session.verdict_for(index).unwrap_or(Verdict::Skipped);
        let verdict_style = match verdict {
            Verdict::Correct => Palette::correct_style(),
            Verdict::Wrong => Palette::wrong_style(),
            Verdict::Skipped => Palette::muted_style(),
        };
        let topic = if question.topic.is_empty() {
            String::new()
        } else {
            format!("{} — ", question.topic)
        };
        lines.push(Line::from(Span::styled(
            format!(
                " {}. [{}] {}{}",
                index + 1,
                verdict.marker(),
                topic,
                question.id
            ),
            verdict_style,
        )));
        for prompt_line in question.prompt().lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", prompt_line),
                Palette::text_style(),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "    your answer: {}",
                session.answer_for(index).unwrap_or("-")
            ),
            Palette::text_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "    correct answer: {}",
                question.canonical_answer().unwrap_or("-")
            ),
            Palette::text_style(),
        )));
        if let Some(explanation) = &question.explanation {
            lines.push(Line::from(Span::styled(
                format!("    explanation: {}", explanation),
                Palette::muted_style(),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

/// Number of review lines, for scroll clamping.
pub(super) fn line_count(session: &QuizSession) -> usize {
    review_lines(session).len()
}
