//! Active screen: the question being answered, with the countdown.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::bank::QuestionKind;

use super::{format_clock, App, Palette};

pub(super) fn render(app: &App, frame: &mut Frame) {
    let Some(question) = app.session.current_question() else {
        // start() refuses empty pools, so there is always a current
        // question while active; render nothing if that ever breaks.
        return;
    };

    let answers_height = if question.is_multiple_choice() {
        question.options.len() as u16 + 2
    } else {
        3
    };
    let explanation_height = if app.show_explanation { 6 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with position and clock
            Constraint::Min(5),    // Prompt
            Constraint::Length(answers_height),
            Constraint::Length(explanation_height),
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    // ── Header ─────────────────────────────────────────────────────
    let header = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::border_style())
        .title(Span::styled(" prepdrill ", Palette::title_style()));
    let header_inner = header.inner(chunks[0]);
    frame.render_widget(header, chunks[0]);

    let position = Paragraph::new(format!(
        " Question {} of {} — Topic: {}",
        app.session.current_index() + 1,
        app.session.pool().len(),
        if question.topic.is_empty() {
            "general"
        } else {
            question.topic.as_str()
        }
    ))
    .style(Palette::text_style());
    frame.render_widget(position, header_inner);

    let clock = Paragraph::new(format!(
        "Time left: {} ",
        format_clock(app.session.remaining_seconds())
    ))
    .alignment(Alignment::Right)
    .style(Palette::title_style());
    frame.render_widget(clock, header_inner);

    // ── Prompt ─────────────────────────────────────────────────────
    let (prompt_title, prompt_style) = match question.kind {
        QuestionKind::Code => (" Code (predict the output) ", Palette::code_style()),
        QuestionKind::Aptitude => (" Question ", Palette::text_style()),
    };
    let prompt_lines: Vec<Line> = question
        .prompt()
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    let prompt = Paragraph::new(prompt_lines)
        .style(prompt_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Palette::border_style())
                .title(prompt_title),
        );
    frame.render_widget(prompt, chunks[1]);

    // ── Answer controls ────────────────────────────────────────────
    if question.is_multiple_choice() {
        render_options(app, frame, chunks[2]);
    } else {
        render_input(app, frame, chunks[2]);
    }

    // ── Explanation ────────────────────────────────────────────────
    if app.show_explanation {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            question.explanation.as_deref().unwrap_or("—").to_string(),
            Palette::text_style(),
        )));
        if question.kind == QuestionKind::Code {
            if let Some(expected) = &question.expected_output {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("Expected output: {}", expected),
                    Palette::muted_style(),
                )));
            }
        }
        let explanation = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Palette::border_style())
                    .title(" Explanation "),
            );
        frame.render_widget(explanation, chunks[3]);
    }

    // ── Key hints ──────────────────────────────────────────────────
    let submit_hint = if app.session.is_last_question() {
        "Enter/Ctrl+S submit"
    } else {
        "Tab next · Ctrl+S submit"
    };
    let hints = Paragraph::new(format!(
        " {} · Shift+Tab prev · Ctrl+E explanation · Ctrl+R clear · Esc exit — Answered: {}/{} ",
        submit_hint,
        app.session.answered_count(),
        app.session.pool().len()
    ))
    .style(Palette::muted_style());
    frame.render_widget(hints, chunks[4]);
}

fn render_options(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let Some(question) = app.session.current_question() else {
        return;
    };
    let recorded = app.session.answer_for(app.session.current_index());

    let lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if recorded == Some(option.as_str()) {
                "●"
            } else {
                "○"
            };
            let style = if i == app.selected_option {
                Palette::selected_style()
            } else {
                Palette::text_style()
            };
            Line::from(Span::styled(format!(" {} {} ", marker, option), style))
        })
        .collect();

    let options = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Palette::border_style())
            .title(" Options (↑/↓ highlight, Enter select) "),
    );
    frame.render_widget(options, area);
}

fn render_input(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::title_style())
        .title(" Your answer ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = Paragraph::new(format!("❯ {}", app.input)).style(Palette::text_style());
    frame.render_widget(input, inner);

    // Cursor after the prompt glyph, at the character offset.
    let prefix: String = app.input.chars().take(app.cursor).collect();
    let x = inner.x + 2 + prefix.width() as u16;
    frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
}
