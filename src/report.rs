//! Textual report export for a finished attempt.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::score::Verdict;
use crate::session::QuizSession;

/// Render the score and answers of a finished attempt as plain text.
pub fn render_report(session: &QuizSession, when: DateTime<Local>) -> String {
    let card = session.score();
    let mut out = String::new();
    out.push_str(&format!(
        "prepdrill report — {}\n",
        when.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("{}\n\n", card));

    for (index, question) in session.pool().iter().enumerate() {
        let verdict = session
            .verdict_for(index)
            .unwrap_or(Verdict::Skipped);
        let topic = if question.topic.is_empty() {
            String::new()
        } else {
            format!(" ({})", question.topic)
        };
        out.push_str(&format!(
            "{:>3}. [{}] {}{}\n",
            index + 1,
            verdict.marker(),
            question.id,
            topic
        ));
        out.push_str(&format!(
            "     your answer: {}\n",
            session.answer_for(index).unwrap_or("-")
        ));
        out.push_str(&format!(
            "     correct answer: {}\n",
            question.canonical_answer().unwrap_or("-")
        ));
    }
    out
}

pub fn default_report_path(when: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "prepdrill-report-{}.txt",
        when.format("%Y%m%d-%H%M%S")
    ))
}

/// Write the report next to the working directory and return its path.
pub fn write_report(session: &QuizSession) -> std::io::Result<PathBuf> {
    let now = Local::now();
    let path = default_report_path(now);
    std::fs::write(&path, render_report(session, now))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
