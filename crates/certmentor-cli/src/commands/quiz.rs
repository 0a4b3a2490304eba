//! The `certmentor quiz` command, plus the quiz rendering and answer
//! collection helpers shared with the interactive session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use certmentor_core::model::{AnswerSheet, QuizItem, ScoreResult};

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    name: String,
    email: String,
    cert: String,
    exam_date: String,
    topic: String,
    provider: Option<String>,
    model: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let certification = super::parse_cert(&cert)?;
    let exam_date = super::parse_exam_date(&exam_date)?;

    let mut session = super::open_session(
        &name,
        &email,
        provider.as_deref(),
        model.as_deref(),
        config_path.as_deref(),
    )?;
    session.set_goal(certification, exam_date);

    eprintln!("Generating a quiz on \"{topic}\"...");
    let items = session.generate_quiz(&topic).await?.items.clone();

    render_quiz(&items);
    let stdin = std::io::stdin();
    let answers = collect_answers(&items, &mut stdin.lock())?;

    let result = session.submit_quiz(&answers)?;
    print_score(&result);

    Ok(())
}

/// Print the quiz questions and their options.
pub(crate) fn render_quiz(items: &[QuizItem]) {
    for item in items {
        println!("\nQ{}: {}", item.index + 1, item.question);
        for (letter, text) in &item.options {
            println!("  {letter}) {text}");
        }
    }
    println!();
}

/// Prompt for an answer to each question. An empty line skips a question;
/// EOF skips everything that remains.
pub(crate) fn collect_answers(
    items: &[QuizItem],
    input: &mut impl BufRead,
) -> Result<AnswerSheet> {
    let mut answers = AnswerSheet::new();

    'items: for item in items {
        let letters: String = item.options.iter().map(|(l, _)| *l).collect();
        loop {
            print!("Your answer for Q{} [{letters}, Enter to skip]: ", item.index + 1);
            std::io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break 'items;
            }
            let line = line.trim();
            if line.is_empty() {
                break;
            }

            let letter = line.chars().next().unwrap_or(' ').to_ascii_uppercase();
            if line.chars().count() == 1 && item.option_text(letter).is_some() {
                answers.select(item.index, letter);
                break;
            }
            println!("Please answer with one of: {letters}");
        }
    }

    Ok(answers)
}

/// Print per-question feedback and the score summary table.
pub(crate) fn print_score(result: &ScoreResult) {
    for line in &result.feedback {
        println!("{line}");
    }

    let mut table = Table::new();
    table.set_header(vec!["Correct", "Scoreable", "Score", "Unscored"]);
    table.add_row(vec![
        Cell::new(result.correct),
        Cell::new(result.total),
        Cell::new(format!("{:.1}%", result.percentage)),
        Cell::new(result.unscored),
    ]);
    println!("\n{table}");
    println!("{}", result.verdict());
}
