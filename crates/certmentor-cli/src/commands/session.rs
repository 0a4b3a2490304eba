//! The `certmentor session` command: an interactive mentor loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use certmentor_core::session::MentorSession;

use super::quiz::{collect_answers, print_score, render_quiz};

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    name: String,
    email: String,
    cert: Option<String>,
    exam_date: Option<String>,
    provider: Option<String>,
    model: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut session = super::open_session(
        &name,
        &email,
        provider.as_deref(),
        model.as_deref(),
        config_path.as_deref(),
    )?;

    if let (Some(cert), Some(date)) = (&cert, &exam_date) {
        let certification = super::parse_cert(cert)?;
        session.set_goal(certification, super::parse_exam_date(date)?);
        println!(
            "Goal set: {} ({} days left).",
            certification.title(),
            session.days_left()?
        );
    }

    println!(
        "Welcome, {}! Type `help` to see the available commands.",
        session.identity().name()
    );

    let stdin = std::io::stdin();
    run_loop(&mut session, &mut stdin.lock()).await
}

/// Read commands until `quit` or EOF. Command failures are printed and the
/// loop keeps going; only I/O errors on the input abort the session.
async fn run_loop(session: &mut MentorSession, input: &mut impl BufRead) -> Result<()> {
    loop {
        print!("certmentor> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let result = match cmd {
            "goal" => handle_goal(session, rest),
            "plan" => handle_plan(session).await,
            "quiz" => handle_quiz(session, rest, input).await,
            "ask" => handle_ask(session, rest).await,
            "status" => {
                print_status(session);
                Ok(())
            }
            "certs" => super::list_certs::execute(),
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {other}. Type `help` for the command list.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Error: {e:#}");
        }
    }

    Ok(())
}

fn handle_goal(session: &mut MentorSession, rest: &str) -> Result<()> {
    let mut parts = rest.split_whitespace();
    let (Some(code), Some(date), None) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("usage: goal <CODE> <YYYY-MM-DD> (see `certs` for codes)");
    };
    let certification = super::parse_cert(code)?;
    let exam_date = super::parse_exam_date(date)?;
    session.set_goal(certification, exam_date);
    println!(
        "Goal set: {} on {exam_date} ({} days left).",
        certification.title(),
        session.days_left()?
    );
    Ok(())
}

async fn handle_plan(session: &mut MentorSession) -> Result<()> {
    println!("Generating your study plan...");
    let plan = session.generate_plan().await?;
    println!("{plan}");
    Ok(())
}

async fn handle_quiz(
    session: &mut MentorSession,
    rest: &str,
    input: &mut impl BufRead,
) -> Result<()> {
    let topic = rest.trim();
    if topic.is_empty() {
        anyhow::bail!("usage: quiz <topic>");
    }

    println!("Generating a quiz on \"{topic}\"...");
    let items = session.generate_quiz(topic).await?.items.clone();

    render_quiz(&items);
    let answers = collect_answers(&items, input)?;
    let result = session.submit_quiz(&answers)?;
    print_score(&result);
    Ok(())
}

async fn handle_ask(session: &mut MentorSession, rest: &str) -> Result<()> {
    session.ask(rest)?;
    let exchange = session.mentor_answer().await?;
    println!("{}", exchange.answer);
    if let Some(key) = &exchange.stored_key {
        println!("(transcript saved: {key})");
    }
    Ok(())
}

fn print_status(session: &MentorSession) {
    match session.state().goal() {
        Some(goal) => {
            let days = goal.days_left(chrono::Local::now().date_naive());
            println!(
                "Goal: {} on {} ({days} days left)",
                goal.certification.title(),
                goal.exam_date
            );
        }
        None => println!("Goal: not set (use `goal <CODE> <YYYY-MM-DD>`)"),
    }
    match session.state().plan() {
        Some(_) => println!("Study plan: generated"),
        None => println!("Study plan: none"),
    }
    match session.state().quiz() {
        Some(quiz) => println!("Quiz: {} questions pending", quiz.items.len()),
        None => println!("Quiz: none pending"),
    }
    if let Some(question) = session.state().last_question() {
        println!("Last question: {question}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  goal <CODE> <YYYY-MM-DD>  set your certification goal");
    println!("  plan                      generate a study plan");
    println!("  quiz <topic>              generate and take a practice quiz");
    println!("  ask <question>            ask the mentor a question");
    println!("  status                    show the session state");
    println!("  certs                     list supported certifications");
    println!("  quit                      leave the session");
}
