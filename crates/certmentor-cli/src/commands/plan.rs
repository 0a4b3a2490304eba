//! The `certmentor plan` command.

use std::path::PathBuf;

use anyhow::Result;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    name: String,
    email: String,
    cert: String,
    exam_date: String,
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

    let days = session.days_left()?;
    eprintln!(
        "Generating a study plan for {} ({days} days until the exam)...",
        certification.title()
    );

    let plan = session.generate_plan().await?;
    println!("{plan}");

    Ok(())
}
