//! The `certmentor ask` command.

use std::path::PathBuf;

use anyhow::Result;

pub async fn execute(
    name: String,
    email: String,
    question: String,
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

    session.ask(&question)?;
    let exchange = session.mentor_answer().await?;

    println!("{}", exchange.answer);
    match &exchange.stored_key {
        Some(key) => eprintln!("\nTranscript saved: {key}"),
        None => eprintln!("\nTranscript could not be saved; see the log for details."),
    }

    Ok(())
}
