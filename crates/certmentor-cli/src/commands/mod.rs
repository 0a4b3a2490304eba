pub mod ask;
pub mod init;
pub mod list_certs;
pub mod plan;
pub mod quiz;
pub mod session;

use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;

use certmentor_core::model::{Certification, Identity};
use certmentor_core::session::MentorSession;

use crate::config;

/// Parse an exam date given as `YYYY-MM-DD`.
pub(crate) fn parse_exam_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid exam date '{}', expected YYYY-MM-DD", s.trim()))
}

/// Parse a certification code like `SAA-C03`.
pub(crate) fn parse_cert(s: &str) -> Result<Certification> {
    Certification::from_str(s).map_err(|e| anyhow::anyhow!(e))
}

/// Build a session from the CLI identity args and the loaded config.
pub(crate) fn open_session(
    name: &str,
    email: &str,
    provider: Option<&str>,
    model: Option<&str>,
    config_path: Option<&Path>,
) -> Result<MentorSession> {
    let identity = Identity::new(name, email)?;
    let config = config::load_config_from(config_path)?;
    let generator = config.build_generator(provider)?;
    let store = config.build_store()?;
    Ok(MentorSession::new(
        identity,
        generator,
        store,
        config.settings(model),
    ))
}
