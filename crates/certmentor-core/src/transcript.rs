//! Mentor-exchange transcript formatting and object key layout.

use uuid::Uuid;

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build the object key for one transcript:
/// `<prefix>/<sanitized-name>/<uuid>.txt`. A fresh random id per write, so
/// transcripts never overwrite each other.
pub fn transcript_key(prefix: &str, name: &str) -> String {
    format!("{prefix}/{}/{}.txt", sanitize_name(name), Uuid::new_v4())
}

/// Render the persisted transcript payload.
pub fn render(question: &str, answer: &str) -> String {
    format!("Q: {question}\n\nA:\n{answer}")
}
