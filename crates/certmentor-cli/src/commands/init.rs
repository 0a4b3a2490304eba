//! The `certmentor init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("certmentor.toml").exists() {
        println!("certmentor.toml already exists, skipping.");
    } else {
        std::fs::write("certmentor.toml", SAMPLE_CONFIG)?;
        println!("Created certmentor.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit certmentor.toml with your API keys");
    println!("  2. Run: certmentor list-certs");
    println!("  3. Run: certmentor session --name \"Your Name\" --email you@example.com");

    Ok(())
}

// Top-level keys must come before the first table header, or TOML folds
// them into that table and serde never sees them.
const SAMPLE_CONFIG: &str = r#"# certmentor configuration

default_provider = "bedrock"
default_model = "meta.llama3-70b-instruct-v1:0"
temperature = 0.7
max_tokens = 2048
transcript_prefix = "certmaster-answers"

[providers.bedrock]
type = "bedrock"
api_key = "${CERTMENTOR_BEDROCK_KEY}"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"

# Where mentor transcripts are kept. Swap for an S3 bucket with:
#   [storage]
#   type = "s3"
#   bucket = "my-transcripts"
#   api_key = "${CERTMENTOR_S3_KEY}"
[storage]
type = "local"
root = "./certmentor-transcripts"
"#;
