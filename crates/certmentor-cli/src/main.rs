//! certmentor CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "certmentor", version, about = "AWS certification study mentor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive mentor session
    Session {
        /// Your full name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Certification code to pre-set the goal (e.g. "SAA-C03")
        #[arg(long, requires = "exam_date")]
        cert: Option<String>,

        /// Exam date as YYYY-MM-DD, paired with --cert
        #[arg(long, requires = "cert")]
        exam_date: Option<String>,

        /// Provider to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Model to use (overrides config default)
        #[arg(long)]
        model: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a study plan for a certification
    Plan {
        /// Your full name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Certification code (e.g. "SAA-C03"; see `certmentor list-certs`)
        #[arg(long)]
        cert: String,

        /// Exam date as YYYY-MM-DD
        #[arg(long)]
        exam_date: String,

        /// Provider to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Model to use (overrides config default)
        #[arg(long)]
        model: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a practice quiz and answer it interactively
    Quiz {
        /// Your full name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// Certification code (e.g. "SAA-C03")
        #[arg(long)]
        cert: String,

        /// Exam date as YYYY-MM-DD
        #[arg(long)]
        exam_date: String,

        /// Quiz topic (e.g. "S3 security")
        #[arg(long)]
        topic: String,

        /// Provider to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Model to use (overrides config default)
        #[arg(long)]
        model: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Ask the mentor a one-off question
    Ask {
        /// Your full name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// The question to ask
        #[arg(long)]
        question: String,

        /// Provider to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Model to use (overrides config default)
        #[arg(long)]
        model: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List supported certifications
    ListCerts,

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("certmentor=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Session {
            name,
            email,
            cert,
            exam_date,
            provider,
            model,
            config,
        } => commands::session::execute(name, email, cert, exam_date, provider, model, config).await,
        Commands::Plan {
            name,
            email,
            cert,
            exam_date,
            provider,
            model,
            config,
        } => commands::plan::execute(name, email, cert, exam_date, provider, model, config).await,
        Commands::Quiz {
            name,
            email,
            cert,
            exam_date,
            topic,
            provider,
            model,
            config,
        } => {
            commands::quiz::execute(name, email, cert, exam_date, topic, provider, model, config)
                .await
        }
        Commands::Ask {
            name,
            email,
            question,
            provider,
            model,
            config,
        } => commands::ask::execute(name, email, question, provider, model, config).await,
        Commands::ListCerts => commands::list_certs::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
