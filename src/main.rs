use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roadmap_qcm::{HttpBackend, QcmQuiz, QuestionBank, QuizContext};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Identifier of the qcm-for-roadmap attempt
    #[arg(long)]
    qcm_id: String,

    /// Candidate identifier; without it the attempt is not persisted
    #[arg(long)]
    candidate_id: Option<String>,

    /// Base URL of the platform backend
    #[arg(long, default_value = "http://localhost:3001")]
    server: String,

    /// Question bank JSON file overriding the bundled bank
    #[arg(long)]
    bank: Option<PathBuf>,

    /// RNG seed for reproducible question selection
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let backend = match HttpBackend::new(&args.server) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            eprintln!("Failed to create backend client: {}", e);
            std::process::exit(1);
        }
    };

    let mut context = QuizContext::new(args.qcm_id);
    if let Some(candidate_id) = args.candidate_id {
        context = context.with_candidate(candidate_id);
    }
    if let Some(seed) = args.seed {
        context = context.with_seed(seed);
    }

    let quiz = match args.bank {
        Some(path) => match QuestionBank::from_file(&path) {
            Ok(bank) => Ok(QcmQuiz::with_bank(context, backend, bank)),
            Err(e) => {
                eprintln!("Failed to load question bank: {}", e);
                std::process::exit(1);
            }
        },
        None => QcmQuiz::new(context, backend),
    };

    let quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to prepare quiz: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
