use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qualify_tool::adapters::http::predict::{predict_router, PredictAppState};
use qualify_tool::adapters::prediction::{HttpPredictionClient, HttpPredictionConfig};
use qualify_tool::adapters::terminal::{render_faq, render_form, render_submission};
use qualify_tool::application::handlers::qualification::QualificationSession;
use qualify_tool::config::AppConfig;
use qualify_tool::domain::qualification::{FaqPanel, QualificationForm, SubmissionView, CATALOG};
use qualify_tool::domain::scoring::HeuristicClassifier;

/// Use-case qualification questionnaire.
#[derive(Debug, Parser)]
#[command(name = "qualify-tool", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the questionnaire and get a recommendation
    Ask {
        /// Use-case name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the bundled prediction service
    Serve,
    /// Print the question catalog
    Catalog,
    /// Print the FAQ
    Faq {
        /// Expand the entry with this number (repeatable)
        #[arg(long = "open", value_name = "N")]
        open: Vec<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Command::Ask { name } => ask(&config, name).await,
        Command::Serve => serve(&config).await,
        Command::Catalog => {
            for (idx, param) in CATALOG.iter().enumerate() {
                println!("{:>2}. {} ({})", idx + 1, param.label, param.key);
                println!("    {}", param.description);
            }
            Ok(())
        }
        Command::Faq { open } => {
            let mut panel = FaqPanel::default();
            for number in open {
                if panel.toggle_numbered(number).is_none() {
                    tracing::warn!(number, "No FAQ entry with that number");
                }
            }
            print!("{}", render_faq(&panel));
            Ok(())
        }
    }
}

async fn ask(config: &AppConfig, name: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpPredictionClient::new(HttpPredictionConfig::new(&config.prediction.base_url))?;
    let form = read_form(name)?;
    let mut session = QualificationSession::with_form(Arc::new(client), form);

    println!("\n{}", render_form(session.form()));
    print!("{}", render_submission(&SubmissionView::Loading));
    let state = session.submit().await;
    print!("{}", render_submission(&state.view()));
    Ok(())
}

/// Prompts for the name (unless given) and every catalog question.
fn read_form(name: Option<String>) -> io::Result<QualificationForm> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = match name {
        Some(name) => name,
        None => prompt(&mut lines, "Use-case name: ")?,
    };
    let mut form = QualificationForm::with_name(name);

    for param in CATALOG.iter() {
        println!("\n{}\n  {}", param.label, param.description);
        let answer = prompt(&mut lines, "  [y/N] ")?;
        form.set_answer(param.key, matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"));
    }
    Ok(form)
}

async fn serve(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = PredictAppState::new(Arc::new(HeuristicClassifier::new()));
    let app = predict_router(state, &config.server.allowed_origins());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Prediction service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}
