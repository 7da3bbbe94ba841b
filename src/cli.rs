use crate::config::AppConfig;
use crate::error::AppError;
use crate::session::{
    CredentialExchange, HttpCredentialExchange, OfflineExchange, SessionGate, SessionStore,
};
use crate::telemetry;
use crate::tracker::{render_sign_in, BoardView, TrackerClient};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "JobJourney",
    about = "Track your classified job applications from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and render the application board (default command)
    Board(BoardArgs),
    /// Record an application by hand (not available yet)
    Add,
}

#[derive(Args, Debug, Default)]
struct BoardArgs {
    /// Credential issued by the identity provider
    /// (falls back to JOBJOURNEY_CREDENTIAL)
    #[arg(long)]
    credential: Option<String>,
    /// Override the configured tracker service base URL
    #[arg(long)]
    api_base: Option<String>,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Board(BoardArgs::default()));

    match command {
        Command::Board(args) => board(args).await,
        Command::Add => {
            // Stub: the remote service is read-only from this side.
            println!("Add Application is not available yet.");
            Ok(())
        }
    }
}

async fn board(mut args: BoardArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(base) = args.api_base.take() {
        config.tracker.api_base = base;
    }

    telemetry::init(&config.telemetry)?;

    let store = SessionStore::start();
    let exchange: Arc<dyn CredentialExchange> = match config.auth.exchange_url.as_deref() {
        Some(url) => Arc::new(HttpCredentialExchange::new(url)),
        None => Arc::new(OfflineExchange),
    };
    let gate = SessionGate::new(store.clone(), exchange);

    let credential = args
        .credential
        .take()
        .or_else(|| env::var("JOBJOURNEY_CREDENTIAL").ok());

    if !gate.sign_in(credential.as_deref()).await {
        // Failure surfaces only in the diagnostic log; stay on sign-in.
        print!("{}", render_sign_in());
        return Ok(());
    }

    let mut view = BoardView::new(TrackerClient::new(config.tracker.api_base.clone()));
    view.mount().await;

    let session = store.current();
    print!(
        "{}",
        view.render(session.as_ref().and_then(|s| s.display_name.as_deref()))
    );

    store.sign_out();
    Ok(())
}
