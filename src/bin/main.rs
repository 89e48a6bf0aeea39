use techgadget_support::cli::{ChatSession, SessionEnd};
use techgadget_support::IntentResponder;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenv::dotenv().ok();

    let session = ChatSession::new(IntentResponder::new());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available; rely on end of input instead.
            std::future::pending::<()>().await;
        }
    };

    let summary = session.run(stdin, &mut stdout, interrupt).await?;
    info!(turns = summary.turns, ended_by = ?summary.ended_by, "Chat session finished");

    // The blocking stdin read is still parked; don't wait on it during runtime shutdown.
    if summary.ended_by == SessionEnd::Interrupted {
        std::process::exit(0);
    }

    Ok(())
}
