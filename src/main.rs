use clap::{Parser, Subcommand};
use tracing::info;

use searchbox::api::SearchApiClient;
use searchbox::complete::CompletionSession;
use searchbox::render;

#[derive(Parser)]
#[command(name = "searchbox", version, about)]
struct Cli {
    /// Base URL of the search API server.
    #[arg(long, env = "SEARCHBOX_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a query and print the rendered result list as an HTML fragment.
    Query { query: String },
    /// Print autocomplete suggestions for a partial query, one per line.
    Complete { term: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("searchbox=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let client = SearchApiClient::new(reqwest::Client::new(), &cli.base_url)?;

    match cli.command {
        Command::Query { query } => {
            let records = client.query(&query).await?;
            if records.is_empty() {
                info!(%query, "no results");
            }
            print!("{}", render::render_results(&records, &query));
        }
        Command::Complete { term } => {
            let mut session = CompletionSession::new(client);
            for suggestion in session.request(&term).await? {
                println!("{suggestion}");
            }
        }
    }

    Ok(())
}
