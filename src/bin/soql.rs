//! Run a SOQL query from the command line and print the result as JSON.
//!
//! ```sh
//! export SF_INSTANCE_URL='https://myorg.my.salesforce.com'
//! export SF_ACCESS_TOKEN='00D...'
//! cargo run --bin soql -- "SELECT Id, Name FROM Account LIMIT 5"
//! cargo run --bin soql -- --all "SELECT Id FROM Account WHERE IsDeleted = true"
//! cargo run --bin soql -- --next /services/data/v62.0/query/01gxx-2000
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use sforce_soql_api::{ClientConfig, HttpTransport, SoqlClient, SoqlConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SOQL query to run
    query: Option<String>,

    /// Use the queryAll endpoint (includes deleted and archived records)
    #[arg(long)]
    all: bool,

    /// Follow nextRecordsUrl and print every record
    #[arg(long, conflicts_with_all = ["all", "next"])]
    fetch_all: bool,

    /// Fetch the page at this nextRecordsUrl instead of running a query
    #[arg(long, value_name = "PATH", conflicts_with = "query")]
    next: Option<String>,

    /// Bearer token for the org
    #[arg(long, env = "SF_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SoqlConfig::from_env().context("reading SF_INSTANCE_URL / SF_API_VERSION")?;
    let transport = HttpTransport::new(
        ClientConfig::builder()
            .with_timeout(std::time::Duration::from_secs(cli.timeout))
            .build(),
    )?
    .with_access_token(cli.access_token);
    let client = SoqlClient::with_transport(config, transport);

    let output = match (cli.next, cli.query) {
        (Some(path), _) => serde_json::to_value(client.get_next_page(&path).await?)?,
        (None, Some(query)) if cli.fetch_all => {
            serde_json::to_value(client.fetch_all(&query).await?)?
        }
        (None, Some(query)) if cli.all => {
            serde_json::to_value(client.execute_query_all(&query).await?)?
        }
        (None, Some(query)) => serde_json::to_value(client.execute_query(&query).await?)?,
        (None, None) => bail!("either a query or --next <PATH> is required"),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
