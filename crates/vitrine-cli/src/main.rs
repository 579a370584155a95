mod browse;
mod facets;

use clap::{Args, Parser, Subcommand};

use vitrine_core::SortKey;

#[derive(Debug, Parser)]
#[command(name = "vitrine-cli")]
#[command(about = "Storefront catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the catalog and print a filtered, paginated product view.
    Browse(BrowseArgs),
    /// List the category, material, and grade facet tables.
    Facets,
}

#[derive(Debug, Args)]
pub(crate) struct BrowseArgs {
    /// Preselect a category facet id, as the `category` URL parameter would.
    #[arg(long)]
    pub(crate) category: Option<String>,

    /// Apply a free-text search, as the `search` URL parameter would.
    #[arg(long)]
    pub(crate) search: Option<String>,

    /// Sort order: featured, price-low, price-high, discount, newest.
    #[arg(long, default_value = "featured")]
    pub(crate) sort: SortKey,

    /// Only show discounted products.
    #[arg(long)]
    pub(crate) discount: bool,

    #[arg(long)]
    pub(crate) min_price: Option<f64>,

    #[arg(long)]
    pub(crate) max_price: Option<f64>,

    /// Page to show, 1-indexed; clamped into range.
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,

    /// Decorate results with this user's cart/wishlist membership.
    #[arg(long)]
    pub(crate) user: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("vitrine-cli: try `browse` or `facets`");
        return Ok(());
    };

    let config = vitrine_core::config::load_app_config_from_env()?;
    let client = vitrine_client::StorefrontClient::new(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    match command {
        Commands::Browse(args) => browse::run_browse(&config, &client, &args).await,
        Commands::Facets => facets::run_facets(&client).await,
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
