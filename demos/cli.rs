//! `yourls` - command line access to a YOURLS server.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yourls::{DEFAULT_STATS_LIMIT, ServerArgs, YourlsError, get_server};

/// Yourls Client
#[derive(Parser, Debug)]
#[command(name = "yourls")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    server: ServerOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ServerOpts {
    /// Yourls API URL
    #[arg(
        long,
        env = "YOURLS_API_URL",
        default_value = "http://127.0.0.1/yourls-api.php",
        global = true
    )]
    apiurl: String,

    /// Signature token
    #[arg(long, env = "YOURLS_TOKEN", global = true)]
    token: Option<String>,

    /// Username
    #[arg(long, env = "YOURLS_USERNAME", global = true)]
    username: Option<String>,

    /// Password
    #[arg(long, env = "YOURLS_PASSWORD", global = true, hide_env_values = true)]
    password: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shorten url
    Shorten {
        /// Url to shorten
        url: String,
        /// Custom keyword
        #[arg(long)]
        keyword: Option<String>,
        /// Title, saves the server from fetching the page
        #[arg(long)]
        title: Option<String>,
    },

    /// Expand a short url
    Expand {
        /// Short url or keyword
        url: String,
    },

    /// Show statistics for a short url
    #[command(name = "url-stats", alias = "get_url_stats")]
    UrlStats {
        /// Short url or keyword
        url: String,
    },

    /// Show link statistics
    Stats {
        /// One of top, bottom, rand, last
        #[arg(long, default_value = "top")]
        filter: String,
        /// Number of links to list
        #[arg(long, default_value_t = DEFAULT_STATS_LIMIT)]
        limit: u32,
    },

    /// Show database totals
    #[command(name = "db-stats")]
    DbStats,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Shorten { .. } => "shorten",
            Self::Expand { .. } => "expand",
            Self::UrlStats { .. } => "url-stats",
            Self::Stats { .. } => "stats",
            Self::DbStats => "db-stats",
        }
    }
}

fn run(server: ServerOpts, command: Commands) -> Result<(), YourlsError> {
    let args = ServerArgs {
        api_url: server.apiurl,
        username: server.username,
        password: server.password,
        token: server.token,
    };
    let client = get_server(&args)?;

    match command {
        Commands::Shorten {
            url,
            keyword,
            title,
        } => {
            let short = client.shorten(&url, keyword.as_deref(), title.as_deref())?;
            println!("{}", short.short_url);
        }
        Commands::Expand { url } => {
            println!("{}", client.expand(&url)?);
        }
        Commands::UrlStats { url } => {
            let link = client.url_stats(&url)?;
            println!("shorturl:  {}", link.short_url.as_deref().unwrap_or("-"));
            println!("url:       {}", link.url.as_deref().unwrap_or("-"));
            println!("title:     {}", link.title.as_deref().unwrap_or("-"));
            println!("timestamp: {}", link.timestamp.as_deref().unwrap_or("-"));
            println!("ip:        {}", link.ip.as_deref().unwrap_or("-"));
            println!("clicks:    {}", link.clicks.unwrap_or(0));
        }
        Commands::Stats { filter, limit } => {
            let report = client.stats(&filter, limit)?;
            for link in &report.links {
                println!(
                    "{}\t{}\t{}",
                    link.clicks.unwrap_or(0),
                    link.short_url.as_deref().unwrap_or("-"),
                    link.url.as_deref().unwrap_or("-"),
                );
            }
            println!(
                "total links: {}, total clicks: {}",
                report.stats.total_links.unwrap_or(0),
                report.stats.total_clicks.unwrap_or(0)
            );
        }
        Commands::DbStats => {
            let stats = client.db_stats()?;
            println!(
                "total links: {}, total clicks: {}",
                stats.total_links.unwrap_or(0),
                stats.total_clicks.unwrap_or(0)
            );
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("yourls={log_level}"))),
        )
        .with_writer(std::io::stderr)
        .init();

    let command_name = cli.command.name();
    if let Err(err) = run(cli.server, cli.command) {
        eprintln!("FATAL! {err} executing {command_name}");
        std::process::exit(1);
    }
}
