use std::io;

use yourls::ServerArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = std::env::var("YOURLS_API_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_API_URL environment variable is required",
        )
    })?;
    let args = ServerArgs {
        api_url,
        username: std::env::var("YOURLS_USERNAME").ok(),
        password: std::env::var("YOURLS_PASSWORD").ok(),
        token: std::env::var("YOURLS_TOKEN").ok(),
    };

    let stats = yourls::convenience::db_stats(&args)?;
    println!(
        "total_links: {:?}, total_clicks: {:?}",
        stats.total_links, stats.total_clicks
    );

    Ok(())
}
