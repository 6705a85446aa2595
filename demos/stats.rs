use std::io;

use yourls::{Auth, DEFAULT_STATS_LIMIT, YourlsClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = std::env::var("YOURLS_API_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_API_URL environment variable is required",
        )
    })?;
    let token = std::env::var("YOURLS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_TOKEN environment variable is required",
        )
    })?;
    let filter = std::env::var("YOURLS_FILTER").unwrap_or_else(|_| "top".to_owned());

    let client = YourlsClient::new(api_url, Auth::signature(token)?)?;
    let report = client.stats(&filter, DEFAULT_STATS_LIMIT)?;
    for link in &report.links {
        println!("{:?} {:?} clicks: {:?}", link.short_url, link.url, link.clicks);
    }
    println!(
        "total_links: {:?}, total_clicks: {:?}",
        report.stats.total_links, report.stats.total_clicks
    );

    Ok(())
}
