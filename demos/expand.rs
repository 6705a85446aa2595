use std::io;

use yourls::{Auth, YourlsClient};

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
    let short_url = std::env::var("YOURLS_SHORTURL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_SHORTURL environment variable is required",
        )
    })?;

    let client = YourlsClient::new(api_url, Auth::signature(token)?)?;
    let long_url = client.expand(&short_url)?;
    println!("{short_url} -> {long_url}");

    Ok(())
}
