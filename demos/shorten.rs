use std::io;

use yourls::ServerArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = std::env::var("YOURLS_API_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_API_URL environment variable is required",
        )
    })?;
    let url = std::env::var("YOURLS_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YOURLS_URL environment variable is required",
        )
    })?;
    let keyword = std::env::var("YOURLS_KEYWORD").ok();
    let title = std::env::var("YOURLS_TITLE").ok();

    let args = ServerArgs {
        api_url,
        username: std::env::var("YOURLS_USERNAME").ok(),
        password: std::env::var("YOURLS_PASSWORD").ok(),
        token: std::env::var("YOURLS_TOKEN").ok(),
    };

    let short = yourls::convenience::shorten(&args, &url, keyword.as_deref(), title.as_deref())?;
    println!(
        "short_url: {}, title: {:?}, keyword: {:?}",
        short.short_url, short.title, short.keyword
    );

    Ok(())
}
