use dotenv::dotenv;
use std::env;
use tracing_subscriber::EnvFilter;
use url_builder::config::{self, BASE_URL_VAR};
use url_builder::error::Result;
use url_builder::url;

/// Builds a url from `URL_BUILDER_BASE` and the command line.
///
/// Every `name=value` argument becomes a query parameter, every other argument a
/// path segment. With `--fetch` the url is also requested.
async fn run() -> Result<()> {
    config::validate_env_vars()?;
    let base = config::get_required_env_var(BASE_URL_VAR)?;

    let mut fetch = false;
    let mut builder = url(&base);
    for arg in env::args().skip(1) {
        if arg == "--fetch" {
            fetch = true;
            continue;
        }

        builder = match arg.split_once('=') {
            Some((name, value)) => builder.query_param(name, value),
            None => builder.append([arg.as_str()]),
        };
    }

    println!("Built URL: {builder}");

    let parsed = builder.build_url()?;
    let components = serde_json::json!({
        "url": parsed,
        "scheme": parsed.scheme(),
        "host": parsed.host_str(),
        "port": parsed.port_or_known_default(),
        "path": parsed.path(),
        "query": parsed.query(),
        "params": builder.query_params(),
    });
    println!("{}", serde_json::to_string_pretty(&components)?);

    if fetch {
        println!("Sending request to {parsed}");
        let response = reqwest::get(parsed).await?;
        println!("Response status: {}", response.status());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
