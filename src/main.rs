use spellout_server::cli;
use spellout_server::engine::convert_amount_to_words;
use spellout_server::logging;
use spellout_server::server::{create_router, AppState, ConversionStats};
use spellout_server::text_input::parse_amount;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    // Initialize tracing before anything else happens
    logging::init_logging();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        cli::print_help();
        return Ok(());
    }

    if args.contains(&"--version".to_string()) || args.contains(&"-v".to_string()) {
        cli::print_version();
        return Ok(());
    }

    // Check if we should run in server mode
    let server_mode = args.contains(&"--server".to_string());
    let port = args
        .iter()
        .position(|arg| arg == "--port")
        .and_then(|pos| args.get(pos + 1))
        .and_then(|p| p.parse::<u16>().ok())
        .or_else(|| env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(3000);

    if server_mode {
        let request_timeout = load_request_timeout();

        let state = AppState {
            stats: Arc::new(ConversionStats::default()),
            request_timeout,
        };

        let app = create_router(state);

        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("Spellout Server v{}", env!("CARGO_PKG_VERSION"));
        println!("\nServer listening on http://{}", addr);
        println!("\nAvailable endpoints:");
        println!("  POST   /convert      - Spell out a decimal amount");
        println!("  GET    /health       - Health check");
        println!("  GET    /stats        - Conversion counters");
        println!("\nRequest Timeout:");
        println!("  Timeout: {} seconds", request_timeout.as_secs());
        println!("  Configure: REQUEST_TIMEOUT_SECONDS (default: 60)");

        axum::serve(listener, app).await?;
    } else {
        // CLI mode - spell out the arguments as a single amount
        let text = args[1..].join(" ");

        if text.trim().is_empty() {
            cli::print_help();
            return Ok(());
        }

        match parse_amount(&text).and_then(|amount| convert_amount_to_words(&amount)) {
            Ok(words) => println!("{}", words),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Load request timeout configuration from environment variable
fn load_request_timeout() -> Duration {
    let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60);

    Duration::from_secs(timeout_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_request_timeout_default() {
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let timeout = load_request_timeout();
        assert_eq!(
            timeout,
            Duration::from_secs(60),
            "Default timeout should be 60 seconds"
        );
    }
}
