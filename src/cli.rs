/// CLI argument parsing and help text

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Spellout Server v{}", version);
    println!("Spells out decimal monetary amounts in English, as text or over HTTP");
    println!();
    println!("USAGE:");
    println!("    spellout_server [OPTIONS] [AMOUNT]");
    println!();
    println!("OPTIONS:");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start HTTP server on default port 3000");
    println!("    spellout_server --server");
    println!();
    println!("    # Start server on custom port");
    println!("    spellout_server --server --port 8080");
    println!();
    println!("    # CLI mode: spell out a single amount");
    println!("    spellout_server 1000000000.01");
    println!("    # -> ONE BILLION DOLLARS AND ONE CENT");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /convert      - Spell out a decimal amount");
    println!("    GET    /health       - Health check");
    println!("    GET    /stats        - Conversion counters");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PORT                             - Server port when --port is not given");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 60)");
    println!("    LOG_FORMAT                       - Console log format (compact/json)");
    println!("    RUST_LOG                         - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be provided via a .env file in the working directory");
}

pub fn print_version() {
    println!("Spellout Server v{}", env!("CARGO_PKG_VERSION"));
}
