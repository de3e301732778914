use telldus_auth::cli::{self, Command, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let Some(command) = Command::from_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    // Load .env
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "telldus_auth=info".into());
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    cli::run(&command, &mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
