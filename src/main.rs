use clap::Parser;
use std::time::Duration;
use microinject::logging::{init_logging, LoggingConfig};
use microinject::{Game, GameOptions};

#[derive(Parser)]
#[command(name = "microinject")]
#[command(about = "Explore the MicroInject Inc. file system")]
#[command(version)]
struct Cli {
    /// Player name (skips the name prompt)
    #[arg(long = "name")]
    name: Option<String>,

    /// Bypass every lock
    #[arg(long = "dev")]
    dev: bool,

    /// Print file contents at once instead of revealing them
    #[arg(long = "no-animate")]
    no_animate: bool,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Delay between revealed characters, in milliseconds
    #[arg(long = "char-delay-ms", default_value_t = 15)]
    char_delay_ms: u64,

    /// Delay before the screen is cleared on exit, in milliseconds
    #[arg(long = "exit-delay-ms", default_value_t = 2000)]
    exit_delay_ms: u64,

    /// Log filter written to stderr (overridden by MICROINJECT_LOG)
    #[arg(long = "log-level", default_value = "off")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: cli.log_level,
        color: !cli.no_color,
    };
    if let Err(e) = init_logging(&logging) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut game = Game::with_terminal(GameOptions {
        player_name: cli.name,
        dev_mode: cli.dev,
        animate: !cli.no_animate,
        color: !cli.no_color,
        char_delay: Duration::from_millis(cli.char_delay_ms),
        exit_delay: Duration::from_millis(cli.exit_delay_ms),
        world: None,
    });

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    if let Err(e) = game.start(stdin).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
