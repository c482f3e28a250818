use std::path::PathBuf;

use clap::Parser;

/// A local task tracker for the terminal
#[derive(Parser)]
#[command(name = "tempo", version, about)]
struct Cli {
    /// Data directory (default: $TEMPO_DIR, then ~/.tempo)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .or_else(|| std::env::var_os("TEMPO_DIR").map(PathBuf::from))
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tempo")));

    let Some(data_dir) = data_dir else {
        eprintln!("error: cannot determine data directory (set --data-dir or $TEMPO_DIR)");
        std::process::exit(1);
    };

    if let Err(e) = tempo::tui::run(&data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
