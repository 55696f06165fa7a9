use clap::{Parser, ValueEnum};
use iced::Theme;
use tracing::info;
use tracing_subscriber::EnvFilter;

use projboard::gui::{self, StartupOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

#[derive(Parser)]
#[command(name = "projboard")]
#[command(about = "Browse, filter and add personal projects")]
struct Cli {
    /// Color theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Start with an empty board instead of the sample projects
    #[arg(long)]
    empty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,projboard={level}")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    info!(theme = ?args.theme, seeded = !args.empty, "starting project board");

    gui::run(StartupOptions {
        theme: args.theme.into(),
        seed_projects: !args.empty,
    })?;

    Ok(())
}
