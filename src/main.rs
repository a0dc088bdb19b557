//! EDDIE - Autonomous systems builder portfolio, in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eddie::app::config::{init_config_dir, SinkKind};
use eddie::app::ConfiguredSink;
use eddie::tui::print::DEFAULT_PRINT_WIDTH;
use eddie::Overrides;

/// EDDIE - Autonomous systems builder portfolio, in the terminal
#[derive(Parser, Debug)]
#[command(name = "eddie")]
#[command(about = "Autonomous systems builder portfolio, in the terminal", long_about = None)]
struct Args {
    /// TOML catalog replacing the built-in systems index
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Where contact submissions go
    #[arg(long, value_enum)]
    sink: Option<SinkArg>,

    /// Print the page as plain text and exit
    #[arg(long)]
    print: bool,

    /// Page width for --print
    #[arg(long, default_value_t = DEFAULT_PRINT_WIDTH)]
    width: usize,

    /// Write .eddie/config.toml with defaults and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SinkArg {
    Log,
    File,
}

impl From<SinkArg> for SinkKind {
    fn from(arg: SinkArg) -> Self {
        match arg {
            SinkArg::Log => SinkKind::Log,
            SinkArg::File => SinkKind::File,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    eddie::core::logging::init()?;

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        init_config_dir(&base_dir)?;
        eprintln!("Wrote {}", base_dir.join(".eddie").join("config.toml").display());
        return Ok(());
    }

    let state = eddie::build_state(
        &base_dir,
        Overrides {
            catalog: args.catalog,
            sink: args.sink.map(SinkKind::from),
        },
    )?;

    if args.print {
        print!("{}", eddie::tui::print_page(&state, args.width));
        return Ok(());
    }

    let sink = ConfiguredSink::from_settings(&state.settings.sink, &base_dir);
    eddie::tui::run(state, sink).await?;

    tracing::info!("EDDIE exited");
    Ok(())
}
