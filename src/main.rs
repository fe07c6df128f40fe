use anyhow::Result;
use clap::Parser;
use quran_translit::convert::{run_conversion, ConversionConfig};
use quran_translit::runlog::{write_error_dump, RunLog};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "quran-translit")]
#[command(about = "Convert a Quran transliteration SQL dump into per-surah JSON files")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Project root containing the assets/quran tree
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// SQL dump to convert (defaults to the asset layout under --root)
    #[arg(long)]
    sql: Option<PathBuf>,

    /// Surah metadata JSON (defaults to the asset layout under --root)
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Directory for generated files and logs (defaults to the asset layout under --root)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn conversion_config(&self) -> ConversionConfig {
        let mut config = ConversionConfig::from_root(&self.root);
        if let Some(ref sql) = self.sql {
            config.sql_path = sql.clone();
        }
        if let Some(ref metadata) = self.metadata {
            config.metadata_path = metadata.clone();
        }
        if let Some(ref output) = self.output {
            config.output_dir = output.clone();
        }
        config
    }
}

fn run(config: &ConversionConfig) -> Result<()> {
    let mut log = RunLog::new();
    run_conversion(config, &mut log)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = cli.conversion_config();

    match run(&config) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            let error_path = config.error_path();
            if let Err(dump_err) = write_error_dump(&error_path, &e) {
                warn!(error = %dump_err, "Failed to write error dump");
            }
            ExitCode::FAILURE
        }
    }
}
