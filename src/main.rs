use clap::Parser;
use std::path::PathBuf;
use whitening_consensus::utils::consts::{DEFAULT_HEADER_MODE, DEFAULT_LDR};
use whitening_consensus::utils::logging::init_logging;
use whitening_consensus::{RunConfig, run};

#[derive(Parser, Debug)]
#[command(author, version, about = "LoRa whitening sequence consensus utility", long_about = None)]
struct Cli {
    /// Input file with one labelled line of 16-bit binary strings per capture
    #[arg(long)]
    filename: PathBuf,

    /// PPM / spreading factor of the input and the desired consensus
    #[arg(long)]
    ppm: u32,

    /// Header mode label (explicit or implicit)
    #[arg(long = "header_mode", visible_alias = "header-mode", default_value = DEFAULT_HEADER_MODE)]
    header_mode: String,

    /// Low data rate label (ldr or empty)
    #[arg(long, default_value = DEFAULT_LDR)]
    ldr: String,

    /// Directory receiving the declaration file
    #[arg(long = "output_dir", visible_alias = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Also write a JSON run report here
    #[arg(long)]
    report: Option<PathBuf>,

    /// Do not draw the voting progress bar
    #[arg(long = "no_progress", visible_alias = "no-progress")]
    no_progress: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = RunConfig::new(cli.filename, cli.ppm).and_then(|config| {
        let config = config
            .with_header_mode(cli.header_mode)
            .with_ldr(cli.ldr)
            .with_output_dir(cli.output_dir)
            .with_report(cli.report)
            .with_progress(!cli.no_progress);
        run(&config)
    });

    match result {
        Ok(summary) => {
            tracing::info!(
                "Done: {}[{}] -> {}",
                summary.declaration_name,
                summary.consensus.len(),
                summary.output_file.display()
            );
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
