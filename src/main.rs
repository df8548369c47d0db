use clap::Parser;

use spanrank::{run_ranking, PdfSpanSource, RunOptions, SpanSource};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Spans { file }) => {
            match PdfSpanSource::new().parse(std::path::Path::new(&file)) {
                Ok(spans) => display::print_spans(&file, &spans),
                Err(e) => fail(&e),
            }
        }
        None => {
            let mut options = RunOptions::new(&cli.config, &cli.input_dir, &cli.output);
            options.limit = cli.limit;
            options.progress = true;

            match run_ranking(&options, &PdfSpanSource::new()) {
                Ok(summary) => display::print_summary(&summary),
                Err(e) => fail(&e),
            }
        }
    }
}

fn fail(e: &spanrank::Error) -> ! {
    log::error!("{}", e);
    eprintln!("❌ {}", e);
    std::process::exit(1);
}
