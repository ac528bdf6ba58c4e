use clap::{Parser, Subcommand};

mod build;
mod config;
mod diagnostics;
mod model;
mod render;
mod snapshot;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "build-compare")]
#[command(about = "Build-order comparison visualizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a comparison report from two snapshot logs.
    Report {
        /// Snapshot log of the benchmark run.
        #[arg(long)]
        benchmark: String,

        /// Snapshot log of the player's own run.
        #[arg(long)]
        own: String,

        /// Optional JSON config: worker units, side colors.
        #[arg(long)]
        config: Option<String>,

        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            benchmark,
            own,
            config,
            out,
        } => {
            let cfg = match config {
                Some(path) => config::Config::load(&path)?,
                None => config::Config::default(),
            };

            // 1) Parse both snapshot logs. The sides are independent and may
            //    differ in length.
            let bench_series = snapshot::parse_snapshot_file(&benchmark)?;
            let own_series = snapshot::parse_snapshot_file(&own)?;

            // 2) Diff each side into a build-order timeline and aggregate.
            let data = model::build_report_data(&bench_series, &own_series, &cfg)?;

            // 3) Render HTML.
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
