use anyhow::Context;
use clap::Parser;
use jsolve::survey::{DEFAULT_DATA, EXPECTED_BOARDS};
use jsolve::{FastSolver, JSolve, Survey, SurveyConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// For every board with fixed top, right and bottom borders, count the left sides that
/// complete it to a sudoku with a unique solution.
///
/// Prints one line per board: `<board>, <uniques>, <non-uniques>, <completions>`.
#[derive(Parser, Debug)]
#[command(name = "left-side-survey", version)]
struct Args {
    /// Boards to survey, one 81-character line each
    #[arg(long, env = "JSOLVE_DATA", default_value = DEFAULT_DATA)]
    data: PathBuf,

    /// Number of boards the data file must contain
    #[arg(long, env = "JSOLVE_EXPECTED_BOARDS", default_value_t = EXPECTED_BOARDS)]
    expected_boards: usize,

    /// Accept any number of boards
    #[arg(long)]
    any_count: bool,

    /// Stop counting solutions after this many
    #[arg(long, env = "JSOLVE_MAX_SOLUTIONS", default_value_t = 2)]
    max_solutions: i32,

    /// Worker threads [default: one per core]
    #[arg(short, long, env = "JSOLVE_JOBS")]
    jobs: Option<usize>,

    /// Boards tested between two flushes of the output
    #[arg(long, env = "JSOLVE_CHUNK_SIZE", default_value_t = 256)]
    chunk_size: usize,

    /// Survey only this many randomly chosen boards
    #[arg(long, env = "JSOLVE_SAMPLE")]
    sample: Option<usize>,

    /// Seed for --sample
    #[arg(long, env = "JSOLVE_SEED", default_value_t = 0)]
    seed: u64,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> SurveyConfig {
        SurveyConfig {
            data: self.data,
            expected_boards: if self.any_count { None } else { Some(self.expected_boards) },
            max_solutions: self.max_solutions,
            jobs: self.jobs,
            chunk_size: self.chunk_size,
            sample: self.sample,
            seed: self.seed,
        }
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "jsolve=debug,left_side_survey=debug,info"
    } else {
        "jsolve=info,left_side_survey=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = args.into_config();
    tracing::debug!(?config, "starting survey");

    let survey = Survey::new(config, JSolve::new(FastSolver)).context("invalid settings")?;
    let boards = survey
        .load()
        .with_context(|| format!("failed to load boards from {}", survey.config().data.display()))?;
    let summary = survey.run(&boards, io::stdout().lock()).context("survey failed")?;

    tracing::info!(
        "{} boards, {} of {} completions unique, {} not unique",
        summary.boards,
        summary.uniques,
        summary.completions,
        summary.non_uniques
    );
    Ok(())
}
