use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for srfft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test {
        /// Also run the library tests without the `std` feature
        #[arg(long)]
        no_std: bool,
    },
    Clippy,
    Fmt,
    Analyze,
    Bench,
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status()?,
        Commands::Test { no_std } => {
            let status = test_command(&cfg).status()?;
            if no_std && status.success() {
                test_no_std_command().status()?
            } else {
                status
            }
        }
        Commands::Clippy => clippy_command().status()?,
        Commands::Fmt => fmt_command().status()?,
        Commands::Analyze => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                fmt
            } else {
                clippy_command().status()?
            }
        }
        Commands::Bench => bench_command(&cfg).status()?,
    };

    std::process::exit(status.code().unwrap_or(1));
}
