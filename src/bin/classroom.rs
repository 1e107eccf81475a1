use basic_demos::utils::validation::Validate;
use basic_demos::{ClassroomDemo, DemoRunner, OutputArgs, Roster};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Averages student grades and picks the top student")]
struct Args {
    /// TOML roster to use instead of the built-in students
    #[arg(short, long)]
    roster: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    args.output.init_logging();

    let demo = match &args.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path.display());
            let roster = match Roster::from_file(path).and_then(|r| r.validate().map(|_| r)) {
                Ok(roster) => roster,
                Err(e) => {
                    tracing::error!(
                        "❌ Roster rejected: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            ClassroomDemo::new(roster.into_classroom())
        }
        None => ClassroomDemo::default(),
    };

    DemoRunner::new(demo)
        .with_format(args.output.format())
        .run_to_stdio()?;

    Ok(())
}
