use basic_demos::{CalculatorDemo, DemoRunner, OutputArgs};
use clap::Parser;

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Four-function calculator with a vector sum")]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.output.init_logging();

    // 除以零會在報告中記錄並輸出到 stderr，不影響結束碼
    DemoRunner::new(CalculatorDemo::default())
        .with_format(args.output.format())
        .run_to_stdio()?;

    Ok(())
}
