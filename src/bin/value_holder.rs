use basic_demos::{DemoRunner, OutputArgs, ValueDemo};
use clap::Parser;

#[derive(Parser)]
#[command(name = "value_holder")]
#[command(about = "Holds a single value and checks its sign")]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.output.init_logging();

    DemoRunner::new(ValueDemo::default())
        .with_format(args.output.format())
        .run_to_stdio()?;

    Ok(())
}
