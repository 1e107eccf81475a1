use basic_demos::{DemoRunner, OutputArgs, RectangleDemo};
use clap::Parser;

#[derive(Parser)]
#[command(name = "rectangle")]
#[command(about = "Computes the signed area of a rectangle from two corners")]
struct Args {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.output.init_logging();

    DemoRunner::new(RectangleDemo::default())
        .with_format(args.output.format())
        .run_to_stdio()?;

    Ok(())
}
