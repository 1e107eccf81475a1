use crate::core::runner::OutputFormat;
use crate::utils::logger;
use clap::Args;

/// Flags shared by every demo binary. All are optional: with none given a
/// binary runs its fixed scenario and prints text.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn init_logging(&self) {
        match self.format() {
            OutputFormat::Json => logger::init_json_logger(self.verbose),
            OutputFormat::Text => logger::init_cli_logger(self.verbose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestArgs {
        #[command(flatten)]
        output: OutputArgs,
    }

    #[test]
    fn test_no_flags_means_text() {
        let args = TestArgs::try_parse_from(["demo"]).unwrap();
        assert!(!args.output.verbose);
        assert_eq!(args.output.format(), OutputFormat::Text);
    }

    #[test]
    fn test_json_and_verbose_flags() {
        let args = TestArgs::try_parse_from(["demo", "--json", "-v"]).unwrap();
        assert!(args.output.verbose);
        assert_eq!(args.output.format(), OutputFormat::Json);
    }
}
