use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rowscale::TargetSpec;

#[derive(Parser, Debug)]
#[command(name = "rowscale", version, about = "Resize PNG images one scanline at a time")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resize to exact dimensions; -1 derives that dimension from the
    /// other one, preserving the aspect ratio. May enlarge.
    Resize(ResizeArgs),
    /// Shrink to fit within bounds, preserving the aspect ratio; -1 lifts
    /// the bound on that axis. Never enlarges.
    Fit(FitArgs),
}

#[derive(Args, Debug)]
struct ResizeArgs {
    /// Input PNG file
    input: PathBuf,

    /// Output PNG file
    output: PathBuf,

    /// Target width in pixels, or -1 to derive from the height
    #[arg(allow_negative_numbers = true)]
    width: i64,

    /// Target height in pixels, or -1 to derive from the width
    #[arg(allow_negative_numbers = true)]
    height: i64,
}

#[derive(Args, Debug)]
struct FitArgs {
    /// Input PNG file
    input: PathBuf,

    /// Output PNG file
    output: PathBuf,

    /// Maximum width in pixels, or -1 for no width limit
    #[arg(allow_negative_numbers = true)]
    max_width: i64,

    /// Maximum height in pixels, or -1 for no height limit
    #[arg(allow_negative_numbers = true)]
    max_height: i64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resize(args) => {
            let spec = TargetSpec::Exact {
                width: parse_dimension(args.width, "width")?,
                height: parse_dimension(args.height, "height")?,
            };
            run(&args.input, &args.output, spec)
        }
        Command::Fit(args) => {
            let spec = TargetSpec::BoundedFit {
                max_width: parse_dimension(args.max_width, "max width")?,
                max_height: parse_dimension(args.max_height, "max height")?,
            };
            run(&args.input, &args.output, spec)
        }
    }
}

/// -1 is the sentinel for "derive" / "no limit"; anything else must be a
/// positive integer.
fn parse_dimension(value: i64, name: &str) -> anyhow::Result<Option<u32>> {
    match value {
        -1 => Ok(None),
        v if v >= 1 => {
            let v = u32::try_from(v).with_context(|| format!("{name} {v} is out of range"))?;
            Ok(Some(v))
        }
        v => anyhow::bail!("invalid {name} {v}: must be a positive integer or -1"),
    }
}

fn run(input: &Path, output: &Path, spec: TargetSpec) -> anyhow::Result<()> {
    rowscale::resize_file(input, output, spec)
        .with_context(|| format!("resize '{}' -> '{}'", input.display(), output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_sentinel() {
        assert_eq!(parse_dimension(-1, "width").unwrap(), None);
    }

    #[test]
    fn test_parse_dimension_positive() {
        assert_eq!(parse_dimension(640, "width").unwrap(), Some(640));
    }

    #[test]
    fn test_parse_dimension_rejects_zero_and_negatives() {
        assert!(parse_dimension(0, "width").is_err());
        assert!(parse_dimension(-2, "height").is_err());
    }
}
