use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use path_points::{ConvertOptions, CurveSampling, Precision, Tolerance};

use crate::{Cli, SamplerKind};

/// Reads options from a TOML file. Missing keys keep their defaults.
pub fn load(path: &Path) -> Result<ConvertOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse(content: &str) -> Result<ConvertOptions> {
    Ok(toml::from_str(content)?)
}

/// Applies command-line flags on top of `options`.
pub fn apply_flags(mut options: ConvertOptions, cli: &Cli) -> Result<ConvertOptions> {
    if let Some(digits) = cli.precision {
        options.precision = Precision::new(digits)?;
    }
    if cli.close_on_move {
        options.close_on_move = true;
    }
    if let Some(limit) = cli.point_limit {
        options.point_limit = limit;
    }

    let sampler = match cli.sampler {
        Some(kind) => kind,
        None => match options.curve {
            CurveSampling::Flatten { .. } => SamplerKind::Flatten,
            CurveSampling::Uniform { .. } => SamplerKind::Uniform,
        },
    };
    options.curve = match (sampler, options.curve) {
        (SamplerKind::Flatten, current) => {
            let tolerance = match (cli.tolerance, current) {
                (Some(t), _) => Tolerance::new(t)?,
                (None, CurveSampling::Flatten { tolerance }) => tolerance,
                (None, _) => Tolerance::default(),
            };
            CurveSampling::Flatten { tolerance }
        }
        (SamplerKind::Uniform, current) => {
            let segments = match (cli.segments, current) {
                (Some(n), _) => n,
                (None, CurveSampling::Uniform { segments }) => segments,
                (None, _) => CurveSampling::DEFAULT_SEGMENTS,
            };
            CurveSampling::Uniform { segments }
        }
    };
    Ok(options)
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use path_points::{ConvertOptions, CurveSampling, Tolerance};

    use super::{apply_flags, parse};
    use crate::Cli;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("path2points").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_file() {
        let from_file = parse("precision = 1\n[curve]\nkind = \"uniform\"\nsegments = 3").unwrap();
        let options = apply_flags(
            from_file,
            &cli(&["--precision", "4", "--segments", "6", "--point-limit", "50"]),
        )
        .unwrap();
        assert_eq!(options.precision.digits(), 4);
        assert_eq!(options.point_limit, 50);
        assert_eq!(options.curve, CurveSampling::Uniform { segments: 6 });
    }

    #[test]
    fn switching_sampler_uses_its_defaults() {
        let options = apply_flags(ConvertOptions::default(), &cli(&["--sampler", "uniform"])).unwrap();
        assert_eq!(options.curve, CurveSampling::uniform());

        let options = apply_flags(ConvertOptions::default(), &cli(&["--tolerance", "0.1"])).unwrap();
        assert_eq!(
            options.curve,
            CurveSampling::Flatten {
                tolerance: Tolerance::new(0.1).unwrap()
            }
        );
    }

    #[test]
    fn no_flags_keep_defaults() {
        let options = apply_flags(ConvertOptions::default(), &cli(&["M0,0 Z"])).unwrap();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(apply_flags(ConvertOptions::default(), &cli(&["--precision", "99"])).is_err());
        assert!(apply_flags(ConvertOptions::default(), &cli(&["--tolerance", "0"])).is_err());
        assert!(parse("step = \"far\"").is_err());
    }
}
