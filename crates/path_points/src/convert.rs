use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::{Precision, Step};
use tracing::{debug, debug_span};

use crate::curve::{CurveSampler, CurveSampling};
use crate::lexer::tokenize;
use crate::state::{Context, PathState};
use crate::SubPath;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Decimal digits every coordinate is rounded to.
    pub precision: Precision,
    /// Spacing of the points generated for `H`/`V` lines.
    pub step: Step,
    /// How `C`/`c` curves are turned into points.
    pub curve: CurveSampling,
    /// Close the open sub-path when a move command starts a new one.
    pub close_on_move: bool,
    /// Most points a single `H`/`V`/`C` command may produce. Commands over
    /// the limit are skipped with a warning.
    pub point_limit: usize,
}

impl ConvertOptions {
    pub const DEFAULT_POINT_LIMIT: usize = 100_000;
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            precision: Precision::default(),
            step: Step::default(),
            curve: CurveSampling::default(),
            close_on_move: false,
            point_limit: ConvertOptions::DEFAULT_POINT_LIMIT,
        }
    }
}

/// Converts path data into the points of its closed sub-paths.
///
/// ```
/// let sub_paths = path_points::convert("M0,0 H20 Z").unwrap();
/// let points = sub_paths[0].iter().map(|p| p.to_array()).collect::<Vec<_>>();
/// assert_eq!(points, vec![[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]]);
/// ```
pub fn convert(path: &str) -> Result<Vec<SubPath>> {
    convert_with(path, &ConvertOptions::default())
}

pub fn convert_with(path: &str, options: &ConvertOptions) -> Result<Vec<SubPath>> {
    convert_with_sampler(path, options, &options.curve)
}

/// Like [`convert_with`] but samples curves with a caller supplied sampler
/// instead of `options.curve`.
pub fn convert_with_sampler(
    path: &str,
    options: &ConvertOptions,
    sampler: &dyn CurveSampler,
) -> Result<Vec<SubPath>> {
    let lexemes = tokenize(path)?;
    let cx = Context { options, sampler };

    let state = lexemes.iter().fold(PathState::default(), |state, lexeme| {
        let _span = debug_span!("command", text = lexeme.text).entered();
        debug!(
            letter = %lexeme.command.letter(),
            arguments = ?lexeme.command.arguments(),
            "parsed"
        );
        let state = state.apply(&lexeme.command, &cx);
        debug!(cursor = ?state.cursor(), last = ?state.open().last(), "applied");
        state
    });

    Ok(state.finish())
}
