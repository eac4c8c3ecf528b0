use rayon::prelude::*;

use crate::config::ColorConfig;
use crate::error::Result;
use crate::math::{color_parse, gradient};
use crate::types::GradientRequest;

/// Convert a whole series palette to 6-digit hex in parallel.
///
/// Output order matches input order. On failure the error of the earliest
/// failing input is returned.
pub fn codes_to_hex(colors: &[String], config: &ColorConfig) -> Result<Vec<String>> {
    let results: Vec<Result<String>> = colors
        .par_iter()
        .map(|color| color_parse::code_to_hex(color, config))
        .collect();
    results.into_iter().collect()
}

/// Build several gradients in parallel; each request is independent.
pub fn gradients(requests: &[GradientRequest], config: &ColorConfig) -> Result<Vec<Vec<String>>> {
    let results: Vec<Result<Vec<String>>> = requests
        .par_iter()
        .map(|req| gradient::colors_between(&req.from, &req.to, req.steps, config))
        .collect();
    results.into_iter().collect()
}
