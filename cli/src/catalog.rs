//! Functions the CLI can name on the command line.
//!
//! ```text
//! f, g, k0, k1, ident, succ, undef, k12_3   built-ins
//! k:<value>:<steps>                         constant function
//! graph:<i>/<o>/<t>,<i>/<o>/<t>,...         finite graph
//! ```

use anyhow::{Context, Result, bail};

use dovetail_core::{PartialFunction, Steps, generators};

pub const BUILTINS: &[&str] = &["f", "g", "k0", "k1", "ident", "succ", "undef", "k12_3"];

/// f(0) = 1 in 3 steps, f(1) = 7 in 1 step, undefined elsewhere.
fn sample_f() -> Result<PartialFunction> {
    Ok(PartialFunction::from_tuples("f", [(0, 1, 3), (1, 7, 1)])?)
}

/// g(0) = 5 in 1 step, undefined elsewhere.
fn sample_g() -> Result<PartialFunction> {
    Ok(PartialFunction::from_tuples("g", [(0, 5, 1)])?)
}

pub fn resolve(arg: &str) -> Result<PartialFunction> {
    let arg = arg.trim();
    match arg {
        "f" => return sample_f(),
        "g" => return sample_g(),
        "k0" => return Ok(generators::k0()),
        "k1" => return Ok(generators::k1()),
        "ident" => return Ok(generators::identity()),
        "succ" => return Ok(generators::successor()),
        "undef" => return Ok(generators::undefined()),
        "k12_3" => return Ok(generators::constant(12, Steps::new(3)?)),
        _ => {}
    }

    if let Some(rest) = arg.strip_prefix("k:") {
        let (value, steps) = rest
            .split_once(':')
            .with_context(|| format!("expected k:<value>:<steps>, got {arg:?}"))?;
        let value = value.parse().with_context(|| format!("bad value in {arg:?}"))?;
        let steps: u64 = steps.parse().with_context(|| format!("bad steps in {arg:?}"))?;
        return Ok(generators::constant(value, Steps::new(steps)?));
    }

    if let Some(rest) = arg.strip_prefix("graph:") {
        let mut triples = Vec::new();
        for entry in rest.split(',').filter(|e| !e.trim().is_empty()) {
            let parts: Vec<&str> = entry.trim().split('/').collect();
            let [input, output, steps] = parts.as_slice() else {
                bail!("expected <input>/<output>/<steps>, got {entry:?}");
            };
            triples.push((
                input.parse().with_context(|| format!("bad input in {entry:?}"))?,
                output.parse().with_context(|| format!("bad output in {entry:?}"))?,
                steps.parse().with_context(|| format!("bad steps in {entry:?}"))?,
            ));
        }
        return PartialFunction::from_tuples(arg, triples)
            .with_context(|| format!("invalid graph {arg:?}"));
    }

    bail!(
        "unknown function {arg:?}; expected one of {}, k:<value>:<steps> or graph:<i>/<o>/<t>,...",
        BUILTINS.join(", ")
    )
}
