//! CLI-specific transforms
//!
//! This module defines the views available through `mdlite inspect`. Each one looks at a
//! different stage of the rendering pipeline.
//!
//! ## Transform Pipeline
//!
//! 1. **Splitting** - Raw text → blocks
//!    - `blocks-simple`: One line per block, source text escaped
//!    - `blocks-json`: Blocks with their final HTML as JSON
//!
//! 2. **Rules** - Block → rule-by-rule rewrites
//!    - `trace-simple`: Each rule that matched, with the block text after it ran
//!    - `trace-json`: The same trace as JSON
//!
//! 3. **Rule set** - No input needed
//!    - `rules`: The standard rules, in application order
//!
//! ## Extra Parameters
//!
//! - `show-unmatched`: When set to "true", traces also list rules that did not match.
//!
//! Example: `mdlite inspect notes.md trace-simple --extra-show-unmatched`

use crate::error::CliError;
use mdlite_render::{BlockTrace, Renderer, RuleSet, Scope};
use serde_json::json;
use std::collections::HashMap;
use std::fmt::Write;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-simple",
    "blocks-json",
    "trace-simple",
    "trace-json",
    "rules",
];

/// Transform used when `inspect` is given none
pub const DEFAULT_TRANSFORM: &str = "trace-simple";

/// Execute a named transform on source text with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let mut params = HashMap::new();
/// params.insert("show-unmatched".to_string(), "true".to_string());
/// let output = execute_transform("# Title", "trace-simple", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, CliError> {
    let renderer = Renderer::new();
    let show_unmatched = extra_params
        .get("show-unmatched")
        .is_some_and(|value| value == "true");

    match transform_name {
        "blocks-simple" => Ok(blocks_to_simple(&renderer.trace(source))),
        "blocks-json" => {
            let blocks: Vec<_> = renderer
                .trace(source)
                .into_iter()
                .map(|block| {
                    json!({
                        "index": block.index,
                        "source": block.source,
                        "html": block.html,
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&blocks)? + "\n")
        }
        "trace-simple" => Ok(trace_to_simple(
            &filter_steps(renderer.trace(source), show_unmatched),
            show_unmatched,
        )),
        "trace-json" => {
            let traces = filter_steps(renderer.trace(source), show_unmatched);
            Ok(serde_json::to_string_pretty(&traces)? + "\n")
        }
        "rules" => Ok(rules_to_simple(renderer.rules())),
        other => Err(CliError::Usage(format!(
            "Unknown transform '{other}'. Use --list-transforms to see all options."
        ))),
    }
}

fn filter_steps(mut traces: Vec<BlockTrace>, show_unmatched: bool) -> Vec<BlockTrace> {
    if !show_unmatched {
        for trace in &mut traces {
            trace.steps.retain(|step| step.matched);
        }
    }
    traces
}

fn blocks_to_simple(traces: &[BlockTrace]) -> String {
    let mut out = String::new();
    for trace in traces {
        let _ = writeln!(out, "[{}] {:?}", trace.index, trace.source);
    }
    out
}

fn trace_to_simple(traces: &[BlockTrace], show_unmatched: bool) -> String {
    let mut out = String::new();
    for trace in traces {
        let _ = writeln!(out, "block {}: {:?}", trace.index, trace.source);
        for step in &trace.steps {
            if step.matched {
                let _ = writeln!(out, "  {:<20} {:?}", step.rule, step.output);
            } else if show_unmatched {
                let _ = writeln!(out, "  {:<20} (no match)", step.rule);
            }
        }
        let _ = writeln!(out, "  => {}", trace.html);
    }
    out
}

fn rules_to_simple(rules: &RuleSet) -> String {
    let mut out = String::new();
    for (index, rule) in rules.rules().iter().enumerate() {
        let scope = match rule.scope() {
            Scope::All => "",
            Scope::First => " (first match only)",
        };
        let _ = writeln!(
            out,
            "{:>2}. {:<20} {}  ->  {}{}",
            index + 1,
            rule.name(),
            rule.pattern(),
            rule.replacement(),
            scope
        );
    }
    out
}
