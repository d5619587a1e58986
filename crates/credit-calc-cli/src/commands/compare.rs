use clap::Args;
use serde_json::Value;

use credit_calc_core::api::{self, ComparisonRequest};

use crate::input;

/// Arguments for loan comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON input file with {credits: [...]}
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: ComparisonRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required for comparison".into());
    };

    let result = api::compare(&request)?;
    let best = result.best_index();
    let mut value = serde_json::to_value(result)?;
    // Derived on demand for display; the core does not persist it
    if let (Some(b), Value::Object(map)) = (best, &mut value) {
        map.insert("best_index".into(), Value::from(b));
    }
    Ok(value)
}
