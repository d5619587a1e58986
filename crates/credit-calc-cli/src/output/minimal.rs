use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: prefer the summary's headline figures, then the comparison
/// best index, then fall back to the first field available.
pub fn print_minimal(value: &Value) {
    let target = value.get("summary").unwrap_or(value);

    let priority_keys = [
        "total_cost",
        "prepayment_savings",
        "monthly_payment_avg",
        "total_interest",
        "best_index",
    ];

    if let Value::Object(map) = target {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(target));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
