use serde_json::Value;
use std::io;

/// Write output as CSV to stdout. A schedule becomes one row per month and a
/// comparison one row per loan; anything else degrades to field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(schedule)) = map.get("schedule") {
                write_rows(&mut wtr, schedule);
            } else if let Some(Value::Array(comparisons)) = map.get("comparisons") {
                write_comparisons(&mut wtr, comparisons);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_rows(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = wtr.write_record([&format_csv_value(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}

fn write_comparisons(wtr: &mut csv::Writer<io::StdoutLock<'_>>, comparisons: &[Value]) {
    let _ = wtr.write_record([
        "index",
        "payment_type",
        "total_amount",
        "total_interest",
        "total_cost",
        "monthly_payment_avg",
    ]);
    for (i, entry) in comparisons.iter().enumerate() {
        let summary = entry.get("summary").cloned().unwrap_or(Value::Null);
        let cell = |key: &str| summary.get(key).map(format_csv_value).unwrap_or_default();
        let _ = wtr.write_record([
            i.to_string(),
            cell("payment_type"),
            cell("total_amount"),
            cell("total_interest"),
            cell("total_cost"),
            cell("monthly_payment_avg"),
        ]);
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
