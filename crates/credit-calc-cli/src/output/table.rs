use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Render calculation output as tables: the summary as field/value rows,
/// the schedule (or comparison list) as one row per entry.
pub fn print_table(value: &Value) {
    let Some(map) = value.as_object() else {
        println!("{}", value);
        return;
    };

    if let Some(Value::Array(comparisons)) = map.get("comparisons") {
        print_comparisons(comparisons, map.get("best_index"));
        return;
    }

    let summary = map.get("summary");
    let schedule = map.get("schedule");

    if let Some(s) = summary {
        print_field_table(s);
    }
    if let Some(Value::Array(rows)) = schedule {
        println!();
        print_row_table(rows);
    }
    if summary.is_none() && schedule.is_none() {
        print_field_table(value);
    }
}

fn print_field_table(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn print_row_table(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("{}", format_value(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(cells);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_comparisons(comparisons: &[Value], best_index: Option<&Value>) {
    let mut builder = Builder::default();
    builder.push_record([
        "#",
        "payment_type",
        "total_amount",
        "total_interest",
        "total_cost",
        "monthly_payment_avg",
    ]);
    for (i, entry) in comparisons.iter().enumerate() {
        let summary = entry.get("summary").cloned().unwrap_or(Value::Null);
        let cell = |key: &str| summary.get(key).map(format_value).unwrap_or_default();
        builder.push_record([
            i.to_string(),
            cell("payment_type"),
            cell("total_amount"),
            cell("total_interest"),
            cell("total_cost"),
            cell("monthly_payment_avg"),
        ]);
    }
    println!("{}", Table::from(builder));

    if let Some(best) = best_index.and_then(Value::as_u64) {
        println!("\nBest option: #{} (lowest total cost)", best);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
