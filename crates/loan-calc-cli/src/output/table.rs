use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Schedule results print in two parts: a summary table of the scalar
/// fields, then one row per repayment period.
pub fn print_table(value: &Value) {
    let envelope = match value {
        Value::Object(map) => map,
        _ => {
            println!("{}", value);
            return;
        }
    };

    let result = envelope.get("result").unwrap_or(value);

    if let Value::Object(res_map) = result {
        // Summary: everything except the schedule itself.
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            if key == "schedule" {
                continue;
            }
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));

        if let Some(Value::Array(rows)) = res_map.get("schedule") {
            println!();
            print_schedule_table(rows);
        }
    } else {
        println!("{}", result);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

const SCHEDULE_COLUMNS: [&str; 5] = ["month", "payment", "principal", "interest", "balance"];

fn print_schedule_table(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty schedule)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|col| map.get(*col).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }
    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("[{} items]", arr.len()),
    }
}
