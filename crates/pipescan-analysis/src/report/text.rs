//! Human-readable summary report.

use super::types::ProjectSummary;

const RULE_WIDTH: usize = 80;

/// Render the console report. `top_tables` bounds the table listing.
pub fn render_text_report(summary: &ProjectSummary, top_tables: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let meta = &summary.scan_metadata;
    let stats = &summary.project_statistics;
    let sql = &summary.sql_objects_summary;

    let mut out = String::new();
    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };

    line("");
    banner(&mut line, &rule, "DATA ENGINEERING PROJECT ANALYSIS REPORT");
    line("");
    line(&format!("Project: {}", meta.project_name));
    line(&format!("Scan Date: {}", meta.scan_timestamp));
    line(&format!("Path: {}", meta.project_path));
    line("");

    banner(&mut line, &rule, "PROJECT STATISTICS");
    line("");
    line(&format!("Total Files: {}", stats.total_files));
    line(&format!("Total Directories: {}", stats.total_directories));
    line(&format!(
        "Total Size: {:.2} MB",
        stats.total_size_bytes as f64 / 1024.0 / 1024.0
    ));
    line(&format!("Total Lines of Code: {}", thousands(stats.total_loc)));
    line("");
    line(&format!("Files with Spark: {}", stats.files_with_spark));
    line(&format!("Files with SQL: {}", stats.files_with_sql));
    line("");
    line("File Type Breakdown:");
    for (extension, count) in &stats.file_types {
        line(&format!("  {extension}: {count}"));
    }
    line("");

    banner(
        &mut line,
        &rule,
        &format!("CONNECTORS DETECTED ({})", summary.connector_summary.len()),
    );
    if summary.connector_summary.is_empty() {
        line("No connectors detected");
    } else {
        for (name, usage) in &summary.connector_summary {
            line("");
            line(&format!("{} ({})", name.to_uppercase(), usage.kind));
            line(&format!("  Files: {}", usage.total_files));
            line(&format!("  Instances: {}", usage.total_instances));
        }
    }
    line("");

    banner(&mut line, &rule, "SQL OBJECTS");
    line("");
    line(&format!("Total Tables Referenced: {}", sql.total_tables));
    line(&format!("Total Views Referenced: {}", sql.total_views));

    if !sql.tables.is_empty() && top_tables > 0 {
        line("");
        line(&format!("Top {top_tables} Tables:"));
        for table in sql.tables.iter().take(top_tables) {
            line(&format!("  - {table}"));
        }
    }

    line("");
    line(&rule);
    out
}

fn banner(line: &mut impl FnMut(&str), rule: &str, title: &str) {
    line(rule);
    line(title);
    line(rule);
}

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
