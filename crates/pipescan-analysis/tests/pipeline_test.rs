//! End-to-end scan tests on temporary project trees.

mod common;

use std::path::Path;

use pipescan_analysis::report::{render_text_report, save_summary, ProjectSummary};
use pipescan_analysis::scanner::{FileRecord, Walker};
use pipescan_analysis::MetadataScanner;
use pipescan_core::config::{CatalogConfig, PipescanConfig};
use pipescan_core::errors::{ErrorCode, PipelineError, ReportError, ScanError};

use common::{shipped_catalog_path, test_catalog, write};

fn scanner(root: &Path) -> MetadataScanner {
    MetadataScanner::with_catalog(root, PipescanConfig::default(), test_catalog()).unwrap()
}

#[test]
fn single_script_with_import_and_connector() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a.py",
        "import boto3\nconn = psycopg2.connect(host='db')\n",
    );

    let summary = scanner(dir.path()).scan();

    let pg = &summary.connector_summary["postgresql"];
    assert_eq!(pg.total_files, 1);
    assert!(pg.total_instances >= 1);
    assert_eq!(pg.files, vec!["a.py"]);
    assert!(summary
        .import_summary
        .top_imports
        .contains(&("import boto3".to_string(), 1)));

    assert_eq!(summary.project_statistics.total_files, 1);
    assert_eq!(summary.project_statistics.total_loc, 2);
    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.files[0].outcome.file_type(), "python");
}

#[test]
fn sql_file_tables() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "queries/report.sql",
        "SELECT * FROM sales.orders o JOIN sales.customers c ON o.cid = c.id",
    );

    let summary = scanner(dir.path()).scan();
    assert_eq!(summary.sql_objects_summary.tables, vec!["customers", "orders"]);
    assert_eq!(summary.sql_objects_summary.total_tables, 2);
    assert_eq!(summary.project_statistics.files_with_sql, 1);
    assert_eq!(summary.project_statistics.directories, vec!["queries"]);
}

#[test]
fn project_without_supported_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "README.md", "# nothing to see");
    write(dir.path(), "node_modules/pkg/index.py", "import psycopg2");

    let summary = scanner(dir.path()).scan();
    assert_eq!(summary.project_statistics.total_files, 0);
    assert_eq!(summary.project_statistics.total_directories, 0);
    assert!(summary.connector_summary.is_empty());
    assert!(summary.sql_objects_summary.tables.is_empty());
    assert!(summary.files.is_empty());
}

#[test]
fn unreadable_file_is_recorded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ok.py", "import os\n");
    write(dir.path(), "gone.py", "import sys\n");

    let scanner = scanner(dir.path());
    let config = PipescanConfig::default();
    let mut records = Walker::new(scanner.root(), &config.scan).walk().data;
    assert_eq!(records.len(), 2);

    // The file disappears between discovery and reading.
    std::fs::remove_file(dir.path().join("gone.py")).unwrap();
    let gone: &FileRecord = &records[0];
    assert_eq!(gone.relative_path, "gone.py");

    let files = scanner.analyze_records(std::mem::take(&mut records));
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].outcome.file_type(), "error");
    assert!(files[0].outcome.analysis().is_none());
    assert_eq!(files[1].outcome.file_type(), "python");
}

#[cfg(unix)]
#[test]
fn permission_denied_file_still_counts() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "locked.sql", "select * from secret");
    let path = dir.path().join("locked.sql");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still read it; nothing to check then.
    if std::fs::read(&path).is_ok() {
        return;
    }

    let summary = scanner(dir.path()).scan();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(summary.project_statistics.total_files, 1);
    assert_eq!(summary.files[0].outcome.file_type(), "error");
    assert!(summary.sql_objects_summary.tables.is_empty());
    assert_eq!(summary.project_statistics.files_with_sql, 0);
}

#[test]
fn missing_project_is_project_not_found() {
    let err = match MetadataScanner::new(Path::new("/no/such/project"), PipescanConfig::default()) {
        Err(e) => e,
        Ok(_) => panic!("expected an error"),
    };
    assert!(matches!(err, PipelineError::Scan(ScanError::ProjectNotFound { .. })));
    assert_eq!(err.error_code(), "PROJECT_NOT_FOUND");
}

#[test]
fn missing_catalog_scans_with_nothing_detected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "import psycopg2\n");

    let config = PipescanConfig {
        catalog: CatalogConfig {
            path: Some(dir.path().join("no_such_catalog.yaml")),
        },
        ..PipescanConfig::default()
    };
    let scanner = MetadataScanner::new(dir.path(), config).unwrap();
    assert!(scanner.catalog().is_empty());

    let summary = scanner.scan();
    assert!(summary.connector_summary.is_empty());
    assert_eq!(summary.project_statistics.total_files, 1);
    assert_eq!(summary.import_summary.total_unique_imports, 1);
}

#[test]
fn shipped_catalog_loads_cleanly_and_detects() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "jobs/ingest.py",
        "\
from pyspark.sql import SparkSession
import boto3

spark = SparkSession.builder.getOrCreate()
df = spark.read.format('jdbc').option('url', 'jdbc:postgresql://db:5432/x').load()
df.write.format('delta').save('s3a://lake/bronze/orders')
",
    );

    let loaded = pipescan_analysis::catalog::load_catalog(&shipped_catalog_path());
    assert!(loaded.is_clean(), "shipped catalog has errors: {:?}", loaded.errors);

    let config = PipescanConfig {
        catalog: CatalogConfig {
            path: Some(shipped_catalog_path()),
        },
        ..PipescanConfig::default()
    };
    let summary = MetadataScanner::new(dir.path(), config).unwrap().scan();

    for name in ["postgresql", "jdbc", "s3", "delta"] {
        assert!(
            summary.connector_summary.contains_key(name),
            "expected connector {name}"
        );
    }
    assert_eq!(summary.files[0].outcome.file_type(), "pyspark");
    assert_eq!(summary.project_statistics.files_with_spark, 1);
}

#[test]
fn report_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "import os\nx = psycopg2.connect(d)\n");
    write(dir.path(), "b.sql", "create view v as select * from t");

    let summary = scanner(dir.path()).scan();
    let out = dir.path().join("out/nested/report.json");
    save_summary(&summary, &out).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["scan_metadata"]["analyzer_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["project_statistics"]["file_types"][".py"], 1);
    assert_eq!(json["connector_summary"]["postgresql"]["type"], "database");
    assert_eq!(json["import_summary"]["top_imports"][0][0], "import os");
    assert_eq!(json["sql_objects_summary"]["views"][0], "v");
    assert_eq!(json["files"][1]["file_type"], "sql");

    let back: ProjectSummary = serde_json::from_str(&text).unwrap();
    assert_eq!(back.files.len(), 2);
    assert_eq!(back.connector_summary, summary.connector_summary);
}

#[test]
fn unwritable_output_is_a_report_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "import os\n");
    write(dir.path(), "blocker", "not a directory");

    let summary = scanner(dir.path()).scan();
    let out = dir.path().join("blocker/report.json");
    let err = save_summary(&summary, &out).unwrap_err();

    assert!(matches!(err, ReportError::Write { .. }));
    assert_eq!(err.error_code(), "REPORT_ERROR");
    assert!(err.coded_string().starts_with("[REPORT_ERROR]"));

    let err = PipelineError::from(err);
    assert_eq!(err.error_code(), "REPORT_ERROR");
}

#[test]
fn text_report_reflects_summary() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", "import boto3\n");

    let summary = scanner(dir.path()).scan();
    let text = render_text_report(&summary, 10);
    assert!(text.contains("CONNECTORS DETECTED (1)"));
    assert!(text.contains("S3 (cloud_storage)"));
    assert!(text.contains("Total Files: 1"));
}

#[test]
fn thread_count_does_not_change_results() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..25 {
        write(
            dir.path(),
            &format!("m{i:02}.py"),
            &format!("import mod{}\nq = 'select * from t{i}'\n", i % 3),
        );
    }

    let single = MetadataScanner::with_catalog(
        dir.path(),
        PipescanConfig::from_toml("[scan]\nthreads = 1\n").unwrap(),
        test_catalog(),
    )
    .unwrap()
    .scan();
    let many = MetadataScanner::with_catalog(
        dir.path(),
        PipescanConfig::from_toml("[scan]\nthreads = 4\n").unwrap(),
        test_catalog(),
    )
    .unwrap()
    .scan();

    assert_eq!(single.files, many.files);
    assert_eq!(single.import_summary, many.import_summary);
    assert_eq!(single.sql_objects_summary.total_tables, 25);
}
