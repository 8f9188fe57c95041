//! Shared fixtures for pipescan-analysis integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pipescan_analysis::catalog::{parse_catalog, PatternCatalog};

/// Small catalog covering the connectors and file types the tests use.
pub const TEST_CATALOG: &str = r##"
connectors:
  postgresql:
    type: database
    keywords: [psycopg2, "postgresql://"]
    connection_patterns:
      - 'psycopg2\.connect\('
  s3:
    type: cloud_storage
    keywords: [boto3, "s3://"]
    connection_patterns:
      - 's3://[\w.\-]+'
  kafka:
    type: message_queue
    keywords: [KafkaProducer]
file_types:
  databricks_notebook:
    keywords: ["# Databricks notebook source"]
  pyspark:
    extensions: [.py]
    keywords: [pyspark, SparkSession]
  python:
    extensions: [.py]
  sql:
    extensions: [.sql, .ddl, .dml]
  yaml:
    extensions: [.yaml, .yml]
"##;

pub fn test_catalog() -> PatternCatalog {
    let result = parse_catalog(TEST_CATALOG, Path::new("test_catalog.yaml"));
    assert!(result.is_clean(), "test catalog must load cleanly");
    result.data
}

/// The catalog shipped in the workspace `config/` directory.
pub fn shipped_catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/connector_patterns.yaml")
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
