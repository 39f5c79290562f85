use super::{execute_args, execute_register, execute_schema, execute_validate, CliError};
use crate::cli::{ArgsCommand, OutputFormat, RegisterCommand, SchemaCommand, ValidateCommand};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

const VALUES: &str = "
input_genomes: latch:///genomes
outdir: latch:///results
genome_metadata: latch:///metadata.tsv
antismash_db: latch:///antismash
pfam_db: latch:///pfam
peptides_fasta: latch:///peptides.fa
";

fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn schema_json_is_a_valid_document() {
    let output = execute_schema(&SchemaCommand {
        format: OutputFormat::Json,
    })
    .expect("schema must render");
    let value: Value = serde_json::from_str(output.as_str()).expect("json output");
    assert_eq!(value["display_name"], "bacMAGmining");
    assert_eq!(value["parameters"].as_array().map(Vec::len), Some(6));
}

#[test]
fn exported_schema_validates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let exported = execute_schema(&SchemaCommand {
        format: OutputFormat::Json,
    })
    .expect("schema must render");
    let path = write_temp(&dir, "metadata.json", exported.as_str());
    let output = execute_validate(&ValidateCommand {
        document: path,
        skip_schema_check: false,
        format: OutputFormat::Text,
    })
    .expect("exported document must validate");
    assert!(output.starts_with("ok: bacMAGmining (6 parameters, sha256:"));
}

#[test]
fn validate_reports_document_issues() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp(&dir, "broken.json", r#"{"schema": "nfmeta-workflow/0.0.1"}"#);
    let err = execute_validate(&ValidateCommand {
        document: path,
        skip_schema_check: false,
        format: OutputFormat::Text,
    })
    .expect_err("must fail");
    assert!(matches!(err, CliError::InvalidDocument { .. }));
    assert!(err.to_string().contains("json_schema.validation"));
}

#[test]
fn args_render_one_flag_per_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp(&dir, "values.yaml", VALUES);
    let output = execute_args(&ArgsCommand {
        values: path,
        check_paths: false,
        format: OutputFormat::Text,
    })
    .expect("args must resolve");
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "--input_genomes latch:///genomes");
    assert_eq!(lines[1], "--outdir latch:///results");
}

#[test]
fn args_missing_required_value_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp(&dir, "values.yaml", "outdir: latch:///results\n");
    let err = execute_args(&ArgsCommand {
        values: path,
        check_paths: false,
        format: OutputFormat::Json,
    })
    .expect_err("must fail");
    assert!(err.to_string().contains("args.required_missing"));
}

#[test]
fn register_prints_handle() {
    let output = execute_register(&RegisterCommand {
        format: OutputFormat::Json,
    })
    .expect("must register");
    let value: Value = serde_json::from_str(output.as_str()).expect("json output");
    assert_eq!(value["display_name"], "bacMAGmining");
    assert_eq!(value["parameter_count"], 6);
    let again = execute_register(&RegisterCommand {
        format: OutputFormat::Json,
    })
    .expect("registration is idempotent");
    assert_eq!(again, output);
}
