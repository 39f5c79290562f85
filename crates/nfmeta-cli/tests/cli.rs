use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn nfmeta() -> Command {
    Command::cargo_bin("nfmeta").expect("binary must build")
}

#[test]
fn schema_text_shows_both_sections() {
    nfmeta()
        .args(["schema", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Input/output options]"))
        .stdout(predicate::str::contains("[Databases]"))
        .stdout(predicate::str::contains("cpus=16 memory=32GiB storage=100GiB"));
}

#[test]
fn args_resolve_with_env_placeholders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let values = dir.path().join("values.yaml");
    fs::write(
        &values,
        "input_genomes: ${BASE}/genomes\n\
         outdir: ${BASE}/results\n\
         genome_metadata: ${BASE}/metadata.tsv\n\
         antismash_db: ${BASE}/antismash\n\
         pfam_db: ${BASE}/pfam\n\
         peptides_fasta: ${BASE}/peptides.fa\n",
    )
    .expect("write values");

    nfmeta()
        .env("BASE", "latch:///project")
        .args(["args", "--values"])
        .arg(&values)
        .assert()
        .success()
        .stdout(predicate::str::contains("--pfam_db latch:///project/pfam"));
}

#[test]
fn check_paths_rejects_missing_local_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let values = dir.path().join("values.json");
    let missing = dir.path().join("missing");
    let body = serde_json::json!({
        "input_genomes": missing.display().to_string(),
        "outdir": dir.path().join("out").display().to_string(),
        "genome_metadata": "latch:///metadata.tsv",
        "antismash_db": "latch:///antismash",
        "pfam_db": "latch:///pfam",
        "peptides_fasta": "latch:///peptides.fa"
    });
    fs::write(&values, body.to_string()).expect("write values");

    nfmeta()
        .args(["args", "--check-paths", "--values"])
        .arg(&values)
        .assert()
        .failure()
        .stderr(predicate::str::contains("args.input_missing"));
}

#[test]
fn validate_rejects_unreadable_document() {
    nfmeta()
        .args(["validate", "--document", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read file failed"));
}
