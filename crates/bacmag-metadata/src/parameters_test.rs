use super::generated_parameters;
use nfmeta_sdk::{check_path_literal, ParamValue, PathParamKind};
use std::collections::HashSet;

#[test]
fn declares_six_parameters_in_display_order() {
    let registry = generated_parameters().expect("declaration must build");
    assert_eq!(
        registry.keys().collect::<Vec<_>>(),
        vec![
            "input_genomes",
            "outdir",
            "genome_metadata",
            "antismash_db",
            "pfam_db",
            "peptides_fasta",
        ]
    );
}

#[test]
fn keys_are_unique() {
    let registry = generated_parameters().expect("declaration must build");
    let unique = registry.keys().collect::<HashSet<_>>();
    assert_eq!(unique.len(), registry.len());
}

#[test]
fn only_outdir_is_an_output_path() {
    let registry = generated_parameters().expect("declaration must build");
    for param in &registry {
        let expected = if param.key == "outdir" {
            PathParamKind::Output
        } else {
            PathParamKind::Input
        };
        assert_eq!(param.param_type.path_kind(), Some(expected), "{}", param.key);
    }
}

#[test]
fn path_defaults_are_absent_or_valid() {
    let registry = generated_parameters().expect("declaration must build");
    for param in &registry {
        if let Some(ParamValue::Path(raw)) = &param.default {
            assert_eq!(check_path_literal(raw), Ok(()), "{}", param.key);
        }
    }
}

#[test]
fn section_titles_match_the_form_layout() {
    let registry = generated_parameters().expect("declaration must build");
    let title = |key: &str| {
        registry
            .get(key)
            .expect("declared")
            .section_title
            .clone()
    };
    assert_eq!(title("input_genomes").as_deref(), Some("Input/output options"));
    assert_eq!(title("outdir"), None);
    assert_eq!(title("antismash_db").as_deref(), Some("Databases"));

    let sections = registry.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, Some("Input/output options"));
    assert_eq!(
        sections[0].params.iter().map(|p| p.key.as_str()).collect::<Vec<_>>(),
        vec!["input_genomes", "outdir", "genome_metadata"]
    );
    assert_eq!(sections[1].title, Some("Databases"));
    assert_eq!(
        sections[1].params.iter().map(|p| p.key.as_str()).collect::<Vec<_>>(),
        vec!["antismash_db", "pfam_db", "peptides_fasta"]
    );
}

#[test]
fn construction_is_deterministic() {
    let first = generated_parameters().expect("declaration must build");
    let second = generated_parameters().expect("declaration must build");
    assert_eq!(first, second);
}
