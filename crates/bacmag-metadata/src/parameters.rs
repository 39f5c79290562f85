use nfmeta_core::StructuredIssue;
use nfmeta_sdk::{ParamType, ParameterDescriptor, ParameterRegistry};

/// Parameters of the bacMAGmining pipeline, in form display order. Each key is
/// also the `--key` flag the Nextflow workflow reads.
pub fn generated_parameters() -> Result<ParameterRegistry, Vec<StructuredIssue>> {
    ParameterRegistry::builder()
        .param(
            ParameterDescriptor::new(
                "input_genomes",
                ParamType::input_directory(),
                "Input directory of genomes in fasta format ending in .fa",
            )
            .with_section_title("Input/output options"),
        )
        .param(ParameterDescriptor::new(
            "outdir",
            ParamType::output_directory(),
            "The output directory where the results will be saved. You have to use absolute paths to storage on Cloud infrastructure.",
        ))
        .param(ParameterDescriptor::new(
            "genome_metadata",
            ParamType::input_file(),
            "Path to TSV of metadata for input genomes",
        ))
        .param(
            ParameterDescriptor::new(
                "antismash_db",
                ParamType::input_directory(),
                "Path to directory of pre-downloaded antismash databases",
            )
            .with_section_title("Databases"),
        )
        .param(ParameterDescriptor::new(
            "pfam_db",
            ParamType::input_directory(),
            "Path to directory of pre-downloading Pfam-A database (this should be included with antismash db download)",
        ))
        .param(ParameterDescriptor::new(
            "peptides_fasta",
            ParamType::input_file(),
            "Path to FASTA file of peptides to compare hits against",
        ))
        .build()
}

#[cfg(test)]
#[path = "parameters_test.rs"]
mod tests;
