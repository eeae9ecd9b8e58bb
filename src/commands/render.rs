use crate::cli::RenderArgs;
use crate::marker::{
    annotate, layout, parse_fasta, parse_motif_list, pick_colors, LayoutParams, MotifSpec,
};
use crate::utils::{derive_output_path, read_input, MarkerError, Result};
use motifcanvas::generate_image;
use std::path::PathBuf;

/// Renders the FASTA records and motif hits to an image and returns its path.
pub fn motifmark(args: RenderArgs) -> Result<PathBuf> {
    let output_path = derive_output_path(&args.fasta_path, &args.output_dir, args.format)?;

    let records = parse_fasta(&read_input(&args.fasta_path)?);
    if records.is_empty() {
        return Err(MarkerError::EmptyInput {
            what: "FASTA records",
            path: args.fasta_path,
        });
    }

    for record in records.iter().filter(|r| r.is_empty()) {
        log::warn!("{}: empty sequence", record.id);
    }

    let motif_texts = parse_motif_list(&read_input(&args.motifs_path)?);
    if motif_texts.is_empty() {
        return Err(MarkerError::EmptyInput {
            what: "motifs",
            path: args.motifs_path,
        });
    }
    let motifs = motif_texts
        .iter()
        .map(|text| MotifSpec::new(text))
        .collect::<Result<Vec<_>>>()?;
    log::info!(
        "Loaded {} record(s) and {} motif(s)",
        records.len(),
        motifs.len()
    );

    let annotations = annotate(&records, &motifs, args.exon_mode);
    let colors = pick_colors(&motif_texts, args.seed);
    let layout = layout(&records, &annotations, &colors, &LayoutParams::default());
    log::debug!(
        "Canvas {}x{} with {} draw commands",
        layout.width,
        layout.height,
        layout.marks.len()
    );

    generate_image(&layout.into_drawing(), &output_path).map_err(|reason| {
        MarkerError::Render {
            path: output_path.clone(),
            reason,
        }
    })?;
    log::info!("Wrote {}", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::ExonMode;
    use motifcanvas::FileType;
    use std::path::Path;

    fn args(dir: &Path, fasta: &str, motifs: &str) -> RenderArgs {
        let fasta_path = dir.join("Figure_1.fasta");
        let motifs_path = dir.join("motifs.txt");
        std::fs::write(&fasta_path, fasta).unwrap();
        std::fs::write(&motifs_path, motifs).unwrap();
        RenderArgs {
            fasta_path,
            motifs_path,
            output_dir: dir.to_path_buf(),
            format: FileType::Svg,
            exon_mode: ExonMode::All,
            seed: 42,
        }
    }

    #[test]
    fn renders_svg_named_after_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(
            dir.path(),
            ">INSR chr19:7150261-7150808 (reverse complement)\nttttctttccacgagCAGGCATGCATcagctgtagtgc\n>MBNL\nccgcatgcTCTGTGACATGacttgcatg\n",
            "ygcy\nGCAUG\ncatag\n",
        );
        let path = motifmark(args).unwrap();
        assert_eq!(path, dir.path().join("Figure_1.svg"));

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("&gt;INSR chr19:7150261-7150808 (reverse complement)"));
        assert!(svg.contains("Legend (motif name x color)"));
        assert!(svg.contains(">GCAUG</text>"));
        assert!(svg.contains(r##"fill="#0000FF" stroke-width="0" opacity="0.6""##));
    }

    #[test]
    fn unknown_symbol_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), ">a\nACGT\n", "ygcy\nAQ\n");
        assert_eq!(
            motifmark(args),
            Err(MarkerError::UnknownSymbol {
                motif: "AQ".to_string(),
                symbol: 'Q'
            })
        );
        assert!(!dir.path().join("Figure_1.svg").exists());
    }

    #[test]
    fn empty_motif_file_is_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), ">a\nACGT\n", "");
        let motifs_path = args.motifs_path.clone();
        assert_eq!(
            motifmark(args),
            Err(MarkerError::EmptyInput {
                what: "motifs",
                path: motifs_path
            })
        );
    }

    #[test]
    fn empty_fasta_is_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), "", "ygcy\n");
        assert!(matches!(
            motifmark(args),
            Err(MarkerError::EmptyInput {
                what: "FASTA records",
                ..
            })
        ));
    }

    #[test]
    fn fasta_without_extension_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path(), ">a\nACGT\n", "ygcy\n");
        let bare = dir.path().join("genes");
        std::fs::write(&bare, ">a\nACGT\n").unwrap();
        args.fasta_path = bare.clone();
        assert_eq!(
            motifmark(args),
            Err(MarkerError::MalformedHeader { path: bare })
        );
    }

    #[test]
    fn missing_motif_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path(), ">a\nACGT\n", "ygcy\n");
        let absent = dir.path().join("absent.txt");
        args.motifs_path = absent.clone();
        assert_eq!(
            motifmark(args),
            Err(MarkerError::FileNotFound { path: absent })
        );
    }
}
