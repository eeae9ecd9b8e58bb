use super::exons::{locate_exons, ExonMode};
use super::fasta::SequenceRecord;
use super::iupac::MotifSpec;
use super::spans::{Span, Spans};
use rayon::prelude::*;
use regex::Regex;

/// Exon runs and motif hits of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAnnotation {
    pub exons: Spans,
    /// Hits per motif, indexed like the motif list.
    pub motif_hits: Vec<Spans>,
}

impl RecordAnnotation {
    pub fn hit_count(&self) -> usize {
        self.motif_hits.iter().map(|hits| hits.len()).sum()
    }
}

/// Leftmost, non-overlapping matches of `pattern`; the search resumes where
/// the previous match ended.
pub fn scan(seq: &str, pattern: &Regex) -> Spans {
    pattern
        .find_iter(seq)
        .filter(|hit| !hit.is_empty())
        .map(|hit| Span::new(hit.start(), hit.end()))
        .collect()
}

/// Annotates every record independently. The output is in record order.
pub fn annotate(
    records: &[SequenceRecord],
    motifs: &[MotifSpec],
    exon_mode: ExonMode,
) -> Vec<RecordAnnotation> {
    records
        .par_iter()
        .map(|record| annotate_record(record, motifs, exon_mode))
        .collect()
}

fn annotate_record(
    record: &SequenceRecord,
    motifs: &[MotifSpec],
    exon_mode: ExonMode,
) -> RecordAnnotation {
    let exons = locate_exons(&record.seq, exon_mode);
    log::debug!("{}: {} exon(s)", record.id, exons.len());

    let motif_hits = motifs
        .iter()
        .map(|motif| {
            let hits = scan(&record.seq, motif.pattern());
            log::debug!("{}: motif {} found {} time(s)", record.id, motif.text, hits.len());
            hits
        })
        .collect();

    let annotation = RecordAnnotation { exons, motif_hits };
    log::debug!("{}: {} motif hit(s) in total", record.id, annotation.hit_count());
    annotation
}
