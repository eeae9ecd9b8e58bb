use super::spans::{Span, Spans};
use itertools::Itertools;
use std::str::FromStr;

/// Which uppercase runs of a record are drawn as exons.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ExonMode {
    /// Every run, left to right.
    #[default]
    All,
    /// Only the rightmost run; matches the single-exon output of older
    /// motif marker scripts.
    Last,
}

impl FromStr for ExonMode {
    type Err = &'static str;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "all" => Ok(ExonMode::All),
            "last" => Ok(ExonMode::Last),
            _ => Err("Invalid exon mode (expected all or last)"),
        }
    }
}

/// Maximal runs of uppercase letters, left to right.
pub fn find_exons(seq: &str) -> Spans {
    let mut spans = Vec::new();
    let mut pos = 0;
    for (is_exon, group) in &seq.bytes().chunk_by(|base| base.is_ascii_uppercase()) {
        let len = group.count();
        if is_exon {
            spans.push(Span::new(pos, pos + len));
        }
        pos += len;
    }
    spans
}

pub fn locate_exons(seq: &str, mode: ExonMode) -> Spans {
    let mut spans = find_exons(seq);
    match mode {
        ExonMode::All => spans,
        ExonMode::Last => spans.pop().into_iter().collect(),
    }
}
