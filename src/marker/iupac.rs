use crate::utils::{MarkerError, Result};
use regex::Regex;

/// A motif as written in the motif file together with its compiled matcher.
#[derive(Debug, Clone)]
pub struct MotifSpec {
    pub text: String,
    pattern: Regex,
}

impl MotifSpec {
    pub fn new(text: &str) -> Result<Self> {
        Ok(Self {
            text: text.to_string(),
            pattern: translate(text)?,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Character class matched by each IUPAC nucleotide code. T and U are
/// interchangeable so that DNA motifs hit RNA sequences and vice versa.
fn symbol_class(symbol: char) -> Option<&'static str> {
    let class = match symbol {
        'A' => "[Aa]",
        'C' => "[Cc]",
        'G' => "[Gg]",
        'T' => "[tTuU]",
        'U' => "[uUtT]",
        'W' => "[aAtTuU]",
        'S' => "[cCgG]",
        'M' => "[aAcC]",
        'K' => "[gGtTuU]",
        'R' => "[aAgG]",
        'Y' => "[cCtTuU]",
        'B' => "[cCgGtTuU]",
        'D' => "[aAgGtTuU]",
        'H' => "[aAcCtTuU]",
        'V' => "[aAcCgG]",
        'N' => "[aAcCgGtTuU]",
        'Z' => "[-]",
        _ => return None,
    };
    Some(class)
}

/// Compiles a motif into a pattern matching exactly `motif.len()` bases.
pub fn translate(motif: &str) -> Result<Regex> {
    if motif.is_empty() {
        return Err(MarkerError::InvalidPattern {
            motif: motif.to_string(),
            reason: "motif is empty".to_string(),
        });
    }

    let mut pattern = String::with_capacity(motif.len() * 8);
    for symbol in motif.chars() {
        let class = symbol_class(symbol.to_ascii_uppercase()).ok_or_else(|| {
            MarkerError::UnknownSymbol {
                motif: motif.to_string(),
                symbol,
            }
        })?;
        pattern.push_str(class);
    }

    Regex::new(&pattern).map_err(|e| MarkerError::InvalidPattern {
        motif: motif.to_string(),
        reason: e.to_string(),
    })
}

/// One motif per line. Blank lines are not motifs and are dropped.
pub fn parse_motif_list(text: &str) -> Vec<String> {
    let mut motifs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            log::warn!("Skipping blank line {} in motif list", index + 1);
            continue;
        }
        motifs.push(line.to_string());
    }
    motifs
}
