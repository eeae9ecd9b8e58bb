mod color;
mod exons;
mod fasta;
mod iupac;
mod layout;
mod scan;
mod spans;

pub use color::{pick_colors, ColorMap, BASE_PALETTE};
pub use exons::{find_exons, locate_exons, ExonMode};
pub use fasta::{parse_fasta, SequenceRecord, RECORD_MARKER};
pub use iupac::{parse_motif_list, translate, MotifSpec};
pub use layout::{canvas_size, layout, Element, Layout, LayoutParams, Mark};
pub use scan::{annotate, scan, RecordAnnotation};
pub use spans::{Span, Spans};
