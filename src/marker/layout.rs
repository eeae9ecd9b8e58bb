use super::color::ColorMap;
use super::fasta::SequenceRecord;
use super::scan::RecordAnnotation;
use super::spans::Span;
use motifcanvas::{DrawCommand, Drawing, Rgb};

pub const LEGEND_TITLE: &str = "Legend (motif name x color)";

/// Fixed geometry of the figure. One base is one horizontal unit.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub row_height: f64,
    pub legend_row_height: f64,
    /// Added to the longest sequence to get the canvas width.
    pub width_margin: f64,
    /// Added to the rows and legend rows to get the canvas height.
    pub height_margin: f64,
    pub left_margin: f64,
    /// Vertical position of the first backbone.
    pub top_margin: f64,
    pub backbone_stroke: f64,
    pub exon_band: f64,
    pub motif_band: f64,
    pub motif_opacity: f64,
    pub label_offset: f64,
    pub font_size: f64,
    pub swatch_size: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            row_height: 100.0,
            legend_row_height: 25.0,
            width_margin: 100.0,
            height_margin: 75.0,
            left_margin: 10.0,
            top_margin: 50.0,
            backbone_stroke: 5.0,
            exon_band: 50.0,
            motif_band: 60.0,
            motif_opacity: 0.6,
            label_offset: 40.0,
            font_size: 12.0,
            swatch_size: 10.0,
        }
    }
}

/// What a draw command depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Backbone,
    Exon,
    Header,
    Motif,
    LegendTitle,
    LegendRule,
    LegendLabel,
    LegendSwatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub element: Element,
    pub command: DrawCommand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<Mark>,
}

impl Layout {
    #[cfg(test)]
    pub fn count(&self, element: Element) -> usize {
        self.marks.iter().filter(|m| m.element == element).count()
    }

    pub fn into_drawing(self) -> Drawing {
        Drawing {
            width: self.width,
            height: self.height,
            commands: self.marks.into_iter().map(|m| m.command).collect(),
        }
    }
}

pub fn canvas_size(
    records: &[SequenceRecord],
    motif_count: usize,
    params: &LayoutParams,
) -> (f64, f64) {
    let longest = records.iter().map(|r| r.len()).max().unwrap_or(0);
    let width = longest as f64 + params.width_margin;
    let height = records.len() as f64 * params.row_height
        + motif_count as f64 * params.legend_row_height
        + params.height_margin;
    (width, height)
}

/// Lays out one track per record in input order followed by the legend.
/// Later marks are painted over earlier ones.
pub fn layout(
    records: &[SequenceRecord],
    annotations: &[RecordAnnotation],
    colors: &ColorMap,
    params: &LayoutParams,
) -> Layout {
    let (width, height) = canvas_size(records, colors.len(), params);
    let mut plotter = Plotter {
        params,
        marks: Vec::new(),
    };

    let mut ypos = params.top_margin;
    for (record, annotation) in records.iter().zip(annotations) {
        plotter.plot_track(record, annotation, colors, ypos);
        ypos += params.row_height;
    }

    let legend_top = params.top_margin + records.len() as f64 * params.row_height
        - params.row_height / 2.0;
    plotter.plot_legend(width, legend_top, colors);

    Layout {
        width,
        height,
        marks: plotter.marks,
    }
}

struct Plotter<'a> {
    params: &'a LayoutParams,
    marks: Vec<Mark>,
}

impl Plotter<'_> {
    fn plot_track(
        &mut self,
        record: &SequenceRecord,
        annotation: &RecordAnnotation,
        colors: &ColorMap,
        ypos: f64,
    ) {
        let x = self.params.left_margin;
        self.push(
            Element::Backbone,
            DrawCommand::Line {
                from: (x, ypos),
                to: (x + record.len() as f64, ypos),
                stroke: self.params.backbone_stroke,
                color: Rgb::BLACK,
            },
        );

        for exon in &annotation.exons {
            let command = self.band(exon, ypos, self.params.exon_band, Rgb::BLACK, 1.0);
            self.push(Element::Exon, command);
        }

        self.push(
            Element::Header,
            DrawCommand::Text {
                pos: (x, ypos - self.params.label_offset),
                label: record.id.clone(),
                size: self.params.font_size,
                color: Rgb::BLACK,
            },
        );

        for (motif_index, hits) in annotation.motif_hits.iter().enumerate() {
            let color = colors.get(motif_index).unwrap_or(Rgb::BLACK);
            for hit in hits {
                let command = self.band(
                    hit,
                    ypos,
                    self.params.motif_band,
                    color,
                    self.params.motif_opacity,
                );
                self.push(Element::Motif, command);
            }
        }
    }

    fn plot_legend(&mut self, width: f64, legend_top: f64, colors: &ColorMap) {
        if colors.is_empty() {
            return;
        }
        let x = self.params.left_margin;
        let row_height = self.params.legend_row_height;
        let swatch = self.params.swatch_size;

        self.push(
            Element::LegendTitle,
            DrawCommand::Text {
                pos: (x, legend_top + 15.0),
                label: LEGEND_TITLE.to_string(),
                size: self.params.font_size,
                color: Rgb::BLACK,
            },
        );
        let mut rule_y = legend_top + row_height;
        self.push(Element::LegendRule, self.rule(width, rule_y, 3.0));

        for (motif, color) in colors.iter() {
            let baseline = rule_y + row_height;
            self.push(
                Element::LegendSwatch,
                DrawCommand::Rect {
                    pos: (x, baseline - 8.0 - swatch),
                    dims: (swatch, swatch),
                    color,
                    opacity: 1.0,
                },
            );
            self.push(
                Element::LegendLabel,
                DrawCommand::Text {
                    pos: (x + swatch + 4.0, baseline - 8.0),
                    label: motif.to_string(),
                    size: self.params.font_size,
                    color: Rgb::BLACK,
                },
            );
            self.push(Element::LegendRule, self.rule(width, baseline, 1.0));
            rule_y = baseline;
        }
    }

    fn band(&self, span: &Span, ypos: f64, band: f64, color: Rgb, opacity: f64) -> DrawCommand {
        DrawCommand::Rect {
            pos: (self.params.left_margin + span.start as f64, ypos - band / 2.0),
            dims: (span.len() as f64, band),
            color,
            opacity,
        }
    }

    fn rule(&self, width: f64, ypos: f64, stroke: f64) -> DrawCommand {
        DrawCommand::Line {
            from: (self.params.left_margin, ypos),
            to: (width - self.params.left_margin, ypos),
            stroke,
            color: Rgb::BLACK,
        }
    }

    fn push(&mut self, element: Element, command: DrawCommand) {
        self.marks.push(Mark { element, command });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{annotate, parse_fasta, pick_colors, ExonMode, MotifSpec, BASE_PALETTE};

    fn records_of_lengths(lengths: &[usize]) -> Vec<SequenceRecord> {
        lengths
            .iter()
            .enumerate()
            .map(|(index, len)| SequenceRecord {
                id: format!(">gene{}", index),
                seq: "a".repeat(*len),
            })
            .collect()
    }

    fn build(fasta: &str, motif_texts: &[&str]) -> Layout {
        let records = parse_fasta(fasta);
        let motifs: Vec<MotifSpec> = motif_texts
            .iter()
            .map(|text| MotifSpec::new(text).unwrap())
            .collect();
        let texts: Vec<String> = motifs.iter().map(|m| m.text.clone()).collect();
        let annotations = annotate(&records, &motifs, ExonMode::All);
        let colors = pick_colors(&texts, 42);
        layout(&records, &annotations, &colors, &LayoutParams::default())
    }

    #[test]
    fn canvas_size_follows_records_and_motifs() {
        let params = LayoutParams::default();
        let cases = [
            (vec![10], 1, (110.0, 200.0)),
            (vec![50, 80], 3, (180.0, 350.0)),
            (vec![300, 20, 7, 120], 9, (400.0, 700.0)),
        ];
        for (lengths, motif_count, expected) in cases {
            let records = records_of_lengths(&lengths);
            assert_eq!(canvas_size(&records, motif_count, &params), expected);
        }
    }

    #[test]
    fn two_records_three_motifs_in_order() {
        let gene_a = format!("{}{}{}", "c".repeat(10), "ACGTACGTAC", "g".repeat(30));
        let gene_b = format!("{}{}{}", "TTGCAT", "t".repeat(60), "GCATGCATGCATGC");
        let fasta = format!(">geneA\n{}\n>geneB\n{}\n", gene_a, gene_b);
        let layout = build(&fasta, &["ygcy", "GCAUG", "catag"]);

        assert_eq!((layout.width, layout.height), (180.0, 350.0));
        assert_eq!(layout.count(Element::Backbone), 2);
        assert!(layout.count(Element::Exon) >= 2);
        assert_eq!(layout.count(Element::LegendTitle), 1);
        assert_eq!(layout.count(Element::LegendLabel), 3);
        assert_eq!(layout.count(Element::LegendSwatch), 3);

        let order: Vec<Element> = layout
            .marks
            .iter()
            .map(|m| m.element)
            .filter(|e| {
                matches!(
                    e,
                    Element::Backbone | Element::LegendTitle | Element::LegendLabel
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![
                Element::Backbone,
                Element::Backbone,
                Element::LegendTitle,
                Element::LegendLabel,
                Element::LegendLabel,
                Element::LegendLabel,
            ]
        );
        let first_exon = layout
            .marks
            .iter()
            .position(|m| m.element == Element::Exon)
            .unwrap();
        let title = layout
            .marks
            .iter()
            .position(|m| m.element == Element::LegendTitle)
            .unwrap();
        assert!(first_exon < title);
    }

    #[test]
    fn track_draws_backbone_exon_header_then_motifs() {
        let layout = build(">geneA\naaTGCTaa\n", &["ygcy"]);
        let track: Vec<&Mark> = layout
            .marks
            .iter()
            .take_while(|m| m.element != Element::LegendTitle)
            .collect();

        assert_eq!(
            track.iter().map(|m| m.element).collect::<Vec<_>>(),
            vec![
                Element::Backbone,
                Element::Exon,
                Element::Header,
                Element::Motif
            ]
        );
        assert_eq!(
            track[0].command,
            DrawCommand::Line {
                from: (10.0, 50.0),
                to: (18.0, 50.0),
                stroke: 5.0,
                color: Rgb::BLACK,
            }
        );
        assert_eq!(
            track[1].command,
            DrawCommand::Rect {
                pos: (12.0, 25.0),
                dims: (4.0, 50.0),
                color: Rgb::BLACK,
                opacity: 1.0,
            }
        );
        assert_eq!(
            track[2].command,
            DrawCommand::Text {
                pos: (10.0, 10.0),
                label: ">geneA".to_string(),
                size: 12.0,
                color: Rgb::BLACK,
            }
        );
        assert_eq!(
            track[3].command,
            DrawCommand::Rect {
                pos: (12.0, 20.0),
                dims: (4.0, 60.0),
                color: BASE_PALETTE[0],
                opacity: 0.6,
            }
        );
    }

    #[test]
    fn rows_advance_by_row_height() {
        let layout = build(">a\nacgt\n>b\nacgt\n>c\nacgt\n", &["A"]);
        let backbone_ys: Vec<f64> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::Backbone, DrawCommand::Line { from, .. }) => Some(from.1),
                _ => None,
            })
            .collect();
        assert_eq!(backbone_ys, vec![50.0, 150.0, 250.0]);
    }

    #[test]
    fn legend_rows_sit_below_tracks_and_inside_canvas() {
        let layout = build(">a\nACGTacgt\n>b\nacgt\n", &["A", "C", "G", "T"]);
        let label_ys: Vec<f64> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::LegendLabel, DrawCommand::Text { pos, .. }) => Some(pos.1),
                _ => None,
            })
            .collect();

        assert_eq!(label_ys, vec![242.0, 267.0, 292.0, 317.0]);
        assert!(label_ys.iter().all(|y| *y > 150.0 + 30.0 && *y < layout.height));
    }

    #[test]
    fn legend_swatches_reuse_track_colors() {
        let layout = build(">a\nacgt\n", &["A", "C"]);
        let swatch_colors: Vec<Rgb> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::LegendSwatch, DrawCommand::Rect { color, .. }) => Some(*color),
                _ => None,
            })
            .collect();
        let motif_colors: Vec<Rgb> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::Motif, DrawCommand::Rect { color, .. }) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(swatch_colors, vec![BASE_PALETTE[0], BASE_PALETTE[1]]);
        assert_eq!(motif_colors, vec![BASE_PALETTE[0], BASE_PALETTE[1]]);
    }

    #[test]
    fn legend_swatch_never_overlaps_label_on_short_records() {
        let layout = build(">a\nacgt\n", &["ygcyygcyygcy", "GCAUGCAUG"]);
        let swatches: Vec<(f64, f64)> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::LegendSwatch, DrawCommand::Rect { pos, dims, .. }) => {
                    Some((pos.0, pos.0 + dims.0))
                }
                _ => None,
            })
            .collect();
        let label_starts: Vec<f64> = layout
            .marks
            .iter()
            .filter_map(|m| match (&m.element, &m.command) {
                (Element::LegendLabel, DrawCommand::Text { pos, .. }) => Some(pos.0),
                _ => None,
            })
            .collect();

        assert_eq!(swatches, vec![(10.0, 20.0), (10.0, 20.0)]);
        assert_eq!(label_starts, vec![24.0, 24.0]);
    }

    #[test]
    fn drawing_keeps_mark_order() {
        let layout = build(">a\nACgt\n", &["gt"]);
        let marks = layout.marks.clone();
        let drawing = layout.into_drawing();
        assert_eq!(drawing.commands.len(), marks.len());
        assert_eq!(drawing.commands[0], marks[0].command);
        assert_eq!((drawing.width, drawing.height), (104.0, 200.0));
    }
}
