use motifcanvas::Rgb;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Colors of the first six motifs: every permutation of (1,0,0) and (1,1,0).
pub const BASE_PALETTE: [Rgb; 6] = [
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(1.0, 0.0, 1.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(0.0, 1.0, 1.0),
];

/// Motif colors in motif list order, shared by the gene tracks and legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    colors: Vec<(String, Rgb)>,
}

impl ColorMap {
    pub fn get(&self, motif_index: usize) -> Option<Rgb> {
        self.colors.get(motif_index).map(|(_, color)| *color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(text, color)| (text.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Assigns the base palette by rank, then cycles the (x,x,0), (0,x,x),
/// (x,0,x) templates. Each template walks its own seeded shuffle of the
/// intensities {0.3, ..., 0.9}, so no color repeats within 21 extra motifs.
pub fn pick_colors(motifs: &[String], seed: u64) -> ColorMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let intensities: Vec<Vec<u32>> = (0..3)
        .map(|_| {
            let mut steps: Vec<u32> = (3..10).collect();
            steps.shuffle(&mut rng);
            steps
        })
        .collect();
    let mut colors = Vec::with_capacity(motifs.len());

    for (index, motif) in motifs.iter().enumerate() {
        let color = match BASE_PALETTE.get(index) {
            Some(color) => *color,
            None => {
                let rank = index - BASE_PALETTE.len();
                let steps = &intensities[rank % 3];
                let x = steps[(rank / 3) % steps.len()] as f64 / 10.0;
                match rank % 3 {
                    0 => Rgb::new(x, x, 0.0),
                    1 => Rgb::new(0.0, x, x),
                    _ => Rgb::new(x, 0.0, x),
                }
            }
        };
        colors.push((motif.clone(), color));
    }

    ColorMap { colors }
}
