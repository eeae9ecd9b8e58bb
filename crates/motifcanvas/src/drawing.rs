use std::fmt;

/// Color with each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Straight stroke between two points.
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: f64,
        color: Rgb,
    },
    /// Filled rectangle anchored at its top-left corner.
    Rect {
        pos: (f64, f64),
        dims: (f64, f64),
        color: Rgb,
        opacity: f64,
    },
    /// Text whose baseline starts at `pos`.
    Text {
        pos: (f64, f64),
        label: String,
        size: f64,
        color: Rgb,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}
