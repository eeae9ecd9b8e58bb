use crate::drawing::{DrawCommand, Drawing, Rgb};

const FONT_FAMILY: &str = "monospace";

pub fn generate_string(drawing: &Drawing) -> String {
    let mut generator = Generator::default();
    generator.generate(drawing);
    generator.out
}

#[derive(Default)]
struct Generator {
    out: String,
}

impl Generator {
    fn generate(&mut self, drawing: &Drawing) {
        self.start_svg(drawing.width, drawing.height);
        self.add_background();

        for command in &drawing.commands {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    stroke,
                    color,
                } => self.add_line(*from, *to, *stroke, color),
                DrawCommand::Rect {
                    pos,
                    dims,
                    color,
                    opacity,
                } => self.add_rect(*pos, *dims, color, *opacity),
                DrawCommand::Text {
                    pos,
                    label,
                    size,
                    color,
                } => self.add_text(*pos, label, *size, color),
            }
        }

        self.end_svg();
    }

    fn add_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: f64, color: &Rgb) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", from.0, from.1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", to.0, to.1);
        let style = format!("stroke=\"{}\" stroke-width=\"{}\"", color, stroke);
        self.push_line(&format!("<line {} {} {} />", x1y1, x2y2, style));
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Rgb, opacity: f64) {
        let (x, y) = pos;
        let (w, h) = dims;

        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dim = format!("height=\"{}\" width=\"{}\"", h, w);
        let style = format!("fill=\"{}\" stroke-width=\"0\"", color);

        let rect = format!("<rect {} {} {} opacity=\"{}\" />", pos, dim, style, opacity);
        self.push_line(&rect);
    }

    fn add_text(&mut self, pos: (f64, f64), label: &str, size: f64, color: &Rgb) {
        let point = format!("x=\"{}\" y=\"{}\"", pos.0, pos.1);
        let height = format!("font-size=\"{}px\"", size);
        let style = format!("font-family=\"{}\" fill=\"{}\"", FONT_FAMILY, color);
        let line = format!(
            "<text {} {} {} >{}</text>",
            point,
            style,
            height,
            escape(label)
        );
        self.push_line(&line);
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        self.push_line(r#"<?xml version="1.0"?>"#);
        self.out.push_str(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
        );
        self.push_line(&format!(
            "width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            width, height, width, height
        ));
    }

    fn end_svg(&mut self) {
        self.push_line("</svg>");
    }

    fn add_background(&mut self) {
        self.push_line(r#"<rect width="100%" height="100%" fill="white"/>"#);
    }

    fn push_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
