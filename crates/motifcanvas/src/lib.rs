/*!
This crate renders a flat list of drawing commands (lines, filled rectangles,
and text labels) on a white canvas of fixed size. Commands are painted in the
order they are given, so later commands are drawn on top of earlier ones.

The crate knows nothing about what the shapes mean; callers decide the
coordinates, colors, and stacking order. Drawings can be written as SVG, PNG,
or PDF images.
*/

mod common;
mod drawing;
mod image;
mod pdf;
mod png;
mod svg;

pub use drawing::{DrawCommand, Drawing, Rgb};
pub use image::generate as generate_image;
pub use image::FileType;
