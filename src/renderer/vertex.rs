//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    /// #FFD700
    pub const WIN_TEXT: Color = [1.0, 215.0 / 255.0, 0.0, 1.0];
    /// #FF6B6B
    pub const LOSE_TEXT: Color = [1.0, 107.0 / 255.0, 107.0 / 255.0, 1.0];
    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];

    /// Parse `#RRGGBB` (or `RRGGBB`) into an opaque color
    pub fn parse_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some([channel(0)?, channel(2)?, channel(4)?, 1.0])
    }

    /// Decode one sRGB-encoded channel to linear
    fn channel_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Convert an sRGB color to linear for an sRGB render target
    ///
    /// Alpha is left untouched.
    pub fn srgb_to_linear(color: Color) -> Color {
        let [r, g, b, a] = color;
        [
            channel_to_linear(r),
            channel_to_linear(g),
            channel_to_linear(b),
            a,
        ]
    }

    /// Color as written to a surface of the given encoding
    pub fn for_surface(color: Color, srgb: bool) -> Color {
        if srgb { srgb_to_linear(color) } else { color }
    }

    /// CSS `rgba()` string for the 2D canvas
    pub fn to_css(color: Color) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }

}
