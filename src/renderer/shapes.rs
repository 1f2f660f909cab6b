//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::frame::DrawCommand;
use super::vertex::{Color, Vertex};

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let min = origin;
    let max = origin + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate every shape command into one triangle list
///
/// Text commands are skipped; they go to the text back end.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => vertices.extend(rect(*origin, *size, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Text { .. } => {}
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let vertices = rect(Vec2::new(15.0, 60.0), Vec2::new(55.0, 20.0), [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 15.0 || x == 70.0));
        assert!(ys.iter().all(|&y| y == 60.0 || y == 80.0));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let vertices = circle(center, 8.0, [1.0; 4], 12);
        assert_eq!(vertices.len(), 36);
        for v in vertices {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_tessellate_skips_text() {
        let commands = vec![
            DrawCommand::Rect {
                origin: Vec2::ZERO,
                size: Vec2::ONE,
                color: [1.0; 4],
            },
            DrawCommand::Text {
                text: "Score: 0".into(),
                pos: Vec2::ZERO,
                size: 16.0,
                color: [1.0; 4],
                align: crate::renderer::TextAlign::Left,
            },
            DrawCommand::Circle {
                center: Vec2::ZERO,
                radius: 1.0,
                color: [1.0; 4],
            },
        ];
        assert_eq!(
            tessellate(&commands).len(),
            6 + (CIRCLE_SEGMENTS * 3) as usize
        );
    }
}
