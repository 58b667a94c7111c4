//! Polyline tessellation and distance helpers.
//!
//! Corridors and basemap lines are stroked as triangle-list meshes: one quad
//! per segment plus a small disc at each vertex for round joins and caps.
//! Dashed strokes split the path into runs first and stroke each run.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

const JOIN_SEGMENTS: u32 = 10;

/// Strokes `points` with the given half-width.
pub fn solid_polyline(points: &[Vec2], half_width: f32) -> Mesh {
    let mut builder = StrokeBuilder::default();
    builder.add_run(points, half_width);
    builder.into_mesh()
}

/// Strokes `points` as alternating dash/gap runs. Dash and gap lengths are in
/// world units.
pub fn dashed_polyline(points: &[Vec2], half_width: f32, dash: f32, gap: f32) -> Mesh {
    let mut builder = StrokeBuilder::default();
    for run in dash_runs(points, dash, gap) {
        builder.add_run(&run, half_width);
    }
    builder.into_mesh()
}

/// Splits a path into the sub-paths that a [dash, gap] pattern draws.
///
/// Degenerate patterns fall back to a single solid run.
pub fn dash_runs(points: &[Vec2], dash: f32, gap: f32) -> Vec<Vec<Vec2>> {
    if dash <= 0.0 || gap <= 0.0 || points.len() < 2 {
        return vec![points.to_vec()];
    }

    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let mut drawing = true;
    let mut remaining = dash;

    for window in points.windows(2) {
        let mut a = window[0];
        let b = window[1];
        if drawing && current.is_empty() {
            current.push(a);
        }

        let mut seg_len = a.distance(b);
        while seg_len > 0.0 && seg_len >= remaining {
            let cut = a + (b - a) * (remaining / seg_len);
            if drawing {
                current.push(cut);
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                drawing = false;
                remaining = gap;
            } else {
                drawing = true;
                remaining = dash;
                current.clear();
                current.push(cut);
            }
            a = cut;
            seg_len = a.distance(b);
        }
        remaining -= seg_len;
        // Skip the duplicate vertex when a cut landed exactly on `b`.
        if drawing && current.last() != Some(&b) {
            current.push(b);
        }
    }

    if drawing && current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Distance from `p` to the segment `a`–`b`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Minimum distance from `p` to a polyline.
pub fn point_polyline_distance(p: Vec2, points: &[Vec2]) -> f32 {
    points
        .windows(2)
        .map(|w| point_segment_distance(p, w[0], w[1]))
        .fold(f32::INFINITY, f32::min)
}

#[derive(Default)]
struct StrokeBuilder {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl StrokeBuilder {
    fn add_run(&mut self, points: &[Vec2], half_width: f32) {
        for window in points.windows(2) {
            self.add_quad(window[0], window[1], half_width);
        }
        for p in points {
            self.add_disc(*p, half_width);
        }
    }

    fn add_quad(&mut self, a: Vec2, b: Vec2, half_width: f32) {
        let dir = b - a;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        let n = Vec2::new(-dir.y, dir.x).normalize() * half_width;
        let base = self.positions.len() as u32;
        for v in [a + n, a - n, b + n, b - n] {
            self.positions.push([v.x, v.y, 0.0]);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    fn add_disc(&mut self, center: Vec2, radius: f32) {
        let base = self.positions.len() as u32;
        self.positions.push([center.x, center.y, 0.0]);
        for i in 0..JOIN_SEGMENTS {
            let angle = i as f32 / JOIN_SEGMENTS as f32 * std::f32::consts::TAU;
            let v = center + Vec2::from_angle(angle) * radius;
            self.positions.push([v.x, v.y, 0.0]);
        }
        for i in 0..JOIN_SEGMENTS {
            let next = (i + 1) % JOIN_SEGMENTS;
            self.indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }

    fn into_mesh(self) -> Mesh {
        let uvs = vec![[0.0f32, 0.0]; self.positions.len()];
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(self.indices));
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_runs_alternate_along_a_straight_line() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0)];
        let runs = dash_runs(&points, 1.0, 1.0);
        assert_eq!(runs.len(), 5);
        for (i, run) in runs.iter().enumerate() {
            let start = run.first().unwrap().x;
            let end = run.last().unwrap().x;
            assert!((start - i as f32 * 2.0).abs() < 1e-4);
            assert!((end - start - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn dash_runs_span_vertices() {
        // 1.5-long dashes across a corner: the first dash bends around it.
        let points = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        let runs = dash_runs(&points, 1.5, 0.25);
        assert_eq!(runs[0].len(), 3);
        assert_eq!(runs[0][1], Vec2::new(1.0, 0.0));
        assert!((runs[0][2].y - 0.5).abs() < 1e-4);
    }

    #[test]
    fn degenerate_pattern_stays_solid() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0)];
        let runs = dash_runs(&points, 0.0, 1.0);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 2);
    }

    #[test]
    fn segment_distance() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(point_segment_distance(Vec2::new(5.0, 3.0), a, b), 3.0);
        // Beyond the endpoints, distance is to the nearest endpoint.
        assert_eq!(point_segment_distance(Vec2::new(-4.0, 0.0), a, b), 4.0);
        assert_eq!(point_segment_distance(Vec2::new(13.0, 4.0), a, b), 5.0);
        // Zero-length segment degrades to point distance.
        assert_eq!(point_segment_distance(Vec2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn polyline_distance_takes_the_nearest_segment() {
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        assert_eq!(point_polyline_distance(Vec2::new(12.0, 5.0), &pts), 2.0);
        assert_eq!(point_polyline_distance(Vec2::new(5.0, 1.0), &pts), 1.0);
    }

    #[test]
    fn solid_mesh_has_quads_and_joins() {
        let mesh = solid_polyline(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 1.0);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap().len();
        // 1 quad (4 verts) + 2 join discs (11 verts each).
        assert_eq!(positions, 4 + 2 * 11);
    }
}
