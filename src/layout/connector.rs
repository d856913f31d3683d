use serde::{Deserialize, Serialize};

/// One step of an axis-aligned connector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PathSegment {
    Move { x: f32, y: f32 },
    Line { x: f32, y: f32 },
}

/// Lateral clearance used when routing around close or overlapping anchors.
pub const DEFAULT_CONNECTOR_OFFSET: f32 = 20.0;

/// Route an orthogonal dependency connector between two anchor points.
///
/// With enough horizontal room the path runs through a single midpoint
/// column (two bends). Close or overlapping anchors get a detour: out to
/// the right, through a transition row at half the vertical gap (capped at
/// 30px), back in from the left of the target (four bends).
pub fn rectangular_path(
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    offset: f32,
) -> Vec<PathSegment> {
    let horizontal = end_x - start_x;
    let vertical = (end_y - start_y).abs();

    let mut points = vec![(start_x, start_y)];

    if horizontal > offset * 2.0 {
        let mid_x = start_x + horizontal / 2.0;
        points.push((mid_x, start_y));
        points.push((mid_x, end_y));
    } else {
        let lateral = offset.max(20.0);
        let direction = if end_y > start_y { 1.0 } else { -1.0 };
        let transition_y = start_y + direction * (vertical / 2.0).min(30.0);

        points.push((start_x + lateral, start_y));
        points.push((start_x + lateral, transition_y));
        points.push((end_x - lateral, transition_y));
        points.push((end_x - lateral, end_y));
    }

    points.push((end_x, end_y));

    points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if i == 0 {
                PathSegment::Move { x, y }
            } else {
                PathSegment::Line { x, y }
            }
        })
        .collect()
}

/// Serialize a path as an SVG path-data string, e.g. `"M 0 100 L 50 100"`.
pub fn to_svg_path(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            PathSegment::Move { x, y } => format!("M {} {}", x, y),
            PathSegment::Line { x, y } => format!("L {} {}", x, y),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(segment: &PathSegment) -> (f32, f32) {
        match *segment {
            PathSegment::Move { x, y } | PathSegment::Line { x, y } => (x, y),
        }
    }

    #[test]
    fn wide_gaps_route_through_a_midpoint_column() {
        let path = rectangular_path(0.0, 100.0, 200.0, 150.0, DEFAULT_CONNECTOR_OFFSET);
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], PathSegment::Move { x: 0.0, y: 100.0 });
        assert_eq!(path[1], PathSegment::Line { x: 100.0, y: 100.0 });
        assert_eq!(path[2], PathSegment::Line { x: 100.0, y: 150.0 });
        assert_eq!(path[3], PathSegment::Line { x: 200.0, y: 150.0 });
    }

    #[test]
    fn close_anchors_detour_around() {
        let path = rectangular_path(0.0, 100.0, 10.0, 200.0, DEFAULT_CONNECTOR_OFFSET);
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], PathSegment::Move { x: 0.0, y: 100.0 });
        assert_eq!(path[1], PathSegment::Line { x: 20.0, y: 100.0 });
        // Transition row at half the vertical gap, capped at 30.
        assert_eq!(path[2], PathSegment::Line { x: 20.0, y: 130.0 });
        assert_eq!(path[3], PathSegment::Line { x: -10.0, y: 130.0 });
        assert_eq!(path[4], PathSegment::Line { x: -10.0, y: 200.0 });
        assert_eq!(path[5], PathSegment::Line { x: 10.0, y: 200.0 });
    }

    #[test]
    fn upward_connections_transition_upward() {
        let path = rectangular_path(0.0, 200.0, 10.0, 100.0, DEFAULT_CONNECTOR_OFFSET);
        let (_, transition_y) = endpoint(&path[2]);
        assert!(transition_y < 200.0);
        assert_eq!(transition_y, 170.0);
    }

    #[test]
    fn backwards_connections_detour() {
        let path = rectangular_path(200.0, 100.0, 0.0, 150.0, DEFAULT_CONNECTOR_OFFSET);
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], PathSegment::Move { x: 200.0, y: 100.0 });
        assert_eq!(endpoint(path.last().expect("non-empty path")), (0.0, 150.0));
    }

    #[test]
    fn horizontal_runs_keep_their_row() {
        let path = rectangular_path(0.0, 100.0, 200.0, 100.0, DEFAULT_CONNECTOR_OFFSET);
        for segment in &path {
            assert_eq!(endpoint(segment).1, 100.0);
        }
    }

    #[test]
    fn paths_are_axis_aligned_and_finite() {
        for (sx, sy, ex, ey) in [
            (0.0, 0.0, 300.0, 80.0),
            (-50.0, -50.0, 50.0, 50.0),
            (0.0, 100.0, 10.0, 105.0),
            (100.0, 0.0, 100.0, 200.0),
        ] {
            let path = rectangular_path(sx, sy, ex, ey, DEFAULT_CONNECTOR_OFFSET);
            for pair in path.windows(2) {
                let (x1, y1) = endpoint(&pair[0]);
                let (x2, y2) = endpoint(&pair[1]);
                assert!(x1 == x2 || y1 == y2, "diagonal step in {:?}", path);
            }
            for segment in &path {
                let (x, y) = endpoint(segment);
                assert!(x.is_finite() && y.is_finite());
            }
        }
    }

    #[test]
    fn svg_serialization_matches_path_grammar() {
        let path = rectangular_path(0.0, 100.0, 200.0, 150.0, DEFAULT_CONNECTOR_OFFSET);
        let svg = to_svg_path(&path);
        assert!(svg.starts_with("M 0 100"));
        assert_eq!(svg.matches('L').count(), path.len() - 1);
    }
}
