// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The quadloops developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use approx::assert_relative_eq;
use quadloops::mesh::basic_types::{EdgeKey, PolyMesh};
use quadloops::{AdjustAdjacentLoops, AdjustLoops, Outcome, SelectionError};

use quadloops::geometry::point::Point3;

fn assert_pos(m: &PolyMesh<f64>, v: usize, x: f64, y: f64) {
    let p = m.position(v);
    assert_relative_eq!(p.x, x, epsilon = 1e-12);
    assert_relative_eq!(p.y, y, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

/// Single unit quad, counter-clockwise from the origin.
fn unit_quad() -> (PolyMesh<f64>, Vec<usize>) {
    let mut m = PolyMesh::new();
    let v: Vec<usize> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .iter()
        .map(|&(x, y)| m.add_vertex(Point3::new(x, y, 0.0)))
        .collect();
    m.add_face(&v);
    (m, v)
}

/// Two quads side by side: vertex `x + 3 * y` at `(x, y)` for `x` in 0..=2,
/// `y` in 0..=1.
fn two_quad_strip() -> PolyMesh<f64> {
    let mut m = PolyMesh::new();
    for y in 0..2 {
        for x in 0..3 {
            m.add_vertex(Point3::new(x as f64, y as f64, 0.0));
        }
    }
    m.add_face(&[0, 1, 4, 3]);
    m.add_face(&[1, 2, 5, 4]);
    m
}

/// 2x2 grid of quads: vertex `col + 3 * row` at `(col, row)`.
fn quad_grid() -> PolyMesh<f64> {
    let mut m = PolyMesh::new();
    for row in 0..3 {
        for col in 0..3 {
            m.add_vertex(Point3::new(col as f64, row as f64, 0.0));
        }
    }
    m.add_face(&[0, 1, 4, 3]);
    m.add_face(&[1, 2, 5, 4]);
    m.add_face(&[3, 4, 7, 6]);
    m.add_face(&[4, 5, 8, 7]);
    m
}

#[test]
fn adjust_loops_collapses_quad_rails() {
    let (mut m, v) = unit_quad();
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    m.select_edge(EdgeKey::new(v[2], v[3]), true);

    let op = AdjustLoops { adjustment: 0.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    // Each side rail collapses onto its midpoint.
    assert_pos(&m, v[0], 0.0, 0.5);
    assert_pos(&m, v[3], 0.0, 0.5);
    assert_pos(&m, v[1], 1.0, 0.5);
    assert_pos(&m, v[2], 1.0, 0.5);
}

#[test]
fn adjust_loops_spreads_quad_rails() {
    let (mut m, v) = unit_quad();
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    m.select_edge(EdgeKey::new(v[2], v[3]), true);

    let op = AdjustLoops { adjustment: 2.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, v[0], 0.0, -0.5);
    assert_pos(&m, v[3], 0.0, 1.5);
    assert_pos(&m, v[1], 1.0, -0.5);
    assert_pos(&m, v[2], 1.0, 1.5);
}

#[test]
fn adjust_loops_identity_and_clamp() {
    let (mut m, v) = unit_quad();
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    m.select_edge(EdgeKey::new(v[2], v[3]), true);

    assert_eq!(
        AdjustLoops::default().apply(&mut m).unwrap(),
        Outcome::Finished
    );
    for (i, &(x, y)) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .iter()
        .enumerate()
    {
        assert_pos(&m, v[i], x, y);
    }

    // Negative adjustments clamp to 0, same as a full collapse.
    let op = AdjustLoops { adjustment: -3.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);
    assert_pos(&m, v[0], 0.0, 0.5);
    assert_pos(&m, v[2], 1.0, 0.5);
}

#[test]
fn adjust_loops_dedups_shared_rail() {
    let mut m = two_quad_strip();
    // Both quads qualify; the middle rail {1, 4} is produced by each but
    // must move only once.
    m.select_edge(EdgeKey::new(0, 1), true);
    m.select_edge(EdgeKey::new(3, 4), true);
    m.select_edge(EdgeKey::new(1, 2), true);
    m.select_edge(EdgeKey::new(4, 5), true);

    let op = AdjustLoops { adjustment: 2.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, 0, 0.0, -0.5);
    assert_pos(&m, 3, 0.0, 1.5);
    assert_pos(&m, 1, 1.0, -0.5);
    assert_pos(&m, 4, 1.0, 1.5);
    assert_pos(&m, 2, 2.0, -0.5);
    assert_pos(&m, 5, 2.0, 1.5);
}

#[test]
fn adjust_loops_sequential_rails_cascade() {
    let mut m = two_quad_strip();
    // Selecting the three vertical edges makes each quad contribute its
    // horizontal rails; later rails see the moves of earlier ones.
    m.select_edge(EdgeKey::new(0, 3), true);
    m.select_edge(EdgeKey::new(1, 4), true);
    m.select_edge(EdgeKey::new(2, 5), true);

    let op = AdjustLoops { adjustment: 0.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, 0, 0.5, 0.0);
    assert_pos(&m, 1, 1.25, 0.0);
    assert_pos(&m, 2, 1.25, 0.0);
    assert_pos(&m, 3, 0.5, 1.0);
    assert_pos(&m, 4, 1.25, 1.0);
    assert_pos(&m, 5, 1.25, 1.0);
}

#[test]
fn adjust_loops_rejects_single_edge() {
    let (mut m, v) = unit_quad();
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    assert_eq!(
        AdjustLoops::<f64>::default().apply(&mut m),
        Err(SelectionError::TooFewEdges)
    );
    assert_pos(&m, v[0], 0.0, 0.0);
}

#[test]
fn adjust_loops_rejects_adjacent_edges() {
    let (mut m, v) = unit_quad();
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    m.select_edge(EdgeKey::new(v[1], v[2]), true);
    assert_eq!(
        AdjustLoops::<f64>::default().apply(&mut m),
        Err(SelectionError::NoOppositePair)
    );
    // Untouched.
    assert_pos(&m, v[1], 1.0, 0.0);
    assert_pos(&m, v[2], 1.0, 1.0);
}

#[test]
fn adjust_adjacent_pulls_neighbour_loops_in() {
    let mut m = two_quad_strip();
    m.select_edge(EdgeKey::new(1, 4), true);

    let op = AdjustAdjacentLoops { adjustment: 0.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    // Outer columns land on the selected loop; the loop itself stays.
    assert_pos(&m, 0, 1.0, 0.0);
    assert_pos(&m, 2, 1.0, 0.0);
    assert_pos(&m, 1, 1.0, 0.0);
    assert_pos(&m, 3, 1.0, 1.0);
    assert_pos(&m, 5, 1.0, 1.0);
    assert_pos(&m, 4, 1.0, 1.0);
}

#[test]
fn adjust_adjacent_pushes_neighbour_loops_out() {
    let mut m = two_quad_strip();
    m.select_edge(EdgeKey::new(1, 4), true);

    let op = AdjustAdjacentLoops { adjustment: 2.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, 0, -1.0, 0.0);
    assert_pos(&m, 2, 3.0, 0.0);
    assert_pos(&m, 3, -1.0, 1.0);
    assert_pos(&m, 5, 3.0, 1.0);
    assert_pos(&m, 1, 1.0, 0.0);
    assert_pos(&m, 4, 1.0, 1.0);
}

#[test]
fn adjust_adjacent_identity() {
    let mut m = two_quad_strip();
    m.select_edge(EdgeKey::new(1, 4), true);
    assert_eq!(
        AdjustAdjacentLoops::default().apply(&mut m).unwrap(),
        Outcome::Finished
    );
    for v in 0..6 {
        assert_pos(&m, v, (v % 3) as f64, (v / 3) as f64);
    }
}

#[test]
fn adjust_adjacent_dedups_shared_cross_sections() {
    let mut m = quad_grid();
    // Two collinear selected edges share the middle vertex 4; its
    // cross-section must be applied once.
    m.select_edge(EdgeKey::new(1, 4), true);
    m.select_edge(EdgeKey::new(4, 7), true);

    let op = AdjustAdjacentLoops { adjustment: 2.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, 0, -1.0, 0.0);
    assert_pos(&m, 2, 3.0, 0.0);
    assert_pos(&m, 3, -1.0, 1.0);
    assert_pos(&m, 5, 3.0, 1.0);
    assert_pos(&m, 6, -1.0, 2.0);
    assert_pos(&m, 8, 3.0, 2.0);
    // The selected loop never moves.
    assert_pos(&m, 1, 1.0, 0.0);
    assert_pos(&m, 4, 1.0, 1.0);
    assert_pos(&m, 7, 1.0, 2.0);
}

#[test]
fn adjust_adjacent_rejects_empty_selection() {
    let mut m = two_quad_strip();
    assert_eq!(
        AdjustAdjacentLoops::<f64>::default().apply(&mut m),
        Err(SelectionError::NoEdges)
    );
}

#[test]
fn adjust_adjacent_rejects_boundary_only_selection() {
    let (mut m, v) = unit_quad();
    // Every edge of a lone quad is a boundary edge: one supporting face.
    m.select_edge(EdgeKey::new(v[0], v[1]), true);
    assert_eq!(
        AdjustAdjacentLoops::<f64>::default().apply(&mut m),
        Err(SelectionError::NoInteriorEdge)
    );
    assert_pos(&m, v[0], 0.0, 0.0);
    assert_pos(&m, v[1], 1.0, 0.0);
}

#[test]
fn adjust_adjacent_skips_boundary_keeps_interior() {
    let mut m = two_quad_strip();
    // One boundary edge plus the interior edge: only the interior one
    // contributes, the call still finishes.
    m.select_edge(EdgeKey::new(0, 3), true);
    m.select_edge(EdgeKey::new(1, 4), true);

    let op = AdjustAdjacentLoops { adjustment: 0.0 };
    assert_eq!(op.apply(&mut m).unwrap(), Outcome::Finished);

    assert_pos(&m, 0, 1.0, 0.0);
    assert_pos(&m, 2, 1.0, 0.0);
    assert_pos(&m, 3, 1.0, 1.0);
    assert_pos(&m, 5, 1.0, 1.0);
}
