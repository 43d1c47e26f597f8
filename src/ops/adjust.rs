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

//! Adjust Loops and Adjust Adjacent Loops: slide edge loops by scaling their
//! rail vertices about a per-rail pivot.
//!
//! Both operators only read quad faces, match selected edges against face
//! edge pairs in either orientation, and deduplicate the derived scale
//! targets so a vertex shared between qualifying faces or edges moves exactly
//! once.

use std::collections::HashSet;

use tracing::debug;

use crate::mesh::basic_types::QUAD;
use crate::mesh::cycle;
use crate::mesh::topology::EditableMesh;
use crate::numeric::scalar::Scalar;
use crate::ops::error::{OpResult, Outcome, SelectionError};

fn sorted_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b { (a, b) } else { (b, a) }
}

fn clamp_non_negative<T: Scalar>(value: T) -> T {
    value.max(T::zero())
}

/// Changes the distance between two or more selected parallel edge loops.
///
/// Every quad with exactly two selected, mutually opposite edges contributes
/// its two side rails; each unique rail pair is scaled about its midpoint by
/// `adjustment`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustLoops<T: Scalar> {
    /// Distance multiplier, clamped to `>= 0`: 1 is the identity, 0 collapses
    /// each rail pair onto its midpoint, larger values spread the loops.
    pub adjustment: T,
}

impl<T: Scalar> Default for AdjustLoops<T> {
    fn default() -> Self {
        Self {
            adjustment: T::one(),
        }
    }
}

impl<T: Scalar> AdjustLoops<T> {
    pub fn apply<M: EditableMesh<T>>(&self, mesh: &mut M) -> OpResult {
        let selected = mesh.selected_edges();
        if selected.len() < 2 {
            return Err(SelectionError::TooFewEdges);
        }

        let mut rails: Vec<(usize, usize)> = Vec::new();
        for f in 0..mesh.face_count() {
            let verts = mesh.face_vertices(f);
            if verts.len() != QUAD {
                continue;
            }
            let pairs: Vec<(usize, usize)> = cycle::edge_pairs(verts).collect();

            // A third matching edge already disqualifies the face, so the
            // scan can stop there.
            let mut matches: Vec<(usize, (usize, usize))> = Vec::new();
            for key in &selected {
                if matches.len() >= 3 {
                    break;
                }
                if let Some(at) = pairs.iter().position(|&pair| key.matches(pair)) {
                    matches.push((at, pairs[at]));
                }
            }
            if matches.len() != 2 {
                continue;
            }
            let (at0, edge) = matches[0];
            let (at1, _) = matches[1];
            if at0.abs_diff(at1) != 2 {
                // Selected edges touch the quad but are not opposite.
                continue;
            }

            let Some((c0, c1)) = cycle::complementary_pair(verts, edge) else {
                continue;
            };
            rails.push(sorted_pair(edge.0, c0));
            rails.push(sorted_pair(edge.1, c1));
        }

        if rails.is_empty() {
            return Err(SelectionError::NoOppositePair);
        }

        // Dedup by the smaller vertex id, first occurrence wins.
        let mut seen: HashSet<usize> = HashSet::new();
        let unique: Vec<(usize, usize)> = rails
            .into_iter()
            .filter(|pair| seen.insert(pair.0))
            .collect();
        debug!(pairs = unique.len(), "adjusting loops");

        let factor = clamp_non_negative(self.adjustment);
        for (a, b) in unique {
            let pivot = mesh.position(a).midpoint(mesh.position(b));
            mesh.scale_verts(&[a, b], pivot, factor);
        }
        Ok(Outcome::Finished)
    }
}

/// Changes the position of the edge loops on either side of the selected
/// loop.
///
/// Each selected edge flanked by exactly two quads contributes one 3-vertex
/// cross-section per endpoint (far corner, edge vertex, far corner on the
/// other face); each unique cross-section scales its outer vertices about the
/// middle one by `adjustment`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustAdjacentLoops<T: Scalar> {
    /// Distance multiplier, clamped to `>= 0`: 1 is the identity, 0 pulls the
    /// neighbouring loops onto the selected one.
    pub adjustment: T,
}

impl<T: Scalar> Default for AdjustAdjacentLoops<T> {
    fn default() -> Self {
        Self {
            adjustment: T::one(),
        }
    }
}

impl<T: Scalar> AdjustAdjacentLoops<T> {
    pub fn apply<M: EditableMesh<T>>(&self, mesh: &mut M) -> OpResult {
        let selected = mesh.selected_edges();
        if selected.is_empty() {
            return Err(SelectionError::NoEdges);
        }

        // Up to two supporting quads per selected edge; more are irrelevant.
        let mut linked: Vec<Vec<usize>> = vec![Vec::new(); selected.len()];
        for f in 0..mesh.face_count() {
            let verts = mesh.face_vertices(f);
            if verts.len() != QUAD {
                continue;
            }
            for (j, key) in selected.iter().enumerate() {
                if linked[j].len() >= 2 {
                    continue;
                }
                if cycle::edge_pairs(verts).any(|pair| key.matches(pair)) {
                    linked[j].push(f);
                }
            }
        }

        let mut sections: Vec<[usize; 3]> = Vec::new();
        for (j, faces) in linked.iter().enumerate() {
            // Boundary and non-manifold edges have nothing on one side.
            if faces.len() != 2 {
                continue;
            }
            let key = selected[j];
            let Some((a0, b0)) =
                cycle::complementary_pair(mesh.face_vertices(faces[0]), (key.0, key.1))
            else {
                continue;
            };
            let Some((a1, b1)) =
                cycle::complementary_pair(mesh.face_vertices(faces[1]), (key.0, key.1))
            else {
                continue;
            };
            sections.push([a0, key.0, a1]);
            sections.push([b0, key.1, b1]);
        }

        if sections.is_empty() {
            return Err(SelectionError::NoInteriorEdge);
        }

        // Dedup by the middle (on-edge) vertex, first occurrence wins.
        let mut seen: HashSet<usize> = HashSet::new();
        let unique: Vec<[usize; 3]> = sections
            .into_iter()
            .filter(|section| seen.insert(section[1]))
            .collect();
        debug!(sections = unique.len(), "adjusting adjacent loops");

        let factor = clamp_non_negative(self.adjustment);
        for [a, mid, b] in unique {
            let pivot = mesh.position(mid);
            mesh.scale_verts(&[a, b], pivot, factor);
        }
        Ok(Outcome::Finished)
    }
}
