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

//! Build End and Build Corner: quad caps across a hexagonal face.
//!
//! Both operators resolve the same selection shape — exactly two selected
//! vertices co-located on one hexagon — then diverge on how the pair sits in
//! the hexagon's vertex cycle: on a shared edge (end cap) or separated by a
//! single vertex (corner turn).

use tracing::{debug, warn};

use crate::mesh::basic_types::HEXAGON;
use crate::mesh::cycle::{self, PairRelation};
use crate::mesh::topology::EditableMesh;
use crate::numeric::scalar::Scalar;
use crate::ops::error::{OpResult, Outcome, SelectionError, Warning};

/// Two selected vertices located on a hexagon, as cycle positions.
struct HexSelection {
    cycle: Vec<usize>,
    positions: [usize; 2],
}

/// Shared resolution for the two builders: exactly 2 selected vertices, at
/// least one hexagon in the mesh, one hexagon containing both.
fn resolve_hexagon<T, M>(mesh: &M) -> Result<HexSelection, SelectionError>
where
    T: Scalar,
    M: EditableMesh<T>,
{
    let selected = mesh.selected_vertices();
    if selected.len() != 2 {
        return Err(SelectionError::BadVertexCount(selected.len()));
    }

    let mut saw_hexagon = false;
    for f in 0..mesh.face_count() {
        let verts = mesh.face_vertices(f);
        if verts.len() != HEXAGON {
            continue;
        }
        saw_hexagon = true;

        let (Some(i0), Some(i1)) = (
            cycle::position_in(verts, selected[0]),
            cycle::position_in(verts, selected[1]),
        ) else {
            continue;
        };

        debug!(face = f, "selection resolved onto hexagon");
        return Ok(HexSelection {
            cycle: verts.to_vec(),
            positions: [i0, i1],
        });
    }

    Err(if saw_hexagon {
        SelectionError::NotOnSameHexagon
    } else {
        SelectionError::NoHexagon
    })
}

fn clamp_unit<T: Scalar>(value: T) -> T {
    value.max(T::zero()).min(T::one())
}

/// Builds a quad ending to two parallel loops from a two-vertex selection on
/// a hexagon edge.
///
/// The selected vertices are each connected to the hexagon vertex two steps
/// away on their far side, the two chords are subdivided once (quads only),
/// and the two midpoints slide toward their common center by `slide`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildEnd<T: Scalar> {
    /// Slide factor in `[0, 1]`: 0 collapses the new edge onto its center,
    /// 1 leaves it at the subdivided position.
    pub slide: T,
}

impl<T: Scalar> Default for BuildEnd<T> {
    fn default() -> Self {
        Self {
            slide: T::from_f64(0.5),
        }
    }
}

impl<T: Scalar> BuildEnd<T> {
    pub fn apply<M: EditableMesh<T>>(&self, mesh: &mut M) -> OpResult {
        let sel = resolve_hexagon(mesh)?;
        let [i0, i1] = sel.positions;
        let (s0, s1) = (sel.cycle[i0], sel.cycle[i1]);

        // The pair must be an actual edge of the hexagon, in either
        // orientation.
        let on_edge =
            cycle::edge_pairs(&sel.cycle).any(|pair| pair == (s0, s1) || pair == (s1, s0));
        if !on_edge {
            return Err(SelectionError::NotOnSharedEdge);
        }

        let slide = clamp_unit(self.slide);
        let opp0 = sel.cycle[cycle::end_opposite(i0, i1, HEXAGON)];
        let opp1 = sel.cycle[cycle::end_opposite(i1, i0, HEXAGON)];

        let mut new_edges = mesh.connect_verts(s0, opp0);
        new_edges.extend(mesh.connect_verts(s1, opp1));
        let inner = mesh.subdivide_edges(&new_edges, true);

        // Incompatible starting topology can leave us without the two
        // midpoints. The edits so far are committed; only the slide is
        // skipped.
        if inner.len() != 2 {
            warn!(inner = inner.len(), "end cap subdivision incomplete");
            return Ok(Outcome::FinishedWithWarning(Warning::UnexpectedTopology));
        }

        let pivot = mesh.position(inner[0]).midpoint(mesh.position(inner[1]));
        mesh.scale_verts(&inner, pivot, slide);
        Ok(Outcome::Finished)
    }
}

/// Builds a quad corner from a two-vertex selection with exactly one hexagon
/// vertex between the pair, letting an edge loop turn.
///
/// The pair is connected and the chord subdivided once; the new vertex is
/// connected to the vertex across from the in-between one, then slides toward
/// it by `slide`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildCorner<T: Scalar> {
    /// Slide factor in `[0, 1]`: 0 collapses the new vertex onto the opposite
    /// corner, 1 leaves it at the subdivided position.
    pub slide: T,
}

impl<T: Scalar> Default for BuildCorner<T> {
    fn default() -> Self {
        Self {
            slide: T::from_f64(0.5),
        }
    }
}

impl<T: Scalar> BuildCorner<T> {
    pub fn apply<M: EditableMesh<T>>(&self, mesh: &mut M) -> OpResult {
        let sel = resolve_hexagon(mesh)?;
        let [i0, i1] = sel.positions;

        let middle = match cycle::classify_pair(HEXAGON, i0, i1) {
            PairRelation::OneApart { middle } => middle,
            _ => return Err(SelectionError::NotOneApart),
        };

        let slide = clamp_unit(self.slide);
        let opposite = sel.cycle[cycle::across(middle, HEXAGON)];
        let (s0, s1) = (sel.cycle[i0], sel.cycle[i1]);

        let new_edges = mesh.connect_verts(s0, s1);
        let inner = mesh.subdivide_edges(&new_edges, true);
        let Some(&created) = inner.first() else {
            // Mutation has begun; commit what exists rather than roll back.
            warn!("corner chord produced no midpoint");
            return Ok(Outcome::FinishedWithWarning(Warning::UnexpectedTopology));
        };

        mesh.connect_verts(created, opposite);

        let pivot = mesh.position(opposite);
        mesh.scale_verts(&[created], pivot, slide);
        Ok(Outcome::Finished)
    }
}
