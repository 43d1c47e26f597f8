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

use tracing::debug;

use crate::geometry::point::Point3;
use crate::mesh::basic_types::{Edge, EdgeKey, Face, PolyMesh, QUAD};
use crate::mesh::cycle;
use crate::numeric::scalar::Scalar;

/// The capability surface the operators need from a host mesh.
///
/// Selection is read once per invocation as a snapshot; the three structural
/// edits mirror the host primitives the operators are built from
/// (connect-vertices, subdivide-edges, scale-about-pivot). `PolyMesh` is the
/// in-memory reference implementation.
pub trait EditableMesh<T: Scalar> {
    fn selected_vertices(&self) -> Vec<usize>;
    fn selected_edges(&self) -> Vec<EdgeKey>;

    fn face_count(&self) -> usize;
    fn face_vertices(&self, face: usize) -> &[usize];
    fn position(&self, vertex: usize) -> Point3<T>;

    /// Splits every face containing both vertices at non-adjacent cycle
    /// positions along the chord between them. Returns the created edge keys;
    /// empty when no face qualified.
    fn connect_verts(&mut self, v0: usize, v1: usize) -> Vec<EdgeKey>;

    /// Cuts each listed edge once at its midpoint, splicing the new vertex
    /// into every incident face cycle. With `quads_only`, a face that was a
    /// quad before the pass and received two opposite midpoints is split
    /// between them so only quads remain. Returns the new vertices in
    /// input-edge order.
    fn subdivide_edges(&mut self, edges: &[EdgeKey], quads_only: bool) -> Vec<usize>;

    /// Moves each vertex to `pivot + factor * (p - pivot)`.
    fn scale_verts(&mut self, verts: &[usize], pivot: Point3<T>, factor: T);
}

impl<T: Scalar> PolyMesh<T> {
    pub fn connect_verts(&mut self, v0: usize, v1: usize) -> Vec<EdgeKey> {
        let mut created = Vec::new();
        if v0 == v1 {
            return created;
        }

        // Splits append faces; only the faces present at entry are candidates.
        let face_limit = self.faces.len();
        for f in 0..face_limit {
            let verts = &self.faces[f].vertices;
            let (Some(i), Some(j)) = (
                cycle::position_in(verts, v0),
                cycle::position_in(verts, v1),
            ) else {
                continue;
            };
            let n = verts.len();
            if (i + 1) % n == j || (j + 1) % n == i {
                // Already an edge of this face.
                continue;
            }
            let key = self.split_face(f, i.min(j), i.max(j));
            if !created.contains(&key) {
                created.push(key);
            }
        }

        debug!(v0, v1, edges = created.len(), "connect_verts");
        created
    }

    pub fn subdivide_edges(&mut self, edges: &[EdgeKey], quads_only: bool) -> Vec<usize> {
        let face_limit = self.faces.len();
        // Pre-pass arity and received midpoints, per face.
        let mut face_state: Vec<(usize, Vec<usize>)> = self
            .faces
            .iter()
            .map(|f| (f.vertices.len(), Vec::new()))
            .collect();

        let mut inner = Vec::new();
        for key in edges {
            let Some(&slot) = self.edge_map.get(key) else {
                continue;
            };
            let select = self.edges[slot].select;
            let mid = self
                .position(key.0)
                .midpoint(self.position(key.1));
            let m = self.add_vertex(mid);

            // Replace the edge with its two halves, reusing the table slot.
            self.edge_map.remove(key);
            let lo = EdgeKey::new(key.0, m);
            let hi = EdgeKey::new(m, key.1);
            self.edges[slot] = Edge { key: lo, select };
            self.edge_map.insert(lo, slot);
            let hi_slot = self.edges.len();
            self.edges.push(Edge { key: hi, select });
            self.edge_map.insert(hi, hi_slot);

            // Splice the midpoint into every incident face cycle.
            for f in 0..face_limit {
                let verts = &self.faces[f].vertices;
                let n = verts.len();
                let hit = (0..n).find(|&i| key.matches((verts[i], verts[(i + 1) % n])));
                if let Some(i) = hit {
                    self.faces[f].vertices.insert(i + 1, m);
                    face_state[f].1.push(m);
                }
            }

            inner.push(m);
        }

        if quads_only {
            // Former quads whose opposite edges were both cut get connected
            // across the midpoints, keeping the result all-quad.
            for f in 0..face_limit {
                let (arity, mids) = &face_state[f];
                if *arity != QUAD || mids.len() != 2 {
                    continue;
                }
                let verts = &self.faces[f].vertices;
                let n = verts.len();
                let (Some(i0), Some(i1)) = (
                    cycle::position_in(verts, mids[0]),
                    cycle::position_in(verts, mids[1]),
                ) else {
                    continue;
                };
                if (i1 + n - i0) % n != n / 2 {
                    continue;
                }
                self.split_face(f, i0.min(i1), i0.max(i1));
            }
        }

        debug!(cut = inner.len(), quads_only, "subdivide_edges");
        inner
    }

    pub fn scale_verts(&mut self, verts: &[usize], pivot: Point3<T>, factor: T) {
        for &v in verts {
            let p = self.vertices[v].position;
            self.vertices[v].position = pivot.lerp(p, factor);
        }
    }

    /// Splits the face along the chord between cycle positions `i < j`,
    /// replacing it in place and appending the second half. Returns the
    /// chord's edge key.
    fn split_face(&mut self, face: usize, i: usize, j: usize) -> EdgeKey {
        debug_assert!(i < j);
        let verts = &self.faces[face].vertices;
        let key = EdgeKey::new(verts[i], verts[j]);

        let first = verts[i..=j].to_vec();
        let mut second = verts[j..].to_vec();
        second.extend_from_slice(&verts[..=i]);

        self.faces[face].vertices = first;
        self.faces.push(Face { vertices: second });
        self.ensure_edge(key);
        key
    }
}

impl<T: Scalar> EditableMesh<T> for PolyMesh<T> {
    fn selected_vertices(&self) -> Vec<usize> {
        PolyMesh::selected_vertices(self)
    }

    fn selected_edges(&self) -> Vec<EdgeKey> {
        PolyMesh::selected_edges(self)
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertices(&self, face: usize) -> &[usize] {
        &self.faces[face].vertices
    }

    fn position(&self, vertex: usize) -> Point3<T> {
        PolyMesh::position(self, vertex)
    }

    fn connect_verts(&mut self, v0: usize, v1: usize) -> Vec<EdgeKey> {
        PolyMesh::connect_verts(self, v0, v1)
    }

    fn subdivide_edges(&mut self, edges: &[EdgeKey], quads_only: bool) -> Vec<usize> {
        PolyMesh::subdivide_edges(self, edges, quads_only)
    }

    fn scale_verts(&mut self, verts: &[usize], pivot: Point3<T>, factor: T) {
        PolyMesh::scale_verts(self, verts, pivot, factor)
    }
}
