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

use std::collections::HashMap;

use crate::geometry::point::Point3;
use crate::mesh::basic_types::{Edge, EdgeKey, Face, PolyMesh, Vertex};
use crate::numeric::scalar::Scalar;

impl<T: Scalar> PolyMesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            edge_map: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, position: Point3<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Adds a polygon given its ordered vertex cycle, registering any edges
    /// the mesh does not know yet.
    pub fn add_face(&mut self, vertices: &[usize]) -> usize {
        let n = vertices.len();
        for i in 0..n {
            self.ensure_edge(EdgeKey::new(vertices[i], vertices[(i + 1) % n]));
        }
        let idx = self.faces.len();
        self.faces.push(Face {
            vertices: vertices.to_vec(),
        });
        idx
    }

    pub(crate) fn ensure_edge(&mut self, key: EdgeKey) -> usize {
        if let Some(&slot) = self.edge_map.get(&key) {
            return slot;
        }
        let slot = self.edges.len();
        self.edges.push(Edge { key, select: false });
        self.edge_map.insert(key, slot);
        slot
    }

    pub fn position(&self, vertex: usize) -> Point3<T> {
        self.vertices[vertex].position
    }

    pub fn select_vertex(&mut self, vertex: usize, select: bool) {
        self.vertices[vertex].select = select;
    }

    /// Flags an edge by its undirected key. Returns false when the mesh has
    /// no such edge.
    pub fn select_edge(&mut self, key: EdgeKey, select: bool) -> bool {
        match self.edge_map.get(&key) {
            Some(&slot) => {
                self.edges[slot].select = select;
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        for v in &mut self.vertices {
            v.select = false;
        }
        for e in &mut self.edges {
            e.select = false;
        }
    }

    /// Snapshot of the selected vertex indices, in vertex-table order.
    pub fn selected_vertices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.select)
            .map(|(i, _)| i)
            .collect()
    }

    /// Snapshot of the selected edge keys, in edge-table order.
    pub fn selected_edges(&self) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.select)
            .map(|e| e.key)
            .collect()
    }
}
