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
use crate::numeric::scalar::Scalar;

/// Face arity of a quad.
pub const QUAD: usize = 4;
/// Face arity of a hexagon.
pub const HEXAGON: usize = 6;

/// Canonical identity of an undirected edge: the sorted vertex-index pair.
///
/// Faces report their edges in traversal orientation, so a face-local pair
/// must be compared against an `EdgeKey` in both orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// True when `pair` names the same undirected edge, in either orientation.
    pub fn matches(&self, pair: (usize, usize)) -> bool {
        (self.0, self.1) == pair || (self.1, self.0) == pair
    }
}

#[derive(Debug, Clone)]
pub struct Vertex<T: Scalar> {
    pub position: Point3<T>,
    pub select: bool,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point3<T>) -> Self {
        Self {
            position,
            select: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub key: EdgeKey,
    pub select: bool,
}

/// A polygon stored as its ordered vertex cycle.
#[derive(Debug, Clone)]
pub struct Face {
    pub vertices: Vec<usize>,
}

/// In-memory polygon mesh: the reference implementation of the editable-mesh
/// capability surface, and the stand-in for a host-owned mesh in tests.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,

    pub(crate) edge_map: HashMap<EdgeKey, usize>,
}
