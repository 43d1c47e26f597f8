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

//! Topology-aware quad-loop editing operators for polygon meshes.
//!
//! Four operators work from the current vertex/edge selection:
//!
//! - [`BuildEnd`]: cap two parallel loops ending on a hexagon with quads.
//! - [`BuildCorner`]: turn an edge loop around a hexagon corner with quads.
//! - [`AdjustLoops`]: slide parallel edge loops toward or away from each other.
//! - [`AdjustAdjacentLoops`]: slide the loops on either side of a selected loop.
//!
//! The operators are generic over the [`EditableMesh`](mesh::topology::EditableMesh)
//! capability trait, so they run against any host mesh adapter. The crate ships
//! [`PolyMesh`](mesh::basic_types::PolyMesh) as the in-memory reference
//! implementation.
//!
//! ```
//! use quadloops::geometry::point::Point3;
//! use quadloops::mesh::basic_types::PolyMesh;
//! use quadloops::{BuildEnd, Outcome};
//!
//! let mut mesh = PolyMesh::<f64>::new();
//! let ring: Vec<usize> = (0..6)
//!     .map(|k| {
//!         let a = k as f64 * std::f64::consts::FRAC_PI_3;
//!         mesh.add_vertex(Point3::new(a.cos(), a.sin(), 0.0))
//!     })
//!     .collect();
//! mesh.add_face(&ring);
//!
//! mesh.select_vertex(ring[0], true);
//! mesh.select_vertex(ring[1], true);
//!
//! let outcome = BuildEnd::default().apply(&mut mesh)?;
//! assert_eq!(outcome, Outcome::Finished);
//! assert!(mesh.faces.iter().all(|f| f.vertices.len() == 4));
//! # Ok::<(), quadloops::SelectionError>(())
//! ```

pub mod geometry;
pub mod mesh;
pub mod numeric;
pub mod ops;

pub use ops::adjust::{AdjustAdjacentLoops, AdjustLoops};
pub use ops::build::{BuildCorner, BuildEnd};
pub use ops::error::{OpResult, Outcome, SelectionError, Warning};
