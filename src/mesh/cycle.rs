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

//! Cyclic-index arithmetic over ordered face vertex cycles.
//!
//! Every relation the operators need (adjacent, one-apart, opposite,
//! complement) is a pure function of positions within the cycle, kept here so
//! it can be tested over all rotations and both orientations.

/// Position of `vertex` in the cycle, first occurrence.
pub fn position_in(cycle: &[usize], vertex: usize) -> Option<usize> {
    cycle.iter().position(|&v| v == vertex)
}

/// Consecutive traversal-order vertex pairs of the cycle, wrapping at the end.
pub fn edge_pairs(cycle: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = cycle.len();
    (0..n).map(move |i| (cycle[i], cycle[(i + 1) % n]))
}

/// How two cycle positions relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRelation {
    /// The positions are cyclic neighbours.
    Adjacent,
    /// Exactly one position lies between the two, on either side; `middle` is
    /// its cycle position.
    OneApart { middle: usize },
    /// Anything further apart.
    Distant,
}

/// Classifies two positions in a cycle of length `len`.
///
/// One-apart is tried from `i0` first, then from `i1`, matching the order the
/// corner builder probes the selection in.
pub fn classify_pair(len: usize, i0: usize, i1: usize) -> PairRelation {
    if (i0 + 1) % len == i1 || (i1 + 1) % len == i0 {
        PairRelation::Adjacent
    } else if (i0 + 2) % len == i1 {
        PairRelation::OneApart {
            middle: (i0 + 1) % len,
        }
    } else if (i1 + 2) % len == i0 {
        PairRelation::OneApart {
            middle: (i1 + 1) % len,
        }
    } else {
        PairRelation::Distant
    }
}

/// The position two steps from `anchor`, on the side away from `other`.
///
/// Used by the end builder: when the next position along the cycle is the
/// other selected vertex, step backwards instead.
pub fn end_opposite(anchor: usize, other: usize, len: usize) -> usize {
    if (anchor + 1) % len != other {
        (anchor + 2) % len
    } else {
        (anchor + len - 2) % len
    }
}

/// The position directly across the cycle (`len / 2` steps away).
pub fn across(position: usize, len: usize) -> usize {
    (position + len / 2) % len
}

/// For an edge `(a, b)` of the face cycle, the cycle neighbour of each
/// endpoint on the side not occupied by the other endpoint.
///
/// For a quad this yields the two vertices diagonally adjacent to the edge,
/// i.e. the far corners of the face relative to that edge. Returns `None`
/// when either endpoint is not part of the cycle.
pub fn complementary_pair(cycle: &[usize], edge: (usize, usize)) -> Option<(usize, usize)> {
    let n = cycle.len();
    let i0 = position_in(cycle, edge.0)?;
    let i1 = position_in(cycle, edge.1)?;

    let c0 = if (i0 + 1) % n != i1 {
        (i0 + 1) % n
    } else {
        (i0 + n - 1) % n
    };
    let c1 = if (i1 + 1) % n != i0 {
        (i1 + 1) % n
    } else {
        (i1 + n - 1) % n
    };

    Some((cycle[c0], cycle[c1]))
}
