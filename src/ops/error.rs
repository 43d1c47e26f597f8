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

//! Operator outcomes and the invalid-selection taxonomy.

use thiserror::Error;

/// Why an operator rejected the current selection.
///
/// Every variant is detected before any mesh mutation; a host maps this to
/// its cancelled outcome and leaves the mesh untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("exactly 2 vertices must be selected, found {0}")]
    BadVertexCount(usize),

    #[error("mesh doesn't contain any hexagon")]
    NoHexagon,

    #[error("the 2 selected vertices are not on the same hexagon")]
    NotOnSameHexagon,

    #[error("the 2 selected vertices do not share the same edge")]
    NotOnSharedEdge,

    #[error("the 2 selected vertices are not separated by 1 vertex")]
    NotOneApart,

    #[error("at least 2 edges must be selected")]
    TooFewEdges,

    #[error("at least 1 edge pair must be selected")]
    NoOppositePair,

    #[error("at least 1 edge must be selected")]
    NoEdges,

    #[error("no selected edge lies between 2 quads")]
    NoInteriorEdge,
}

/// Non-fatal condition reported alongside a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Warning {
    /// Edge subdivision did not produce the expected inner vertices; the
    /// structural edits made so far are kept, only the slide is skipped.
    #[error("could not build end; result might not be as expected")]
    UnexpectedTopology,
}

/// Successful operator outcome. Validation failures are `Err(SelectionError)`
/// instead, so a host can translate `Ok`/`Err` directly into its
/// finished/cancelled tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    FinishedWithWarning(Warning),
}

pub type OpResult = Result<Outcome, SelectionError>;
