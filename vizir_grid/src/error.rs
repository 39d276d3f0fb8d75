// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by grid queries.

use thiserror::Error;

/// An error returned by a [`Grid`](crate::Grid) query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The last refresh did not build a Cartesian for this axis-index pair.
    #[error("unknown coordinate system for axis pair (x: {x_index}, y: {y_index})")]
    UnknownCartesian {
        /// The requested x axis index.
        x_index: usize,
        /// The requested y axis index.
        y_index: usize,
    },
    /// The grid has not been refreshed yet.
    #[error("grid has not been laid out; call `refresh` first")]
    NotLaidOut,
}
