/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representations: the incidence store and the neighbor queries
//! built on top of it.

mod incidence;
pub use incidence::*;

mod adjacency;
pub use adjacency::*;

pub mod traits;
pub use traits::RandomAccessGraph;
