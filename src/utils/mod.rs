/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod argmax;
mod argmin;

/// Module containing mathematical utilities.
pub mod math {
    pub use super::argmax::*;
    pub use super::argmin::*;
}

mod threadpool;
pub use threadpool::Threads;
