/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The number of threads of a [`rayon::ThreadPool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// Let rayon choose (usually the number of logical cores).
    #[default]
    Default,
    NumThreads(usize),
}

impl From<usize> for Threads {
    /// Zero means [`Threads::Default`].
    fn from(num_threads: usize) -> Self {
        match num_threads {
            0 => Self::Default,
            n => Self::NumThreads(n),
        }
    }
}

impl Threads {
    pub fn build(self) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
        match self {
            Self::Default => rayon::ThreadPoolBuilder::new().build(),
            Self::NumThreads(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build(),
        }
    }
}

/// Builds a [`rayon::ThreadPool`].
///
/// `threads![]` uses the default number of threads, `threads![n]` uses `n`
/// threads.
///
/// # Panics
///
/// If the thread pool cannot be built.
#[macro_export]
macro_rules! threads {
    () => {
        $crate::utils::Threads::Default
            .build()
            .expect("Should be able to build default threadpool")
    };
    ($num_threads:expr) => {
        $crate::utils::Threads::NumThreads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Should be able to build custom threadpool with {} threads",
                    $num_threads
                )
            })
    };
}
