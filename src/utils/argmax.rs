/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Returns the index of the maximum value in the slice `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned.
///
/// # Arguments
/// - `vec`: the slice of elements.
///
/// # Examples
/// ```
/// # use radius_graph::utils::math::argmax;
/// let v = vec![1, 5, 2, 5, 1];
/// let index = argmax(&v);
/// assert_eq!(index, Some(1));
/// ```
pub fn argmax<T: PartialOrd + Copy>(vec: &[T]) -> Option<usize> {
    let (&first, rest) = vec.split_first()?;
    let mut max = first;
    let mut argmax = 0;
    for (i, &elem) in rest.iter().enumerate() {
        if elem > max {
            argmax = i + 1;
            max = elem;
        }
    }
    Some(argmax)
}
