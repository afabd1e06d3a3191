/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Returns the index of the minimum value in the slice `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned.
///
/// # Arguments
/// - `vec`: the slice of elements.
///
/// # Examples
/// ```
/// # use radius_graph::utils::math::argmin;
/// let v = vec![4, 3, 2, 3, 2];
/// let index = argmin(&v);
/// assert_eq!(index, Some(2));
/// ```
pub fn argmin<T: PartialOrd + Copy>(vec: &[T]) -> Option<usize> {
    let (&first, rest) = vec.split_first()?;
    let mut min = first;
    let mut argmin = 0;
    for (i, &elem) in rest.iter().enumerate() {
        if elem < min {
            argmin = i + 1;
            min = elem;
        }
    }
    Some(argmin)
}
