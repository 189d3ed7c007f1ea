/// Stable bottom-up merge sort driven only by a strict `less` predicate.
///
/// An element moves ahead of an earlier one only when `less(later, earlier)`
/// holds, so ties keep input order. An inconsistent predicate (for example a
/// variant-mixed attribute) yields some permutation of the input and never
/// panics.
pub(super) fn stable_sort_by<T, F>(items: Vec<T>, mut less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return items;
    }

    let mut src: Vec<usize> = (0..len).collect();
    let mut dst = vec![0; len];
    let mut width = 1;

    while width < len {
        let mut start = 0;

        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                if less(&items[src[j]], &items[src[i]]) {
                    dst[k] = src[j];
                    j += 1;
                } else {
                    dst[k] = src[i];
                    i += 1;
                }
                k += 1;
            }

            let left_rest = mid - i;
            dst[k..k + left_rest].copy_from_slice(&src[i..mid]);
            k += left_rest;
            dst[k..k + (end - j)].copy_from_slice(&src[j..end]);

            start = end;
        }

        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();

    src.into_iter().filter_map(|pos| slots[pos].take()).collect()
}

///
/// TESTS
///
