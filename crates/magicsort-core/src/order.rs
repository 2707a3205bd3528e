/// True when every adjacent pair is non-decreasing.
///
/// Empty and single-element slices are sorted.
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
