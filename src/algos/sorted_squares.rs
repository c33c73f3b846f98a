// Input must already be sorted ascending; negatives are allowed.

// Appending then sorting; the baseline everything else is measured against.
pub fn push_and_sort(values: &[i64]) -> Vec<i64> {
    let mut squares = Vec::new();
    for &value in values {
        squares.push(value * value);
    }
    squares.sort_unstable();
    squares
}

// Time: O(n*log(n)) | Space: O(n)
pub fn preallocated(values: &[i64]) -> Vec<i64> {
    let mut squares = vec![0; values.len()];
    for (idx, &value) in values.iter().enumerate() {
        squares[idx] = value * value;
    }
    squares.sort_unstable();
    squares
}

// Same complexity, iterator form.
pub fn map_sorted(values: &[i64]) -> Vec<i64> {
    let mut squares: Vec<i64> = values.iter().map(|v| v * v).collect();
    squares.sort_unstable();
    squares
}

// Time: O(n) | Space: O(n)
// Exploits the sortedness: the largest square sits at one of the two ends.
pub fn two_pointer(values: &[i64]) -> Vec<i64> {
    let mut squares = vec![0; values.len()];
    if values.is_empty() {
        return squares;
    }

    let mut smaller_idx = 0;
    let mut larger_idx = values.len() - 1;

    for idx in (0..values.len()).rev() {
        let smaller = values[smaller_idx];
        let larger = values[larger_idx];
        if smaller.abs() > larger.abs() {
            squares[idx] = smaller * smaller;
            smaller_idx += 1;
        } else {
            squares[idx] = larger * larger;
            larger_idx = larger_idx.saturating_sub(1);
        }
    }
    squares
}
