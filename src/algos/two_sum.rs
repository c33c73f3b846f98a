use std::collections::HashMap;

// Time: O(n^2) | Space: O(1)
pub fn brute_force(values: &[i64], target: i64) -> Option<(i64, i64)> {
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] + values[j] == target {
                return Some((values[i], values[j]));
            }
        }
    }
    None
}

// Time: O(n^2) | Space: O(1)
// Walks every ordered pair, so the answer may come back in either order.
pub fn symmetric_scan(values: &[i64], target: i64) -> Option<(i64, i64)> {
    for (i, left) in values.iter().enumerate() {
        for (j, right) in values.iter().enumerate() {
            if i == j {
                continue;
            }
            if left + right == target {
                return Some((*left, *right));
            }
        }
    }
    None
}

// Time: O(n*log(n)) | Space: O(n)
pub fn two_pointer(values: &[i64], target: i64) -> Option<(i64, i64)> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut left = 0;
    let mut right = sorted.len().checked_sub(1)?;

    while left < right {
        let sum = sorted[left] + sorted[right];
        if sum == target {
            return Some((sorted[left], sorted[right]));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

// Time: O(n) | Space: O(n)
pub fn hash_map(values: &[i64], target: i64) -> Option<(i64, i64)> {
    let mut seen: HashMap<i64, bool> = HashMap::new();
    for &number in values {
        let complement = target - number;
        if seen.contains_key(&complement) {
            return Some((complement, number));
        }
        seen.insert(number, true);
    }
    None
}

// Time: O(n) | Space: O(n)
// Index-returning rendition; i < j holds for the returned positions.
pub fn index_pairs(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (j, &number) in values.iter().enumerate() {
        if let Some(&i) = seen.get(&(target - number)) {
            return Some((i, j));
        }
        seen.insert(number, j);
    }
    None
}
