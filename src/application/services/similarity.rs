//! Ratcliff/Obershelp string similarity.
//!
//! The score is `2 * M / T`, where `T` is the combined length of both strings
//! and `M` the number of characters covered by the recursively found longest
//! common blocks. Comparison is case-insensitive (so `"straße"` equals
//! `"STRASSE"`) and works on Unicode scalar values rather than bytes.

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// `1.0` only for a case-insensitive exact match, `0.0` when no character is
/// shared or either side is empty. A single pass depends on argument order
/// (`"tide"` vs `"diet"`), so both orders are scored and the larger ratio
/// wins.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = case_fold(a);
    let b = case_fold(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    ratio(&a, &b).max(ratio(&b, &a))
}

/// Uppercasing first expands characters like `ß` to `SS`, so a string and its
/// uppercased form always fold to the same sequence.
fn case_fold(text: &str) -> Vec<char> {
    text.to_uppercase().to_lowercase().chars().collect()
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    2.0 * matching_characters(a, b) as f64 / total as f64
}

/// Sums the lengths of all matching blocks: take the longest block, then
/// repeat on the unmatched regions to its left and right.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_block(a, b, a_lo, a_hi, b_lo, b_hi);
        if block.len == 0 {
            continue;
        }

        matched += block.len;

        if a_lo < block.a_start && b_lo < block.b_start {
            pending.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }
    }

    matched
}

#[derive(Debug, Clone, Copy)]
struct Block {
    a_start: usize,
    b_start: usize,
    len: usize,
}

/// Longest common contiguous run within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
/// Among equally long runs the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_block(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Block {
    let mut best = Block {
        a_start: a_lo,
        b_start: b_lo,
        len: 0,
    };

    let width = b_hi - b_lo + 1;
    // run_lengths[j - b_lo + 1] = length of the run ending at a[i], b[j]
    let mut previous = vec![0usize; width];
    let mut current = vec![0usize; width];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            let slot = j - b_lo + 1;
            if a[i] == b[j] {
                let len = previous[slot - 1] + 1;
                current[slot] = len;
                if len > best.len {
                    best = Block {
                        a_start: i + 1 - len,
                        b_start: j + 1 - len,
                        len,
                    };
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
