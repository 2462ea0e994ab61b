//! Recursive longest common substring (RLCS) similarity for byte sequences.
//!
//! RLCS repeatedly extracts the longest substring shared by every sequence,
//! then treats the regions before and after the match as independent
//! sub-problems. The total matched length, normalized by the longest input,
//! gives a structural similarity in `[0, 1]`.
//!
//! The single-level match is a heuristic: every sequence after the first
//! accepts the leftmost occurrence of a candidate substring, without
//! backtracking across sequences. It can miss a longer match that needs a
//! non-leftmost alignment, but it is deterministic.

use crate::schema::Partition;

use super::objective::Objective;

/// Result of one longest-common-substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Number of matched bytes. Zero when nothing is shared.
    pub length: usize,
    /// Start of the match in each input sequence.
    pub offsets: Vec<usize>,
}

/// Longest substring common to all `sequences`, found by binary search on
/// the candidate length.
///
/// For a length `len`, offsets of the first sequence are tried left to
/// right. For each one, sequences are checked from the last toward the
/// second, each scanned from offset 0 for its leftmost occurrence of the
/// candidate. The largest length for which some first-sequence offset finds
/// an occurrence in every sequence wins, along with those offsets.
///
/// Empty input, any empty sequence, or no shared byte all give length 0.
pub fn longest_common_substring<S: AsRef<[u8]>>(sequences: &[S]) -> Match {
    let inputs: Vec<&[u8]> = sequences.iter().map(AsRef::as_ref).collect();
    lcs(&inputs)
}

fn lcs(inputs: &[&[u8]]) -> Match {
    let mut best = Match {
        length: 0,
        offsets: vec![0; inputs.len()],
    };
    let Some(min_len) = inputs.iter().map(|s| s.len()).min() else {
        return best;
    };

    let mut lower = 1;
    let mut upper = min_len;
    let mut offsets = vec![0; inputs.len()];
    while lower <= upper {
        let len = (lower + upper) / 2;
        if match_at_length(inputs, len, &mut offsets) {
            best.length = len;
            best.offsets.copy_from_slice(&offsets);
            lower = len + 1;
        } else {
            upper = len - 1;
        }
    }
    best
}

/// Try to find a substring of length `len` shared by all inputs. On success
/// `offsets` holds the match start in every input.
fn match_at_length(inputs: &[&[u8]], len: usize, offsets: &mut [usize]) -> bool {
    let first = inputs[0];
    for start in 0..=first.len() - len {
        let candidate = &first[start..start + len];
        let all_found = inputs[1..]
            .iter()
            .zip(offsets[1..].iter_mut())
            .rev()
            .all(|(input, offset)| match leftmost(input, candidate) {
                Some(found) => {
                    *offset = found;
                    true
                }
                None => false,
            });
        if all_found {
            offsets[0] = start;
            return true;
        }
    }
    false
}

/// Leftmost occurrence of `needle` in `haystack`.
fn leftmost(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Total matched length of the recursive longest common substring.
///
/// Each match contributes its length, then the prefixes before the match
/// and the suffixes after it are matched independently. A zero-length match
/// ends that branch. Every step shortens every sequence, so the worklist
/// always drains; it stands in for recursion so adversarial inputs cannot
/// exhaust the stack.
///
/// A single sequence fully matches itself, so `rlcs([s]) == s.len()`.
pub fn rlcs<S: AsRef<[u8]>>(sequences: &[S]) -> usize {
    let mut pending: Vec<Vec<&[u8]>> = vec![sequences.iter().map(AsRef::as_ref).collect()];
    let mut total = 0;
    while let Some(inputs) = pending.pop() {
        let found = lcs(&inputs);
        if found.length == 0 {
            continue;
        }
        total += found.length;

        let (pre, post): (Vec<&[u8]>, Vec<&[u8]>) = inputs
            .iter()
            .zip(&found.offsets)
            .map(|(input, &offset)| (&input[..offset], &input[offset + found.length..]))
            .unzip();
        pending.push(pre);
        pending.push(post);
    }
    total
}

/// RLCS divided by the length of the longest sequence.
///
/// 1.0 only for identical non-empty sequences; 0.0 when nothing is shared,
/// when there are no sequences, or when every sequence is empty.
pub fn normalized_rlcs<S: AsRef<[u8]>>(sequences: &[S]) -> f64 {
    let max_len = sequences
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0);
    if max_len == 0 {
        return 0.0;
    }
    rlcs(sequences) as f64 / max_len as f64
}

/// Group-size weighted mean of [`normalized_rlcs`] over `groups`.
///
/// 0.0 when the groups hold no elements.
pub fn normalized_combination_rlcs<G, S>(groups: &[G]) -> f64
where
    G: AsRef<[S]>,
    S: AsRef<[u8]>,
{
    let mut weighted = 0.0;
    let mut elements = 0usize;
    for group in groups {
        let group = group.as_ref();
        weighted += normalized_rlcs(group) * group.len() as f64;
        elements += group.len();
    }
    if elements == 0 {
        return 0.0;
    }
    weighted / elements as f64
}

/// Objective combining RLCS similarity with a preference for fewer groups.
///
/// A group scores its [`normalized_rlcs`]. A partition of `n` elements into
/// `k` groups scores
/// `tuning * normalized_combination_rlcs + (1 - tuning) * (n - k) / n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlcsObjective {
    tuning: f64,
}

impl Default for RlcsObjective {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RlcsObjective {
    /// `tuning` is the weight of the similarity term, clamped to `[0, 1]`.
    pub fn new(tuning: f64) -> Self {
        Self {
            tuning: tuning.clamp(0.0, 1.0),
        }
    }

    /// Weight of the similarity term.
    pub fn tuning(&self) -> f64 {
        self.tuning
    }
}

impl<S: AsRef<[u8]>> Objective<S> for RlcsObjective {
    fn score_group(&self, group: &[S]) -> f64 {
        normalized_rlcs(group)
    }

    fn score_partition(&self, partition: &Partition<S>) -> f64 {
        let elements = partition.element_count();
        if elements == 0 {
            return 0.0;
        }
        let similarity = normalized_combination_rlcs(partition.groups());
        let compactness = (elements - partition.len()) as f64 / elements as f64;
        self.tuning * similarity + (1.0 - self.tuning) * compactness
    }
}
