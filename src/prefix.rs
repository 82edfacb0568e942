//! Shared-stem computation for completion candidates.

/// Longest common prefix of `a` and `b`, found by halving.
///
/// The result is always a slice of `a`. Lengths are counted in characters.
pub fn common<'a>(a: &'a str, b: &str) -> &'a str {
    let m = a.chars().count().min(b.chars().count());
    if m == 0 {
        return "";
    }
    let a = take_chars(a, m);
    let b = take_chars(b, m);
    if a == b {
        return a;
    }
    if m == 1 {
        return "";
    }

    let half = m.div_ceil(2);
    let (a_head, a_tail) = split_chars(a, half);
    let (b_head, b_tail) = split_chars(b, half);
    if a_head == b_head {
        let rest = common(a_tail, b_tail);
        &a[..a_head.len() + rest.len()]
    } else {
        common(a_head, b_head)
    }
}

/// Folds [`common`] over `candidates`, starting from the first one.
pub fn shared_stem(candidates: &[String]) -> &str {
    let Some(first) = candidates.first() else {
        return "";
    };
    candidates
        .iter()
        .fold(first.as_str(), |shared, candidate| common(shared, candidate))
}

fn take_chars(s: &str, n: usize) -> &str {
    split_chars(s, n).0
}

fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    s.split_at(at)
}

#[cfg(test)]
#[path = "tests/prefix_tests.rs"]
mod tests;
