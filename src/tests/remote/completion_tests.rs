use super::*;

fn response(start: i64, candidates: &[&str]) -> CompletionResponse {
    CompletionResponse {
        start,
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn single_candidate_is_unique() {
    let outcome = CompletionOutcome::classify("pus", response(3, &["h"]));
    assert_eq!(
        outcome,
        CompletionOutcome::Unique {
            prefix: "pus".to_string(),
            candidate: "h".to_string(),
        }
    );
    assert_eq!(outcome.completed_input().as_deref(), Some("push"));
}

#[test]
fn several_candidates_are_ambiguous() {
    let outcome = CompletionOutcome::classify("git pu", response(6, &["sh", "ll", "b"]));
    let CompletionOutcome::Ambiguous { prefix, candidates } = &outcome else {
        panic!("expected ambiguous, got {:?}", outcome);
    };
    assert_eq!(prefix, "git pu");
    assert_eq!(candidates, &vec!["sh", "ll", "b"]);
    assert_eq!(outcome.completed_input().as_deref(), Some("git pu"));
}

#[test]
fn ambiguous_candidates_extend_to_their_stem() {
    let outcome = CompletionOutcome::classify("cd ", response(3, &["content", "configuration"]));
    assert_eq!(outcome.completed_input().as_deref(), Some("cd con"));
}

#[test]
fn no_candidates_is_none() {
    let outcome = CompletionOutcome::classify("xyz", response(-1, &[]));
    assert_eq!(outcome, CompletionOutcome::None);
    assert_eq!(outcome.completed_input(), None);
}

#[test]
fn start_replaces_the_unmatched_tail() {
    // The server re-completes the last word from its start.
    let outcome = CompletionOutcome::classify("ls /con", response(3, &["/content"]));
    assert_eq!(outcome.completed_input().as_deref(), Some("ls /content"));
}

#[test]
fn out_of_range_start_is_clamped() {
    let outcome = CompletionOutcome::classify("ab", response(-1, &["x"]));
    assert_eq!(outcome.completed_input().as_deref(), Some("x"));

    let outcome = CompletionOutcome::classify("ab", response(10, &["x"]));
    assert_eq!(outcome.completed_input().as_deref(), Some("abx"));
}
