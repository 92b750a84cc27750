// Tests for repeated matching and the resume policy
use crate::*;

fn spans(pattern: &Pattern, subject: &str, limit: Option<usize>) -> Vec<(usize, usize)> {
    pattern
        .find_index_all(subject, limit)
        .iter()
        .map(|m| (m.start(), m.end()))
        .collect()
}

fn skip_one(pattern: &str) -> Pattern {
    let option = MatchOption {
        resume: ResumeMode::SkipOne,
        ..MatchOption::default()
    };
    Pattern::with_option(pattern, option).unwrap()
}

#[test]
fn test_find_all_basic() {
    let pattern = Pattern::new("%d+").unwrap();
    assert_eq!(
        pattern.find_all("a1b22c333", None),
        vec![vec!["1"], vec!["22"], vec!["333"]]
    );
    assert!(pattern.find_all("abc", None).is_empty());
}

#[test]
fn test_find_all_with_captures() {
    let pattern = Pattern::new("(%w+)=(%w+)").unwrap();
    assert_eq!(
        pattern.find_all("a=1, b=2", None),
        vec![vec!["a=1", "a", "1"], vec!["b=2", "b", "2"]]
    );
}

#[test]
fn test_limit() {
    let pattern = Pattern::new("%d+").unwrap();
    assert_eq!(pattern.find_index_all("a1b22c333", Some(2)).len(), 2);
    assert_eq!(pattern.find_index_all("a1b22c333", Some(1)).len(), 1);
    // zero means unbounded
    assert_eq!(pattern.find_index_all("a1b22c333", Some(0)).len(), 3);
}

#[test]
fn test_resume_at_match_end() {
    let pattern = Pattern::new("a").unwrap();
    assert_eq!(spans(&pattern, "aaa", None), vec![(0, 1), (1, 2), (2, 3)]);

    let pattern = Pattern::new("%d%d").unwrap();
    assert_eq!(spans(&pattern, "123456", None), vec![(0, 2), (2, 4), (4, 6)]);
}

#[test]
fn test_resume_one_past_match_end() {
    let pattern = skip_one("a");
    assert_eq!(spans(&pattern, "aaa", None), vec![(0, 1), (2, 3)]);

    let pattern = skip_one("%d%d");
    assert_eq!(spans(&pattern, "123456", None), vec![(0, 2), (3, 5)]);

    // gaps between matches hide the difference
    let pattern = skip_one("%d+");
    assert_eq!(spans(&pattern, "1 22 333", None), vec![(0, 1), (2, 4), (5, 8)]);
}

#[test]
fn test_empty_matches() {
    let pattern = Pattern::new("a*").unwrap();
    assert_eq!(spans(&pattern, "baa", None), vec![(0, 0), (1, 3)]);

    let pattern = Pattern::new("").unwrap();
    assert_eq!(
        spans(&pattern, "abc", None),
        vec![(0, 0), (1, 1), (2, 2), (3, 3)]
    );

    let pattern = skip_one("x*");
    assert_eq!(spans(&pattern, "ab", None), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_head_anchor_stops_after_first_offset() {
    let pattern = Pattern::new("^a").unwrap();
    assert_eq!(spans(&pattern, "aaa", None), vec![(0, 1)]);
    assert!(spans(&pattern, "baa", None).is_empty());

    let pattern = skip_one("^a");
    assert_eq!(spans(&pattern, "aaa", None), vec![(0, 1)]);
}

#[test]
fn test_tail_anchor_in_find_all() {
    let pattern = Pattern::new("%d+$").unwrap();
    assert_eq!(spans(&pattern, "12 34", None), vec![(3, 5)]);
}

#[test]
fn test_non_ascii_offsets() {
    let pattern = Pattern::new("é").unwrap();
    assert_eq!(spans(&pattern, "éaé", None), vec![(0, 2), (3, 5)]);
}

#[test]
fn test_long_run_between_words() {
    let text = format!("ab {} cd", "z".repeat(6000));
    let pattern = Pattern::new("%a+").unwrap();
    assert_eq!(
        spans(&pattern, &text, None),
        vec![(0, 2), (3, 6003), (6004, 6006)]
    );
}

#[test]
fn test_exhaustion_returns_no_partial_list() {
    let option = MatchOption {
        max_backtrack: 100,
        ..MatchOption::default()
    };
    let pattern = Pattern::with_option("%a+", option).unwrap();
    let text = format!("ab {} cd", "z".repeat(500));
    assert_eq!(
        pattern.try_find_index_all(&text, None),
        Err(MatchError::BacktrackLimit(100))
    );
    assert!(pattern.find_index_all(&text, None).is_empty());
    assert!(pattern.find_all(&text, None).is_empty());
}
