// Tests for the serde representation of match results and options
use crate::*;

#[test]
fn test_match_info_to_json() {
    let pattern = Pattern::new("(%a+)(%d?)").unwrap();
    let info = pattern.find_index("  abc ").unwrap();
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "span": { "start": 2, "end": 5 },
            "captures": [
                { "start": 2, "end": 5 },
                { "start": 5, "end": 5 }
            ]
        })
    );
}

#[test]
fn test_match_info_round_trip() {
    let pattern = Pattern::new("(%w+)=(%w+)").unwrap();
    let all = pattern.find_index_all("a=1 b=2", None);
    let text = serde_json::to_string(&all).unwrap();
    let back: Vec<MatchInfo> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, all);
}

#[test]
fn test_match_option_from_json() {
    let option: MatchOption =
        serde_json::from_str(r#"{ "max_backtrack": 100, "resume": "SkipOne" }"#).unwrap();
    assert_eq!(option.max_backtrack, 100);
    assert_eq!(option.resume, ResumeMode::SkipOne);

    let text = serde_json::to_string(&MatchOption::default()).unwrap();
    let back: MatchOption = serde_json::from_str(&text).unwrap();
    assert_eq!(back, MatchOption::default());
}
