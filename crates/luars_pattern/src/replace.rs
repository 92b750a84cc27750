// Substitution on top of match results (string.gsub semantics)
//
// Template escapes:
//   %0      whole match
//   %1-%9   captures (with no captures, %1 is the whole match)
//   %%      literal '%'

use ahash::AHashMap;

use crate::error::ReplaceError;
use crate::match_info::MatchInfo;

/// What each match is replaced with.
pub enum Replacer<'r> {
    /// Fixed text with `%` escapes.
    Template(&'r str),
    /// Called with the first capture (or the whole match). `None` keeps the
    /// original text.
    Callback(&'r mut dyn FnMut(&str) -> Option<String>),
    /// Looked up by the first capture (or the whole match). A missing key
    /// keeps the original text.
    Table(&'r AHashMap<String, String>),
}

/// Rebuild `subject` with every match in `matches` replaced.
/// `matches` must be in subject order and non-overlapping.
/// Returns the new string and the number of matches processed.
pub fn replace_matches(
    subject: &str,
    matches: &[MatchInfo],
    mut replacer: Replacer<'_>,
) -> Result<(String, usize), ReplaceError> {
    if matches.is_empty() {
        return Ok((subject.to_string(), 0));
    }

    let mut result = String::with_capacity(subject.len());
    let mut last_end = 0;

    for m in matches {
        result.push_str(&subject[last_end..m.start()]);
        match &mut replacer {
            Replacer::Template(template) => expand_template(&mut result, template, subject, m)?,
            Replacer::Callback(callback) => match (*callback)(m.first_value(subject)) {
                Some(replacement) => result.push_str(&replacement),
                None => result.push_str(m.as_str(subject)),
            },
            Replacer::Table(table) => match table.get(m.first_value(subject)) {
                Some(replacement) => result.push_str(replacement),
                None => result.push_str(m.as_str(subject)),
            },
        }
        last_end = m.end();
    }

    // Copy remaining text
    result.push_str(&subject[last_end..]);
    Ok((result, matches.len()))
}

/// Append `template` to `out`, substituting `%` escapes from match `m`.
pub fn expand_template(
    out: &mut String,
    template: &str,
    subject: &str,
    m: &MatchInfo,
) -> Result<(), ReplaceError> {
    let mut chars = template.char_indices();
    let mut segment_start = 0;

    while let Some((i, c)) = chars.next() {
        if c != '%' {
            continue;
        }
        out.push_str(&template[segment_start..i]);

        match chars.next() {
            Some((_, '%')) => out.push('%'),
            Some((_, d)) if d.is_ascii_digit() => {
                let n = d as usize - '0' as usize;
                out.push_str(capture_text(subject, m, n)?);
            }
            _ => return Err(ReplaceError::InvalidEscape),
        }
        segment_start = chars.offset();
    }

    out.push_str(&template[segment_start..]);
    Ok(())
}

fn capture_text<'s>(subject: &'s str, m: &MatchInfo, n: usize) -> Result<&'s str, ReplaceError> {
    if n == 0 || (n == 1 && m.captures.is_empty()) {
        return Ok(m.as_str(subject));
    }
    if n > m.captures.len() {
        return Err(ReplaceError::InvalidCaptureIndex(n));
    }
    Ok(m.group_str(subject, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_info::MatchSpan;

    fn info(start: usize, end: usize, captures: &[(usize, usize)]) -> MatchInfo {
        MatchInfo {
            span: MatchSpan::new(start, end),
            captures: captures
                .iter()
                .map(|&(s, e)| Some(MatchSpan::new(s, e)))
                .collect(),
        }
    }

    fn expand(template: &str, subject: &str, m: &MatchInfo) -> Result<String, ReplaceError> {
        let mut out = String::new();
        expand_template(&mut out, template, subject, m)?;
        Ok(out)
    }

    #[test]
    fn test_template_escapes() {
        let subject = "hello world";
        let m = info(0, 5, &[(0, 2), (2, 5)]);
        assert_eq!(expand("<%0>", subject, &m).unwrap(), "<hello>");
        assert_eq!(expand("%2%1", subject, &m).unwrap(), "llohe");
        assert_eq!(expand("100%%", subject, &m).unwrap(), "100%");
        assert_eq!(expand("plain", subject, &m).unwrap(), "plain");
    }

    #[test]
    fn test_template_without_captures() {
        let m = info(0, 3, &[]);
        assert_eq!(expand("[%1]", "abc", &m).unwrap(), "[abc]");
        assert_eq!(
            expand("%2", "abc", &m),
            Err(ReplaceError::InvalidCaptureIndex(2))
        );
    }

    #[test]
    fn test_template_errors() {
        let m = info(0, 3, &[(0, 1)]);
        assert_eq!(expand("%x", "abc", &m), Err(ReplaceError::InvalidEscape));
        assert_eq!(expand("abc%", "abc", &m), Err(ReplaceError::InvalidEscape));
        assert_eq!(
            expand("%3", "abc", &m),
            Err(ReplaceError::InvalidCaptureIndex(3))
        );
    }

    #[test]
    fn test_template_non_ascii() {
        let m = info(0, 2, &[]);
        assert_eq!(expand("«%0»", "éa", &m).unwrap(), "«é»");
    }

    #[test]
    fn test_replace_matches_splices() {
        let subject = "a1b22c";
        let matches = vec![info(1, 2, &[]), info(3, 5, &[])];
        let (out, n) = replace_matches(subject, &matches, Replacer::Template("#")).unwrap();
        assert_eq!(out, "a#b#c");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_replace_no_matches() {
        let (out, n) = replace_matches("abc", &[], Replacer::Template("%x")).unwrap();
        assert_eq!(out, "abc");
        assert_eq!(n, 0);
    }
}
