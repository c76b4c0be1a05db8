use std::sync::OnceLock;

use regex::Regex;

/// One run of rendered text, either emphasized or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), emphasized: false }
    }

    fn emphasized(text: &str) -> Self {
        Self { text: text.to_string(), emphasized: true }
    }
}

fn emphasis_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

/// Splits `**`-delimited emphasis spans out of `text` into an ordered
/// segment sequence. Unmatched markers stay in the surrounding plain
/// text; input without markers comes back as a single plain segment.
pub fn parse_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for marked in emphasis_regex().find_iter(text) {
        if marked.start() > cursor {
            segments.push(Segment::plain(&text[cursor..marked.start()]));
        }
        segments.push(Segment::emphasized(&text[marked.start() + 2..marked.end() - 2]));
        cursor = marked.end();
    }

    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(parse_emphasis("no markers here"), vec![Segment::plain("no markers here")]);
        assert_eq!(parse_emphasis(""), vec![Segment::plain("")]);
    }

    #[test]
    fn test_alternating_spans() {
        let segments = parse_emphasis("The company hopes to **dominate** the market.");
        assert_eq!(
            segments,
            vec![
                Segment::plain("The company hopes to "),
                Segment::emphasized("dominate"),
                Segment::plain(" the market."),
            ]
        );
    }

    #[test]
    fn test_adjacent_and_leading_spans() {
        let segments = parse_emphasis("**a** b **c**");
        assert_eq!(
            segments,
            vec![
                Segment::emphasized("a"),
                Segment::plain(" b "),
                Segment::emphasized("c"),
            ]
        );
    }

    #[test]
    fn test_unmatched_marker_renders_literally() {
        assert_eq!(parse_emphasis("dangling ** marker"), vec![Segment::plain("dangling ** marker")]);

        let segments = parse_emphasis("**closed** and **open");
        assert_eq!(
            segments,
            vec![Segment::emphasized("closed"), Segment::plain(" and **open")]
        );
    }

    #[test]
    fn test_multibyte_content() {
        let segments = parse_emphasis("对某事拥有**控制**或指挥权");
        assert_eq!(
            segments,
            vec![
                Segment::plain("对某事拥有"),
                Segment::emphasized("控制"),
                Segment::plain("或指挥权"),
            ]
        );
    }
}
