//! Marker extraction from comment segments.

use crate::lexer::CommentSegment;

use super::table::MarkerTable;
use super::types::Tag;

const MESSAGE_TRIM: &[char] = &[' ', '\t', '\r', '\n'];

/// Extract tags from one comment segment.
///
/// The segment text is split into logical lines; per line, each marker
/// token matches at most once (its first occurrence), and a line with
/// several distinct markers yields several tags ordered by byte offset.
/// The message is everything after the marker's colon through end of
/// line, trimmed of surrounding space/tab/CR/newline.
///
/// Every tag is attributed the segment's closing line: for a multi-line
/// block comment that is the line `*/` sits on, not the line the marker
/// text sits on. This matches the tool's established reporting policy.
///
/// Never fails; an empty marker table yields an empty sequence.
pub fn extract(segment: &CommentSegment, file: &str, table: &MarkerTable) -> Vec<Tag> {
    if table.is_empty() {
        return Vec::new();
    }

    let mut tags = Vec::new();
    for line in segment.text.split(|&b| b == b'\n') {
        // Each token is searched independently, so tokens that overlap
        // in the text (one a suffix of another) all get their first hit.
        let mut hits: Vec<(usize, usize, usize)> = Vec::new(); // (start, end, pattern)
        let mut seen = vec![false; table.len()];
        for m in table.automaton().find_overlapping_iter(line) {
            let pattern = m.pattern().as_usize();
            if seen[pattern] {
                continue;
            }
            seen[pattern] = true;
            hits.push((m.start(), m.end(), pattern));
        }
        // Overlapping iteration orders by end position; tags come out in
        // source order, by start offset.
        hits.sort_by_key(|&(start, end, _)| (start, end));

        for (_, end, pattern) in hits {
            let message = String::from_utf8_lossy(&line[end..])
                .trim_matches(MESSAGE_TRIM)
                .to_string();
            tags.push(Tag {
                file: file.to_string(),
                kind: table.kind_of(pattern).clone(),
                line: segment.end_line,
                message,
            });
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::types::TagKind;
    use crate::lexer::CommentKind;

    fn line_segment(text: &str, line: u32) -> CommentSegment {
        CommentSegment {
            text: text.as_bytes().to_vec(),
            start_line: line,
            end_line: line,
            kind: CommentKind::Line,
        }
    }

    #[test]
    fn test_single_marker() {
        let seg = line_segment(" TODO: fix x", 7);
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::FixLater);
        assert_eq!(tags[0].line, 7);
        assert_eq!(tags[0].message, "fix x");
        assert_eq!(tags[0].file, "main.go");
    }

    #[test]
    fn test_marker_requires_colon() {
        let seg = line_segment(" TODO fix x later", 1);
        assert!(extract(&seg, "main.go", &MarkerTable::default()).is_empty());
    }

    #[test]
    fn test_message_trimmed() {
        let seg = line_segment(" FIXME: \t padded \t ", 1);
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags[0].message, "padded");
    }

    #[test]
    fn test_empty_message() {
        let seg = line_segment(" TODO:", 1);
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].message, "");
    }

    #[test]
    fn test_two_markers_in_source_order() {
        // FIXME appears before TODO on the line; tags must come out in
        // that order, both attributed the same line.
        let seg = line_segment(" FIXME: broken TODO: and slow", 3);
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].kind, TagKind::NeedsRepair);
        assert_eq!(tags[0].message, "broken TODO: and slow");
        assert_eq!(tags[1].kind, TagKind::FixLater);
        assert_eq!(tags[1].message, "and slow");
        assert_eq!(tags[0].line, tags[1].line);
    }

    #[test]
    fn test_first_occurrence_per_marker() {
        let seg = line_segment(" TODO: first TODO: second", 1);
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].message, "first TODO: second");
    }

    #[test]
    fn test_block_comment_reports_closing_line() {
        let seg = CommentSegment {
            text: b" line1\nTODO: fix y\nline3 ".to_vec(),
            start_line: 10,
            end_line: 12,
            kind: CommentKind::Block,
        };
        let tags = extract(&seg, "main.go", &MarkerTable::default());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].message, "fix y");
        assert_eq!(tags[0].line, 12);
    }

    #[test]
    fn test_overlapping_tokens_match_independently() {
        // One configured token is a suffix of another; both must yield
        // a tag from the same text.
        let table = MarkerTable::new(vec![
            ("TODO".to_string(), TagKind::FixLater),
            ("ODO".to_string(), TagKind::Custom("ODO".to_string())),
        ]);
        let seg = line_segment(" TODO: x", 1);
        let tags = extract(&seg, "main.go", &table);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].kind, TagKind::FixLater);
        assert_eq!(tags[0].message, "x");
        assert_eq!(tags[1].kind, TagKind::Custom("ODO".to_string()));
        assert_eq!(tags[1].message, "x");
    }

    #[test]
    fn test_empty_marker_table() {
        let seg = line_segment(" TODO: fix x", 1);
        assert!(extract(&seg, "main.go", &MarkerTable::new(vec![])).is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let table = MarkerTable::new(vec![(
            "HACK".to_string(),
            TagKind::Custom("HACK".to_string()),
        )]);
        let seg = line_segment(" HACK: temporary workaround", 5);
        let tags = extract(&seg, "lib.rs", &table);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Custom("HACK".to_string()));
        assert_eq!(tags[0].message, "temporary workaround");
    }
}
