//! Freeform text to content blocks
//!
//! Text is split into paragraphs on blank lines. Each paragraph becomes one
//! or more blocks, by the first rule that applies:
//!
//! 1. The whole paragraph ends with `:`: a header (the colon is kept).
//! 2. It contains a `• ` marker: an optional header for the text before the
//!    first marker, then a bullet list of the marker-delimited segments. A
//!    `•` at the start of a line, or alone at its end, also counts as a
//!    marker; one inside a word does not.
//! 3. Some line reads `<n>. <text>`: a numbered list. Each numbered line opens
//!    an item; following unnumbered lines become that item's sub-bullets.
//!    Lines before the first numbered line form a leading header or paragraph.
//! 4. Otherwise a single paragraph.
//!
//! Parsing is total: empty segments are dropped and no input panics.

use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::{ContentBlock, NumberedItem};

const BULLET: char = '•';
const BULLET_MARKER: &str = "• ";

fn numbered_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([0-9]+)\.\s+(\S.*)$").expect("numbered-line pattern is valid")
    })
}

/// Parse freeform text into an ordered block sequence.
pub fn parse(raw: &str) -> Vec<ContentBlock> {
    let normalized = raw.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    for paragraph in paragraphs(&normalized) {
        parse_paragraph(&paragraph, &mut blocks);
    }
    tracing::trace!("parsed {} bytes into {} blocks", raw.len(), blocks.len());
    blocks
}

/// Groups of consecutive non-blank lines, outer-trimmed.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut current, &mut out);
        } else {
            current.push(line);
        }
    }
    flush_paragraph(&mut current, &mut out);
    out
}

fn flush_paragraph(lines: &mut Vec<&str>, out: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    lines.clear();
}

fn parse_paragraph(paragraph: &str, blocks: &mut Vec<ContentBlock>) {
    let has_bullets = paragraph.contains(BULLET_MARKER);
    let has_numbers = paragraph.lines().any(|l| numbered_line().is_match(l));

    if paragraph.ends_with(':') {
        blocks.push(ContentBlock::header(paragraph));
    } else if has_bullets {
        parse_bullets(paragraph, blocks);
    } else if has_numbers {
        parse_numbered(paragraph, blocks);
    } else {
        blocks.push(ContentBlock::paragraph(paragraph));
    }
}

fn parse_bullets(paragraph: &str, blocks: &mut Vec<ContentBlock>) {
    let marked = paragraph
        .lines()
        .map(mark_line_edges)
        .collect::<Vec<_>>()
        .join("\n");
    let mut segments = marked.split(BULLET_MARKER);
    let lead = segments.next().unwrap_or_default().trim();
    if !lead.is_empty() {
        blocks.push(ContentBlock::header(lead));
    }

    let items: Vec<&str> = segments.map(str::trim).filter(|s| !s.is_empty()).collect();
    if !items.is_empty() {
        blocks.push(ContentBlock::bullets(items));
    }
}

/// Line-edge bullets lost their trailing space to trimming; restore it.
fn mark_line_edges(line: &str) -> String {
    let line = line.trim();
    let mut out = match line.strip_prefix(BULLET) {
        Some(rest) => format!("{BULLET_MARKER}{rest}"),
        None => line.to_string(),
    };
    if out.ends_with(" •") {
        out.push(' ');
    }
    out
}

fn parse_numbered(paragraph: &str, blocks: &mut Vec<ContentBlock>) {
    let mut lead: Vec<&str> = Vec::new();
    let mut items: Vec<NumberedItem> = Vec::new();

    for line in paragraph.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = numbered_line().captures(line) {
            items.push(NumberedItem::new(caps[2].trim()));
            continue;
        }
        match items.last_mut() {
            Some(item) => {
                let sub = strip_sub_marker(line);
                if !sub.is_empty() {
                    item.sub_bullets.push(sub.to_string());
                }
            }
            None => lead.push(line),
        }
    }

    if !lead.is_empty() {
        let text = lead.join("\n");
        if text.ends_with(':') {
            blocks.push(ContentBlock::header(text));
        } else {
            blocks.push(ContentBlock::paragraph(text));
        }
    }
    if !items.is_empty() {
        blocks.push(ContentBlock::numbered(items));
    }
}

fn strip_sub_marker(line: &str) -> &str {
    line.strip_prefix(['-', '*', BULLET])
        .map(str::trim_start)
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_then_bullets_across_paragraphs() {
        assert_eq!(
            parse("Key Features:\n\n• One\n• Two\n• Three"),
            vec![
                ContentBlock::header("Key Features:"),
                ContentBlock::bullets(["One", "Two", "Three"]),
            ]
        );
    }

    #[test]
    fn numbered_items_collect_following_lines() {
        assert_eq!(
            parse("1. First\nDetail A\n2. Second"),
            vec![ContentBlock::numbered([
                NumberedItem::new("First").with_sub_bullets(["Detail A"]),
                NumberedItem::new("Second"),
            ])]
        );
    }

    #[test]
    fn plain_sentence_is_a_paragraph() {
        assert_eq!(
            parse("Just a sentence with no markers."),
            vec![ContentBlock::paragraph("Just a sentence with no markers.")]
        );
    }

    #[test]
    fn inline_header_is_extracted_before_bullets() {
        assert_eq!(
            parse("Benefits: • Faster onboarding • Fewer defects •  "),
            vec![
                ContentBlock::header("Benefits:"),
                ContentBlock::bullets(["Faster onboarding", "Fewer defects"]),
            ]
        );
    }

    #[test]
    fn paragraph_ending_in_colon_is_a_header_even_with_markers() {
        assert_eq!(
            parse("• Scope:\n• Timeline:"),
            vec![ContentBlock::header("• Scope:\n• Timeline:")]
        );
        assert_eq!(
            parse("1. Plan\n2. Execute:"),
            vec![ContentBlock::header("1. Plan\n2. Execute:")]
        );
    }

    #[test]
    fn bullet_inside_a_word_does_not_split_the_item() {
        assert_eq!(
            parse("Tiers: • Gold•Silver bundle • Bronze"),
            vec![
                ContentBlock::header("Tiers:"),
                ContentBlock::bullets(["Gold•Silver bundle", "Bronze"]),
            ]
        );
    }

    #[test]
    fn line_start_bullet_counts_once_a_marker_is_present() {
        assert_eq!(
            parse("•One\n  •Two"),
            vec![ContentBlock::paragraph("•One\n  •Two")]
        );
        assert_eq!(
            parse("• One\n•Two"),
            vec![ContentBlock::bullets(["One", "Two"])]
        );
    }

    #[test]
    fn lead_lines_before_numbers_become_a_header() {
        assert_eq!(
            parse("Steps to follow:\n1. Plan\n- agree scope\n* book rooms\n2. Execute"),
            vec![
                ContentBlock::header("Steps to follow:"),
                ContentBlock::numbered([
                    NumberedItem::new("Plan").with_sub_bullets(["agree scope", "book rooms"]),
                    NumberedItem::new("Execute"),
                ]),
            ]
        );
    }

    #[test]
    fn lead_lines_without_colon_become_a_paragraph() {
        assert_eq!(
            parse("We recommend\n1. Pilot"),
            vec![
                ContentBlock::paragraph("We recommend"),
                ContentBlock::numbered([NumberedItem::new("Pilot")]),
            ]
        );
    }

    #[test]
    fn blank_and_whitespace_paragraphs_are_skipped() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n   \n\t\n"), vec![]);
        assert_eq!(
            parse("First.\r\n\r\n  \r\nSecond."),
            vec![
                ContentBlock::paragraph("First."),
                ContentBlock::paragraph("Second."),
            ]
        );
    }

    #[test]
    fn empty_bullets_produce_no_list() {
        assert_eq!(parse("•  \n• "), vec![]);
    }

    #[test]
    fn paragraph_keeps_inner_whitespace() {
        assert_eq!(
            parse("  line one\n   line two  "),
            vec![ContentBlock::paragraph("line one\n   line two")]
        );
    }

    #[test]
    fn number_without_text_is_not_an_item() {
        assert_eq!(parse("1. "), vec![ContentBlock::paragraph("1.")]);
        assert_eq!(parse("3.5 million"), vec![ContentBlock::paragraph("3.5 million")]);
    }

    #[test]
    fn only_ascii_digits_number_a_line() {
        assert_eq!(parse("١. x"), vec![ContentBlock::paragraph("١. x")]);
        assert_eq!(
            parse("10. Tenth"),
            vec![ContentBlock::numbered([NumberedItem::new("Tenth")])]
        );
    }
}
