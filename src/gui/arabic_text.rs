use unicode_bidi::BidiInfo;

/// egui lays glyphs out left to right, one per char, with no shaping. Arabic
/// has to arrive already joined (presentation forms) and in visual order.
pub fn display_order(text: &str) -> String {
    if !text.chars().any(is_arabic) {
        return text.to_string();
    }

    let shaped = ar_reshaper::reshape_line(text);
    let bidi = BidiInfo::new(&shaped, None);

    let mut visual = String::with_capacity(shaped.len());
    for paragraph in &bidi.paragraphs {
        let line = bidi.reorder_line(paragraph, paragraph.range.clone());
        visual.push_str(&marks_after_base(&line));
    }
    visual
}

fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FEFF}')
}

fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

// Reversing an RTL run puts each haraka in front of its letter; move it back
// behind the letter it sits on.
fn marks_after_base(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending = String::new();

    for c in line.chars() {
        if is_arabic_mark(c) {
            pending.push(c);
        } else {
            out.push(c);
            out.push_str(&pending);
            pending.clear();
        }
    }
    out.push_str(&pending);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_joined_and_reversed() {
        // kaf initial, teh medial, beh final; drawn right to left
        let visual = display_order("كتب");
        assert_eq!(visual, "\u{FE90}\u{FE98}\u{FEDB}");
        assert!(visual.chars().all(|c| !matches!(c, 'ك' | 'ت' | 'ب')));
    }

    #[test]
    fn test_latin_is_untouched() {
        assert_eq!(display_order("k-t-b • to write"), "k-t-b • to write");
        assert_eq!(display_order(""), "");
    }

    #[test]
    fn test_marks_follow_their_letter() {
        // fatha in front of its letter, as a reversed run leaves it
        let reversed = "\u{064E}\u{FE8E}\u{0650}\u{FEDB}";
        assert_eq!(marks_after_base(reversed), "\u{FE8E}\u{064E}\u{FEDB}\u{0650}");
        assert_eq!(marks_after_base("abc"), "abc");
    }

    #[test]
    fn test_arabic_between_latin_keeps_latin_order() {
        let visual = display_order("root كتب here");
        assert!(visual.starts_with("root "));
        assert!(visual.ends_with(" here"));
        assert!(visual.contains("\u{FE90}\u{FE98}\u{FEDB}"));
    }
}
