use crate::domain::model::{OutputDocument, PinSet};
use std::fmt::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn section_header(set: &PinSet) -> String {
    format!("{}-digit PINs ({}):", set.length(), set.len())
}

/// Render the plain-text output file.
///
/// ```text
/// PIN generation time: 2026-10-18T12:34:56
///
/// 4-digit PINs (2):
/// 0192
/// 7730
/// ```
///
/// Empty groups are omitted; groups appear in increasing length order.
pub fn render(document: &OutputDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "PIN generation time: {}",
        document.generated_at.format(TIMESTAMP_FORMAT)
    );

    let mut groups: Vec<&PinSet> = document.groups.iter().filter(|g| !g.is_empty()).collect();
    groups.sort_by_key(|g| g.length());

    for group in groups {
        out.push('\n');
        out.push_str(&section_header(group));
        out.push('\n');
        for pin in group.iter() {
            out.push_str(pin.as_str());
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Pin;
    use chrono::NaiveDate;

    fn set(length: u32, pins: &[&str]) -> PinSet {
        PinSet::new(
            length,
            pins.iter().map(|p| Pin::from_digits(p.to_string())).collect(),
        )
    }

    #[test]
    fn test_render_layout() {
        let generated_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        let document = OutputDocument {
            generated_at,
            groups: vec![set(8, &["00000001"]), set(4, &["9999", "0042"])],
        };

        let expected = "\
PIN generation time: 2026-10-18T09:05:00

4-digit PINs (2):
0042
9999

8-digit PINs (1):
00000001
";
        assert_eq!(render(&document), expected);
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let generated_at = NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let document = OutputDocument {
            generated_at,
            groups: vec![set(4, &["1234"]), set(6, &[]), set(8, &[])],
        };

        let rendered = render(&document);
        assert!(rendered.contains("4-digit PINs (1):"));
        assert!(!rendered.contains("6-digit"));
        assert!(!rendered.contains("8-digit"));
    }
}
