//! Property-Based Tests: Line Rendering
//!
//! - Every write produces exactly one trailing newline.
//! - The level fragment is always present.
//! - Labels decorate fragments without changing which ones appear.

use clerk::{Flags, Logger, MemorySink, Severity};
use proptest::prelude::*;

fn render(flags: Flags, separator: &str, msg: &str) -> String {
    let out = MemorySink::new();
    let logger = Logger::new(out.clone().into(), "t", flags, Severity::Debug, separator);
    logger.warning(msg);
    out.contents()
}

proptest! {
    /// **Property:** messages without interior newlines render as one line
    /// that ends in exactly one `\n`.
    #[test]
    fn test_single_newline(msg in "[^\n]{0,40}\n?", separator in "[-|:]{0,3}") {
        let line = render(Flags::empty(), &separator, &msg);
        prop_assert!(line.ends_with('\n'));
        prop_assert!(!line.ends_with("\n\n"));
        prop_assert_eq!(line.matches('\n').count(), 1);
    }

    /// **Property:** the level fragment is always rendered.
    #[test]
    fn test_level_always_present(bits in any::<u8>(), msg in "[a-z ]{0,20}") {
        let line = render(Flags::from_bits_truncate(bits), "--", &msg);
        prop_assert!(line.contains("[WARNING]"));
    }

    /// **Property:** stripping the labels from a labelled line gives the
    /// unlabelled line (date and time excluded to keep the clock out).
    #[test]
    fn test_labels_only_decorate(bits in any::<u8>(), msg in "[a-z]{1,20}") {
        let mut flags = Flags::from_bits_truncate(bits);
        flags.remove(Flags::DATE | Flags::TIME | Flags::LABELS);

        let plain = render(flags, "--", &msg);
        let labelled = render(flags | Flags::LABELS, "--", &msg);

        let stripped = ["TITLE = ", "LEVEL = ", "SRC = ", "MSG = "]
            .iter()
            .fold(labelled, |line, label| line.replace(label, ""));
        // Both lines come from the same call inside `render`, so call sites match
        prop_assert_eq!(stripped, plain);
    }
}
