use crate::{
    obs::{DiagnosticKind, Reporter},
    value::IndexedValue,
};
use regex::Regex;

/// `match` semantics over two operand slots.
///
/// 1. pattern vs string, either order: unanchored search
/// 2. string vs string: the right operand is compiled as pattern source
/// 3. integer, double or float vs string: the number's canonical text is
///    the subject for rule 2
/// 4. anything else: structural equality
pub(super) fn match_slots(
    reporter: &Reporter<'_>,
    left: Option<&IndexedValue>,
    right: Option<&IndexedValue>,
) -> bool {
    match (left, right) {
        (Some(IndexedValue::Pattern(pattern)), Some(IndexedValue::String(text)))
        | (Some(IndexedValue::String(text)), Some(IndexedValue::Pattern(pattern))) => {
            pattern.is_match(text)
        }

        (Some(IndexedValue::String(subject)), Some(IndexedValue::String(source))) => {
            match_source(reporter, subject, source)
        }

        (Some(number), Some(IndexedValue::String(source))) if number.is_numeric() => number
            .canonical_number_text()
            .is_some_and(|subject| match_source(reporter, &subject, source)),

        _ => left == right,
    }
}

// Source text is compiled per call; callers matching in hot loops should
// supply a `Pattern` operand instead.
fn match_source(reporter: &Reporter<'_>, subject: &str, source: &str) -> bool {
    match Regex::new(source) {
        Ok(regex) => regex.is_match(subject),
        Err(err) => {
            reporter.report(DiagnosticKind::PatternCompileFailed {
                pattern: source.to_string(),
                error: err.to_string(),
            });

            false
        }
    }
}
