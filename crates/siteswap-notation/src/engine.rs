//! String-level pattern operations
//!
//! Everything here takes raw pattern text, runs it through the parser,
//! and delegates the mathematics to `siteswap-core`. Parse failures are
//! folded into the same report shape as invariant failures, so callers
//! get one answer for "is this string a juggleable pattern".

use crate::error::Result;
use crate::parser::{parse, ParsedPattern};
use siteswap_core::{
    analyze_sequence, canonicalize, lookup_family, lookup_name, validate, CanonicalForm,
    PatternAnalysis, PatternFamily, PatternName, PatternType, ValidationReport,
};

/// Validate a raw pattern string and produce the full report.
///
/// Syntax errors surface as an invalid report with the parser's message,
/// not as a separate error channel. On success the canonical-form fields
/// are filled in alongside the mathematical ones.
pub fn validate_pattern(input: &str) -> ValidationReport {
    let parsed = match parse(input) {
        Ok(parsed) => parsed,
        Err(err) => {
            return ValidationReport::invalid(PatternType::Invalid, vec![err.to_string()])
        }
    };

    let mut report = validate(&parsed.throws, parsed.pattern_type);
    if report.is_valid {
        let form = canonical_form(&parsed);
        report.is_canonical = Some(form.is_already_canonical);
        report.canonical_form = Some(form.canonical);
        report.equivalent_forms = Some(form.equivalent_forms);
    }
    report
}

/// Canonicalize a raw pattern string.
///
/// Only async patterns are rotated; sync and multiplex patterns pass
/// through as their normalized text, since rotation does not respect
/// their pairing structure.
pub fn canonicalize_pattern(input: &str) -> Result<CanonicalForm> {
    let parsed = parse(input)?;
    Ok(canonical_form(&parsed))
}

fn canonical_form(parsed: &ParsedPattern) -> CanonicalForm {
    match parsed.pattern_type {
        PatternType::Async => canonicalize(&parsed.throws),
        _ => CanonicalForm::passthrough(&parsed.normalized),
    }
}

/// Analyze a raw pattern string, or `None` when it does not parse or
/// fails validation.
pub fn analyze_pattern(input: &str) -> Option<PatternAnalysis> {
    let parsed = parse(input).ok()?;
    analyze_sequence(&parsed.throws, parsed.pattern_type)
}

/// Whether two pattern strings denote the same physical pattern.
///
/// True exactly when both parse to the same dialect and share a
/// canonical form; any unparseable side makes the answer false.
pub fn equivalent(a: &str, b: &str) -> bool {
    let (Ok(pa), Ok(pb)) = (parse(a), parse(b)) else {
        return false;
    };
    if pa.pattern_type != pb.pattern_type {
        return false;
    }
    canonical_form(&pa).canonical == canonical_form(&pb).canonical
}

/// The authentic name for a pattern string, looked up by canonical form.
pub fn pattern_name(input: &str) -> Option<PatternName> {
    let parsed = parse(input).ok()?;
    lookup_name(&canonical_form(&parsed).canonical)
}

/// The researched family record for a pattern string.
pub fn pattern_family(input: &str) -> Option<&'static PatternFamily> {
    let parsed = parse(input).ok()?;
    lookup_family(&canonical_form(&parsed).canonical)
}
