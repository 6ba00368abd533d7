// End-to-end cases exercised through the public string API.

#[cfg(test)]
mod tests {
    use crate::engine::*;
    use crate::parser::parse;

    // Helper to check if parsing succeeds
    fn assert_parses(input: &str) {
        match parse(input) {
            Ok(_) => (),
            Err(e) => panic!("Failed to parse '{}': {}", input, e),
        }
    }

    // Helper to check parsing fails
    fn assert_fails(input: &str) {
        if parse(input).is_ok() {
            panic!("Expected parse to fail for '{}'", input)
        }
    }

    fn assert_valid(input: &str) {
        let report = validate_pattern(input);
        assert!(report.is_valid, "'{}' should be valid: {:?}", input, report.errors);
    }

    fn assert_invalid(input: &str) {
        let report = validate_pattern(input);
        assert!(!report.is_valid, "'{}' should be invalid", input);
    }

    #[test]
    fn test_async_patterns() {
        assert_parses("3");
        assert_parses("441");
        assert_parses("97531");
        assert_parses("b97531");
        assert_parses("z");
    }

    #[test]
    fn test_sync_patterns() {
        assert_parses("(4,4)");
        assert_parses("(4x,2x)");
        assert_parses("(4,2x)(2x,4)");
        assert_parses("(6x,4)(4,6x)");
    }

    #[test]
    fn test_multiplex_patterns() {
        assert_parses("[33]");
        assert_parses("[33]1");
        assert_parses("[43]23");
        assert_parses("24[54]");
    }

    #[test]
    fn test_whitespace_and_case_tolerance() {
        assert_parses(" 4 4 1 ");
        assert_parses("B97");
        assert_parses("(4X,2)");
    }

    #[test]
    fn test_malformed_inputs() {
        assert_fails("");
        assert_fails("   ");
        assert_fails("!!!");
        assert_fails("[33");
        assert_fails("(4,2");
        assert_fails("(4)");
        assert_fails("4,2");
        assert_fails("441)");
    }

    #[test]
    fn test_valid_patterns() {
        assert_valid("3");
        assert_valid("333");
        assert_valid("441");
        assert_valid("531");
        assert_valid("423");
        assert_valid("51");
        assert_valid("97531");
        assert_valid("0");
        assert_valid("(4,4)");
        assert_valid("[33]");
    }

    #[test]
    fn test_invalid_patterns() {
        assert_invalid("123");
        assert_invalid("443");
        assert_invalid("321");
        assert_invalid("43");
        assert_invalid("");
    }

    #[test]
    fn test_canonical_scenarios() {
        // Constant collapse.
        assert_eq!(canonicalize_pattern("333").unwrap().canonical, "3");
        // Already canonical.
        let form = canonicalize_pattern("441").unwrap();
        assert_eq!(form.canonical, "441");
        assert!(form.is_already_canonical);
        // Rotation to the peak.
        assert_eq!(canonicalize_pattern("342").unwrap().canonical, "423");
        // Full rotation class.
        assert_eq!(canonicalize_pattern("315").unwrap().canonical, "531");
        assert_eq!(canonicalize_pattern("153").unwrap().canonical, "531");
    }

    #[test]
    fn test_analysis_scenarios() {
        let analysis = analyze_pattern("531").unwrap();
        assert_eq!(analysis.object_count, 3);
        assert_eq!(analysis.period, 3);
        assert!(analysis.difficulty >= 1.0 && analysis.difficulty <= 10.0);

        assert!(analyze_pattern("123").is_none());
        assert!(analyze_pattern("((").is_none());
    }

    #[test]
    fn test_difficulty_ordering() {
        let cascade = analyze_pattern("3").unwrap().difficulty;
        let box_pattern = analyze_pattern("531").unwrap().difficulty;
        let high = analyze_pattern("97531").unwrap().difficulty;
        assert!(cascade < box_pattern);
        assert!(box_pattern < high);
    }

    #[test]
    fn test_name_scenarios() {
        assert_eq!(pattern_name("3").unwrap().name, "Cascade");
        assert_eq!(pattern_name("333").unwrap().name, "Cascade");
        assert_eq!(pattern_name("(4,2x)(2x,4)").unwrap().name, "Box");
        assert!(pattern_name("7531").is_none());
    }
}
