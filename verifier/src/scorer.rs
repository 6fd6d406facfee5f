//! # Scorer Module
//!
//! Aggregates per-case verdicts into a single pass rate for a grading run.

use crate::report::CaseReport;

/// Computes the share of passing cases as a percentage from 0 to 100.
///
/// # Behavior
///
/// - Every case weighs the same; a case either passes or it does not.
/// - The result is rounded to the nearest integer.
/// - An empty run scores 0.
///
/// # Example
///
/// ```
/// use verifier::report::CaseReport;
/// use verifier::scorer::compute_pass_rate;
///
/// let cases = vec![
///     CaseReport { name: "1.sql".into(), mode: "unordered".into(), pass: true, message: String::new() },
///     CaseReport { name: "2.sql".into(), mode: "scalar".into(), pass: false, message: String::new() },
/// ];
/// assert_eq!(compute_pass_rate(&cases), 50);
/// assert_eq!(compute_pass_rate(&[]), 0);
/// ```
pub fn compute_pass_rate(cases: &[CaseReport]) -> u32 {
    if cases.is_empty() {
        return 0;
    }
    let passed = cases.iter().filter(|c| c.pass).count();
    ((passed as f64 / cases.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(pass: bool) -> CaseReport {
        CaseReport {
            name: "case".to_string(),
            mode: "scalar".to_string(),
            pass,
            message: String::new(),
        }
    }

    #[test]
    fn test_all_passed() {
        assert_eq!(compute_pass_rate(&[case(true), case(true)]), 100);
    }

    #[test]
    fn test_none_passed() {
        assert_eq!(compute_pass_rate(&[case(false), case(false)]), 0);
    }

    /// 2 of 3 cases is 66.66...%, rounded to 67.
    #[test]
    fn test_rounding() {
        assert_eq!(compute_pass_rate(&[case(true), case(true), case(false)]), 67);
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_pass_rate(&[]), 0);
    }
}
