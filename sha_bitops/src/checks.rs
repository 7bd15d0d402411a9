//! Validation checks: each primitive evaluated on a fixed input and compared
//! against a literal hex value, plus the intermediates of the first
//! SHA-256 round of "abc".

use std::fmt;

use log::{info, warn};

use crate::bitops::*;
use crate::round::RoundState;
use crate::sha256::{INITIAL_HASH, ROUND_CONSTANTS};
use crate::word::{format_word, Word};

// W[0] of the padded "abc" block
const ABC_W0: Word = 0x6162_6380;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub label: String,
    pub got: Word,
    pub expected: Word,
}

impl Check {
    pub fn new(label: impl Into<String>, got: Word, expected: Word) -> Self {
        Check {
            label: label.into(),
            got,
            expected,
        }
    }

    pub fn passed(&self) -> bool {
        self.got == self.expected
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "PASS" } else { "FAIL" };
        write!(
            f,
            "[{}] {}: got {}, expected {}",
            status,
            self.label,
            format_word(self.got),
            format_word(self.expected)
        )
    }
}

pub fn reference_checks() -> Vec<Check> {
    let state = RoundState::from_hash(&INITIAL_HASH);
    let next = state.step(ROUND_CONSTANTS[0], ABC_W0);

    vec![
        Check::new("rotr(0x12345678, 4)", rotr(0x1234_5678, 4), 0x8123_4567),
        Check::new("rotr(0x00000001, 1)", rotr(1, 1), 0x8000_0000),
        Check::new("shr(0x80000000, 4)", shr(0x8000_0000, 4), 0x0800_0000),
        Check::new("shr(0xffffffff, 31)", shr(0xffff_ffff, 31), 0x0000_0001),
        Check::new(
            "ch(0xff00ff00, 0x0f0f0f0f, 0xf0f0f0f0)",
            ch(0xff00_ff00, 0x0f0f_0f0f, 0xf0f0_f0f0),
            0x0ff0_0ff0,
        ),
        Check::new(
            "parity(0xaaaaaaaa, 0x55555555, 0xffffffff)",
            parity(0xaaaa_aaaa, 0x5555_5555, 0xffff_ffff),
            0x0000_0000,
        ),
        Check::new("abc round 0: Sigma1(e)", big_sigma1(state.e), 0x3587_272b),
        Check::new("abc round 0: ch(e, f, g)", ch(state.e, state.f, state.g), 0x1f85_c98c),
        Check::new("abc round 0: Sigma0(a)", big_sigma0(state.a), 0xce20_b47e),
        Check::new("abc round 0: maj(a, b, c)", maj(state.a, state.b, state.c), 0x3a6f_e667),
        Check::new("abc round 0: sigma0(W[0])", small_sigma0(ABC_W0), 0x940e_90ef),
        Check::new("abc round 0: new a", next.a, 0x5d6a_ebcd),
        Check::new("abc round 0: new e", next.e, 0xfa2a_4622),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub passed: usize,
    pub failed: usize,
    pub lines: Vec<String>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Keep the checks whose label contains `pattern`; `None` keeps everything.
pub fn filter_checks(checks: Vec<Check>, pattern: Option<&str>) -> Vec<Check> {
    match pattern {
        Some(p) => checks.into_iter().filter(|c| c.label.contains(p)).collect(),
        None => checks,
    }
}

pub fn run_checks(checks: &[Check]) -> CheckReport {
    let mut report = CheckReport::default();
    for check in checks {
        let line = check.to_string();
        if check.passed() {
            report.passed += 1;
            info!("{}", line);
        } else {
            report.failed += 1;
            warn!("{}", line);
        }
        report.lines.push(line);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_checks_all_pass() {
        let checks = reference_checks();
        for check in &checks {
            assert!(check.passed(), "{}", check);
        }
        let report = run_checks(&checks);
        assert!(report.all_passed());
        assert_eq!(report.total(), checks.len());
    }

    #[test]
    fn test_failing_check_is_reported() {
        let checks = vec![
            Check::new("ok", 1, 1),
            Check::new("bad", rotr(0x1234_5678, 4), 0x0f0f_f0f0),
        ];
        let report = run_checks(&checks);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.lines[1], "[FAIL] bad: got 0x81234567, expected 0x0f0ff0f0");
    }

    #[test]
    fn test_filter_checks() {
        let all = reference_checks();
        let total = all.len();
        assert_eq!(filter_checks(all.clone(), None).len(), total);

        let rotr_only = filter_checks(all.clone(), Some("rotr("));
        assert_eq!(rotr_only.len(), 2);
        assert!(rotr_only.iter().all(|c| c.label.starts_with("rotr(")));
    }

    // a filter that matches nothing must not look like a green run
    #[test]
    fn test_unmatched_filter_gives_empty_report() {
        let none = filter_checks(reference_checks(), Some("nomatch"));
        assert!(none.is_empty());
        let report = run_checks(&none);
        assert!(report.is_empty());
        assert_eq!(report.total(), 0);
        assert!(!run_checks(&reference_checks()).is_empty());
    }

    #[test]
    fn test_check_display() {
        let check = Check::new("shr(0x80000000, 4)", shr(0x8000_0000, 4), 0x0800_0000);
        assert_eq!(
            check.to_string(),
            "[PASS] shr(0x80000000, 4): got 0x08000000, expected 0x08000000"
        );
    }
}
