use handle_errors::Error;

/// Pass/fail tally for one smoke run.
#[derive(Debug, Default)]
pub struct Report {
    pub passed: u32,
    pub failed: u32,
}

impl Report {
    /// Prints the result line for one check and updates the counters. An
    /// error from the store counts as a failure for that check only.
    pub fn conclude(&mut self, outcome: Result<bool, Error>, pass: &str, fail: &str) {
        match outcome {
            Ok(true) => {
                println!("✔ PASS: {}", pass);
                self.passed += 1;
            }
            Ok(false) => {
                println!("✘ FAIL: {}", fail);
                self.failed += 1;
            }
            Err(error) => {
                println!("✘ ERROR: {}", error);
                self.failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_bump_the_passed_counter() {
        let mut report = Report::default();
        report.conclude(Ok(true), "found", "not found");
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn failing_checks_bump_the_failed_counter() {
        let mut report = Report::default();
        report.conclude(Ok(false), "found", "not found");
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn store_errors_count_as_failures() {
        let mut report = Report::default();
        report.conclude(Err(Error::MissingDatabasePassword), "found", "not found");
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 1);
    }
}
