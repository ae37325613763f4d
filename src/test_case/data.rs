use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

/// Possible test case results.
#[derive(Debug, Clone, PartialEq)]
pub enum TestResult {
    Passed,
    Failed(CaseFailure),
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed)
    }
}

/// Reasons a test case aborts. None of them stop the rest of the suite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaseFailure {
    #[error("expected status {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("expected field '{path}' to be {expected:?}, got {}", display_actual(.actual))]
    FieldMismatch {
        path: String,
        expected: String,
        actual: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),
}

fn display_actual(actual: &Option<String>) -> String {
    match actual {
        Some(value) => format!("{:?}", value),
        None => "nothing".to_string(),
    }
}

/// A single expected value at a dotted JSON path of the response body.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAssertion {
    pub path: &'static str,
    pub expected: &'static str,
}

/// Static definition of one request/assertion pair.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub id: &'static str,                   // stable identifier, e.g. createUser_Positive
    pub title: &'static str,                // report entry name
    pub description: &'static str,          // report entry description
    pub method: Method,                     // http method for the request.
    pub path: &'static str,                 // appended to the base endpoint.
    pub body: Option<Value>,                // json payload, if any.
    pub expected_status: u16,
    pub field_assertions: Vec<FieldAssertion>,
    pub pass_message: &'static str,
}

/// Result of running one test case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub case_id: &'static str,
    pub result: TestResult,
    pub exec_duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_message() {
        let failure = CaseFailure::StatusMismatch {
            expected: 201,
            actual: 401,
        };
        assert_eq!(failure.to_string(), "expected status 201, got 401");
    }

    #[test]
    fn test_field_mismatch_message() {
        let failure = CaseFailure::FieldMismatch {
            path: "job".to_string(),
            expected: "manager".to_string(),
            actual: Some("leader".to_string()),
        };
        assert_eq!(
            failure.to_string(),
            "expected field 'job' to be \"manager\", got \"leader\""
        );

        let missing = CaseFailure::FieldMismatch {
            path: "data.id".to_string(),
            expected: "2".to_string(),
            actual: None,
        };
        assert_eq!(
            missing.to_string(),
            "expected field 'data.id' to be \"2\", got nothing"
        );
    }

    #[test]
    fn test_test_result_equality() {
        assert_eq!(TestResult::Passed, TestResult::Passed);
        assert!(TestResult::Passed.is_passed());
        assert!(!TestResult::Failed(CaseFailure::Transport("refused".into())).is_passed());
        assert_ne!(
            TestResult::Passed,
            TestResult::Failed(CaseFailure::Transport("refused".into()))
        );
    }
}
