pub mod catalog;
pub mod data;
pub mod json_field;
pub mod progress;

pub use data::*;
pub use json_field::extract_field;
pub use progress::*;

use crate::report::ReportSink;
use crate::test_context::{ResponseData, TestCtx};
use crate::test_events::{TestCaseBegin, TestCaseEnd, TestEvent};
use colored::Colorize;
use indicatif::ProgressBar;
use std::sync::mpsc::Sender;
use std::time::Instant;

impl TestCase {
    /// Executes the test case against the suite context.
    ///
    /// A pass entry is logged to `report` only after the status and every
    /// field assertion matched. Any failure aborts this case alone.
    pub fn run(
        &self,
        ts_ctx: &TestCtx,
        report: &mut ReportSink,
        verbose: bool,
        tx: &Sender<TestEvent>,
    ) -> CaseOutcome {
        self.fire_start_evt(tx, ts_ctx);
        println!("Running the test case: {}", self.id);

        let start = Instant::now();
        let spinner = ProgressBar::new_spinner();
        ProgressDisplay::show_progress(&ts_ctx.url_for(self.path), &spinner);
        let response = ts_ctx.exec(self.prepare_request(ts_ctx));
        ProgressDisplay::stop_progress(&spinner);

        let verified = match &response {
            Ok(data) => self.verify(data),
            Err(failure) => Err(failure.clone()),
        };

        let result = match verified {
            Ok(()) => {
                report.pass(self.title, self.description, self.pass_message);
                TestResult::Passed
            }
            Err(failure) => {
                tracing::warn!(case = self.id, %failure, "test case failed");
                TestResult::Failed(failure)
            }
        };
        let exec_duration = start.elapsed();

        self.print_result(&result, response.as_ref().ok(), ts_ctx, verbose);
        self.fire_end_evt(tx, &result, response.as_ref().ok(), exec_duration);

        CaseOutcome {
            case_id: self.id,
            result,
            exec_duration,
        }
    }

    /// Checks the status code first, then each field assertion in order.
    /// The first mismatch wins.
    pub fn verify(&self, response: &ResponseData) -> Result<(), CaseFailure> {
        if response.status != self.expected_status {
            return Err(CaseFailure::StatusMismatch {
                expected: self.expected_status,
                actual: response.status,
            });
        }

        for assertion in &self.field_assertions {
            let actual = response
                .json
                .as_ref()
                .and_then(|json| extract_field(json, assertion.path));

            if actual.as_deref() != Some(assertion.expected) {
                return Err(CaseFailure::FieldMismatch {
                    path: assertion.path.to_string(),
                    expected: assertion.expected.to_string(),
                    actual,
                });
            }
        }

        Ok(())
    }

    // Method and url from the case; a json payload also sets the content type.
    fn prepare_request(&self, ts_ctx: &TestCtx) -> reqwest::blocking::RequestBuilder {
        let request = ts_ctx.request(self.method.clone(), self.path);
        match &self.body {
            Some(body) => request.json(body),
            None => request,
        }
    }

    fn fire_start_evt(&self, tx: &Sender<TestEvent>, ts_ctx: &TestCtx) {
        // Nobody may be listening; that is fine.
        let _ = tx.send(TestEvent::EvtTestCaseBegin(TestCaseBegin {
            timestamp: Instant::now(),
            testcase_id: self.id.to_string(),
            testcase_name: self.title.to_string(),
            url: ts_ctx.url_for(self.path),
            method: self.method.to_string(),
            payload: self.body.clone(),
        }));
    }

    fn fire_end_evt(
        &self,
        tx: &Sender<TestEvent>,
        result: &TestResult,
        response: Option<&ResponseData>,
        exec_duration: std::time::Duration,
    ) {
        let _ = tx.send(TestEvent::EvtTestCaseEnd(TestCaseEnd {
            timestamp: Instant::now(),
            testcase_id: self.id.to_string(),
            exec_duration,
            status: response.map(|r| r.status),
            passed: result.is_passed(),
            response_json: response.and_then(|r| r.json.clone()),
        }));
    }

    pub fn print_result(
        &self,
        result: &TestResult,
        response: Option<&ResponseData>,
        ts_ctx: &TestCtx,
        verbose: bool,
    ) {
        println!("{:<15}: {}", "Test Case ID", self.id);
        println!("{:<15}: {}", "Test Case", self.title);
        println!("{:<15}: {}", "Description", self.description);
        println!("{:<15}: {}", "Expected", self.expected_status);
        match response {
            Some(response) => println!("{:<15}: {}", "Actual", response.status),
            None => println!("{:<15}: {}", "Actual", "no response"),
        }

        // print the below, if only verbose flag is enabled.
        if verbose {
            self.print_request_info(ts_ctx);
            if let Some(response) = response {
                response.print_response_info();
            }
        }

        match result {
            TestResult::Passed => println!("{:<15}: {}", "Result", "✅ PASSED".green()),
            TestResult::Failed(failure) => {
                println!("{:<15}: {}", "Result", "❌ FAILED".red());
                println!("{:<15}: {}", "Reason", failure.to_string().red());
            }
        }
    }

    pub fn print_request_info(&self, ts_ctx: &TestCtx) {
        println!("Request Info: ");
        println!("\tMethod: {}", self.method);
        println!("\tURL: {}", ts_ctx.url_for(self.path));
        if let Some(body) = &self.body {
            println!("\tHeaders: ");
            println!("\t\tcontent-type: application/json");
            let pretty_json = serde_json::to_string_pretty(body).unwrap_or_default();
            println!("\tPayload: {}", pretty_json.replace('\n', "\n\t\t"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;
    use std::time::Duration;

    fn response(status: u16, json: Option<serde_json::Value>) -> ResponseData {
        ResponseData {
            status,
            body: json.as_ref().map(|j| j.to_string()).unwrap_or_default(),
            json,
            exec_duration: Duration::from_millis(5),
        }
    }

    fn create_case() -> TestCase {
        TestCase {
            id: "createUser_Positive",
            title: "Create User Test - Positive",
            description: "Test to create a new user",
            method: Method::POST,
            path: "/api/users",
            body: Some(json!({ "name": "John", "job": "leader" })),
            expected_status: 201,
            field_assertions: vec![
                FieldAssertion { path: "name", expected: "John" },
                FieldAssertion { path: "job", expected: "leader" },
            ],
            pass_message: "created",
        }
    }

    #[test]
    fn test_verify_passes_on_matching_response() {
        let case = create_case();
        let resp = response(201, Some(json!({ "name": "John", "job": "leader", "id": "17" })));
        assert_eq!(case.verify(&resp), Ok(()));
    }

    #[test]
    fn test_verify_checks_status_before_fields() {
        let case = create_case();
        let resp = response(400, Some(json!({ "error": "bad" })));
        assert_eq!(
            case.verify(&resp),
            Err(CaseFailure::StatusMismatch { expected: 201, actual: 400 })
        );
    }

    #[test]
    fn test_verify_reports_first_field_mismatch() {
        let case = create_case();
        let resp = response(201, Some(json!({ "name": "Jane", "job": "cook" })));
        assert_eq!(
            case.verify(&resp),
            Err(CaseFailure::FieldMismatch {
                path: "name".to_string(),
                expected: "John".to_string(),
                actual: Some("Jane".to_string()),
            })
        );
    }

    #[test]
    fn test_verify_missing_body_is_field_mismatch() {
        let case = create_case();
        let resp = response(201, None);
        assert_eq!(
            case.verify(&resp),
            Err(CaseFailure::FieldMismatch {
                path: "name".to_string(),
                expected: "John".to_string(),
                actual: None,
            })
        );
    }

    #[test]
    fn test_verify_status_only_case_ignores_body() {
        let mut case = create_case();
        case.field_assertions.clear();
        case.expected_status = 204;
        assert_eq!(case.verify(&response(204, None)), Ok(()));
    }

    #[test]
    fn test_prepare_request_sets_json_body() {
        let ctx = TestCtx::new("http://localhost:9").unwrap();
        let request = create_case().prepare_request(&ctx).build().unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        let body: serde_json::Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(body, json!({ "name": "John", "job": "leader" }));
    }

    #[test]
    fn test_prepare_request_without_body_has_no_content_type() {
        let ctx = TestCtx::new("http://localhost:9").unwrap();
        let mut case = create_case();
        case.method = Method::GET;
        case.path = "/api/users/2";
        case.body = None;

        let request = case.prepare_request(&ctx).build().unwrap();
        assert!(request.headers().get("content-type").is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_run_on_transport_failure_logs_nothing() {
        let ctx = TestCtx::new("http://127.0.0.1:9").unwrap();
        let mut report = ReportSink::new("unused.html");
        let (tx, rx) = std::sync::mpsc::channel();

        let outcome = create_case().run(&ctx, &mut report, false, &tx);

        assert!(matches!(outcome.result, TestResult::Failed(CaseFailure::Transport(_))));
        assert!(report.entries().is_empty());

        let events: Vec<TestEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        match &events[1] {
            TestEvent::EvtTestCaseEnd(end) => {
                assert_eq!(end.testcase_id, "createUser_Positive");
                assert_eq!(end.status, None);
                assert!(!end.passed);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
