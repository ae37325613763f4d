//
// Define test events.  Test events are fired by the suite whenever
// certain actions occur.  For example, when a test case starts, a
// test event is fired.  When a test case ends, another one is fired,
// carrying the status it received and whether it passed.
//
use std::time::Instant;

#[derive(Debug)]
pub struct TestSuiteBegin {
    pub timestamp: Instant,
    pub run_id: String,
    pub base_url: String,
    pub total: usize,
}

#[derive(Debug)]
pub struct TestSuiteEnd {
    pub timestamp: Instant,
    pub exec_duration: std::time::Duration,
    pub run_id: String,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct TestCaseBegin {
    pub timestamp: Instant,
    pub testcase_id: String,
    pub testcase_name: String,
    pub url: String,
    pub method: String,
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug)]
pub struct TestCaseEnd {
    pub timestamp: Instant,
    pub testcase_id: String,
    pub exec_duration: std::time::Duration,
    pub status: Option<u16>, // None when no response arrived
    pub passed: bool,
    pub response_json: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum TestEvent {
    EvtTestSuiteBegin(TestSuiteBegin),
    EvtTestSuiteEnd(TestSuiteEnd),
    EvtTestCaseBegin(TestCaseBegin),
    EvtTestCaseEnd(TestCaseEnd),
}
