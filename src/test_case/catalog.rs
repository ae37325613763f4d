//! Built-in checks for the `/api/users` resource of the reqres demo API.
//!
//! The negative cases rely on the service's canned fixtures: user `2` exists,
//! user `99999` does not, and empty `name`/`job` values are rejected.

use super::data::{FieldAssertion, TestCase};
use reqwest::Method;
use serde_json::json;

const USERS: &str = "/api/users";
const EXISTING_USER: &str = "/api/users/2";
const MISSING_USER: &str = "/api/users/99999";

pub fn user_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            id: "createUser_Positive",
            title: "Create User Test - Positive",
            description: "Test to create a new user",
            method: Method::POST,
            path: USERS,
            body: Some(json!({ "name": "John", "job": "leader" })),
            expected_status: 201,
            field_assertions: vec![
                FieldAssertion { path: "name", expected: "John" },
                FieldAssertion { path: "job", expected: "leader" },
            ],
            pass_message: "User created successfully with name: John and job: leader",
        },
        TestCase {
            id: "createUser_Negative",
            title: "Create User Test - Negative",
            description: "Test to create a new user with invalid data",
            method: Method::POST,
            path: USERS,
            body: Some(json!({ "name": "", "job": "" })),
            expected_status: 400,
            field_assertions: Vec::new(),
            pass_message: "Negative case passed, invalid user data returned 400 Bad Request",
        },
        TestCase {
            id: "getUser_Positive",
            title: "Get User Test - Positive",
            description: "Test to get an existing user's details",
            method: Method::GET,
            path: EXISTING_USER,
            body: None,
            expected_status: 200,
            field_assertions: vec![FieldAssertion { path: "data.id", expected: "2" }],
            pass_message: "Successfully retrieved user details for user with ID: 2",
        },
        TestCase {
            id: "getUser_Negative",
            title: "Get User Test - Negative",
            description: "Test to get a non-existing user's details",
            method: Method::GET,
            path: MISSING_USER,
            body: None,
            expected_status: 404,
            field_assertions: Vec::new(),
            pass_message: "Negative case passed, user not found returned 404 Not Found",
        },
        TestCase {
            id: "updateUser_Positive",
            title: "Update User Test - Positive",
            description: "Test to update an existing user's details",
            method: Method::PUT,
            path: EXISTING_USER,
            body: Some(json!({ "name": "John", "job": "manager" })),
            expected_status: 200,
            field_assertions: vec![FieldAssertion { path: "job", expected: "manager" }],
            pass_message: "User updated successfully to job: manager",
        },
        TestCase {
            id: "updateUser_Negative",
            title: "Update User Test - Negative",
            description: "Test to update a user with invalid data",
            method: Method::PUT,
            path: EXISTING_USER,
            body: Some(json!({ "name": "", "job": "" })),
            expected_status: 400,
            field_assertions: Vec::new(),
            pass_message: "Negative case passed, invalid update data returned 400 Bad Request",
        },
        TestCase {
            id: "deleteUser_Positive",
            title: "Delete User Test - Positive",
            description: "Test to delete an existing user",
            method: Method::DELETE,
            path: EXISTING_USER,
            body: None,
            expected_status: 204,
            field_assertions: Vec::new(),
            pass_message: "User deleted successfully, returned 204 No Content",
        },
        TestCase {
            id: "deleteUser_Negative",
            title: "Delete User Test - Negative",
            description: "Test to delete a non-existing user",
            method: Method::DELETE,
            path: MISSING_USER,
            body: None,
            expected_status: 404,
            field_assertions: Vec::new(),
            pass_message: "Negative case passed, user not found returned 404 Not Found",
        },
    ]
}

/// Picks cases by id, keeping catalog order. An empty filter selects all.
pub fn select(ids: &[String]) -> anyhow::Result<Vec<TestCase>> {
    let cases = user_cases();
    if ids.is_empty() {
        return Ok(cases);
    }

    if let Some(unknown) = ids.iter().find(|id| !cases.iter().any(|c| c.id == id.as_str())) {
        let known: Vec<&str> = cases.iter().map(|c| c.id).collect();
        anyhow::bail!("unknown test case '{}', expected one of: {}", unknown, known.join(", "));
    }

    Ok(cases
        .into_iter()
        .filter(|c| ids.iter().any(|id| id == c.id))
        .collect())
}
