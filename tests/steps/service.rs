//! Step definitions for the mock country service
//!
//! Each step mounts one wiremock expectation. Requests the mocks do not
//! cover get wiremock's default 404.

use crate::common::world::CountrylineWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then};
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[given(expr = "the service knows country {string} with capital {string}")]
async fn given_known_country(world: &mut CountrylineWorld, name: String, capital: String) {
    debug!("Mocking GET /countries?name={}", name);
    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(query_param("name", name.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": name, "capital": capital})),
        )
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service answers country {string} with capital {string} after {int} ms")]
async fn given_slow_country(
    world: &mut CountrylineWorld,
    name: String,
    capital: String,
    delay_ms: u64,
) {
    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(query_param("name", name.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": name, "capital": capital}))
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service rejects country {string} with status {int} and message {string}")]
async fn given_rejected_country(
    world: &mut CountrylineWorld,
    name: String,
    status: u16,
    message: String,
) {
    Mock::given(method("GET"))
        .and(path("/countries"))
        .and(query_param("name", name.as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_string(message))
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service accepts country {string} with capital {string}")]
async fn given_accepts_new_country(world: &mut CountrylineWorld, name: String, capital: String) {
    Mock::given(method("POST"))
        .and(path("/countries"))
        .and(body_json(json!({"name": name, "capital": capital})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service accepts updates to {string}")]
async fn given_accepts_update(world: &mut CountrylineWorld, name: String) {
    Mock::given(method("PUT"))
        .and(path("/countries"))
        .and(query_param("name", name.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service deletes {string}")]
async fn given_deletes_country(world: &mut CountrylineWorld, name: String) {
    Mock::given(method("DELETE"))
        .and(path("/countries"))
        .and(query_param("name", name.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service knows language {string} named {string}")]
async fn given_known_language(world: &mut CountrylineWorld, id: String, name: String) {
    Mock::given(method("GET"))
        .and(path("/languages"))
        .and(query_param("id", id.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": id, "name": name, "family": "Quechuan"})),
        )
        .mount(world.mock_server())
        .await;
}

#[given(expr = "the service lists these countries for language {string}:")]
async fn given_countries_with_language(world: &mut CountrylineWorld, id: String, step: &Step) {
    let table = step.table.as_ref().expect("step should carry a table");
    let countries: Vec<_> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let (name, capital) = (&row[0], &row[1]);
            json!({"name": name, "capital": capital})
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/countries/with-language"))
        .and(query_param("languageId", id.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(countries)))
        .mount(world.mock_server())
        .await;
}

#[then(expr = "the service should have received {int} request(s)")]
async fn then_received_requests(world: &mut CountrylineWorld, count: usize) {
    let received = world
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    assert_eq!(received.len(), count, "received: {received:?}");
}

#[then(expr = "the last request should be {word} {string}")]
async fn then_last_request(world: &mut CountrylineWorld, verb: String, target: String) {
    let received = world
        .mock_server()
        .received_requests()
        .await
        .unwrap_or_default();
    let last = received.last().expect("at least one request should be sent");

    let actual = match last.url.query() {
        Some(query) => format!("{}?{}", last.url.path(), query),
        None => last.url.path().to_string(),
    };
    assert_eq!(last.method.as_str(), verb);
    assert_eq!(actual, target);
}
