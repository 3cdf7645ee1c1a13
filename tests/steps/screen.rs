//! Step definitions for mode, field and screen assertions

use crate::common::world::{field_from_label, mode_from_title, CountrylineWorld};
use cucumber::then;

#[then(expr = "the mode should be {string}")]
async fn then_mode_should_be(world: &mut CountrylineWorld, title: String) {
    assert_eq!(world.mode(), mode_from_title(&title));
}

#[then(expr = "the field {string} should contain {string}")]
async fn then_field_should_contain(world: &mut CountrylineWorld, label: String, value: String) {
    let field = field_from_label(&label);
    assert_eq!(world.field_value(field), value);
}

#[then(expr = "the field {string} should be empty")]
async fn then_field_should_be_empty(world: &mut CountrylineWorld, label: String) {
    let field = field_from_label(&label);
    assert_eq!(world.field_value(field), "");
}

#[then(expr = "the focused field should be {string}")]
async fn then_focused_field(world: &mut CountrylineWorld, label: String) {
    let expected = field_from_label(&label);
    assert_eq!(world.controller().view_model().focused_field(), Some(expected));
}

#[then(expr = "the screen should show {string}")]
async fn then_screen_should_show(world: &mut CountrylineWorld, text: String) {
    let screen = world.screen_text();
    assert!(screen.contains(&text), "'{text}' not on screen:\n{screen}");
}

#[then(expr = "the screen should not show {string}")]
async fn then_screen_should_not_show(world: &mut CountrylineWorld, text: String) {
    let screen = world.screen_text();
    assert!(!screen.contains(&text), "'{text}' unexpectedly on screen:\n{screen}");
}

#[then("no result should be stored")]
async fn then_no_result(world: &mut CountrylineWorld) {
    assert!(world.controller().view_model().session().result().is_empty());
}

#[then(expr = "{int} response(s) should have been ignored")]
async fn then_responses_ignored(world: &mut CountrylineWorld, count: usize) {
    let ignored = world.applied_responses.iter().filter(|applied| !**applied).count();
    assert_eq!(ignored, count);
}

#[then("the application should quit")]
async fn then_application_quits(world: &mut CountrylineWorld) {
    assert!(world.controller().should_quit());
}
