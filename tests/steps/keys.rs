//! Step definitions for keyboard input

use crate::common::world::{mode_from_title, CountrylineWorld};
use countryline::repl::events::Mode;
use crossterm::event::{KeyCode, KeyModifiers};
use cucumber::when;
use tracing::debug;

#[when(expr = "I choose {string} from the menu")]
async fn when_choose_from_menu(world: &mut CountrylineWorld, title: String) {
    let mode = mode_from_title(&title);
    let position = Mode::FORMS
        .iter()
        .position(|form| *form == mode)
        .expect("menu entry should exist");
    let shortcut =
        char::from_digit(position as u32 + 1, 10).expect("menu has nine entries at most");

    debug!("Choosing '{}' with shortcut {}", title, shortcut);
    world.press(KeyCode::Char(shortcut));
}

#[when(expr = "I press {string}")]
async fn when_press_char(world: &mut CountrylineWorld, key: String) {
    for ch in key.chars() {
        world.press(KeyCode::Char(ch));
    }
}

#[when(expr = "I type {string}")]
async fn when_type(world: &mut CountrylineWorld, text: String) {
    world.type_text(&text);
}

#[when("I press Enter")]
async fn when_press_enter(world: &mut CountrylineWorld) {
    world.press(KeyCode::Enter);
}

#[when("I press Tab")]
async fn when_press_tab(world: &mut CountrylineWorld) {
    world.press(KeyCode::Tab);
}

#[when("I press Shift-Tab")]
async fn when_press_back_tab(world: &mut CountrylineWorld) {
    world.send_key_event(KeyCode::BackTab, KeyModifiers::SHIFT);
}

#[when("I press Backspace")]
async fn when_press_backspace(world: &mut CountrylineWorld) {
    world.press(KeyCode::Backspace);
}

#[when("I press Escape")]
async fn when_press_escape(world: &mut CountrylineWorld) {
    world.press(KeyCode::Esc);
}

#[when("I press Ctrl-R")]
async fn when_press_ctrl_r(world: &mut CountrylineWorld) {
    world.send_key_event(KeyCode::Char('r'), KeyModifiers::CONTROL);
}

#[when("I press Ctrl-C")]
async fn when_press_ctrl_c(world: &mut CountrylineWorld) {
    world.send_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
}

#[when("I wait for the response")]
async fn when_wait_for_response(world: &mut CountrylineWorld) {
    world
        .wait_for_responses(1)
        .await
        .expect("response should arrive");
}

#[when(expr = "I wait for {int} responses")]
async fn when_wait_for_responses(world: &mut CountrylineWorld, count: usize) {
    world
        .wait_for_responses(count)
        .await
        .expect("responses should arrive");
}

#[when("I clear the field")]
async fn when_clear_field(world: &mut CountrylineWorld) {
    let field = world
        .controller()
        .view_model()
        .focused_field()
        .expect("a form field should be focused");
    while !world.field_value(field).is_empty() {
        world.press(KeyCode::Backspace);
    }
}
