use std::{cell::Cell, rc::Rc};

use pretty_assertions::assert_eq;
use rally::{RallyApp, RallyConfig, ScreenContent, UserData};
use rally_router::prelude::*;

fn selected_tab(app: &RallyApp) -> Vec<Screen> {
    app.tabs()
        .into_iter()
        .filter(|tab| tab.selected)
        .map(|tab| tab.screen)
        .collect()
}

#[test]
fn launches_on_overview() {
    let app = RallyApp::new(RallyConfig::default());
    assert_eq!(
        app.content(),
        ScreenContent::Overview {
            accounts: UserData::accounts(),
            bills: UserData::bills(),
        }
    );
    assert_eq!(selected_tab(&app), [Screen::Overview]);
}

#[test]
fn overview_cards_lead_to_lists() {
    let mut app = RallyApp::new(RallyConfig::default());

    app.see_all_accounts().unwrap();
    assert_eq!(app.content(), ScreenContent::Accounts(UserData::accounts()));
    assert!(app.back());

    app.see_all_bills().unwrap();
    assert_eq!(app.content(), ScreenContent::Bills(UserData::bills()));
    assert_eq!(selected_tab(&app), [Screen::Bills]);
}

#[test]
fn account_row_opens_detail() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.select_tab(Screen::Accounts).unwrap();
    app.open_account("Vacation").unwrap();

    assert_eq!(
        app.content(),
        ScreenContent::SingleAccount(UserData::account("Vacation"))
    );
    assert_eq!(selected_tab(&app), [Screen::Accounts]);

    assert!(app.back());
    assert_eq!(app.content(), ScreenContent::Accounts(UserData::accounts()));
}

#[test]
fn back_at_start_destination_is_unhandled() {
    let mut app = RallyApp::new(RallyConfig::default());
    assert!(!app.back());
    assert_eq!(app.current_screen(), Screen::Overview);
}

#[test]
fn deep_link_intent() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.select_tab(Screen::Bills).unwrap();

    app.handle_intent("rally://Accounts/Home%20Savings").unwrap();
    assert_eq!(
        app.content(),
        ScreenContent::SingleAccount(UserData::account("Home Savings"))
    );

    assert!(app.back());
    assert_eq!(app.current_screen(), Screen::Overview);
    assert!(!app.back());
}

#[test]
fn deep_link_to_unknown_account_shows_empty_state() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.handle_intent("rally://Accounts/%EC%A9%A1%EB%8C%80%EB%A6%AC")
        .unwrap();
    assert_eq!(app.content(), ScreenContent::SingleAccount(None));
    assert_eq!(selected_tab(&app), [Screen::Accounts]);
}

#[test]
fn stray_intent_is_ignored() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.see_all_bills().unwrap();

    assert!(matches!(
        app.handle_intent("https://example.com/Accounts/Checking"),
        Err(NavigationError::NoMatchingDeepLink { .. })
    ));
    assert_eq!(app.current_screen(), Screen::Bills);
}

#[test]
fn selecting_a_detail_screen_is_rejected() {
    let mut app = RallyApp::new(RallyConfig::default());
    assert!(app.select_tab(Screen::SingleAccount).is_err());
    assert_eq!(app.navigator().back_stack().len(), 1);
}

#[test]
fn push_policy_keeps_history() {
    let mut app = RallyApp::new(
        RallyConfig::default()
            .navigator(NavigatorConfig::default().deep_link_policy(DeepLinkPolicy::Push)),
    );
    app.see_all_bills().unwrap();
    app.handle_intent("rally://Accounts/Checking").unwrap();

    assert!(app.back());
    assert_eq!(app.current_screen(), Screen::Bills);
}

#[test]
fn instance_state_survives_process_death() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.select_tab(Screen::Accounts).unwrap();
    app.open_account("Car Savings").unwrap();
    let state = app.save_instance_state().unwrap();

    let mut restored = RallyApp::new(RallyConfig::default());
    let notifications = Rc::new(Cell::new(0));
    let counter = notifications.clone();
    let _subscription = restored.observe_tail(move |_| counter.set(counter.get() + 1));

    restored.restore_instance_state(&state).unwrap();

    assert_eq!(notifications.get(), 2);
    assert_eq!(restored.navigator().back_stack(), app.navigator().back_stack());
    assert_eq!(restored.content(), app.content());
}

#[test]
fn corrupt_instance_state_is_rejected() {
    let mut app = RallyApp::new(RallyConfig::default());
    app.see_all_bills().unwrap();

    for blob in [
        "",
        "{}",
        r#"{"entries":[]}"#,
        r#"{"entries":[{"template":"Bills"}]}"#,
        r#"{"entries":[{"template":"Overview"},{"template":"Accounts/{name}","args":{"id":"1"}}]}"#,
    ] {
        assert!(app.restore_instance_state(blob).is_err(), "{blob}");
    }
    assert_eq!(app.current_screen(), Screen::Bills);
    assert_eq!(app.navigator().back_stack().len(), 2);
}

#[test]
fn launch_installs_logger_once() {
    let cfg = RallyConfig::default().log_level(tracing::Level::TRACE);
    let mut app = RallyApp::launch(cfg.clone());
    app.open_account("Checking").unwrap();

    let again = RallyApp::launch(cfg);
    assert_eq!(again.current_screen(), Screen::Overview);
}
