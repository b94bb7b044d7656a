#![cfg(target_arch = "wasm32")]

use mall_core::{Session, User};
use mall_web::store::{self, SESSION_KEY, SharedSession};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn raw_storage() -> web_sys::Storage {
    web_sys::window()
        .expect("window")
        .local_storage()
        .expect("storage access")
        .expect("storage available")
}

fn sample_session() -> Session {
    Session::new(
        "tok".to_string(),
        "ref".to_string(),
        Some(User {
            id: "U-1".to_string(),
            email: "buyer@example.com".to_string(),
            role: "buyer".to_string(),
        }),
    )
}

#[wasm_bindgen_test]
fn save_then_load_round_trips() {
    store::clear();
    store::save(&sample_session());
    assert_eq!(store::load(), sample_session());
    store::clear();
    assert_eq!(store::load(), Session::default());
}

#[wasm_bindgen_test]
fn corrupt_blob_loads_as_logged_out() {
    raw_storage()
        .set_item(SESSION_KEY, "{definitely not json")
        .expect("set raw blob");
    assert_eq!(store::load(), Session::default());
    store::clear();
}

#[wasm_bindgen_test]
fn shared_session_writes_through_to_storage() {
    store::clear();
    let shared = SharedSession::restore();
    shared.set(sample_session());
    // A fresh handle sees what the first one persisted.
    assert_eq!(SharedSession::restore().get(), sample_session());

    shared.reset();
    assert!(raw_storage().get_item(SESSION_KEY).expect("read").is_none());
    assert_eq!(SharedSession::restore().get(), Session::default());
}
