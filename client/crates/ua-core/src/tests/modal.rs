use crate::tests::user;
use crate::{
    CoreError, ModalAction, ModalDimmer, ModalSize, ModalState, ModalTarget, RawModalAction,
    UserDraft, reduce, reduce_raw,
};

fn open_edit() -> ModalState {
    let target = ModalTarget::Edit(UserDraft::from(&user(1, "Ana", "2024-01-01T00:00:00Z")));
    reduce(&ModalState::Closed, ModalAction::open(target))
}

#[test]
fn test_open_sets_target_and_hints() {
    let state = open_edit();

    let ModalState::Open(open) = &state else {
        panic!("expected open modal");
    };
    assert_eq!(open.size, Some(ModalSize::Small));
    assert_eq!(open.dimmer, Some(ModalDimmer::Blurring));
    assert!(state.user_to_edit().is_some());
    assert!(state.user_to_create().is_none());
    assert!(state.user_to_remove().is_none());
}

#[test]
fn test_open_replaces_previous_target() {
    let state = open_edit();
    let state = reduce(
        &state,
        ModalAction::Open {
            target: ModalTarget::Create(UserDraft::blank()),
            size: None,
            dimmer: None,
        },
    );

    assert!(state.user_to_edit().is_none());
    assert_eq!(state.user_to_create(), Some(&UserDraft::blank()));
    let ModalState::Open(open) = &state else {
        panic!("expected open modal");
    };
    assert_eq!(open.size, None);
}

#[test]
fn test_close_from_every_open_state() {
    let targets = [
        ModalTarget::Create(UserDraft::blank()),
        ModalTarget::Edit(UserDraft::from(&user(1, "Ana", "x"))),
        ModalTarget::Remove(user(2, "Bia", "x")),
    ];

    for target in targets {
        let open = reduce(&ModalState::Closed, ModalAction::open(target));
        assert!(open.is_open());
        assert_eq!(reduce(&open, ModalAction::Close), ModalState::Closed);
    }
}

#[test]
fn test_raw_open_with_single_target() {
    let raw: RawModalAction = serde_json::from_value(serde_json::json!({
        "type": "OPEN_MODAL",
        "size": "small",
        "dimmer": "blurring",
        "userToCreate": { "name": "", "email": "", "phone": "" }
    }))
    .unwrap();

    let state = reduce_raw(&ModalState::Closed, raw).unwrap();
    assert_eq!(state.user_to_create(), Some(&UserDraft::blank()));
}

#[test]
fn test_raw_close() {
    let raw = RawModalAction {
        kind: "CLOSE_MODAL".to_string(),
        ..RawModalAction::default()
    };
    assert_eq!(reduce_raw(&open_edit(), raw).unwrap(), ModalState::Closed);
}

#[test]
fn test_raw_unknown_action_fails() {
    let raw = RawModalAction {
        kind: "TOGGLE_MODAL".to_string(),
        ..RawModalAction::default()
    };

    let result = reduce_raw(&ModalState::Closed, raw);
    assert!(matches!(
        result,
        Err(CoreError::UnknownModalAction { ref action, .. }) if action == "TOGGLE_MODAL"
    ));
}

#[test]
fn test_raw_open_rejects_two_targets() {
    let raw = RawModalAction {
        kind: "OPEN_MODAL".to_string(),
        user_to_create: Some(UserDraft::blank()),
        user_to_remove: Some(user(1, "Ana", "x")),
        ..RawModalAction::default()
    };

    let result = reduce_raw(&ModalState::Closed, raw);
    assert!(matches!(result, Err(CoreError::InvalidModalAction { .. })));
}

#[test]
fn test_raw_open_rejects_no_target() {
    let raw = RawModalAction {
        kind: "OPEN_MODAL".to_string(),
        ..RawModalAction::default()
    };

    assert!(reduce_raw(&ModalState::Closed, raw).is_err());
}

#[test]
fn test_raw_action_from_json_message() {
    let raw: RawModalAction = serde_json::from_str(
        r#"{
            "type": "OPEN_MODAL",
            "size": "tiny",
            "dimmer": "inverted",
            "userToCreate": { "name": "", "email": "", "phone": "" }
        }"#,
    )
    .unwrap();

    let state = reduce_raw(&ModalState::Closed, raw).unwrap();

    let ModalState::Open(open) = state else {
        panic!("expected an open modal");
    };
    assert_eq!(open.target, ModalTarget::Create(UserDraft::blank()));
    assert_eq!(open.size, Some(ModalSize::Tiny));
    assert_eq!(open.dimmer, Some(ModalDimmer::Inverted));
}

#[test]
fn test_raw_unknown_json_message_keeps_state() {
    let before = open_edit();
    let raw: RawModalAction = serde_json::from_str(r#"{ "type": "SHAKE_MODAL" }"#).unwrap();

    assert!(reduce_raw(&before, raw).is_err());
    assert!(before.is_open());
}
