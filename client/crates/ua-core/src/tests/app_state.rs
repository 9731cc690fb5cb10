use crate::tests::user;
use crate::{
    ApiFailure, AppState, DateRange, DraftField, Effect, Event, ModalState, ModalTarget,
    MutationKind, NewUser, SortDirection, UNKNOWN_ERROR_MESSAGE, User,
};

use chrono::NaiveDate;

fn step(state: AppState, event: Event) -> (AppState, Option<Effect>) {
    state.apply(event)
}

fn loaded(users: Vec<User>) -> AppState {
    let (state, effect) = step(AppState::new(SortDirection::Asc), Event::Refresh);
    let Some(Effect::Fetch(request)) = effect else {
        panic!("refresh must fetch");
    };
    let (state, _) = step(
        state,
        Event::FetchCompleted {
            seq: request.seq,
            outcome: Ok(users),
        },
    );
    state
}

fn type_into(mut state: AppState, name: &str, email: &str, phone: &str) -> AppState {
    for (field, value) in [
        (DraftField::Name, name),
        (DraftField::Email, email),
        (DraftField::Phone, phone),
    ] {
        let (next, effect) = step(
            state,
            Event::FieldEdited {
                field,
                value: value.to_string(),
            },
        );
        assert!(effect.is_none());
        state = next;
    }
    state
}

#[test]
fn test_search_then_single_date_scenario() {
    let state = AppState::default();

    let (state, effect) = step(state, Event::SearchChanged("ana".to_string()));
    let Some(Effect::Fetch(request)) = effect else {
        panic!("search must fetch");
    };
    assert_eq!(request.query.to_string(), "ana");

    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let (_, effect) = step(state, Event::DateRangeChanged(Some(DateRange::single(day))));
    let Some(Effect::Fetch(request)) = effect else {
        panic!("range change must fetch");
    };
    assert_eq!(request.query.to_string(), "date/01-01-2024/ana");
}

#[test]
fn test_create_flow_submits_formatted_draft() {
    let (state, _) = step(AppState::default(), Event::OpenCreate);
    assert!(!state.can_submit());

    let state = type_into(state, "Ana 9 Maria", "ana@example.com", "(11) 91234-5678");
    assert!(state.can_submit());

    let (state, effect) = step(state, Event::Submit);
    assert_eq!(
        effect,
        Some(Effect::Create(NewUser {
            name: "Ana  Maria".to_string(),
            email: "ana@example.com".to_string(),
            phone: "11912345678".to_string(),
        }))
    );
    assert!(state.modal.is_open());
}

#[test]
fn test_submit_disabled_for_invalid_draft() {
    let (state, _) = step(AppState::default(), Event::OpenCreate);
    let state = type_into(state, "Ana", "not-an-email", "11912345678");

    let (state, effect) = step(state, Event::Submit);
    assert!(effect.is_none());
    assert_eq!(
        state.feedback(DraftField::Email),
        Some("Invalid e-mail address.")
    );
}

#[test]
fn test_create_failure_routes_to_field_and_edit_clears_it() {
    let (state, _) = step(AppState::default(), Event::OpenCreate);
    let state = type_into(state, "Ana", "ana@example.com", "11912345678");

    let (state, effect) = step(
        state,
        Event::MutationFailed {
            kind: MutationKind::Create,
            failure: ApiFailure::server("email_already_registered", "Email already registered"),
        },
    );
    assert!(effect.is_none());
    assert!(state.modal.is_open());
    assert_eq!(state.errors.email.as_deref(), Some("Email already registered"));
    assert_eq!(
        state.feedback(DraftField::Email),
        Some("Email already registered")
    );

    let (state, _) = step(
        state,
        Event::FieldEdited {
            field: DraftField::Email,
            value: "ana2@example.com".to_string(),
        },
    );
    assert_eq!(state.errors.email, None);
}

#[test]
fn test_create_transport_failure_uses_generic_message() {
    let (state, _) = step(AppState::default(), Event::OpenCreate);
    let (state, _) = step(
        state,
        Event::MutationFailed {
            kind: MutationKind::Create,
            failure: ApiFailure::transport(),
        },
    );

    assert_eq!(state.errors.general.as_deref(), Some(UNKNOWN_ERROR_MESSAGE));
}

#[test]
fn test_mutation_success_closes_and_refetches_current_query() {
    let (state, _) = step(AppState::default(), Event::SearchChanged("ana".to_string()));
    let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let (state, _) = step(state, Event::DateRangeChanged(Some(DateRange::single(day))));
    let (state, _) = step(state, Event::OpenCreate);

    let (state, effect) = step(
        state,
        Event::MutationSucceeded {
            kind: MutationKind::Create,
            user_id: 42,
        },
    );

    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.last_saved, Some(42));
    let Some(Effect::Fetch(request)) = effect else {
        panic!("success must refetch");
    };
    assert_eq!(request.query.to_string(), "date/02-03-2024/ana");
}

#[test]
fn test_update_flow_and_general_errors() {
    let ana = user(5, "Ana", "2024-01-01T00:00:00Z");
    let state = loaded(vec![ana.clone()]);

    let (state, _) = step(state, Event::OpenEdit(ana));
    let (state, _) = step(
        state,
        Event::FieldEdited {
            field: DraftField::Name,
            value: "Ana Clara".to_string(),
        },
    );

    let (state, effect) = step(state, Event::Submit);
    let Some(Effect::Update { id, draft }) = effect else {
        panic!("edit submit must update");
    };
    assert_eq!(id, 5);
    assert_eq!(draft.name.as_deref(), Some("Ana Clara"));

    for error_id in ["id_not_registered", "no_data_modified"] {
        let (next, _) = step(
            state.clone(),
            Event::MutationFailed {
                kind: MutationKind::Update,
                failure: ApiFailure::server(error_id, "Nothing to do"),
            },
        );
        assert_eq!(next.errors.general.as_deref(), Some("Nothing to do"));
        assert!(next.modal.is_open());
    }
}

#[test]
fn test_edit_without_id_is_noop() {
    let ana = user(5, "Ana", "2024-01-01T00:00:00Z");
    let (mut state, _) = step(AppState::default(), Event::OpenEdit(ana));
    if let ModalState::Open(open) = &mut state.modal
        && let ModalTarget::Edit(draft) = &mut open.target
    {
        draft.id = None;
    }

    assert!(!state.can_submit());
    let (_, effect) = step(state, Event::Submit);
    assert!(effect.is_none());
}

#[test]
fn test_delete_failure_still_closes_and_refetches() {
    let bia = user(9, "Bia", "2024-01-01T00:00:00Z");
    let state = loaded(vec![bia.clone()]);

    let (state, _) = step(state, Event::OpenRemove(bia));
    let (state, effect) = step(state, Event::Submit);
    assert_eq!(effect, Some(Effect::Delete { id: 9 }));

    let (state, effect) = step(
        state,
        Event::MutationFailed {
            kind: MutationKind::Delete,
            failure: ApiFailure::server("id_not_registered", "Id not registered"),
        },
    );

    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(state.errors.general.as_deref(), Some("Id not registered"));
    assert!(matches!(effect, Some(Effect::Fetch(_))));
}

#[test]
fn test_cancel_discards_draft_and_errors() {
    let (state, _) = step(AppState::default(), Event::OpenCreate);
    let state = type_into(state, "Ana", "ana@example.com", "11912345678");
    let (state, _) = step(
        state,
        Event::MutationFailed {
            kind: MutationKind::Create,
            failure: ApiFailure::server("name_already_registered", "Name taken"),
        },
    );

    let (state, effect) = step(state, Event::Cancel);

    assert!(effect.is_none());
    assert_eq!(state.modal, ModalState::Closed);
    assert!(state.errors.is_empty());
}

#[test]
fn test_field_edit_ignored_when_closed() {
    let (state, effect) = step(
        AppState::default(),
        Event::FieldEdited {
            field: DraftField::Name,
            value: "Ana".to_string(),
        },
    );

    assert!(effect.is_none());
    assert_eq!(state.modal, ModalState::Closed);
}

#[test]
fn test_stale_fetch_completion_ignored() {
    let (state, first) = step(AppState::default(), Event::SearchChanged("a".to_string()));
    let (state, second) = step(state, Event::SearchChanged("an".to_string()));
    let (Some(Effect::Fetch(first)), Some(Effect::Fetch(second))) = (first, second) else {
        panic!("both searches must fetch");
    };

    let (state, _) = step(
        state,
        Event::FetchCompleted {
            seq: second.seq,
            outcome: Ok(vec![user(2, "Ana", "2024-01-01T00:00:00Z")]),
        },
    );
    let (state, _) = step(
        state,
        Event::FetchCompleted {
            seq: first.seq,
            outcome: Ok(vec![user(1, "Abel", "2024-01-01T00:00:00Z")]),
        },
    );

    assert_eq!(state.list.users().len(), 1);
    assert_eq!(state.list.users()[0].id, 2);
}

#[test]
fn test_sort_toggle_has_no_effect() {
    let state = loaded(vec![
        user(1, "A", "2024-01-01T00:00:00Z"),
        user(2, "B", "2024-02-01T00:00:00Z"),
    ]);

    let (state, effect) = step(state, Event::SortToggled);

    assert!(effect.is_none());
    assert_eq!(state.list.users()[0].id, 2);
}
