use miembros_core::db::open_db_in_memory;
use miembros_core::{
    Member, MemberPatch, MemberRepository, MemberService, MemberServiceError,
    MemberValidationError, NewMember, RepoError, SqliteMemberRepository,
};

fn new_member(first: &str, last: &str, email: &str, active: bool) -> NewMember {
    NewMember {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        active,
    }
}

#[test]
fn insert_assigns_sequential_ids_and_get_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::new(&conn);

    let first = repo
        .insert(&new_member("Ana", "Ruiz", "a@x.com", false))
        .unwrap();
    let second = repo.insert(&NewMember::default()).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.find_by_id(first.id).unwrap(), Some(first));
    assert_eq!(
        repo.find_by_id(second.id).unwrap(),
        Some(Member {
            id: 2,
            first_name: None,
            last_name: None,
            email: None,
            active: false,
        })
    );
}

#[test]
fn create_accepts_empty_strings() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));

    let created = service
        .create_member(&new_member("", "", "", true))
        .unwrap();
    let loaded = service.get_member(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.first_name.as_deref(), Some(""));
    assert!(loaded.active);
}

#[test]
fn save_and_delete_unknown_id_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemberRepository::new(&conn);

    let ghost = new_member("X", "Y", "z@x.com", true).into_member(42);
    assert!(matches!(repo.save(&ghost), Err(RepoError::NotFound(42))));
    assert!(matches!(
        repo.delete_by_id(42),
        Err(RepoError::NotFound(42))
    ));
    assert!(!repo.exists_by_id(42).unwrap());
}

#[test]
fn partial_update_scenario_resets_active_to_patch_value() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));

    let created = service
        .create_member(&new_member("Ana", "Ruiz", "a@x.com", true))
        .unwrap();
    assert_eq!(created.id, 1);

    let patch = MemberPatch {
        first_name: Some("Ana2".to_string()),
        ..MemberPatch::default()
    };
    let updated = service.update_member(1, &patch).unwrap();

    let expected = Member {
        id: 1,
        first_name: Some("Ana2".to_string()),
        last_name: Some("Ruiz".to_string()),
        email: Some("a@x.com".to_string()),
        active: false,
    };
    assert_eq!(updated, expected);
    assert_eq!(service.get_member(1).unwrap(), expected);
}

#[test]
fn partial_update_overwrites_every_provided_field() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));
    let created = service
        .create_member(&new_member("Ana", "Ruiz", "a@x.com", false))
        .unwrap();

    let patch = MemberPatch {
        first_name: None,
        last_name: Some("Gil".to_string()),
        email: Some("ana@gil.es".to_string()),
        active: true,
    };
    let updated = service.update_member(created.id, &patch).unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Ana"));
    assert_eq!(updated.last_name.as_deref(), Some("Gil"));
    assert_eq!(updated.email.as_deref(), Some("ana@gil.es"));
    assert!(updated.active);
}

#[test]
fn active_only_patch_is_rejected_and_leaves_row_untouched() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));
    let created = service
        .create_member(&new_member("Ana", "Ruiz", "a@x.com", false))
        .unwrap();

    let patch = MemberPatch {
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        email: Some(String::new()),
        active: true,
    };
    let err = service.update_member(created.id, &patch).unwrap_err();

    assert!(matches!(
        err,
        MemberServiceError::Validation(MemberValidationError::NoUpdatableField)
    ));
    assert_eq!(service.get_member(created.id).unwrap(), created);
}

#[test]
fn update_unknown_id_is_not_found_after_validation_passes() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));

    let patch = MemberPatch {
        first_name: Some("X".to_string()),
        ..MemberPatch::default()
    };
    let err = service.update_member(999, &patch).unwrap_err();
    assert!(matches!(err, MemberServiceError::MemberNotFound(999)));
}

#[test]
fn delete_then_get_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));
    let created = service
        .create_member(&new_member("Ana", "Ruiz", "a@x.com", false))
        .unwrap();

    service.delete_member(created.id).unwrap();

    assert!(matches!(
        service.get_member(created.id),
        Err(MemberServiceError::MemberNotFound(id)) if id == created.id
    ));
    assert!(matches!(
        service.delete_member(created.id),
        Err(MemberServiceError::MemberNotFound(_))
    ));
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));

    let first = service.create_member(&NewMember::default()).unwrap();
    service.delete_member(first.id).unwrap();
    let second = service.create_member(&NewMember::default()).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn list_members_is_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let service = MemberService::new(SqliteMemberRepository::new(&conn));

    for name in ["c", "a", "b"] {
        service
            .create_member(&new_member(name, "x", "x@x.com", false))
            .unwrap();
    }

    let ids: Vec<_> = service
        .list_members()
        .unwrap()
        .into_iter()
        .map(|member| member.id)
        .collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn invalid_persisted_active_flag_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO miembro (nombre, activo) VALUES ('Ana', 2);",
        [],
    )
    .unwrap();
    let repo = SqliteMemberRepository::new(&conn);

    let err = repo.find_by_id(1).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("activo")));
}
