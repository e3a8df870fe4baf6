use miembros_core::{Member, MemberPatch, NewMember};

#[test]
fn member_serialization_uses_column_names() {
    let member = Member {
        id: 1,
        first_name: Some("Ana".to_string()),
        last_name: None,
        email: Some("a@x.com".to_string()),
        active: true,
    };

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "nombre": "Ana",
            "apellido": null,
            "email": "a@x.com",
            "activo": true,
        })
    );

    let decoded: Member = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn new_member_ignores_caller_supplied_id() {
    let decoded: NewMember =
        serde_json::from_str(r#"{"id": 77, "nombre": "Ana", "activo": true}"#).unwrap();

    assert_eq!(decoded.first_name.as_deref(), Some("Ana"));
    assert_eq!(decoded.last_name, None);
    assert!(decoded.active);
    assert_eq!(decoded.into_member(3).id, 3);
}

#[test]
fn empty_body_decodes_to_default_patch() {
    let decoded: MemberPatch = serde_json::from_str("{}").unwrap();
    assert_eq!(decoded, MemberPatch::default());
    assert!(decoded.validate().is_err());
}
