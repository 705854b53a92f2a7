use serde_json::json;
use userlookup_core::User;

#[test]
fn user_serializes_as_id_and_name() {
    let user = User::new(1, "Alice");
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value, json!({ "id": 1, "name": "Alice" }));
}

#[test]
fn user_deserializes_with_empty_name() {
    let user: User = serde_json::from_str(r#"{"id":42,"name":""}"#).unwrap();
    assert_eq!(user, User::new(42, ""));
}
