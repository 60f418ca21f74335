use super::*;
use serde_json::json;

fn values() -> FormValues {
    FormValues { username: "alice".to_owned(), password: "secret".to_owned(), email: "alice@test.com".to_owned() }
}

#[test]
fn field_names_match_wire_keys() {
    let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["username", "password", "email"]);
}

#[test]
fn mode_defaults_to_login_and_toggles() {
    assert_eq!(Mode::default(), Mode::Login);
    assert_eq!(Mode::Login.toggled(), Mode::Signup);
    assert_eq!(Mode::Signup.toggled(), Mode::Login);
}

#[test]
fn mode_selects_endpoint() {
    assert_eq!(Mode::Login.endpoint(), "/auth/login");
    assert_eq!(Mode::Signup.endpoint(), "/auth/signup");
}

#[test]
fn email_only_included_in_signup() {
    assert!(!Mode::Login.includes(Field::Email));
    assert!(Mode::Signup.includes(Field::Email));
    assert!(Mode::Login.includes(Field::Username) && Mode::Login.includes(Field::Password));
}

#[test]
fn form_values_get_set_by_field() {
    let mut v = FormValues::default();
    v.set(Field::Email, "x@y.io".to_owned());
    assert_eq!(v.get(Field::Email), "x@y.io");
    assert_eq!(v.get(Field::Username), "");
}

#[test]
fn login_credentials_serialize_without_email_key() {
    let creds = Credentials::from_values(&values(), Mode::Login);
    assert_eq!(serde_json::to_value(&creds).expect("json"), json!({ "username": "alice", "password": "secret" }));
}

#[test]
fn signup_credentials_carry_email() {
    let creds = Credentials::from_values(&values(), Mode::Signup);
    assert_eq!(
        serde_json::to_value(&creds).expect("json"),
        json!({ "username": "alice", "password": "secret", "email": "alice@test.com" })
    );
}

#[test]
fn auth_response_decodes_opaque_user() {
    let resp: AuthResponse =
        serde_json::from_value(json!({ "user": { "id": 1, "name": "a", "roles": ["x"] }, "token": "tok123" }))
            .expect("response");
    assert_eq!(resp.token, "tok123");
    assert_eq!(resp.user.id(), Some(&json!(1)));
    assert_eq!(resp.user.get("roles"), Some(&json!(["x"])));
    assert_eq!(resp.user.display_name(), Some("a"));
}

#[test]
fn auth_response_without_token_is_rejected() {
    let parsed = serde_json::from_value::<AuthResponse>(json!({ "user": { "id": 1 } }));
    assert!(parsed.is_err());
}

#[test]
fn user_record_must_be_an_object() {
    let parsed = serde_json::from_value::<AuthResponse>(json!({ "user": 5, "token": "t" }));
    assert!(parsed.is_err());
}

#[test]
fn display_name_falls_back_to_username() {
    let user: UserRecord = serde_json::from_value(json!({ "id": 3, "username": "bob" })).expect("user");
    assert_eq!(user.display_name(), Some("bob"));
    assert_eq!(UserRecord::default().display_name(), None);
}
