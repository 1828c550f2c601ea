use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  sophie.bluel@test.tld ", "S0phie"),
        Ok(Credentials { email: "sophie.bluel@test.tld".to_owned(), password: "S0phie".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("a@b.c", " pass word ").unwrap();
    assert_eq!(creds.password, " pass word ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "x"), Err(ValidationError::MissingCredentials));
    assert_eq!(validate_login_input("   ", "x"), Err(ValidationError::MissingCredentials));
    assert_eq!(validate_login_input("a@b.c", ""), Err(ValidationError::MissingCredentials));
}
