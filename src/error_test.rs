use super::*;

#[test]
fn api_error_codes_are_distinct() {
    let codes = [
        ApiError::Transport("x".to_owned()).error_code(),
        ApiError::Status(500).error_code(),
        ApiError::Decode("y".to_owned()).error_code(),
        ApiError::Unavailable.error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn status_error_display_includes_code() {
    assert_eq!(ApiError::Status(403).to_string(), "server responded with status 403");
}

#[test]
fn validation_error_displays_user_prompt() {
    assert_eq!(ValidationError::MissingTitle.to_string(), "Veuillez saisir un titre");
}
