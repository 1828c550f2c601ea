use super::*;

#[test]
fn no_token_is_visitor() {
    let session = SessionState::from_token(None);
    assert!(!session.is_admin());
    assert_eq!(session.experience(), Experience::Visitor);
    assert!(session.token().is_none());
}

#[test]
fn empty_token_counts_as_absent() {
    let session = SessionState::from_token(Some(String::new()));
    assert!(!session.is_admin());
}

#[test]
fn stored_token_is_admin() {
    let session = SessionState::from_token(Some("eyJhbGciOi".to_owned()));
    assert!(session.is_admin());
    assert_eq!(session.token(), Some("eyJhbGciOi"));
    assert_eq!(session.experience(), Experience::Admin);
}

#[test]
fn filter_bar_and_edit_entry_are_mutually_exclusive() {
    for token in [None, Some(String::new()), Some("t".to_owned())] {
        let experience = SessionState::from_token(token).experience();
        assert_ne!(experience.shows_filter_bar(), experience.shows_edit_entry());
    }
}

#[test]
fn visitor_shows_filter_bar_admin_shows_edit_entry() {
    assert!(Experience::Visitor.shows_filter_bar());
    assert!(!Experience::Visitor.shows_edit_entry());
    assert!(Experience::Admin.shows_edit_entry());
    assert!(!Experience::Admin.shows_filter_bar());
}

#[cfg(not(feature = "csr"))]
#[test]
fn is_admin_false_without_browser_storage() {
    assert!(!is_admin());
}
