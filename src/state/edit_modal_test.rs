use super::*;
use crate::state::add_work::ImageSelection;

// =============================================================
// Helpers
// =============================================================

fn work(id: i64, title: &str) -> Work {
    Work { id, title: title.to_owned(), image_url: format!("/images/{id}.png"), category_id: 1 }
}

fn listed() -> EditModalState {
    let mut modal = EditModalState::default();
    assert!(modal.open());
    modal.apply_works(Ok(vec![work(7, "Abajour"), work(8, "Loft"), work(9, "Bar")]));
    modal
}

fn filled_form(modal: &mut EditModalState) {
    modal.show_add_form();
    modal.form.set_title("Loft".to_owned());
    modal.form.set_category("1");
    modal
        .form
        .select_image(Some(ImageSelection { name: "loft.jpg".to_owned(), size: 2048 }))
        .unwrap();
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn default_is_closed() {
    let modal = EditModalState::default();
    assert_eq!(modal.pane, ModalPane::Closed);
    assert!(!modal.is_open());
}

#[test]
fn open_enters_list_view_loading() {
    let mut modal = EditModalState::default();
    assert!(modal.open());
    assert_eq!(modal.pane, ModalPane::ListView);
    assert!(modal.loading);
    assert!(modal.works.is_empty());
}

#[test]
fn reopen_while_open_is_noop() {
    let mut modal = listed();
    filled_form(&mut modal);
    assert!(!modal.open());
    assert_eq!(modal.pane, ModalPane::AddForm);
    assert_eq!(modal.form.title, "Loft");
    assert_eq!(modal.works.len(), 3);
}

#[test]
fn close_resets_everything() {
    let mut modal = listed();
    filled_form(&mut modal);
    modal.close();
    assert_eq!(modal.pane, ModalPane::Closed);
    assert!(modal.works.is_empty());
    assert_eq!(modal.form, AddWorkForm::default());
}

#[test]
fn reopen_after_close_starts_fresh() {
    let mut modal = listed();
    modal.close();
    assert!(modal.open());
    assert!(modal.works.is_empty());
    assert!(modal.loading);
}

// =============================================================
// Works fetch
// =============================================================

#[test]
fn apply_works_fills_list() {
    let modal = listed();
    assert!(!modal.loading);
    assert_eq!(modal.works.iter().map(|w| w.id).collect::<Vec<_>>(), vec![7, 8, 9]);
}

#[test]
fn apply_works_failure_sets_list_error() {
    let mut modal = EditModalState::default();
    modal.open();
    modal.apply_works(Err(ApiError::Transport("offline".to_owned())));
    assert!(!modal.loading);
    assert!(modal.list_error.is_some());
}

#[test]
fn late_fetch_after_close_is_dropped() {
    let mut modal = EditModalState::default();
    modal.open();
    modal.close();
    modal.apply_works(Ok(vec![work(1, "late")]));
    assert!(modal.works.is_empty());
    assert!(!modal.is_open());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_success_removes_only_that_item() {
    let mut modal = listed();
    assert!(modal.begin_delete(8));
    assert!(modal.is_deleting(8));
    assert!(modal.apply_delete(8, &Ok(())));
    assert!(!modal.is_deleting(8));
    assert_eq!(modal.works.iter().map(|w| w.id).collect::<Vec<_>>(), vec![7, 9]);
}

#[test]
fn delete_failure_keeps_item() {
    let mut modal = listed();
    assert!(modal.begin_delete(7));
    assert!(!modal.apply_delete(7, &Err(ApiError::Status(403))));
    assert!(modal.works.iter().any(|w| w.id == 7));
    assert!(!modal.is_deleting(7));
}

#[test]
fn delete_in_flight_is_not_reissued() {
    let mut modal = listed();
    assert!(modal.begin_delete(9));
    assert!(!modal.begin_delete(9));
}

#[test]
fn delete_unknown_id_is_rejected() {
    let mut modal = listed();
    assert!(!modal.begin_delete(42));
}

// =============================================================
// Pane navigation
// =============================================================

#[test]
fn add_form_then_back_discards_fields_without_refetch() {
    let mut modal = listed();
    filled_form(&mut modal);
    assert_eq!(modal.pane, ModalPane::AddForm);
    modal.back_to_list();
    assert_eq!(modal.pane, ModalPane::ListView);
    assert_eq!(modal.form, AddWorkForm::default());
    assert!(!modal.loading);
    assert_eq!(modal.works.len(), 3);
}

#[test]
fn show_add_form_ignored_when_closed() {
    let mut modal = EditModalState::default();
    modal.show_add_form();
    assert_eq!(modal.pane, ModalPane::Closed);
}

#[test]
fn back_to_list_ignored_on_list_view() {
    let mut modal = listed();
    modal.back_to_list();
    assert_eq!(modal.pane, ModalPane::ListView);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn begin_submit_rejects_incomplete_form() {
    let mut modal = listed();
    modal.show_add_form();
    modal.form.set_title("Loft".to_owned());
    assert_eq!(modal.begin_submit(), Err(ValidationError::MissingCategory));
    assert!(!modal.form.submitting);
}

#[test]
fn begin_submit_marks_in_flight_once() {
    let mut modal = listed();
    filled_form(&mut modal);
    assert_eq!(
        modal.begin_submit(),
        Ok(Some(NewWork { title: "Loft".to_owned(), category_id: 1 }))
    );
    assert!(modal.form.submitting);
    assert!(!modal.form.can_submit());
    assert_eq!(modal.begin_submit(), Ok(None));
}

#[test]
fn begin_submit_outside_add_form_does_nothing() {
    let mut modal = listed();
    assert_eq!(modal.begin_submit(), Ok(None));
}

#[test]
fn submit_success_closes() {
    let mut modal = listed();
    filled_form(&mut modal);
    modal.begin_submit().unwrap();
    modal.apply_submit(&Ok(()));
    assert_eq!(modal.pane, ModalPane::Closed);
}

#[test]
fn submit_failure_stays_on_form_and_allows_retry() {
    let mut modal = listed();
    filled_form(&mut modal);
    modal.begin_submit().unwrap();
    modal.apply_submit(&Err(ApiError::Status(500)));
    assert_eq!(modal.pane, ModalPane::AddForm);
    assert!(!modal.form.submitting);
    assert_eq!(modal.form.title, "Loft");
    assert!(modal.form.can_submit());
}
