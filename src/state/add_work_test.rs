use super::*;

fn jpeg() -> ImageSelection {
    ImageSelection { name: "loft.jpg".to_owned(), size: 120_000 }
}

fn complete() -> AddWorkForm {
    let mut form = AddWorkForm::default();
    form.set_title("Loft".to_owned());
    form.set_category("1");
    form.select_image(Some(jpeg())).unwrap();
    form
}

// =============================================================
// check_image
// =============================================================

#[test]
fn check_image_accepts_jpg_jpeg_png_any_case() {
    for name in ["a.jpg", "b.jpeg", "c.png", "D.JPG", "e.Png", "my.photo.jpeg"] {
        assert_eq!(check_image(name, 10), Ok(()), "{name}");
    }
}

#[test]
fn check_image_rejects_other_types() {
    for name in ["a.gif", "b.webp", "noext", "c.jpg.exe", ""] {
        assert_eq!(check_image(name, 10), Err(ValidationError::UnsupportedImageType), "{name}");
    }
}

#[test]
fn check_image_enforces_size_limit() {
    assert_eq!(check_image("a.png", MAX_IMAGE_BYTES), Ok(()));
    assert_eq!(check_image("a.png", MAX_IMAGE_BYTES + 1), Err(ValidationError::ImageTooLarge));
}

// =============================================================
// Category select
// =============================================================

#[test]
fn placeholder_category_is_none() {
    assert_eq!(parse_category_value(""), None);
    assert_eq!(parse_category_value("abc"), None);
    assert_eq!(parse_category_value("3"), Some(3));
}

// =============================================================
// Submit gating
// =============================================================

#[test]
fn empty_form_cannot_submit() {
    assert!(!AddWorkForm::default().can_submit());
}

#[test]
fn complete_form_can_submit() {
    assert!(complete().can_submit());
}

#[test]
fn each_missing_field_disables_submit() {
    let mut form = complete();
    form.set_title(String::new());
    assert!(!form.can_submit());
    form.set_title("Loft".to_owned());
    assert!(form.can_submit());

    form.set_category("");
    assert!(!form.can_submit());
    form.set_category("2");
    assert!(form.can_submit());

    form.select_image(None).unwrap();
    assert!(!form.can_submit());
    form.select_image(Some(jpeg())).unwrap();
    assert!(form.can_submit());
}

#[test]
fn whitespace_title_counts_as_empty() {
    let mut form = complete();
    form.set_title("   ".to_owned());
    assert!(!form.can_submit());
    assert_eq!(form.validate(), Err(ValidationError::MissingTitle));
}

#[test]
fn rejected_image_clears_selection_and_disables_submit() {
    let mut form = complete();
    let result = form.select_image(Some(ImageSelection { name: "anim.gif".to_owned(), size: 10 }));
    assert_eq!(result, Err(ValidationError::UnsupportedImageType));
    assert!(form.image.is_none());
    assert_eq!(form.image_error, Some(ValidationError::UnsupportedImageType));
    assert!(!form.can_submit());
}

#[test]
fn valid_image_clears_previous_error() {
    let mut form = AddWorkForm::default();
    let _ = form.select_image(Some(ImageSelection { name: "big.png".to_owned(), size: MAX_IMAGE_BYTES * 2 }));
    assert_eq!(form.image_error, Some(ValidationError::ImageTooLarge));
    form.select_image(Some(jpeg())).unwrap();
    assert!(form.image_error.is_none());
}

#[test]
fn submitting_form_cannot_submit_again() {
    let mut form = complete();
    form.submitting = true;
    assert!(!form.can_submit());
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_builds_trimmed_new_work() {
    let mut form = complete();
    form.set_title("  Loft  ".to_owned());
    assert_eq!(form.validate(), Ok(NewWork { title: "Loft".to_owned(), category_id: 1 }));
}

#[test]
fn validate_reports_first_missing_field() {
    let mut form = AddWorkForm::default();
    assert_eq!(form.validate(), Err(ValidationError::MissingTitle));
    form.set_title("Loft".to_owned());
    assert_eq!(form.validate(), Err(ValidationError::MissingCategory));
    form.set_category("1");
    assert_eq!(form.validate(), Err(ValidationError::MissingImage));
}

// =============================================================
// category_options
// =============================================================

fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_owned() }
}

#[test]
fn category_options_empty_when_nothing_fetched() {
    assert!(category_options(&[]).is_empty());
}

#[test]
fn category_options_follow_fetched_list_not_a_fixed_three() {
    let three = [category(1, "Objets"), category(2, "Appartements"), category(3, "Hotels & restaurants")];
    let four = [three[0].clone(), three[1].clone(), three[2].clone(), category(9, "Jardins")];

    assert_eq!(category_options(&three).len(), 3);
    let options = category_options(&four);
    assert_eq!(options.len(), 4);
    assert_eq!(options[3], ("9".to_owned(), "Jardins".to_owned()));

    for ((value, label), source) in options.iter().zip(&four) {
        assert_eq!(parse_category_value(value), Some(source.id));
        assert_eq!(label, &source.name);
    }
}

#[test]
fn picking_a_fetched_option_sets_the_category() {
    let options = category_options(&[category(9, "Jardins")]);
    let mut form = AddWorkForm::default();
    form.set_category(&options[0].0);
    assert_eq!(form.category_id, Some(9));
}
