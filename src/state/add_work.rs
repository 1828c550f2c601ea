//! Add-work form state and client-side validation.
//!
//! DESIGN
//! ======
//! The form only tracks image metadata; the browser `File` handle stays in the
//! component that owns the input. Submission is gated on `can_submit`, and
//! `validate` re-checks the same rules before any request is built.

#[cfg(test)]
#[path = "add_work_test.rs"]
mod add_work_test;

use crate::config::{ACCEPTED_IMAGE_EXTENSIONS, MAX_IMAGE_BYTES};
use crate::error::ValidationError;
use crate::net::types::{Category, NewWork};

/// Metadata of the file picked in the image input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    pub name: String,
    pub size: u64,
}

/// Check an image's extension and size against the upload limits.
///
/// # Errors
///
/// Returns `UnsupportedImageType` for anything but jpg/jpeg/png and
/// `ImageTooLarge` past the size limit.
pub fn check_image(name: &str, size: u64) -> Result<(), ValidationError> {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or(ValidationError::UnsupportedImageType)?;
    if !ACCEPTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ValidationError::UnsupportedImageType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

/// `(value, label)` pairs for the category `<select>`, in fetch order. Values
/// parse back with [`parse_category_value`].
pub fn category_options(categories: &[Category]) -> Vec<(String, String)> {
    categories.iter().map(|c| (c.id.to_string(), c.name.clone())).collect()
}

/// Parse the category `<select>` value; the empty placeholder means "none".
pub fn parse_category_value(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddWorkForm {
    pub title: String,
    pub category_id: Option<i64>,
    pub image: Option<ImageSelection>,
    /// Why the last picked file was rejected, shown under the input.
    pub image_error: Option<ValidationError>,
    pub submitting: bool,
}

impl AddWorkForm {
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_category(&mut self, raw: &str) {
        self.category_id = parse_category_value(raw);
    }

    /// Record the picked file, or clear the selection when `None`.
    ///
    /// # Errors
    ///
    /// A rejected file clears the selection and returns the reason.
    pub fn select_image(&mut self, picked: Option<ImageSelection>) -> Result<(), ValidationError> {
        self.image = None;
        self.image_error = None;
        let Some(picked) = picked else {
            return Ok(());
        };
        if let Err(e) = check_image(&picked.name, picked.size) {
            self.image_error = Some(e);
            return Err(e);
        }
        self.image = Some(picked);
        Ok(())
    }

    /// Title, category, and an accepted image are all present, with no
    /// submit already in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.validate().is_ok()
    }

    /// Build the request fields.
    ///
    /// # Errors
    ///
    /// Returns the first missing field in form order.
    pub fn validate(&self) -> Result<NewWork, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let category_id = self.category_id.ok_or(ValidationError::MissingCategory)?;
        if self.image.is_none() {
            return Err(ValidationError::MissingImage);
        }
        Ok(NewWork { title: title.to_owned(), category_id })
    }
}
