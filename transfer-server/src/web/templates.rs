//! Askama templates for the web frontend.

use askama::Template;

use super::dto::TransferForm;

/// Home page with the transfer form and, after a submission, the
/// instructions for it.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station: String,
    pub from_track: String,
    pub to_track: String,
    pub instructions: Vec<String>,
}

impl IndexTemplate {
    /// The empty form.
    pub fn empty() -> Self {
        Self {
            station: String::new(),
            from_track: String::new(),
            to_track: String::new(),
            instructions: Vec::new(),
        }
    }

    /// The form as submitted, with its result.
    pub fn with_result(form: &TransferForm, instructions: Vec<String>) -> Self {
        Self {
            station: form.station.clone(),
            from_track: form.from_track.clone(),
            to_track: form.to_track.clone(),
            instructions,
        }
    }

    /// Whether there is anything to show below the form.
    pub fn has_instructions(&self) -> bool {
        !self.instructions.is_empty()
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
