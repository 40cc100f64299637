use std::sync::Mutex;

use codecrafts_shared::validation::ContactForm;
use tracing::info;

use super::lock;
use crate::state::AppState;

/// Submit the contact form. Nothing is sent anywhere; a valid submission is
/// acknowledged and the form cleared, an invalid one keeps its fields.
pub fn submit_contact(
    state: &Mutex<AppState>,
    name: &str,
    email: &str,
    message: &str,
) -> Result<bool, String> {
    let mut guard = lock(state)?;
    let form = ContactForm::new(name, email, message);

    if let Err(e) = form.validate() {
        guard.modals.show_notice(e.to_string());
        guard.contact_form = form;
        return Ok(false);
    }

    info!("contact message accepted");
    guard.modals.show_notice(form.acknowledgement());
    guard.contact_form = ContactForm::default();
    Ok(true)
}
