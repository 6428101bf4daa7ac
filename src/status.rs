use crate::error::Result;
use crate::ui;
use http_error::{reason_phrase, status_name};

pub fn execute(code: u16) -> Result<()> {
    let name = status_name(code);
    println!("{}", ui::status_label(code, name));
    if reason_phrase(code).is_none() {
        ui::warning_message(&format!(
            "{code} has no standard reason phrase, errors will report it as \"{name}\""
        ));
    }
    Ok(())
}
