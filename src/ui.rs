use colored::Colorize;
use taxonomy::Kind;

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a labelled value
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label}:").bright_white().bold(), value);
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Kind name colored by its category
pub fn kind_label(kind: Kind) -> String {
    let name = kind.name();
    match kind.category() {
        None => name.bold().to_string(),
        Some(Kind::Input) => name.yellow().to_string(),
        Some(Kind::Database) => name.magenta().to_string(),
        Some(Kind::Auth) => name.red().to_string(),
        Some(_) => name.blue().to_string(),
    }
}

/// Status code colored by class
pub fn status_label(status: u16, status_name: &str) -> String {
    let text = format!("{status} {status_name}");
    match status {
        500.. => text.red().bold().to_string(),
        400..=499 => text.yellow().bold().to_string(),
        _ => text.green().to_string(),
    }
}
