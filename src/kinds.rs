use crate::error::Result;
use crate::ui;
use taxonomy::Kind;

pub fn execute() -> Result<()> {
    ui::section_header("Serious error kinds");
    print_subtree(Kind::ROOT);
    Ok(())
}

fn print_subtree(kind: Kind) {
    let indent = "  ".repeat(kind.depth());
    println!("{indent}{}", ui::kind_label(kind));
    for child in kind.children() {
        print_subtree(child);
    }
}
