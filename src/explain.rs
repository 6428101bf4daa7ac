use crate::error::{Result, ResultExt};
use crate::ui;
use http_error::{HttpError, Normalizer, NormalizerConfig};
use taxonomy::{Kind, SeriousError};
use tracing::debug;

pub fn execute(name: &str, config: NormalizerConfig) -> Result<()> {
    let kind: Kind = name
        .parse()
        .with_context(|| format!("Cannot explain '{name}'"))?;
    debug!(kind = kind.name(), "explaining kind");

    ui::section_header(kind.name());
    let lineage: Vec<String> = kind.lineage().map(ui::kind_label).collect();
    ui::field("Lineage", &lineage.join(" -> "));
    let children: Vec<&str> = kind.children().map(Kind::name).collect();
    if !children.is_empty() {
        ui::field("Subkinds", &children.join(", "));
    }

    let normalizer = Normalizer::new(config);
    let err = sample(kind).normalize_with(&normalizer);
    ui::field("Responds with", &ui::status_label(err.status(), err.status_name()));

    ui::section_header("Example body");
    println!("{}", normalizer.render(&err)?);
    Ok(())
}

/// A representative instance of `kind` as a handler would raise it.
fn sample(kind: Kind) -> Sample {
    match kind {
        Kind::NotFound => Sample::Http(HttpError::not_found("/example", "GET")),
        Kind::MethodNotAllowed => {
            Sample::Http(HttpError::method_not_allowed("/example", "DELETE", &["POST"]))
        }
        Kind::Http | Kind::HttpRequest | Kind::HttpResponse => {
            Sample::Http(
                HttpError::builder(500)
                    .kind(kind)
                    .message(format!("Example {}", kind.name()))
                    .build(),
            )
        }
        Kind::ItemNotFound => Sample::Serious(SeriousError::item_not_found(None)),
        Kind::Authentication => Sample::Serious(SeriousError::authentication()),
        Kind::Authorization => Sample::Serious(SeriousError::authorization()),
        _ => Sample::Serious(SeriousError::new(kind, format!("Example {}", kind.name()))),
    }
}

enum Sample {
    Http(HttpError),
    Serious(SeriousError),
}

impl Sample {
    fn normalize_with(self, normalizer: &Normalizer) -> HttpError {
        match self {
            Sample::Http(err) => normalizer.normalize(&err.without_stack()),
            Sample::Serious(err) => normalizer.normalize(&err.without_stack()),
        }
    }
}
