use crate::error::Result;
use http_error::{Normalizer, NormalizerConfig};
use tracing::debug;

pub fn execute(
    status: Option<u16>,
    name: Option<String>,
    message: Option<String>,
    config: NormalizerConfig,
) -> Result<()> {
    debug!(?status, ?name, ?message, "building HTTP error from explicit parts");

    let normalizer = Normalizer::new(config);
    let err = normalizer.pass_through(status, name.as_deref(), message.as_deref(), None);
    println!("{}", normalizer.render(&err)?);
    Ok(())
}
