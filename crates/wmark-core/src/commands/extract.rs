use std::path::Path;

use crate::method::Method;
use crate::Result;

pub fn extract(
    marked: &Path,
    reference: Option<&Path>,
    output: &Path,
    method: Method,
    alpha: Option<f32>,
) -> Result<()> {
    crate::api::extract::prepare()
        .with_marked(marked)
        .use_reference(reference)
        .with_output(output)
        .with_method(method)
        .use_alpha(alpha)
        .execute()
}
