use std::path::Path;

use crate::method::Method;
use crate::Result;

pub fn embed(
    host: &Path,
    watermark: &Path,
    output: &Path,
    method: Method,
    alpha: Option<f32>,
) -> Result<()> {
    crate::api::embed::prepare()
        .with_host(host)
        .with_watermark(watermark)
        .with_output(output)
        .with_method(method)
        .use_alpha(alpha)
        .execute()
}
