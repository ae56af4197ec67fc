use crate::models::{DateSelection, GeneratedImage};
use crate::proxy::{ModelProxy, RemoteCallFailure};

/// Event lookup, then image generation for that event. The second call
/// needs the first one's output, so they never overlap.
pub async fn run(
    proxy: &ModelProxy,
    selection: &DateSelection,
) -> Result<GeneratedImage, RemoteCallFailure> {
    let event = proxy.lookup_event(selection).await?;
    proxy.generate_image(&event, &selection.year_text()).await
}
