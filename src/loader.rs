//! Fetches the heart asset and turns it into placed geometry.

use crate::core::{HeartMesh, MeshTransform};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url} failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {} {}", resp.status(), resp.status_text());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!("fetch {url}: body unavailable: {:?}", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: reading body failed: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("fetch {url}: body is not text"))
}

/// Download the OBJ at `url` and place its first object upright in view.
pub async fn load_heart(url: &str) -> anyhow::Result<HeartMesh> {
    log::info!("[loader] fetching {}", url);
    let src = fetch_text(url).await?;
    let mesh = HeartMesh::from_obj(&src, &MeshTransform::default())?;
    Ok(mesh)
}
