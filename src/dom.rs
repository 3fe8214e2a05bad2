use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the drawing buffer at CSS size * devicePixelRatio so the effect
/// stays crisp on high-DPI screens. The pointer transform absorbs the
/// resulting CSS-vs-buffer scale.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Look up an `<img>` by id, wait for it to be decoded, and turn it into a
/// repeating fill pattern for the given context.
pub async fn load_pattern(
    ctx: &web::CanvasRenderingContext2d,
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::CanvasPattern> {
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
    let image: web::HtmlImageElement = element
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{} is not an image: {:?}", element_id, e))?;
    JsFuture::from(image.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode #{}: {:?}", element_id, e))?;
    ctx.create_pattern_with_html_image_element(&image, "repeat")
        .map_err(|e| anyhow::anyhow!("pattern from #{}: {:?}", element_id, e))?
        .ok_or_else(|| anyhow::anyhow!("pattern unavailable for #{}", element_id))
}
