use glam::DVec2;
use web_sys as web;

/// Client (CSS px) coordinates to canvas backing-store pixels. Shared by the
/// pointer and touch paths, which only differ in where the client coordinates
/// come from.
#[inline]
pub fn client_to_canvas_px(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left();
    let y_css = client_y - rect.top();
    let (w, h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        return DVec2::ZERO;
    }
    DVec2::new(
        x_css / w * canvas.width() as f64,
        y_css / h * canvas.height() as f64,
    )
}
