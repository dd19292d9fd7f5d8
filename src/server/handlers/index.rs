//! Form page handler.

use axum::response::Html;

use super::super::render::render_page;
use super::super::types::PageView;

/// `GET /` - the empty URL form
pub async fn index_handler() -> Html<String> {
    Html(render_page(&PageView::Blank))
}
