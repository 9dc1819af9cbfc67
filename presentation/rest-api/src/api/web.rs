//! Browser client, compiled into the binary and served from the root path.

use poem::{IntoResponse, handler, web::Html};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");
const STYLES_CSS: &str = include_str!("../../static/styles.css");

#[handler]
pub fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[handler]
pub fn script() -> impl IntoResponse {
    APP_JS.with_content_type("text/javascript; charset=utf-8")
}

#[handler]
pub fn stylesheet() -> impl IntoResponse {
    STYLES_CSS.with_content_type("text/css; charset=utf-8")
}
