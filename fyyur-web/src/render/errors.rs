//! Error pages

use super::layout;

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        &[],
        r#"<h1>404</h1><p>Not found. <a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        &[],
        r#"<h1>500</h1><p>Something went wrong on our end. <a href="/">Back home</a></p>"#,
    )
}
