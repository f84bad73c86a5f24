/// Resolves the base URL the contact form posts to.
///
/// The deployed site serves the API from the same origin. During local
/// development Trunk serves the frontend on :8080 while the backend listens
/// on :8000, so same-origin requests would miss it.
pub fn get_backend_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| !origin.contains("localhost:8080") && !origin.contains("127.0.0.1:8080"))
        .unwrap_or_else(|| "http://localhost:8000".to_string())
}
