#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000" // backend's default bind address
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // served by the backend itself
}

pub fn register_endpoint() -> String {
    format!("{}/api/register", get_backend_url())
}
