use web_sys::window;

/// Resolve the origin the game server is reachable on. The client is served
/// by the same process that owns /check-word and /post-score, so the current
/// location works when the app is accessed from another machine too.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default for local development
    "http://127.0.0.1:3000".to_string()
}
