use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_USER_ID: &str = "john_smith";

lazy_static! {
    pub static ref API_BASE_URL: String = get_api_base_url();
    /// Identity used for every request. There is no login; the host page decides who we are.
    pub static ref USER_ID: String = get_user_id();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // The hosting page injects `window.ENV_CONFIG` before the bundle loads
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string().filter(|v| !v.trim().is_empty())
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_api_base_url() -> String {
    let url = get_env_var("API_URL").unwrap_or_else(|| {
        log::warn!("API_URL missing, falling back to {}", DEFAULT_API_URL);
        DEFAULT_API_URL.to_string()
    });
    normalize_base_url(&url)
}

pub fn get_user_id() -> String {
    get_env_var("USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Edeo".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

// Paths are joined as `{base}{path}` with `path` always starting at '/'
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://api.example.com/"),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url(" https://api.example.com/v1// "),
            "https://api.example.com/v1"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }
}
