//! API endpoint resolution: `--api-url` flag, then the environment,
//! then a local development default.

pub const API_URL_ENV: &str = "TASK_ADMIN_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub fn resolve_api_url(flag: Option<&str>) -> String {
    resolve_from(flag, std::env::var(API_URL_ENV).ok())
}

fn resolve_from(flag: Option<&str>, env: Option<String>) -> String {
    if let Some(url) = flag {
        if !url.trim().is_empty() {
            return url.to_string();
        }
    }
    match env {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let url = resolve_from(Some("http://flag:9000"), Some("http://env:9001".into()));
        assert_eq!(url, "http://flag:9000");
    }

    #[test]
    fn environment_wins_over_default() {
        let url = resolve_from(None, Some("http://env:9001".into()));
        assert_eq!(url, "http://env:9001");
    }

    #[test]
    fn falls_back_to_loopback_default() {
        assert_eq!(resolve_from(None, None), DEFAULT_API_URL);
        assert_eq!(resolve_from(Some(""), Some("  ".into())), DEFAULT_API_URL);
    }
}
