use super::*;

#[test]
fn default_config_is_same_origin() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "");
    assert_eq!(config.url(Endpoint::Analyze), "/api/analyze");
    assert_eq!(config.url(Endpoint::Recommend), "/api/recommend");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let config = ApiConfig::from_parts(Some("http://127.0.0.1:8000/"), None, None);
    assert_eq!(config.url(Endpoint::Analyze), "http://127.0.0.1:8000/api/analyze");
}

#[test]
fn paths_get_leading_slash() {
    let config = ApiConfig::from_parts(Some("http://svc"), Some("v2/analyze"), Some("/v2/recommend"));
    assert_eq!(config.url(Endpoint::Analyze), "http://svc/v2/analyze");
    assert_eq!(config.url(Endpoint::Recommend), "http://svc/v2/recommend");
}

#[test]
fn blank_paths_fall_back_to_defaults() {
    let config = ApiConfig::from_parts(None, Some("  "), Some(""));
    assert_eq!(config.analyze_path, DEFAULT_ANALYZE_PATH);
    assert_eq!(config.recommend_path, DEFAULT_RECOMMEND_PATH);
}

#[test]
fn topic_options_are_unique() {
    for (i, a) in TOPIC_OPTIONS.iter().enumerate() {
        for b in &TOPIC_OPTIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
