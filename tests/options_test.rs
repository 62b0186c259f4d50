use std::path::PathBuf;
use std::time::Duration;

use semantic_harvester::{Options, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
    assert_eq!(options.timeout, Duration::from_secs(10));
    assert_eq!(options.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(options.top_n, 20);
    assert_eq!(options.preview_count, 5);
    assert_eq!(options.sample_chars + options.sample_suffix.chars().count(), 503);
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        stopwords_dir: Some(PathBuf::from("/usr/share/nltk_data/corpora/stopwords")),
        timeout: Duration::from_secs(2),
        ..Options::default()
    };

    assert_eq!(options.timeout, Duration::from_secs(2));
    assert_eq!(options.top_n, 20);
    assert!(options.stopwords_dir.is_some());
}

#[test]
fn user_agent_looks_like_desktop_chrome() {
    assert!(DEFAULT_USER_AGENT.contains("Windows NT 10.0"));
    assert!(DEFAULT_USER_AGENT.contains("Chrome/91.0.4472.124"));
    assert!(!DEFAULT_USER_AGENT.contains('\n'));
}
