#[cfg(test)]
mod tests {
    use social_dashboard::config::Config;
    use social_dashboard::hooks::use_analysis::{
        AnalysisAction, AnalysisPhase, AnalysisSession, SessionStatus,
    };
    use social_dashboard::hooks::use_fetch::DataState;
    use social_dashboard::models::{
        analysis::{AnalysisResponse, AnalysisResult, MetricValue},
        error::AppError,
        post::{Post, Posts, is_image_url},
    };
    use std::rc::Rc;
    use yew::functional::Reducible;

    // Helper function to create a post
    fn post(title: &str, url: &str) -> Post {
        Post {
            category: "News".to_string(),
            date: "2024-03-05T10:00:00".to_string(),
            title: title.to_string(),
            url: url.to_string(),
            keywords: "rust, wasm".to_string(),
            description: "A post".to_string(),
        }
    }

    fn create_test_posts() -> Posts {
        Posts::new(vec![
            post("Hello World", "http://x/a.png"),
            post("Rust in the browser", "http://x/b"),
            post("Another HELLO", "http://x/c.JPG"),
            post("Weather report", "http://x/d.html"),
        ])
    }

    fn create_test_result() -> AnalysisResult {
        AnalysisResult {
            polarity: 0.12,
            subjectivity: 0.5,
            word_count: 120,
            complex_words: 10,
            syllable_per_word: 1.45,
            personal_pronouns: 3,
        }
    }

    fn session_after(actions: Vec<AnalysisAction>) -> Rc<AnalysisSession> {
        actions
            .into_iter()
            .fold(Rc::new(AnalysisSession::default()), |s, a| s.reduce(a))
    }

    fn start(request: u64, url: &str) -> AnalysisAction {
        AnalysisAction::Start {
            request,
            url: url.to_string(),
        }
    }

    fn resolve_ok(request: u64, result: AnalysisResult) -> AnalysisAction {
        AnalysisAction::Resolve {
            request,
            outcome: Ok(result),
        }
    }

    fn resolve_err(request: u64) -> AnalysisAction {
        AnalysisAction::Resolve {
            request,
            outcome: Err(AppError::ApiError("Network error: connection refused".to_string())),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");

        let error = AppError::Unprocessable("Failed to extract text from image.".to_string());
        assert_eq!(
            error.to_string(),
            "Unprocessable content: Failed to extract text from image."
        );
    }

    // ===== Post Model Tests =====

    #[test]
    fn test_posts_deserialization_with_server_keys() {
        let json = r#"[
            {
                "Category": "Tech",
                "Date": "2024-01-15",
                "Title": "Hello World",
                "URL": "http://x/a.png",
                "Keywords": "hello",
                "Description": "First post"
            }
        ]"#;

        let posts: Posts = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 1);

        let first = posts.iter().next().unwrap();
        assert_eq!(first.title, "Hello World");
        assert_eq!(first.url, "http://x/a.png");
        assert_eq!(first.category, "Tech");
    }

    #[test]
    fn test_posts_deserialization_rejects_wrong_shape() {
        let missing_url = r#"[{"Category": "Tech", "Date": "", "Title": "t", "Keywords": "", "Description": ""}]"#;
        assert!(serde_json::from_str::<Posts>(missing_url).is_err());

        let not_an_array = r#"{"results": []}"#;
        assert!(serde_json::from_str::<Posts>(not_an_array).is_err());
    }

    #[test]
    fn test_filter_empty_term_keeps_everything() {
        let posts = create_test_posts();
        let filtered = posts.filter("");
        assert_eq!(filtered, posts.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_order_preserving() {
        let posts = create_test_posts();
        let filtered = posts.filter("hello");

        let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Hello World", "Another HELLO"]);
        assert!(filtered.iter().all(|p| p.matches("HeLLo")));
    }

    #[test]
    fn test_filter_matches_title_only() {
        let posts = create_test_posts();

        // "rust" appears in every post's keywords but only one title
        let filtered = posts.filter("rust");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].url, "http://x/b");

        // URL text is never searched
        assert!(posts.filter("x/d").is_empty());
    }

    #[test]
    fn test_scenario_single_post_then_no_match() {
        let posts = Posts::new(vec![post("Hello World", "http://x/a.png")]);

        let visible = posts.filter("");
        assert_eq!(visible.len(), 1);
        assert!(visible[0].has_image());

        assert!(posts.filter("zzz").is_empty());
    }

    #[test]
    fn test_empty_notice_distinguishes_empty_collection() {
        let empty = Posts::new(vec![]);
        assert!(empty.filter("").is_empty());
        assert_eq!(empty.empty_notice(), "No posts available.");

        let posts = create_test_posts();
        assert!(posts.filter("zzz").is_empty());
        assert_eq!(posts.empty_notice(), "No posts match your search.");
    }

    #[test]
    fn test_identity_keys_are_unique() {
        let posts = create_test_posts();
        assert_eq!(posts.first_duplicate_url(), None);

        let duplicated = Posts::new(vec![
            post("One", "http://x/a"),
            post("Two", "http://x/b"),
            post("Three", "http://x/a"),
        ]);
        assert_eq!(duplicated.first_duplicate_url(), Some("http://x/a"));
    }

    #[test]
    fn test_image_url_detection() {
        assert!(is_image_url("http://x/a.png"));
        assert!(is_image_url("http://x/a.JPG"));
        assert!(is_image_url("http://x/a.jpeg"));
        assert!(is_image_url("http://x/a.gif"));
        assert!(!is_image_url("http://x/article.html"));
        assert!(!is_image_url("http://x/png"));
        assert!(!is_image_url("http://x/a.png?size=large"));
    }

    #[test]
    fn test_display_date_formats() {
        let mut p = post("t", "u");
        assert_eq!(p.display_date(), "Mar 5, 2024");

        p.date = "2024-03-05T10:00:00Z".to_string();
        assert_eq!(p.display_date(), "Mar 5, 2024");

        p.date = "2023-12-31".to_string();
        assert_eq!(p.display_date(), "Dec 31, 2023");

        p.date = "yesterday".to_string();
        assert_eq!(p.display_date(), "yesterday");
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_settles_exclusively() {
        let loading: DataState<Posts> = DataState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());
        assert!(loading.error().is_none());

        let loaded = DataState::from_result(Ok(create_test_posts()));
        assert!(!loaded.is_loading());
        assert_eq!(loaded.data().unwrap().len(), 4);
        assert!(loaded.error().is_none());

        let failed: DataState<Posts> =
            DataState::from_result(Err(AppError::ApiError("Network error: offline".to_string())));
        assert!(!failed.is_loading());
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some("API error: Network error: offline"));
    }

    #[test]
    fn test_abandoned_load_is_dropped() {
        let dropped: Option<DataState<Posts>> = DataState::settle(true, Ok(create_test_posts()));
        assert!(dropped.is_none());

        let dropped: Option<DataState<Posts>> =
            DataState::settle(true, Err(AppError::ApiError("Network error: aborted".to_string())));
        assert!(dropped.is_none());

        let settled = DataState::settle(false, Ok(create_test_posts())).unwrap();
        assert_eq!(settled.data().unwrap().len(), 4);

        let settled: DataState<Posts> =
            DataState::settle(false, Err(AppError::NotFound("gone".to_string()))).unwrap();
        assert_eq!(settled.error(), Some("Not found: gone"));
    }

    #[test]
    fn test_data_state_equality() {
        let state1: DataState<Posts> = DataState::Loaded(Rc::new(create_test_posts()));
        let state2: DataState<Posts> = DataState::Loaded(Rc::new(create_test_posts()));
        assert_eq!(state1, state2);

        let state3: DataState<Posts> = DataState::Error("Test error".to_string());
        assert_ne!(state1, state3);
    }

    // ===== Analysis Model Tests =====

    #[test]
    fn test_analysis_response_deserialization() {
        let json = r#"{
            "status": "success",
            "source": "url",
            "results": {
                "polarity": 0.123,
                "subjectivity": 0.5,
                "word_count": 120,
                "complex_words": 10,
                "syllable_per_word": 1.452,
                "personal_pronouns": 3
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.source.as_deref(), Some("url"));
        assert_eq!(response.results.word_count, 120);

        let bare = r#"{"results": {"polarity": 0, "subjectivity": 0, "word_count": 0,
            "complex_words": 0, "syllable_per_word": 0, "personal_pronouns": 0}}"#;
        let response: AnalysisResponse = serde_json::from_str(bare).unwrap();
        assert!(response.status.is_none());

        assert!(serde_json::from_str::<AnalysisResponse>(r#"{"status": "success"}"#).is_err());
    }

    #[test]
    fn test_metrics_order_and_formatting() {
        let metrics = create_test_result().metrics();

        let labels: Vec<&str> = metrics.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Polarity",
                "Subjectivity",
                "Word Count",
                "Complex Words",
                "Syllables/Word",
                "Pronouns"
            ]
        );

        let values: Vec<String> = metrics.iter().map(|m| m.value.to_string()).collect();
        assert_eq!(values, vec!["0.12", "0.50", "120", "10", "1.45", "3"]);
    }

    #[test]
    fn test_metric_value_plotting() {
        assert_eq!(MetricValue::Score(0.456).as_f64(), 0.46);
        assert_eq!(MetricValue::Count(42).as_f64(), 42.0);
        assert_eq!(MetricValue::Score(-0.3).to_string(), "-0.30");
    }

    // ===== Analysis Session Tests =====

    #[test]
    fn test_session_starts_closed() {
        let session = AnalysisSession::default();
        assert_eq!(session.status(), SessionStatus::Closed);
        assert!(session.result().is_none());
        assert!(session.metrics().is_none());
    }

    #[test]
    fn test_analyze_opens_loading() {
        let session = session_after(vec![start(1, "http://x/a.png")]);
        assert_eq!(session.status(), SessionStatus::Loading);
        assert!(session.is_loading());
        assert_eq!(session.url(), Some("http://x/a.png"));
    }

    #[test]
    fn test_scenario_analysis_success() {
        let session = session_after(vec![
            start(1, "http://x/a.png"),
            resolve_ok(1, create_test_result()),
        ]);

        assert_eq!(session.status(), SessionStatus::Result);
        assert!(!session.is_loading());

        let metrics = session.metrics().unwrap();
        assert_eq!(metrics.len(), 6);
        assert_eq!(metrics[0].label, "Polarity");
        assert_eq!(metrics[0].value.to_string(), "0.12");
        assert_eq!(metrics[2].label, "Word Count");
        assert_eq!(metrics[2].value.to_string(), "120");
    }

    #[test]
    fn test_scenario_analysis_failure_shows_generic_message() {
        let session = session_after(vec![start(1, "http://x/a.png"), resolve_err(1)]);

        assert_eq!(session.status(), SessionStatus::Error);
        assert_eq!(session.error(), Some(Config::ANALYSIS_ERROR_MESSAGE));
        assert!(session.result().is_none());
        // Panel stays open for a retry
        assert!(session.is_open());
    }

    #[test]
    fn test_scenario_close_then_reopen_clears_previous_outcome() {
        let session = session_after(vec![
            start(1, "http://x/a.png"),
            resolve_ok(1, create_test_result()),
            AnalysisAction::Close,
        ]);
        assert_eq!(session.status(), SessionStatus::Closed);

        let session = session.reduce(start(2, "http://x/b"));
        assert_eq!(session.status(), SessionStatus::Loading);
        assert!(session.result().is_none());
        assert!(session.error().is_none());

        let session = session_after(vec![start(1, "u"), resolve_err(1), start(2, "v")]);
        assert_eq!(*session.phase(), AnalysisPhase::Loading);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let newer = AnalysisResult {
            word_count: 999,
            ..create_test_result()
        };

        // Second request settles first, then the slow first one arrives
        let session = session_after(vec![
            start(1, "http://x/slow"),
            start(2, "http://x/fast"),
            resolve_ok(2, newer.clone()),
            resolve_ok(1, create_test_result()),
        ]);

        assert_eq!(session.status(), SessionStatus::Result);
        assert_eq!(session.result().unwrap().word_count, 999);
        assert_eq!(session.url(), Some("http://x/fast"));

        // A stale failure must not clobber a pending newer request either
        let session = session_after(vec![start(1, "a"), start(2, "b"), resolve_err(1)]);
        assert_eq!(session.status(), SessionStatus::Loading);
        assert_eq!(session.latest_request(), 2);
    }

    #[test]
    fn test_response_after_close_is_applied_while_closed() {
        let session = session_after(vec![
            start(1, "http://x/a.png"),
            AnalysisAction::Close,
            resolve_ok(1, create_test_result()),
        ]);

        assert!(!session.is_open());
        assert_eq!(session.status(), SessionStatus::Closed);
        assert!(session.result().is_some());
    }

    #[test]
    fn test_close_from_any_state() {
        for actions in [
            vec![AnalysisAction::Close],
            vec![start(1, "u"), AnalysisAction::Close],
            vec![start(1, "u"), resolve_err(1), AnalysisAction::Close],
        ] {
            assert_eq!(session_after(actions).status(), SessionStatus::Closed);
        }
    }
}
