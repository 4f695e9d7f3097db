use super::*;

fn generated(code: &str) -> Result<GenerateAppResponse, String> {
    Ok(GenerateAppResponse { code: Some(code.to_owned()) })
}

fn suggested(features: &[&str]) -> Result<SuggestFeaturesResponse, String> {
    Ok(SuggestFeaturesResponse { features: Some(features.iter().map(|f| (*f).to_owned()).collect()) })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_starts_with_one_blank_feature() {
    let form = FormState::new();
    assert_eq!(form.app_name(), "");
    assert_eq!(form.app_description(), "");
    assert_eq!(form.feature_list(), &[String::new()]);
    assert_eq!(form.generated_code(), "");
    assert_eq!(form.platform(), Platform::Vercel);
    assert!(form.last_failure().is_none());
    assert!(!form.is_pending(Action::GenerateApp));
    assert!(!form.is_pending(Action::SuggestFeatures));
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn set_app_name_and_description_round_trip() {
    let mut form = FormState::new();
    for text in ["", "Todo", "multi\nline ✓"] {
        form.set_app_name(text);
        form.set_app_description(text);
        assert_eq!(form.app_name(), text);
        assert_eq!(form.app_description(), text);
    }
}

#[test]
fn add_feature_appends_exactly_one_blank() {
    let mut form = FormState::new();
    form.update_feature(0, "Login").unwrap();
    form.add_feature();
    assert_eq!(form.feature_list(), &["Login".to_owned(), String::new()]);
    form.add_feature();
    assert_eq!(form.feature_list().len(), 3);
    assert_eq!(form.feature_list()[2], "");
}

#[test]
fn update_feature_changes_only_target_index() {
    let mut form = FormState::new();
    form.load_template("Blog");
    form.update_feature(1, "Draft posts").unwrap();
    assert_eq!(form.feature_list(), &["Create posts", "Draft posts", "Comment system"]);
}

#[test]
fn update_feature_out_of_range_is_rejected_without_change() {
    let mut form = FormState::new();
    let err = form.update_feature(1, "nope").unwrap_err();
    assert_eq!(err, FormError::FeatureIndexOutOfRange { index: 1, len: 1 });
    assert_eq!(form.feature_list(), &[String::new()]);
}

// =============================================================
// Templates
// =============================================================

#[test]
fn load_template_blog_overwrites_fields() {
    let mut form = FormState::new();
    form.set_app_name("old");
    form.add_feature();
    assert!(form.load_template("Blog"));
    assert_eq!(form.app_name(), "My Blog");
    assert_eq!(form.app_description(), "A blogging platform to share posts and articles.");
    assert_eq!(form.feature_list(), &["Create posts", "Edit posts", "Comment system"]);
}

#[test]
fn load_template_unknown_leaves_form_unchanged() {
    let mut form = FormState::new();
    form.set_app_name("Mine");
    form.set_app_description("Desc");
    form.update_feature(0, "F").unwrap();
    assert!(!form.load_template("Unknown"));
    assert!(!form.load_template(""));
    assert_eq!(form.app_name(), "Mine");
    assert_eq!(form.app_description(), "Desc");
    assert_eq!(form.feature_list(), &["F"]);
}

#[test]
fn load_template_does_not_touch_code_or_platform() {
    let mut form = FormState::new();
    form.set_platform(Platform::Aws);
    let pending = form.begin_generate();
    let _ = form.finish_generate(pending.token, generated("x"));
    form.load_template("ECommerce");
    assert_eq!(form.generated_code(), "x");
    assert_eq!(form.platform(), Platform::Aws);
}

// =============================================================
// Platform
// =============================================================

#[test]
fn netlify_steps_unaffected_by_other_state() {
    let mut form = FormState::new();
    form.load_template("Blog");
    form.add_feature();
    form.set_platform(Platform::Netlify);
    assert_eq!(form.deployment_steps(), Platform::Netlify.steps());
    assert_eq!(form.deployment_steps().len(), 4);
    assert_eq!(form.deployment_steps()[0], "Sign up or log in to Netlify.");
}

// =============================================================
// Generate adapter
// =============================================================

#[test]
fn begin_generate_snapshots_full_feature_list() {
    let mut form = FormState::new();
    form.set_app_name("Todo");
    form.set_app_description("Tasks");
    form.add_feature();
    let pending = form.begin_generate();
    assert_eq!(pending.request.app_name, "Todo");
    assert_eq!(pending.request.app_description, "Tasks");
    assert_eq!(pending.request.feature_list, vec![String::new(), String::new()]);
    assert!(form.is_pending(Action::GenerateApp));
}

#[test]
fn finish_generate_sets_code() {
    let mut form = FormState::new();
    let pending = form.begin_generate();
    assert_eq!(form.finish_generate(pending.token, generated("print('x')")), Outcome::Applied);
    assert_eq!(form.generated_code(), "print('x')");
    assert!(!form.is_pending(Action::GenerateApp));
}

#[test]
fn finish_generate_missing_code_becomes_empty() {
    let mut form = FormState::new();
    let first = form.begin_generate();
    let _ = form.finish_generate(first.token, generated("old"));
    let second = form.begin_generate();
    let outcome = form.finish_generate::<String>(second.token, Ok(GenerateAppResponse { code: None }));
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(form.generated_code(), "");
}

#[test]
fn edits_after_begin_do_not_affect_result() {
    let mut form = FormState::new();
    let pending = form.begin_generate();
    form.add_feature();
    form.set_app_name("changed");
    let _ = form.finish_generate(pending.token, generated("code"));
    assert_eq!(form.generated_code(), "code");
    assert_eq!(form.feature_list().len(), 2);
    assert_eq!(form.app_name(), "changed");
}

#[test]
fn failed_generate_keeps_prior_code_and_records_failure() {
    let mut form = FormState::new();
    let ok = form.begin_generate();
    let _ = form.finish_generate(ok.token, generated("kept"));
    let bad = form.begin_generate();
    let outcome = form.finish_generate::<&str>(bad.token, Err("connection refused"));
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(form.generated_code(), "kept");
    assert_eq!(
        form.last_failure(),
        Some(&ActionFailure { action: Action::GenerateApp, message: "connection refused".into() })
    );
    assert!(!form.is_pending(Action::GenerateApp));
}

#[test]
fn overlapping_generate_calls_latest_issued_wins() {
    let mut form = FormState::new();
    let first = form.begin_generate();
    let second = form.begin_generate();
    assert_eq!(form.finish_generate(second.token, generated("second")), Outcome::Applied);
    assert_eq!(form.finish_generate(first.token, generated("first")), Outcome::Stale);
    assert_eq!(form.generated_code(), "second");
}

#[test]
fn stale_failure_is_not_recorded() {
    let mut form = FormState::new();
    let first = form.begin_generate();
    let second = form.begin_generate();
    assert_eq!(form.finish_generate::<&str>(first.token, Err("timeout")), Outcome::Stale);
    assert!(form.last_failure().is_none());
    assert!(form.is_pending(Action::GenerateApp));
    let _ = form.finish_generate(second.token, generated("ok"));
    assert!(!form.is_pending(Action::GenerateApp));
}

// =============================================================
// Suggest adapter
// =============================================================

#[test]
fn begin_suggest_sends_description_only() {
    let mut form = FormState::new();
    form.set_app_name("ignored");
    form.set_app_description("A recipe site");
    let pending = form.begin_suggest();
    assert_eq!(pending.request.app_description, "A recipe site");
    assert!(form.is_pending(Action::SuggestFeatures));
    assert!(!form.is_pending(Action::GenerateApp));
}

#[test]
fn finish_suggest_replaces_feature_list() {
    let mut form = FormState::new();
    form.load_template("Blog");
    let pending = form.begin_suggest();
    assert_eq!(form.finish_suggest(pending.token, suggested(&["A", "B"])), Outcome::Applied);
    assert_eq!(form.feature_list(), &["A", "B"]);
}

#[test]
fn finish_suggest_without_features_resets_to_single_blank() {
    let mut form = FormState::new();
    form.load_template("Blog");
    let pending = form.begin_suggest();
    let _ = form.finish_suggest::<String>(pending.token, Ok(SuggestFeaturesResponse::default()));
    assert_eq!(form.feature_list(), &[String::new()]);
}

#[test]
fn failed_suggest_keeps_features() {
    let mut form = FormState::new();
    form.load_template("ECommerce");
    let pending = form.begin_suggest();
    assert_eq!(form.finish_suggest::<&str>(pending.token, Err("bad json")), Outcome::Failed);
    assert_eq!(form.feature_list(), &["Product catalog", "Shopping cart", "Checkout system"]);
    assert_eq!(form.last_failure().map(|f| f.action), Some(Action::SuggestFeatures));
}

#[test]
fn success_clears_failure_only_for_same_action() {
    let mut form = FormState::new();
    let gen_call = form.begin_generate();
    let _ = form.finish_generate::<&str>(gen_call.token, Err("down"));

    let suggest = form.begin_suggest();
    let _ = form.finish_suggest(suggest.token, suggested(&["A"]));
    assert_eq!(form.last_failure().map(|f| f.action), Some(Action::GenerateApp));

    let retry = form.begin_generate();
    let _ = form.finish_generate(retry.token, generated("ok"));
    assert!(form.last_failure().is_none());
}

#[test]
fn adapter_sequences_are_independent() {
    let mut form = FormState::new();
    let generate = form.begin_generate();
    let suggest = form.begin_suggest();
    assert_eq!(form.finish_suggest(suggest.token, suggested(&["X"])), Outcome::Applied);
    assert_eq!(form.finish_generate(generate.token, generated("code")), Outcome::Applied);
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn feature_list_never_empty_across_operation_mix() {
    let mut form = FormState::new();
    let check = |form: &FormState| assert!(!form.feature_list().is_empty());

    form.add_feature();
    check(&form);
    let _ = form.update_feature(5, "x");
    check(&form);
    form.load_template("Blog");
    check(&form);
    let pending = form.begin_suggest();
    let _ = form.finish_suggest::<String>(pending.token, Ok(SuggestFeaturesResponse { features: Some(vec![]) }));
    check(&form);
    let pending = form.begin_suggest();
    let _ = form.finish_suggest::<&str>(pending.token, Err("boom"));
    check(&form);
    form.load_template("Unknown");
    check(&form);
}

#[test]
fn snapshot_serializes_view_fields_only() {
    let mut form = FormState::new();
    form.load_template("Blog");
    form.set_platform(Platform::Aws);
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["appName"], "My Blog");
    assert_eq!(value["featureList"][2], "Comment system");
    assert_eq!(value["platform"], "AWS");
    assert_eq!(value["generatedCode"], "");
    assert!(value["lastFailure"].is_null());
    assert!(value.get("generateSeq").is_none());
}

#[test]
fn replayed_generate_token_is_stale() {
    let mut form = FormState::new();
    let pending = form.begin_generate();
    assert_eq!(form.finish_generate(pending.token, generated("a")), Outcome::Applied);
    assert_eq!(form.finish_generate(pending.token, generated("b")), Outcome::Stale);
    assert_eq!(form.generated_code(), "a");
}

#[test]
fn replayed_suggest_token_is_stale() {
    let mut form = FormState::new();
    let pending = form.begin_suggest();
    assert_eq!(form.finish_suggest(pending.token, suggested(&["A"])), Outcome::Applied);
    assert_eq!(form.finish_suggest::<&str>(pending.token, Err("late failure")), Outcome::Stale);
    assert_eq!(form.feature_list(), &["A"]);
    assert!(form.last_failure().is_none());
}
