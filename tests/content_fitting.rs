//! End-to-end behavior of the fitting pipeline with a scripted generator:
//! budget enforcement, degraded-mode fallbacks, and share gating.

use std::future::Future;
use std::pin::Pin;

use oakwell_social::llm::{GenerationFailure, GenerationRequest, TextGenerator};
use oakwell_social::{
    Article, ContentFitter, GenerationWarning, NoOverrides, Platform, ShareAction, fits_budget,
    share_action,
};

struct ScriptedGenerator {
    response: Result<String, GenerationFailure>,
}

impl ScriptedGenerator {
    fn ok(text: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            response: Ok(text.into()),
        })
    }

    fn failing(failure: GenerationFailure) -> Box<Self> {
        Box::new(Self {
            response: Err(failure),
        })
    }
}

impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate<'a>(
        &'a self,
        _request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerationFailure>> + Send + 'a>> {
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn derby_article() -> Article {
    Article::new(
        "Derby Day Preview",
        "<p>The Reds host their local rivals this Saturday at Oakwell. \
         Tickets are selling fast ahead of kick-off.</p>",
    )
}

fn fitter_with(generator: Box<dyn TextGenerator>) -> ContentFitter {
    ContentFitter::new(Some(generator), Box::new(NoOverrides)).unwrap()
}

#[tokio::test]
async fn degraded_tweet_keeps_title_marker_and_budget() {
    let fitter = ContentFitter::without_generator().unwrap();
    let outcome = fitter
        .generate(&derby_article(), Platform::Twitter, None)
        .await
        .unwrap();

    let text = &outcome.content.text;
    assert!(text.starts_with("Derby Day Preview\n\n"));
    assert!(text.ends_with("🔴⚪"));
    assert!(text.chars().count() <= 258);
    assert_eq!(outcome.warning, Some(GenerationWarning::NotConfigured));
}

#[tokio::test]
async fn degraded_mode_is_deterministic() {
    let fitter = ContentFitter::without_generator().unwrap();
    let article = derby_article();

    for platform in [Platform::Twitter, Platform::Instagram, Platform::Tiktok] {
        let first = fitter.generate(&article, platform, None).await.unwrap();
        let second = fitter.generate(&article, platform, None).await.unwrap();
        assert_eq!(first.content, second.content);
    }
}

#[tokio::test]
async fn overlong_instagram_caption_is_capped_and_flagged() {
    let fitter = fitter_with(ScriptedGenerator::ok("x".repeat(2_300)));
    let outcome = fitter
        .generate(&derby_article(), Platform::Instagram, None)
        .await
        .unwrap();

    assert!(outcome.content.text.chars().count() <= 2_200);
    assert!(outcome.content.text.ends_with("..."));
    assert!(outcome.content.truncated);
    assert!(outcome.warning.is_none());
}

#[tokio::test]
async fn overlong_tweet_is_capped_below_url_reserve() {
    let fitter = fitter_with(ScriptedGenerator::ok("x".repeat(400)));
    let outcome = fitter
        .generate(&derby_article(), Platform::Twitter, None)
        .await
        .unwrap();

    assert!(outcome.content.text.chars().count() <= 258);
    assert!(outcome.content.text.ends_with("..."));
    assert!(outcome.content.truncated);
}

#[tokio::test]
async fn every_failure_class_degrades_with_its_warning() {
    let failures = [
        GenerationFailure::Auth {
            provider: "OpenAI".into(),
        },
        GenerationFailure::RateLimited {
            provider: "OpenAI".into(),
        },
        GenerationFailure::Server {
            provider: "OpenAI".into(),
            status: 503,
        },
        GenerationFailure::Malformed {
            provider: "OpenAI".into(),
        },
        GenerationFailure::Timeout {
            provider: "OpenAI".into(),
        },
        GenerationFailure::Transport {
            provider: "OpenAI".into(),
            message: "connection reset".into(),
        },
    ];

    for failure in failures {
        let fitter = fitter_with(ScriptedGenerator::failing(failure.clone()));
        let outcome = fitter
            .generate(&derby_article(), Platform::Facebook, None)
            .await
            .unwrap();

        assert!(outcome.content.text.starts_with("Derby Day Preview\n\n"));
        assert_eq!(outcome.warning, Some(GenerationWarning::Degraded(failure)));
    }
}

#[tokio::test]
async fn article_without_title_is_rejected_before_any_generation() {
    let fitter = fitter_with(ScriptedGenerator::ok("should never be reached"));
    let invalid = Article::new("   ", "body text");
    assert!(
        fitter
            .generate(&invalid, Platform::Twitter, None)
            .await
            .is_err()
    );
}

#[test]
fn budget_boundary_accounts_for_the_separator() {
    let url = "https://is.gd/abc123"; // 20 chars

    let exactly_fits = "y".repeat(280 - 20 - 2);
    assert!(fits_budget(&exactly_fits, Platform::Twitter, url));

    let one_over = "y".repeat(280 - 20 - 1);
    assert!(!fits_budget(&one_over, Platform::Twitter, url));
}

#[test]
fn share_gating_follows_the_budget_verdict() {
    let url = "https://is.gd/abc123";

    let action = share_action("Match day at Oakwell! 🔴⚪", Platform::Twitter, url).unwrap();
    assert!(matches!(action, ShareAction::Intent(_)));

    let over = "y".repeat(280);
    assert!(share_action(&over, Platform::Twitter, url).is_err());

    let action = share_action("Full-time scenes 🔴⚪", Platform::Tiktok, url).unwrap();
    let ShareAction::Clipboard(text) = action else {
        panic!("expected clipboard action");
    };
    assert!(text.ends_with(url));
}
