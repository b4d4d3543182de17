#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod fitter;
pub mod llm;
pub mod platform;
pub mod prompt;
pub mod share;
pub mod shortener;
pub mod text;

pub use article::Article;
pub use config::Config;
pub use error::{ArticleError, Result, SocialError};
pub use fitter::{ContentFitter, GeneratedContent, GenerationWarning, Outcome, fits_budget};
pub use platform::{Platform, PlatformProfile};
pub use prompt::{NoOverrides, PromptStore};
pub use share::{ShareAction, ShareError, share_action};
pub use shortener::UrlShortener;
