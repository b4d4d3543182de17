use crate::article::Article;
use crate::config::Config;
use crate::fitter::{ContentFitter, fits_budget};
use crate::llm::{OpenAiGenerator, TextGenerator};
use crate::platform::Platform;
use crate::share::{ShareAction, share_action};
use crate::shortener::UrlShortener;
use crate::text::char_len;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "oakwell", version, about = "Social post generation for the fan site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate platform copy for an article
    Generate {
        /// Target platform: twitter, facebook, instagram or tiktok
        #[arg(long)]
        platform: Platform,

        #[arg(long)]
        title: String,

        /// Short summary used as generation context
        #[arg(long)]
        summary: Option<String>,

        /// Article body (rich text / HTML)
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,

        /// Read the article body from a file
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Canonical article URL to append at share time
        #[arg(long)]
        url: Option<String>,

        /// Extra ad-hoc instruction appended to the platform prompt
        #[arg(long)]
        custom_prompt: Option<String>,

        /// Skip URL shortening even when enabled in config
        #[arg(long)]
        no_shorten: bool,
    },

    /// Check a draft against a platform's character budget
    Budget {
        #[arg(long)]
        platform: Platform,

        #[arg(long)]
        content: String,

        #[arg(long)]
        url: String,
    },

    /// Shorten a URL via is.gd
    Shorten { url: String },
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Generate {
            platform,
            title,
            summary,
            body,
            body_file,
            url,
            custom_prompt,
            no_shorten,
        } => {
            let body = match (body, body_file) {
                (Some(inline), _) => inline,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => String::new(),
            };

            let mut article = Article::new(title, body);
            if let Some(summary) = summary {
                article = article.with_summary(summary);
            }

            let resolved_url = match url {
                Some(url) if config.shorten_urls && !no_shorten => {
                    Some(UrlShortener::default().shorten(&url).await)
                }
                other => other,
            };

            let fitter = build_fitter(&config)?;
            let outcome = fitter
                .generate(&article, platform, custom_prompt.as_deref())
                .await?;

            if let Some(warning) = &outcome.warning {
                eprintln!("warning: {warning}");
            }

            println!("{}", outcome.content.text);

            if let Some(url) = resolved_url {
                let total = char_len(&outcome.content.text) + char_len(&url) + 2;
                eprintln!("{total}/{} characters with link", platform.max_length());

                match share_action(&outcome.content.text, platform, &url) {
                    Ok(ShareAction::Intent(intent)) => eprintln!("share: {intent}"),
                    Ok(ShareAction::Clipboard(_)) => {
                        eprintln!("share: no web intent for {platform}, copy the text above");
                    }
                    Err(e) => eprintln!("warning: {e}"),
                }
            }

            Ok(())
        }

        Command::Budget {
            platform,
            content,
            url,
        } => {
            let total = char_len(&content) + char_len(&url) + 2;
            let max = platform.max_length();
            if fits_budget(&content, platform, &url) {
                println!("ok: {total}/{max} characters");
            } else {
                println!("over budget: {total}/{max} characters");
                std::process::exit(1);
            }
            Ok(())
        }

        Command::Shorten { url } => {
            let short = UrlShortener::default().shorten(&url).await;
            println!("{short}");
            Ok(())
        }
    }
}

fn build_fitter(config: &Config) -> Result<ContentFitter> {
    let generator: Option<Box<dyn TextGenerator>> = config.api_key.as_deref().map(|key| {
        Box::new(OpenAiGenerator::new(
            key,
            &config.model,
            config.temperature,
            Duration::from_secs(config.request_timeout_secs),
        )) as Box<dyn TextGenerator>
    });

    Ok(ContentFitter::new(generator, Box::new(config.clone()))?)
}
