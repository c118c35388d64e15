//! Per-item title scraping across languages.
//!
//! Fetches run concurrently through a bounded stream; each language only
//! ever writes its own slot of the result, and one language failing never
//! aborts the rest.

use std::collections::HashSet;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use super::client::{create_http_client, fetch_page};
use super::{legal_content_url, ScrapeDefect, ScrapeError, Title};
use crate::config::Config;
use crate::TARGET_WEB_REQUEST;

pub struct TitleFetcher {
    client: reqwest::Client,
    base_url: String,
    concurrency: usize,
}

/// Titles that came back for one act, plus any structural failures hit
/// along the way.
pub struct FetchedTitles {
    pub titles: Vec<Title>,
    pub defects: Vec<ScrapeDefect>,
}

enum LanguageFetch {
    Fetched(Title),
    Skipped,
    Defect(ScrapeDefect),
}

impl TitleFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_http_client(&config.user_agent)?,
            base_url: config.eurlex_base.clone(),
            concurrency: config.fetch_concurrency,
        })
    }

    /// Loads the English-language page of the act and reads which
    /// languages its language selector marks unavailable. Transport
    /// failures degrade to "nothing known disabled" so the title fetch
    /// can still try every language; a page without the selector is a
    /// structural scrape failure.
    pub async fn fetch_disabled_languages(&self, celex_id: &str) -> Result<HashSet<String>> {
        let url = legal_content_url(&self.base_url, "EN", celex_id);
        debug!(target: TARGET_WEB_REQUEST, "Fetching language selector from {}", url);

        let response = match fetch_page(&self.client, &url).await {
            Ok(response) => response,
            Err(err) => {
                warn!(target: TARGET_WEB_REQUEST, "Could not load {}: {}", url, err);
                return Ok(HashSet::new());
            }
        };
        if response.status() != StatusCode::OK {
            warn!(
                target: TARGET_WEB_REQUEST,
                "Got {} from eur-lex for {}, assuming no disabled languages",
                response.status(),
                url
            );
            return Ok(HashSet::new());
        }

        let body = response.text().await?;
        match parse_disabled_languages(&body) {
            Some(disabled) => {
                debug!(
                    target: TARGET_WEB_REQUEST,
                    "{} languages disabled for {}",
                    disabled.len(),
                    celex_id
                );
                Ok(disabled)
            }
            None => Err(ScrapeError::LanguageSelectorMissing { url }.into()),
        }
    }

    /// Fetches the act's title in every requested language. Languages are
    /// fetched concurrently, bounded by the configured cap.
    pub async fn fetch_titles(&self, celex_id: &str, languages: &[String]) -> FetchedTitles {
        let results: Vec<LanguageFetch> = stream::iter(
            languages
                .iter()
                .map(|language| self.fetch_one(celex_id, language)),
        )
        .buffer_unordered(self.concurrency)
        .collect()
        .await;

        let mut fetched = FetchedTitles {
            titles: Vec::new(),
            defects: Vec::new(),
        };
        for result in results {
            match result {
                LanguageFetch::Fetched(title) => fetched.titles.push(title),
                LanguageFetch::Skipped => {}
                LanguageFetch::Defect(defect) => fetched.defects.push(defect),
            }
        }
        fetched
    }

    async fn fetch_one(&self, celex_id: &str, language: &str) -> LanguageFetch {
        let url = legal_content_url(&self.base_url, language, celex_id);
        debug!(target: TARGET_WEB_REQUEST, "Fetching {}", url);

        let response = match fetch_page(&self.client, &url).await {
            Ok(response) => response,
            Err(err) => {
                warn!(target: TARGET_WEB_REQUEST, "Skipping {}: {}", language, err);
                return LanguageFetch::Skipped;
            }
        };
        if response.status() != StatusCode::OK {
            info!(
                target: TARGET_WEB_REQUEST,
                "Got {} from eur-lex for {}, skipping {}",
                response.status(),
                url,
                language
            );
            return LanguageFetch::Skipped;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(target: TARGET_WEB_REQUEST, "Failed to read body from {}: {}", url, err);
                return LanguageFetch::Skipped;
            }
        };

        match parse_title(&body) {
            Some(value) => LanguageFetch::Fetched(Title::new(value, language, celex_id)),
            None => LanguageFetch::Defect(ScrapeDefect {
                celex_id: celex_id.to_string(),
                language: language.to_string(),
                error: ScrapeError::TitleMissing { url },
            }),
        }
    }
}

/// Pulls the act title out of the page's single title node.
pub(crate) fn parse_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p#title").ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Reads the language-selector dropdown and returns the codes of every
/// entry marked unavailable. `None` means the selector itself is missing
/// from the page.
pub(crate) fn parse_disabled_languages(html: &str) -> Option<HashSet<String>> {
    let document = Html::parse_document(html);
    let menu_selector = Selector::parse("ul.dropdown-menu").ok()?;
    let disabled_selector = Selector::parse("li.disabled").ok()?;

    let menu = document.select(&menu_selector).next()?;

    let mut disabled = HashSet::new();
    for entry in menu.select(&disabled_selector) {
        let text: String = entry.text().collect();
        if let Some(code) = text.split_whitespace().next() {
            let code = code.to_uppercase();
            if crate::LANGUAGES.contains(&code.as_str()) {
                disabled.insert(code);
            }
        }
    }
    Some(disabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language_menu(disabled: &[&str]) -> String {
        let mut html = String::from(
            "<html><body><div class=\"LanguageBar\"><ul class=\"dropdown-menu\">",
        );
        for language in crate::LANGUAGES {
            if disabled.contains(&language) {
                html.push_str(&format!(
                    "<li class=\"disabled\"><span>{}</span></li>",
                    language
                ));
            } else {
                html.push_str(&format!(
                    "<li><a href=\"./?uri=CELEX:31988L0406&amp;locale={}\">{}</a></li>",
                    language.to_lowercase(),
                    language
                ));
            }
        }
        html.push_str("</ul></div></body></html>");
        html
    }

    #[test]
    fn test_parse_title() {
        let html = r#"<html><body><div id="text">
            <p id="title">Council Directive  88/610/EEC of 24 November 1988
            <span class="sep"> </span>amending Directive 82/501/EEC</p>
            </div></body></html>"#;
        assert_eq!(
            parse_title(html),
            Some(
                "Council Directive 88/610/EEC of 24 November 1988 amending Directive 82/501/EEC"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_parse_title_missing() {
        assert_eq!(parse_title("<html><body><p>no title here</p></body></html>"), None);
        // Present but empty is as broken as absent
        assert_eq!(
            parse_title("<html><body><p id=\"title\">  </p></body></html>"),
            None
        );
    }

    #[test]
    fn test_parse_disabled_languages() {
        // Languages EUR-Lex never published 31988L0406 in
        let expected = [
            "ET", "CS", "HR", "BG", "HU", "LT", "RO", "SK", "MT", "GA", "PL", "SL", "LV",
        ];
        let html = language_menu(&expected);
        let disabled = parse_disabled_languages(&html).expect("language selector present");
        assert_eq!(
            disabled,
            expected.iter().map(|s| s.to_string()).collect::<HashSet<_>>()
        );
    }

    #[test]
    fn test_parse_disabled_languages_none_disabled() {
        let html = language_menu(&[]);
        let disabled = parse_disabled_languages(&html).expect("language selector present");
        assert!(disabled.is_empty());
    }

    #[test]
    fn test_parse_disabled_languages_selector_missing() {
        assert!(parse_disabled_languages("<html><body></body></html>").is_none());
    }
}
