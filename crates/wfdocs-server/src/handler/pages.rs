//! Documentation pages and SEO files.
//!
//! These routes serve HTML and plain files from the static directory and are
//! left out of the OpenAPI document.

use aide::axum::ApiRouter;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use wfdocs_core::Locale;

use crate::extract::Query;
use crate::service::{ServiceState, StaticSite};

/// Tracing target for page operations.
const TRACING_TARGET: &str = "wfdocs_server::handler::pages";

/// Cookie remembering the chosen language.
const LANG_COOKIE: &str = "lang";

/// Lifetime of the language cookie: 30 days.
const LANG_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Countries whose visitors get the Chinese page by default.
const ZH_COUNTRIES: [&str; 5] = ["CN", "HK", "MO", "TW", "SG"];

/// Country headers set by CDNs in front of the server.
const COUNTRY_HEADERS: [&str; 2] = ["cf-ipcountry", "x-country-code"];

const SETUP_REQUIRED_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Workflow Documentation</title></head>
<body>
<h1>Workflow Documentation</h1>
<p>Setup required: no index page was found in the static directory.</p>
</body>
</html>
";

/// Query parameters of the index page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageQuery {
    lang: Option<String>,
}

/// Returns the tag if it is a plausible language tag.
fn valid_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let valid = !tag.is_empty()
        && tag.len() <= 16
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    valid.then(|| tag.to_lowercase())
}

/// Picks the page language.
///
/// Order: `lang` query, `lang` cookie, CDN country header, `Accept-Language`,
/// then English.
fn negotiate_language(
    query_lang: Option<&str>,
    cookie_lang: Option<&str>,
    headers: &HeaderMap,
) -> String {
    if let Some(tag) = query_lang.and_then(valid_tag) {
        return tag;
    }

    if let Some(tag) = cookie_lang.and_then(valid_tag) {
        return tag;
    }

    // The first non-empty country header decides; later ones are ignored.
    let country = COUNTRY_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_uppercase())
            .filter(|value| !value.is_empty())
    });
    if country.is_some_and(|country| ZH_COUNTRIES.contains(&country.as_str())) {
        return Locale::Zh.to_string();
    }

    let accepts_zh = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim().to_lowercase().starts_with("zh"));
    if accepts_zh {
        return Locale::Zh.to_string();
    }

    Locale::En.to_string()
}

fn lang_cookie(lang: &str) -> Option<Cookie<'static>> {
    let raw = format!("{LANG_COOKIE}={lang}; HttpOnly; Path=/; Max-Age={LANG_COOKIE_MAX_AGE_SECS}");
    Cookie::parse(raw).ok()
}

/// Serves the localized index page and remembers the language.
#[tracing::instrument(skip_all)]
async fn index_page(
    State(static_site): State<StaticSite>,
    Query(page_query): Query<PageQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let cookie_lang = jar.get(LANG_COOKIE).map(|cookie| cookie.value().to_owned());
    let lang = negotiate_language(
        page_query.lang.as_deref(),
        cookie_lang.as_deref(),
        &headers,
    );
    let locale = Locale::from_tag(&lang);

    tracing::debug!(target: TRACING_TARGET, lang = %lang, "Serving index page");

    let Some(content) = static_site.read_index(locale).await else {
        tracing::warn!(
            target: TRACING_TARGET,
            static_dir = %static_site.root().display(),
            "Index page missing"
        );
        return (StatusCode::NOT_FOUND, Html(SETUP_REQUIRED_PAGE)).into_response();
    };

    let jar = match lang_cookie(&lang) {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    (jar, Html(content)).into_response()
}

/// Serves a file from the static directory with a fixed content type.
async fn seo_file(
    static_site: &StaticSite,
    file_name: &str,
    content_type: &'static str,
    label: &str,
) -> Response {
    match static_site.read_file(file_name).await {
        Some(contents) => ([(header::CONTENT_TYPE, content_type)], contents).into_response(),
        None => (StatusCode::NOT_FOUND, format!("{label} not found")).into_response(),
    }
}

#[tracing::instrument(skip_all)]
async fn sitemap(State(static_site): State<StaticSite>) -> Response {
    seo_file(&static_site, "sitemap.xml", "application/xml", "Sitemap").await
}

#[tracing::instrument(skip_all)]
async fn robots(State(static_site): State<StaticSite>) -> Response {
    seo_file(
        &static_site,
        "robots.txt",
        "text/plain; charset=utf-8",
        "Robots.txt",
    )
    .await
}

#[tracing::instrument(skip_all)]
async fn llms(State(static_site): State<StaticSite>) -> Response {
    seo_file(
        &static_site,
        "llms.txt",
        "text/plain; charset=utf-8",
        "LLMs.txt",
    )
    .await
}

/// Returns a [`Router`] with the index page and SEO files.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use axum::routing::get;

    ApiRouter::new()
        .route("/", get(index_page))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/llms.txt", get(llms))
}
