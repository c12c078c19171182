//! Route categorization for metrics and logging.

use axum::http::Uri;
use strum::{Display, IntoStaticStr};

/// Route classification for metrics grouping.
///
/// Each category represents a distinct functional area of the API, so
/// request logs can be aggregated without exploding on workflow filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RouteCategory {
    Workflows,
    Categories,
    Integrations,
    Stats,
    Monitoring,
    Documentation,
    Pages,
    Unknown,
}

impl RouteCategory {
    /// Categorizes a route based on its URI path.
    pub fn from_uri(uri: &Uri) -> Self {
        let path = uri.path();

        if path.starts_with("/api/workflows") {
            Self::Workflows
        } else if path.starts_with("/api/categor") {
            Self::Categories
        } else if path.starts_with("/api/integrations") {
            Self::Integrations
        } else if path.starts_with("/api/stats") {
            Self::Stats
        } else if path == "/health" || path.starts_with("/api/health") {
            Self::Monitoring
        } else if path.starts_with("/api/openapi") || path.starts_with("/api/scalar") {
            Self::Documentation
        } else if path == "/"
            || path == "/sitemap.xml"
            || path == "/robots.txt"
            || path == "/llms.txt"
        {
            Self::Pages
        } else {
            Self::Unknown
        }
    }

    /// Returns the string representation for logging and metrics.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(path: &str) -> RouteCategory {
        RouteCategory::from_uri(&path.parse().unwrap())
    }

    #[test]
    fn categorization_maps_paths_correctly() {
        assert_eq!(categorize("/api/workflows"), RouteCategory::Workflows);
        assert_eq!(
            categorize("/api/workflows/0001_Telegram_Schedule_Automation_Scheduled.json"),
            RouteCategory::Workflows
        );
        assert_eq!(categorize("/api/categories"), RouteCategory::Categories);
        assert_eq!(categorize("/api/category-mappings"), RouteCategory::Categories);
        assert_eq!(categorize("/api/integrations"), RouteCategory::Integrations);
        assert_eq!(categorize("/api/stats"), RouteCategory::Stats);
        assert_eq!(categorize("/api/health"), RouteCategory::Monitoring);
        assert_eq!(categorize("/health"), RouteCategory::Monitoring);
        assert_eq!(categorize("/api/openapi.json"), RouteCategory::Documentation);
        assert_eq!(categorize("/api/scalar"), RouteCategory::Documentation);
        assert_eq!(categorize("/"), RouteCategory::Pages);
        assert_eq!(categorize("/robots.txt"), RouteCategory::Pages);
        assert_eq!(categorize("/assets/app.js"), RouteCategory::Unknown);
    }

    #[test]
    fn category_strings_are_lowercase() {
        assert_eq!(RouteCategory::Workflows.as_str(), "workflows");
        assert_eq!(RouteCategory::Unknown.as_str(), "unknown");
    }
}
