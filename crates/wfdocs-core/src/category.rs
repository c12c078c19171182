//! The fixed workflow category list.

use crate::Locale;

/// Workflow categories in display order.
pub const CATEGORIES: [&str; 16] = [
    "AI Agent Development",
    "Business Process Automation",
    "CRM & Sales",
    "Cloud Storage & File Management",
    "Communication & Messaging",
    "Creative Content & Video Automation",
    "Creative Design Automation",
    "Data Processing & Analysis",
    "E-commerce & Retail",
    "Financial & Accounting",
    "Marketing & Advertising Automation",
    "Project Management",
    "Social Media Management",
    "Technical Infrastructure & DevOps",
    "Uncategorized",
    "Web Scraping & Data Extraction",
];

/// Returns the category list for `locale`, preserving length and order.
pub fn categories(locale: Locale) -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .map(|category| locale.translate_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_categories_are_unchanged() {
        assert_eq!(categories(Locale::En), CATEGORIES.to_vec());
    }

    #[test]
    fn chinese_categories_keep_order() {
        let translated = categories(Locale::Zh);

        assert_eq!(translated.len(), CATEGORIES.len());
        assert_eq!(translated[0], "AI 智能体开发");
        assert_eq!(translated[14], "未分类");
        assert_eq!(translated[15], "网页抓取与数据提取");
    }
}
