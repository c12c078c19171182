//! Supported response locales and their fixed translation tables.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Literal description rewrites applied, in order, for [`Locale::Zh`].
const ZH_DESCRIPTION_REPLACEMENTS: [(&str, &str); 4] = [
    ("Webhook-triggered automation that", "Webhook触发的自动化流程，"),
    ("Scheduled automation that", "定时自动化流程，"),
    ("nodes", "个节点"),
    ("services", "个服务"),
];

/// Category names with a `zh` translation.
const ZH_CATEGORY_TRANSLATIONS: [(&str, &str); 16] = [
    ("AI Agent Development", "AI 智能体开发"),
    ("Business Process Automation", "业务流程自动化"),
    ("CRM & Sales", "客户关系管理与销售"),
    ("Cloud Storage & File Management", "云存储与文件管理"),
    ("Communication & Messaging", "通信与消息传递"),
    ("Creative Content & Video Automation", "创意内容与视频自动化"),
    ("Creative Design Automation", "创意设计自动化"),
    ("Data Processing & Analysis", "数据处理与分析"),
    ("E-commerce & Retail", "电子商务与零售"),
    ("Financial & Accounting", "金融与会计"),
    ("Marketing & Advertising Automation", "营销与广告自动化"),
    ("Project Management", "项目管理"),
    ("Social Media Management", "社交媒体管理"),
    ("Technical Infrastructure & DevOps", "技术基础设施与运维"),
    ("Uncategorized", "未分类"),
    ("Web Scraping & Data Extraction", "网页抓取与数据提取"),
];

/// Response language.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English, the language records are stored in.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// Resolves a `lang` tag.
    ///
    /// Only the exact tag `zh` selects [`Locale::Zh`]; anything else is English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == "zh" { Self::Zh } else { Self::En }
    }

    /// Rewrites an English workflow description for this locale.
    pub fn translate_description<'a>(self, description: &'a str) -> Cow<'a, str> {
        match self {
            Self::En => Cow::Borrowed(description),
            Self::Zh => {
                let translated = ZH_DESCRIPTION_REPLACEMENTS
                    .iter()
                    .fold(description.to_owned(), |text, (from, to)| {
                        text.replace(from, to)
                    });
                Cow::Owned(translated)
            }
        }
    }

    /// Translates a category name, passing unmapped names through.
    pub fn translate_category<'a>(self, category: &'a str) -> &'a str {
        match self {
            Self::En => category,
            Self::Zh => ZH_CATEGORY_TRANSLATIONS
                .iter()
                .find(|(name, _)| *name == category)
                .map_or(category, |(_, translated)| *translated),
        }
    }
}
