//! Built-in workflow records served when no catalog file is configured.

use crate::WorkflowRecord;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// Returns the built-in records in catalog order.
pub(crate) fn builtin_records() -> Vec<WorkflowRecord> {
    vec![
        WorkflowRecord {
            id: 1,
            filename: "telegram_webhook_automation.json".to_owned(),
            name: "Telegram Webhook Automation".to_owned(),
            active: true,
            description: "Webhook-triggered automation that integrates Telegram for messaging. \
                          Uses 8 nodes and integrates with 3 services."
                .to_owned(),
            trigger_type: "Webhook".to_owned(),
            complexity: "medium".to_owned(),
            node_count: 8,
            integrations: strings(&["Telegram", "Webhook", "HTTP Request"]),
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        },
        WorkflowRecord {
            id: 2,
            filename: "google_sheets_automation.json".to_owned(),
            name: "Google Sheets Data Processing".to_owned(),
            active: true,
            description: "Scheduled automation that processes Google Sheets data. \
                          Uses 12 nodes and integrates with 4 services."
                .to_owned(),
            trigger_type: "Scheduled".to_owned(),
            complexity: "medium".to_owned(),
            node_count: 12,
            integrations: strings(&["Google Sheets", "Gmail", "Slack", "HTTP Request"]),
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        },
    ]
}
