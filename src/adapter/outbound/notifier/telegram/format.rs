//! Message formatting for Telegram notifications.

use crate::port::{Field, Notification};

/// Longest description shown before truncation.
const DESCRIPTION_LIMIT: usize = 500;

/// Render a notification as a MarkdownV2 message.
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let mut msg = format!(
        "{} *{}*\n\n{}\n",
        notification.severity.swatch(),
        escape_markdown(&notification.title),
        escape_markdown(&truncate(&notification.description, DESCRIPTION_LIMIT)),
    );

    for field in &notification.fields {
        if !field.inline {
            msg.push('\n');
        }
        msg.push('\n');
        msg.push_str(&render_field(field));
    }

    msg.push_str(&format!(
        "\n\n_{} • {}_",
        escape_markdown(&notification.footer),
        escape_markdown(&notification.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()),
    ));

    msg
}

fn render_field(field: &Field) -> String {
    let value = match &field.link {
        Some(link) => format!("[{}]({})", escape_markdown(&field.value), escape_link(link)),
        None => escape_markdown(&field.value),
    };
    format!("*{}:* {}", escape_markdown(&field.name), value)
}

/// Truncate to `max_chars` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Inside `(...)` of an inline link only `)` and `\` need escaping.
fn escape_link(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    for c in url.chars() {
        if c == ')' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
