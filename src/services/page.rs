// src/services/page.rs
use crate::config::PageConfig;

/// Element id the chat widget mounts into.
pub const CHAT_MOUNT_ID: &str = "chat";

pub fn render_page(page: &PageConfig) -> String {
    let title = escape_html(&page.title);
    let subtitle = escape_html(&page.subtitle);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/chat.css">
</head>
<body>
    <div class="page">
        <header class="page-header">
            <div class="page-header-inner">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>
        </header>

        <main class="page-main">
            <div id="{mount}" data-endpoint="/chat"></div>
        </main>
    </div>
    <script src="/chat.js" defer></script>
</body>
</html>
"##,
        mount = CHAT_MOUNT_ID,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
