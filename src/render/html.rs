//! HTML report rendering
//!
//! Generates a self-contained HTML document with embedded CSS and a small
//! script that re-renders assistant bubbles as Markdown in the viewer.
//! Rendering is a pure function of the report record: no clock, no I/O, no
//! randomness. Message content and profile fields are interpolated verbatim;
//! the document is trusted output for the report owner and is not sanitized
//! here.

use crate::chat::{Attachment, Message, MessageRole};
use crate::render::format::{format_file_size, format_message_time, format_timestamp};
use crate::render::i18n::{Language, Strings};
use crate::report::ChatReport;

/// Render a report record as a complete HTML document
pub fn render_html(report: &ChatReport) -> String {
    let lang = Language::from_code(&report.metadata.language);
    let t = lang.strings();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang_code}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - {report_title}</title>
  <style>{css}</style>
  <script src="https://cdn.jsdelivr.net/npm/marked@4.0.0/marked.min.js"></script>
  <script>{js}</script>
</head>
<body>
  <div class="container">
    {header}
    {stats}
    {profile}
    {messages}
    {metadata}
    {footer}
  </div>
</body>
</html>
"#,
        lang_code = report.metadata.language,
        title = report.title,
        report_title = t.title,
        css = inline_css(),
        js = markdown_script(),
        header = render_header(report, t),
        stats = render_stats_grid(report, t),
        profile = report
            .user
            .as_ref()
            .map(|user| render_profile_section(user, t))
            .unwrap_or_default(),
        messages = render_messages_section(report, t),
        metadata = render_metadata_section(report, t),
        footer = render_footer(t),
    )
}

fn render_header(report: &ChatReport, t: &Strings) -> String {
    format!(
        r#"<div class="header">
      <h1>{title}</h1>
      <p>{generated_on} {timestamp}</p>
    </div>"#,
        title = report.title,
        generated_on = t.generated_on,
        timestamp = format_timestamp(report.timestamp),
    )
}

fn render_stats_grid(report: &ChatReport, t: &Strings) -> String {
    format!(
        r#"<div class="stats-grid">
      <div class="stat-card">
        <h3>{total_label}</h3>
        <div class="value">{total}</div>
        <div class="details">{user_count} {user_label}, {assistant_count} {assistant_label}</div>
      </div>
      <div class="stat-card">
        <h3>{avg_label}</h3>
        <div class="value">{avg}</div>
      </div>
      <div class="stat-card">
        <h3>{duration_label}</h3>
        <div class="value">{duration}</div>
      </div>
      <div class="stat-card">
        <h3>{attachments_label}</h3>
        <div class="value">{attachments}</div>
      </div>
    </div>"#,
        total_label = t.total_messages,
        total = report.stats.total_messages,
        user_count = report.stats.user_messages,
        user_label = t.user_messages,
        assistant_count = report.stats.assistant_messages,
        assistant_label = t.assistant_messages,
        avg_label = t.avg_response_time,
        avg = report.stats.average_response_time,
        duration_label = t.total_duration,
        duration = report.stats.total_duration,
        attachments_label = t.attachments,
        attachments = report.stats.attachments,
    )
}

fn render_profile_section(user: &crate::profile::UserProfile, t: &Strings) -> String {
    let avatar = match &user.avatar_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" />"#,
            url,
            user.username.as_deref().unwrap_or("User")
        ),
        None => user.initial(),
    };

    let mut items = String::new();
    let mut push_item = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            items.push_str(&format!(
                r#"<div class="profile-item">
          <label>{label}</label>
          <span>{value}</span>
        </div>
        "#,
            ));
        }
    };
    push_item(t.email, Some(&user.email));
    push_item(t.username, user.username.as_deref());
    push_item(t.full_name, user.full_name.as_deref());
    push_item(t.gender, user.gender.as_deref());
    push_item(t.date_of_birth, user.date_of_birth.as_deref());

    format!(
        r#"<div class="section">
      <h2>{heading}</h2>
      <div class="profile-header">
        <div class="profile-avatar">{avatar}</div>
        <div class="profile-details">
          <div class="profile-name">{name}</div>
          <div class="profile-email">{email}</div>
        </div>
      </div>
      <div class="profile-section">
        {items}
      </div>
    </div>"#,
        heading = t.user_profile,
        avatar = avatar,
        name = user.display_name(),
        email = user.email,
        items = items,
    )
}

fn render_messages_section(report: &ChatReport, t: &Strings) -> String {
    let messages: String = report
        .messages
        .iter()
        .map(|m| render_message(m, report, t))
        .collect();

    format!(
        r#"<div class="section">
      <h2>{heading}</h2>
      <div class="chat-messages">
        {messages}
      </div>
    </div>"#,
        heading = t.title,
        messages = messages,
    )
}

fn render_message(message: &Message, report: &ChatReport, t: &Strings) -> String {
    let (avatar_class, bubble_class, role_label) = match message.role {
        MessageRole::User => ("user-avatar", "user-bubble", t.user),
        // Assistant replies are Markdown; the inline script re-renders them.
        MessageRole::Assistant => ("assistant-avatar", "assistant-bubble markdown", t.assistant),
    };

    let avatar = match message.role {
        MessageRole::User => match report.user.as_ref().and_then(|u| u.avatar_url.as_deref()) {
            Some(url) => format!(r#"<img src="{}" alt="User" />"#, url),
            None => "U".to_string(),
        },
        MessageRole::Assistant => "A".to_string(),
    };

    let attachment = message
        .attachment
        .as_ref()
        .map(render_attachment)
        .unwrap_or_default();

    format!(
        r#"<div class="chat-message">
        <div class="avatar {avatar_class}">{avatar}</div>
        <div class="message-content">
          <div class="message-meta">
            <span class="message-role">{role_label}</span>
            <span class="message-time">{time}</span>
          </div>
          <div class="message-bubble {bubble_class}">{content}{attachment}</div>
        </div>
      </div>
      "#,
        avatar_class = avatar_class,
        avatar = avatar,
        role_label = role_label,
        time = format_message_time(message.timestamp),
        bubble_class = bubble_class,
        content = message.content,
        attachment = attachment,
    )
}

fn render_attachment(attachment: &Attachment) -> String {
    let size = format_file_size(attachment.size);
    if attachment.is_image() {
        format!(
            r#"
          <div class="attachment-image">
            <img src="{url}" alt="{name}" />
            <div class="attachment-caption">{name} ({size})</div>
          </div>"#,
            url = attachment.url,
            name = attachment.name,
            size = size,
        )
    } else {
        format!(
            r#"
          <div class="attachment">
            <span class="attachment-icon">&#128206;</span>
            {name} ({size})
          </div>"#,
            name = attachment.name,
            size = size,
        )
    }
}

fn render_metadata_section(report: &ChatReport, t: &Strings) -> String {
    format!(
        r#"<div class="section">
      <h2>{heading}</h2>
      <div class="metadata-grid">
        <div class="profile-item">
          <label>{generated_at_label}</label>
          <span>{generated_at}</span>
        </div>
        <div class="profile-item">
          <label>{language_label}</label>
          <span>{language}</span>
        </div>
        <div class="profile-item">
          <label>{version_label}</label>
          <span>{version}</span>
        </div>
        <div class="profile-item">
          <label>{platform_label}</label>
          <span>{platform}</span>
        </div>
      </div>
    </div>"#,
        heading = t.report_metadata,
        generated_at_label = t.generated_at,
        generated_at = format_timestamp(report.metadata.generated_at),
        language_label = t.language,
        language = Language::display_name(&report.metadata.language),
        version_label = t.report_version,
        version = report.metadata.report_version,
        platform_label = t.platform,
        platform = report.metadata.platform,
    )
}

fn render_footer(t: &Strings) -> String {
    format!(
        r#"<div class="footer">
      <p>{}</p>
    </div>"#,
        t.generated_by,
    )
}

/// Re-renders assistant bubbles as Markdown once the document loads
fn markdown_script() -> &'static str {
    r#"
    document.addEventListener('DOMContentLoaded', function() {
      var bubbles = document.querySelectorAll('.message-bubble.markdown');
      bubbles.forEach(function(bubble) {
        var content = bubble.textContent;
        if (content) {
          try {
            bubble.innerHTML = marked.parse(content);
          } catch (e) {
            console.error('Error parsing markdown:', e);
          }
        }
      });
    });
  "#
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
    :root {
      --primary-color: #4f46e5;
      --secondary-color: #8b5cf6;
      --accent-color: #ec4899;
      --background-color: #f8fafc;
      --card-color: #ffffff;
      --text-color: #1e293b;
      --text-muted: #64748b;
      --border-color: #e2e8f0;
      --code-bg: #f1f5f9;
      --blockquote-bg: #f8fafc;
    }

    @media (prefers-color-scheme: dark) {
      :root {
        --primary-color: #6366f1;
        --secondary-color: #a78bfa;
        --accent-color: #f472b6;
        --background-color: #0f172a;
        --card-color: #1e293b;
        --text-color: #f1f5f9;
        --text-muted: #94a3b8;
        --border-color: #334155;
        --code-bg: #1e293b;
        --blockquote-bg: #1e1e1e;
      }
    }

    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
      font-family: system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    }

    body {
      background-color: var(--background-color);
      color: var(--text-color);
      line-height: 1.6;
    }

    a {
      color: var(--primary-color);
      text-decoration: none;
    }

    a:hover {
      text-decoration: underline;
    }

    .container {
      max-width: 1200px;
      margin: 0 auto;
      padding: 2rem;
    }

    .header {
      position: relative;
      background: linear-gradient(to right, var(--primary-color), var(--secondary-color));
      color: white;
      border-radius: 16px;
      padding: 2.5rem;
      margin-bottom: 2.5rem;
      overflow: hidden;
      box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
    }

    .header h1 {
      font-size: 2.75rem;
      margin-bottom: 0.75rem;
      font-weight: 800;
    }

    .header p {
      opacity: 0.95;
      font-size: 1.1rem;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
      gap: 1.5rem;
      margin-bottom: 2.5rem;
    }

    .stat-card {
      background-color: var(--card-color);
      border-radius: 12px;
      padding: 1.75rem;
      box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
      border: 1px solid var(--border-color);
    }

    .stat-card h3 {
      font-size: 1rem;
      color: var(--text-muted);
      margin-bottom: 0.75rem;
      font-weight: 500;
    }

    .stat-card .value {
      font-size: 2.5rem;
      font-weight: 700;
      color: var(--primary-color);
      margin-bottom: 0.5rem;
    }

    .stat-card .details {
      font-size: 0.95rem;
      color: var(--text-muted);
    }

    .section {
      background-color: var(--card-color);
      border-radius: 12px;
      padding: 2rem;
      margin-bottom: 2.5rem;
      box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
      border: 1px solid var(--border-color);
    }

    .section h2 {
      font-size: 1.65rem;
      margin-bottom: 1.75rem;
      padding-bottom: 1rem;
      border-bottom: 1px solid var(--border-color);
      font-weight: 700;
    }

    .profile-section,
    .metadata-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
      gap: 1.5rem;
    }

    .profile-item label {
      display: block;
      font-size: 0.9rem;
      color: var(--text-muted);
      margin-bottom: 0.4rem;
      font-weight: 500;
    }

    .profile-item span {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .profile-header {
      display: flex;
      align-items: center;
      gap: 1.5rem;
      margin-bottom: 2rem;
    }

    .profile-avatar {
      width: 80px;
      height: 80px;
      border-radius: 50%;
      background-color: var(--primary-color);
      color: white;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 2rem;
      font-weight: 600;
      overflow: hidden;
      border: 3px solid white;
    }

    .profile-avatar img {
      width: 100%;
      height: 100%;
      object-fit: cover;
    }

    .profile-name {
      font-size: 1.75rem;
      font-weight: 700;
      margin-bottom: 0.5rem;
    }

    .profile-email {
      color: var(--text-muted);
      font-size: 1rem;
    }

    .chat-message {
      display: flex;
      gap: 1.25rem;
      margin-bottom: 2rem;
    }

    .avatar {
      width: 50px;
      height: 50px;
      border-radius: 50%;
      display: flex;
      align-items: center;
      justify-content: center;
      font-weight: 600;
      font-size: 1.1rem;
      flex-shrink: 0;
      overflow: hidden;
    }

    .avatar img {
      width: 100%;
      height: 100%;
      object-fit: cover;
    }

    .user-avatar {
      background-color: rgba(79, 70, 229, 0.1);
      color: var(--primary-color);
      border: 2px solid rgba(79, 70, 229, 0.2);
    }

    .assistant-avatar {
      background-color: rgba(139, 92, 246, 0.1);
      color: var(--secondary-color);
      border: 2px solid rgba(139, 92, 246, 0.2);
    }

    .message-content {
      flex: 1;
    }

    .message-meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
      margin-bottom: 0.5rem;
      color: var(--text-muted);
    }

    .message-role {
      font-weight: 600;
    }

    .message-time {
      font-size: 0.85rem;
    }

    .message-bubble {
      padding: 1.5rem;
      border-radius: 1rem;
      line-height: 1.7;
      white-space: pre-wrap;
      overflow: hidden;
    }

    .user-bubble {
      background-color: rgba(79, 70, 229, 0.07);
      border: 1px solid rgba(79, 70, 229, 0.1);
    }

    .assistant-bubble {
      background-color: rgba(139, 92, 246, 0.07);
      border: 1px solid rgba(139, 92, 246, 0.1);
    }

    .attachment {
      margin-top: 1rem;
      padding: 0.75rem;
      background-color: var(--background-color);
      border-radius: 0.5rem;
      font-size: 0.9rem;
      display: flex;
      align-items: center;
      gap: 0.5rem;
      border: 1px solid var(--border-color);
    }

    .attachment-icon {
      color: var(--text-muted);
    }

    .attachment-image {
      margin-top: 1rem;
      max-width: 100%;
      border-radius: 0.5rem;
      overflow: hidden;
      border: 1px solid var(--border-color);
    }

    .attachment-image img {
      max-width: 100%;
      max-height: 300px;
      display: block;
    }

    .attachment-caption {
      font-size: 0.85rem;
      color: var(--text-muted);
      text-align: center;
      padding: 0.5rem;
      background-color: var(--card-color);
      border-top: 1px solid var(--border-color);
    }

    .footer {
      text-align: center;
      margin-top: 4rem;
      padding: 2rem;
      color: var(--text-muted);
      font-size: 1rem;
      background-color: var(--card-color);
      border-radius: 12px;
      border: 1px solid var(--border-color);
    }

    .markdown h1, .markdown h2, .markdown h3 {
      margin-top: 1.5rem;
      margin-bottom: 1rem;
      font-weight: 600;
      line-height: 1.25;
    }

    .markdown p {
      margin-bottom: 1rem;
    }

    .markdown ul, .markdown ol {
      margin-bottom: 1rem;
      padding-left: 2rem;
    }

    .markdown blockquote {
      border-left: 4px solid var(--primary-color);
      margin-bottom: 1rem;
      color: var(--text-muted);
      background-color: var(--blockquote-bg);
      padding: 1rem;
      border-radius: 0.25rem;
    }

    .markdown code {
      background-color: var(--code-bg);
      padding: 0.2rem 0.4rem;
      border-radius: 0.25rem;
      font-family: monospace;
      font-size: 0.9em;
    }

    .markdown pre {
      background-color: var(--code-bg);
      padding: 1rem;
      border-radius: 0.5rem;
      overflow-x: auto;
      margin-bottom: 1rem;
      border: 1px solid var(--border-color);
    }

    .markdown pre code {
      background-color: transparent;
      padding: 0;
    }

    .markdown table {
      width: 100%;
      border-collapse: collapse;
      margin-bottom: 1rem;
    }

    .markdown th, .markdown td {
      padding: 0.75rem;
      border: 1px solid var(--border-color);
    }

    .markdown img {
      max-width: 100%;
      border-radius: 0.5rem;
      margin: 1rem 0;
    }

    @media print {
      body {
        background-color: white;
      }

      .container {
        max-width: 100%;
        padding: 0;
      }

      .section, .stat-card {
        break-inside: avoid;
      }
    }

    @media (max-width: 768px) {
      .container {
        padding: 1rem;
      }

      .stats-grid {
        grid-template-columns: 1fr 1fr;
      }

      .profile-section {
        grid-template-columns: 1fr;
      }

      .header h1 {
        font-size: 2rem;
      }
    }
  "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::AttachmentKind;
    use crate::report::{ReportMetadata, ReportStats};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn report(language: &str) -> ChatReport {
        let t0 = Utc.timestamp_millis_opt(1_000).unwrap();
        let t1 = Utc.timestamp_millis_opt(3_000).unwrap();
        let messages = vec![
            Message::new(MessageRole::User, "What is Rust?", t0),
            Message::new(MessageRole::Assistant, "A systems language.", t1),
        ];
        ChatReport {
            title: "Intro Chat".to_string(),
            timestamp: Utc.timestamp_millis_opt(10_000).unwrap(),
            messages: Arc::new(messages),
            stats: ReportStats {
                total_messages: 2,
                user_messages: 1,
                assistant_messages: 1,
                attachments: 0,
                average_response_time: "2s".to_string(),
                total_duration: "2s".to_string(),
            },
            user: None,
            metadata: ReportMetadata {
                generated_at: Utc.timestamp_millis_opt(10_000).unwrap(),
                language: language.to_string(),
                report_version: "1.1.0".to_string(),
                platform: "linux x86_64".to_string(),
                runtime: "chat-report/0.1.0".to_string(),
            },
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let r = report("en");
        assert_eq!(render_html(&r), render_html(&r));
    }

    #[test]
    fn test_render_contains_content_and_labels() {
        let html = render_html(&report("en"));
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Intro Chat"));
        assert!(html.contains("What is Rust?"));
        assert!(html.contains("Total Messages"));
        assert!(html.contains("English"));
    }

    #[test]
    fn test_render_hindi() {
        let html = render_html(&report("hi"));
        assert!(html.contains("चैट रिपोर्ट"));
        assert!(html.contains(r#"<html lang="hi">"#));
    }

    #[test]
    fn test_render_unknown_language_falls_back() {
        let html = render_html(&report("xx"));
        assert!(html.contains("Chat Report"));
        assert!(html.contains(r#"<html lang="xx">"#));
    }

    #[test]
    fn test_render_skips_profile_section_without_user() {
        let html = render_html(&report("en"));
        assert!(!html.contains("User Profile"));
    }

    #[test]
    fn test_render_profile_section() {
        let mut r = report("en");
        r.user = Some(crate::profile::UserProfile {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            username: Some("ada".to_string()),
            full_name: Some("Ada Lovelace".to_string()),
            avatar_url: None,
            gender: None,
            date_of_birth: None,
        });
        let html = render_html(&r);
        assert!(html.contains("User Profile"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        // No avatar URL, so the initial is shown instead
        assert!(html.contains(r#"<div class="profile-avatar">A</div>"#));
    }

    #[test]
    fn test_render_image_attachment() {
        let mut r = report("en");
        let t = Utc.timestamp_millis_opt(5_000).unwrap();
        let message = Message::new(MessageRole::User, "see photo", t).with_attachment(Attachment {
            name: "photo.png".to_string(),
            url: "https://files.example/photo.png".to_string(),
            size: 2048,
            kind: AttachmentKind::Image,
        });
        r.messages = Arc::new(vec![message]);
        let html = render_html(&r);
        assert!(html.contains("attachment-image"));
        assert!(html.contains("photo.png (2.0 KB)"));
    }

    #[test]
    fn test_render_generic_attachment() {
        let mut r = report("en");
        let t = Utc.timestamp_millis_opt(5_000).unwrap();
        let message = Message::new(MessageRole::User, "see doc", t).with_attachment(Attachment {
            name: "notes.pdf".to_string(),
            url: "https://files.example/notes.pdf".to_string(),
            size: 500,
            kind: AttachmentKind::File,
        });
        r.messages = Arc::new(vec![message]);
        let html = render_html(&r);
        assert!(html.contains(r#"class="attachment""#));
        assert!(html.contains("notes.pdf (500 B)"));
        assert!(!html.contains("attachment-image"));
    }
}
