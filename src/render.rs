//! Standalone HTML document rendering.
//!
//! Plain string assembly around a fixed stylesheet. The body fragment is
//! already cleaned markup and goes in as-is; title, author and date are
//! text and get escaped.

use html_escape::encode_text;

use crate::result::Article;

/// Embedded reading stylesheet.
const STYLESHEET: &str = r#"        body {
            max-width: 700px;
            margin: 40px auto;
            padding: 0 20px;
            font-family: Georgia, serif;
            font-size: 18px;
            line-height: 1.6;
            color: #333;
            background: #fff;
        }
        h1 {
            font-size: 2em;
            line-height: 1.2;
            margin-bottom: 0.5em;
        }
        .meta {
            color: #666;
            font-size: 0.9em;
            margin-bottom: 2em;
            padding-bottom: 1em;
            border-bottom: 1px solid #eee;
        }
        img {
            max-width: 100%;
            height: auto;
            display: block;
            margin: 1.5em 0;
        }
        figure {
            margin: 1.5em 0;
        }
        figcaption {
            font-size: 0.85em;
            color: #666;
            text-align: center;
            margin-top: 0.5em;
        }
        a {
            color: #0066cc;
        }
        blockquote {
            border-left: 3px solid #ccc;
            margin-left: 0;
            padding-left: 1em;
            color: #555;
        }
        p {
            margin: 1em 0;
        }
"#;

/// Render an article as a complete HTML5 document.
#[must_use]
pub fn render_document(article: &Article) -> String {
    let title = encode_text(&article.title);
    let author = encode_text(&article.author);
    let date = if article.has_date() {
        format!(
            r#"<span class="date"> &middot; {}</span>"#,
            encode_text(&article.date)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
{STYLESHEET}    </style>
</head>
<body>
    <article>
        <h1>{title}</h1>
        <div class="meta">
            <span class="author">{author}</span>
            {date}
        </div>
        <div class="content">
            {body}
        </div>
    </article>
</body>
</html>"#,
        body = article.body,
    )
}
