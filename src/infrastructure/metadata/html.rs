//! Extraction of preview metadata from an HTML document.
//!
//! Lookup order:
//!
//! - **title**: `og:title`, `twitter:title`, then `<title>`
//! - **description**: `og:description`, `twitter:description`, `description`
//! - **image**: `og:image` variants, then `twitter:image` variants
//!
//! Image URLs are resolved against the page URL. Entities are decoded and
//! whitespace collapsed; blank values become `None`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::entities::LinkMetadata;

static META_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());

static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z_:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").unwrap());

const TITLE_KEYS: &[&str] = &["og:title", "twitter:title"];
const DESCRIPTION_KEYS: &[&str] = &["og:description", "twitter:description", "description"];
const IMAGE_KEYS: &[&str] = &[
    "og:image",
    "og:image:url",
    "og:image:secure_url",
    "twitter:image",
    "twitter:image:src",
];

/// Extracts preview metadata from `html` served at `page_url`.
pub fn extract_metadata(html: &str, page_url: &Url) -> LinkMetadata {
    let meta = meta_content(html);
    let pick = |keys: &[&str]| keys.iter().find_map(|k| meta.get(*k).and_then(|v| clean(v)));

    let title = pick(TITLE_KEYS).or_else(|| {
        TITLE_REGEX
            .captures(html)
            .and_then(|c| c.get(1))
            .and_then(|m| clean(m.as_str()))
    });

    let description = pick(DESCRIPTION_KEYS);

    let image = pick(IMAGE_KEYS).and_then(|raw| match page_url.join(&raw) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            tracing::debug!(image = %raw, error = %e, "Unresolvable preview image");
            None
        }
    });

    LinkMetadata {
        title,
        description,
        image,
    }
}

/// Maps lowercased `property`/`name` keys to `content`; first occurrence wins.
fn meta_content(html: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for tag in META_TAG_REGEX.find_iter(html) {
        let attrs = attributes(tag.as_str());
        let key = attrs.get("property").or_else(|| attrs.get("name"));

        if let (Some(key), Some(content)) = (key, attrs.get("content")) {
            map.entry(key.to_ascii_lowercase())
                .or_insert_with(|| content.clone());
        }
    }

    map
}

fn attributes(tag: &str) -> HashMap<String, String> {
    ATTRIBUTE_REGEX
        .captures_iter(tag)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().to_ascii_lowercase();
            let value = c.get(2).or_else(|| c.get(3)).or_else(|| c.get(4))?;
            Some((name, value.as_str().to_string()))
        })
        .collect()
}

fn clean(raw: &str) -> Option<String> {
    let decoded = html_escape::decode_html_entities(raw);
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
