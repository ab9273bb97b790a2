//! Card markup.

use crate::models::ImageHit;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Markup for a single card: a link to the full-size image wrapping the
/// thumbnail (tags as alt text) and the four statistics.
pub fn card_markup(hit: &ImageHit) -> String {
    let stat = |label: &str, value: u64| {
        format!(
            "<p class=\"info-item\"><b>{}</b>{}</p>",
            label, value
        )
    };

    format!(
        concat!(
            "<a href=\"{href}\">",
            "<div class=\"photo-card\">",
            "<div class=\"img-wrapper\">",
            "<img class=\"photo-card__img\" src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" />",
            "</div>",
            "<div class=\"info\">{likes}{views}{comments}{downloads}</div>",
            "</div>",
            "</a>"
        ),
        href = escape_html(&hit.full_size_url),
        src = escape_html(&hit.thumbnail_url),
        alt = escape_html(&hit.tags),
        likes = stat("Likes", hit.likes),
        views = stat("Views", hit.views),
        comments = stat("Comments", hit.comments),
        downloads = stat("Downloads", hit.downloads),
    )
}

/// Markup for a batch of cards, in order.
pub fn gallery_markup(hits: &[ImageHit]) -> String {
    hits.iter().map(card_markup).collect()
}

/// A standalone HTML page around a rendered gallery container.
pub fn document(title: &str, gallery_html: &str, load_more_visible: bool) -> String {
    let button_class = if load_more_visible {
        "load-more"
    } else {
        "load-more is-hidden"
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n",
            "<style>\n",
            ".gallery {{ display: flex; flex-wrap: wrap; gap: 16px; }}\n",
            ".photo-card {{ width: 320px; }}\n",
            ".photo-card__img {{ width: 100%; height: 200px; object-fit: cover; }}\n",
            ".info {{ display: flex; justify-content: space-between; }}\n",
            ".is-hidden {{ display: none; }}\n",
            "</style>\n",
            "</head>\n",
            "<body>\n{gallery}\n<button type=\"button\" class=\"{button_class}\">Load more</button>\n</body>\n",
            "</html>\n"
        ),
        title = escape_html(title),
        gallery = gallery_html,
        button_class = button_class,
    )
}
