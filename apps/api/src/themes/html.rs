use crate::models::cv::non_blank;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `start - end`, with a missing or blank end rendered as "Present".
pub fn date_range(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", start, non_blank(end).unwrap_or("Present"))
}

/// Only http(s) and mailto links are emitted as hrefs.
pub fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
    {
        Some(escape(url.trim()))
    } else {
        None
    }
}

pub fn page(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        style,
        body
    )
}
