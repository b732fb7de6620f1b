//! Dashboard theme coloured by the shared palette.

use crate::models::cv::CvDocument;
use crate::palette::Palette;
use crate::themes::html::{date_range, escape, page, safe_href};

const STYLE: &str = "body { margin: 0; background: var(--color-background); color: var(--color-text); font-family: system-ui, sans-serif; }\n\
                     .layout { display: grid; grid-template-columns: 290px 1fr; min-height: 100vh; }\n\
                     nav { background: var(--color-surface); padding: 1.5rem; }\n\
                     nav a { display: block; color: var(--color-text); padding: .5rem; text-decoration: none; border-radius: 4px; }\n\
                     nav a:hover { background: var(--color-surface-hover); color: var(--color-primary); }\n\
                     main { padding: 1.5rem; max-width: 80rem; }\n\
                     h2 { color: var(--color-primary); }\n\
                     .highlight { color: var(--color-primary-hover); }\n\
                     .muted { color: var(--color-text-secondary); }\n\
                     .card { background: var(--color-surface); border-radius: 8px; padding: 1.5rem; margin-bottom: 1rem; }\n\
                     .chip { display: inline-block; background: var(--color-surface-hover); border-radius: 999px; padding: .2rem .7rem; margin: .2rem; }";

fn profile_section(doc: &CvDocument) -> String {
    let b = &doc.basics;
    let mut words = b.name.split_whitespace();
    let first = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let mut contact = format!(
        "<p>{}, {}</p>\n<p>{}</p>\n",
        escape(&b.location.city),
        escape(&b.location.country),
        escape(&b.email)
    );
    for profile in &b.profiles {
        match safe_href(&profile.url) {
            Some(href) => contact.push_str(&format!(
                "<p><a href=\"{href}\">{}</a></p>\n",
                escape(&profile.network)
            )),
            None => contact.push_str(&format!("<p>{}</p>\n", escape(&profile.network))),
        }
    }

    format!(
        "<section id=\"info\">\n<h2>Profile</h2>\n<h1><span class=\"highlight\">{}</span> {}</h1>\n\
         <h3 class=\"muted\">{}</h3>\n<p>{}</p>\n<div class=\"card\">\n{contact}</div>\n</section>\n",
        escape(first),
        escape(&rest.join(" ")),
        escape(&b.label),
        escape(&b.summary)
    )
}

fn work_section(doc: &CvDocument) -> String {
    let mut html = String::from("<section id=\"work\">\n<h2>Experience</h2>\n");
    for job in &doc.work {
        html.push_str(&format!(
            "<div class=\"card\">\n<h3>{} <span class=\"muted\">@ {}</span></h3>\n<p class=\"muted\">{}</p>\n<p>{}</p>\n<ul>\n",
            escape(&job.position),
            escape(&job.company),
            escape(&date_range(&job.start_date, job.end_date.as_deref())),
            escape(&job.summary)
        ));
        for h in &job.highlights {
            html.push_str(&format!("<li>{}</li>\n", escape(h)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</section>\n");
    html
}

fn skills_section(doc: &CvDocument) -> String {
    let mut html = String::from("<section id=\"skills\">\n<h2>Skills</h2>\n");
    for skill in &doc.skills {
        html.push_str(&format!(
            "<div class=\"card\">\n<h3>{} <span class=\"muted\">{}</span></h3>\n",
            escape(&skill.name),
            escape(&skill.level)
        ));
        for keyword in &skill.keywords {
            html.push_str(&format!("<span class=\"chip\">{}</span>", escape(keyword)));
        }
        html.push_str("\n</div>\n");
    }
    html.push_str("</section>\n");
    html
}

fn portfolio_section(doc: &CvDocument) -> String {
    if doc.portfolio.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section id=\"portfolio\">\n<h2>Portfolio</h2>\n");
    for project in &doc.portfolio {
        let star = if project.featured { " &#9733;" } else { "" };
        html.push_str(&format!(
            "<div class=\"card\">\n<h3>{}{star}</h3>\n<p class=\"muted\">{} &middot; {}</p>\n<p>{}</p>\n",
            escape(&project.title),
            escape(&project.category),
            escape(&project.date),
            escape(&project.description)
        ));
        for tool in &project.tools {
            html.push_str(&format!("<span class=\"chip\">{}</span>", escape(tool)));
        }
        for link in &project.links {
            if let Some(href) = safe_href(&link.url) {
                let label = link.label.as_deref().unwrap_or(link.kind.as_str());
                html.push_str(&format!(
                    "<p><a href=\"{href}\">{}</a></p>\n",
                    escape(label)
                ));
            }
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn render(doc: &CvDocument, palette: &Palette) -> String {
    let mut nav = String::from("<nav>\n");
    for (id, title) in [
        ("info", "Profile"),
        ("work", "Experience"),
        ("skills", "Skills"),
        ("portfolio", "Portfolio"),
    ] {
        if id == "portfolio" && doc.portfolio.is_empty() {
            continue;
        }
        nav.push_str(&format!("<a href=\"#{id}\">{title}</a>\n"));
    }
    nav.push_str("</nav>\n");

    let body = format!(
        "<div class=\"layout\">\n{nav}<main>\n{}{}{}{}</main>\n</div>",
        profile_section(doc),
        work_section(doc),
        skills_section(doc),
        portfolio_section(doc)
    );
    let style = format!("{}\n{STYLE}", palette.css_block());
    page(&doc.basics.name, &style, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_highlighted() {
        let mut doc = CvDocument::default();
        doc.basics.name = "Grace Brewster Hopper".into();
        let html = render(&doc, &Palette::default());
        assert!(html.contains("<span class=\"highlight\">Grace</span> Brewster Hopper"));
    }

    #[test]
    fn test_palette_is_inlined() {
        let mut palette = Palette::default();
        palette.set("--color-primary", "#ff0000").unwrap();
        let html = render(&CvDocument::default(), &palette);
        assert!(html.contains("--color-primary: #ff0000;"));
    }

    #[test]
    fn test_unsafe_profile_url_is_not_linked() {
        let mut doc = CvDocument::default();
        doc.basics.profiles.push(crate::models::cv::Profile {
            network: "Evil".into(),
            url: "javascript:alert(1)".into(),
        });
        let html = render(&doc, &Palette::default());
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<p>Evil</p>"));
    }

    #[test]
    fn test_empty_document_renders() {
        let html = render(&CvDocument::default(), &Palette::default());
        assert!(html.contains("<section id=\"work\">"));
        assert!(!html.contains("id=\"portfolio\""));
    }
}
