//! Recipe-book theme: each section is a card, with an index on the side.

use crate::models::cv::CvDocument;
use crate::themes::html::{date_range, escape, page, safe_href};

const SECTIONS: [(&str, &str); 4] = [
    ("profile", "Profile"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("education", "Education"),
];

const STYLE: &str = "body { margin: 0; background: #1a1a1a; color: #e5e7eb; font-family: Georgia, serif; }\n\
                     aside { position: fixed; top: 0; left: 0; width: 16rem; height: 100%; background: #242424; padding: 1.5rem; box-sizing: border-box; }\n\
                     aside a { display: block; color: #e5e7eb; padding: .5rem 1rem; text-decoration: none; }\n\
                     main { margin-left: 16rem; padding: 1.5rem; max-width: 56rem; }\n\
                     .recipe-card { background: #fdf6e3; color: #333; border-radius: 6px; padding: 1.5rem; margin-bottom: 1.5rem; }\n\
                     .recipe-metadata { color: #666; }\n\
                     .chip { display: inline-block; background: #eee; border-radius: 999px; padding: .2rem .7rem; margin: .2rem; }";

fn profile(doc: &CvDocument) -> String {
    let b = &doc.basics;
    let mut links = String::new();
    for p in &b.profiles {
        if let Some(href) = safe_href(&p.url) {
            links.push_str(&format!("<a href=\"{href}\">{}</a> ", escape(&p.network)));
        }
    }
    format!(
        "<div class=\"recipe-card\">\n<h2>{}</h2>\n<h3>Details</h3>\n<ul>\n<li>{}</li>\n<li>{}</li>\n<li>{}, {}</li>\n</ul>\n\
         <h3>About me</h3>\n<p>{}</p>\n<h3>Profiles</h3>\n<p>{links}</p>\n</div>\n",
        escape(&b.name),
        escape(&b.label),
        escape(&b.email),
        escape(&b.location.city),
        escape(&b.location.country),
        escape(&b.summary)
    )
}

fn experience(doc: &CvDocument) -> String {
    let mut html = String::new();
    for job in &doc.work {
        html.push_str(&format!(
            "<div class=\"recipe-card\">\n<h3>{}</h3>\n<p class=\"recipe-metadata\">{} &bull; {}</p>\n<p>{}</p>\n<h4>Key ingredients</h4>\n<ul>\n",
            escape(&job.company),
            escape(&job.position),
            escape(&date_range(&job.start_date, job.end_date.as_deref())),
            escape(&job.summary)
        ));
        for h in &job.highlights {
            html.push_str(&format!("<li>{}</li>\n", escape(h)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html
}

fn skills(doc: &CvDocument) -> String {
    let mut html = String::new();
    for skill in &doc.skills {
        html.push_str(&format!(
            "<div class=\"recipe-card\">\n<h3>{}</h3>\n<p class=\"recipe-metadata\">Level: {}</p>\n",
            escape(&skill.name),
            escape(&skill.level)
        ));
        for k in &skill.keywords {
            html.push_str(&format!("<span class=\"chip\">{}</span>", escape(k)));
        }
        html.push_str("\n</div>\n");
    }
    html
}

fn education(doc: &CvDocument) -> String {
    let mut html = String::new();
    for edu in &doc.education {
        html.push_str(&format!(
            "<div class=\"recipe-card\">\n<h3>{}</h3>\n<p class=\"recipe-metadata\">{} in {} &bull; {}</p>\n</div>\n",
            escape(&edu.institution),
            escape(&edu.study_type),
            escape(&edu.area),
            escape(&date_range(&edu.start_date, edu.end_date.as_deref()))
        ));
    }
    html
}

pub fn render(doc: &CvDocument) -> String {
    let mut index = String::from("<aside>\n<h2>Index</h2>\n");
    for (id, title) in SECTIONS {
        index.push_str(&format!("<a href=\"#{id}\">{title}</a>\n"));
    }
    index.push_str("</aside>\n");

    let mut main = String::from("<main>\n");
    for (id, title) in SECTIONS {
        let content = match id {
            "profile" => profile(doc),
            "experience" => experience(doc),
            "skills" => skills(doc),
            _ => education(doc),
        };
        main.push_str(&format!(
            "<section id=\"{id}\">\n<h1>{title}</h1>\n{content}</section>\n"
        ));
    }
    main.push_str("</main>");

    page(&doc.basics.name, STYLE, &format!("{index}{main}"))
}
