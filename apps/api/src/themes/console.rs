//! Terminal-style theme: the CV is browsed by typing commands.

use serde::Serialize;

use crate::models::cv::CvDocument;
use crate::themes::html::{date_range, escape, page};

pub const PROMPT_USER: &str = "visitor";
pub const PROMPT_HOST: &str = "cv.dev";

const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to list the available commands";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleOutput {
    /// Echoed prompt line followed by the command output.
    pub lines: Vec<String>,
    /// Set by `clear`: the client should wipe its scrollback.
    pub clear: bool,
}

pub fn prompt() -> String {
    format!("{PROMPT_USER}@{PROMPT_HOST}:~$")
}

pub fn welcome(doc: &CvDocument) -> Vec<String> {
    vec![
        format!("Welcome to the interactive CV of {}", doc.basics.name),
        "Type 'help' to list the available commands".to_string(),
        String::new(),
    ]
}

/// Runs one typed command. Matching is case-insensitive and ignores
/// surrounding whitespace.
pub fn run_command(doc: &CvDocument, input: &str) -> ConsoleOutput {
    let cmd = input.trim().to_lowercase();
    if cmd == "clear" {
        return ConsoleOutput {
            lines: Vec::new(),
            clear: true,
        };
    }

    let mut lines = vec![format!("{} {}", prompt(), input)];
    match command_output(doc, &cmd) {
        Some(output) => lines.extend(output),
        None => {
            lines.push(UNKNOWN_COMMAND.to_string());
            lines.push(String::new());
        }
    }
    ConsoleOutput {
        lines,
        clear: false,
    }
}

fn command_output(doc: &CvDocument, cmd: &str) -> Option<Vec<String>> {
    Some(match cmd {
        "help" => help(),
        "info" => info(doc),
        "exp" => exp(doc),
        "edu" => edu(doc),
        "skills" => skills(doc),
        "langs" => langs(doc),
        "all" => all(doc),
        _ => return None,
    })
}

fn help() -> Vec<String> {
    [
        "Available commands:",
        "  info      - personal information",
        "  exp       - work experience",
        "  edu       - education",
        "  skills    - skills",
        "  langs     - languages",
        "  clear     - clear the screen",
        "  all       - the whole CV",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn info(doc: &CvDocument) -> Vec<String> {
    let b = &doc.basics;
    let mut out = vec![
        b.name.clone(),
        b.label.clone(),
        b.email.clone(),
        b.summary.clone(),
        format!("Location: {}, {}", b.location.city, b.location.country),
        String::new(),
        "Profiles:".to_string(),
    ];
    out.extend(
        b.profiles
            .iter()
            .map(|p| format!("  {}: {}", p.network, p.url)),
    );
    out.push(String::new());
    out
}

fn exp(doc: &CvDocument) -> Vec<String> {
    let mut out = Vec::new();
    for job in &doc.work {
        out.push(format!(
            "{} ({})",
            job.company,
            date_range(&job.start_date, job.end_date.as_deref())
        ));
        out.push(format!("Role: {}", job.position));
        out.push(job.summary.clone());
        out.extend(job.highlights.iter().map(|h| format!("  - {h}")));
        out.push(String::new());
    }
    out
}

fn edu(doc: &CvDocument) -> Vec<String> {
    let mut out = Vec::new();
    for edu in &doc.education {
        out.push(edu.institution.clone());
        out.push(format!("{} in {}", edu.study_type, edu.area));
        out.push(date_range(&edu.start_date, edu.end_date.as_deref()));
        out.push(String::new());
    }
    out
}

fn skills(doc: &CvDocument) -> Vec<String> {
    let mut out = Vec::new();
    for skill in &doc.skills {
        out.push(format!("{} ({})", skill.name, skill.level));
        out.push(format!("  Keywords: {}", skill.keywords.join(", ")));
        out.push(String::new());
    }
    out
}

fn langs(doc: &CvDocument) -> Vec<String> {
    let mut out: Vec<String> = doc
        .languages
        .iter()
        .map(|l| format!("{}: {}", l.language, l.fluency))
        .collect();
    out.push(String::new());
    out
}

fn all(doc: &CvDocument) -> Vec<String> {
    let rule = "----------------".to_string();
    let mut out = info(doc);
    for (title, body) in [
        ("WORK EXPERIENCE", exp(doc)),
        ("EDUCATION", edu(doc)),
        ("SKILLS", skills(doc)),
        ("LANGUAGES", langs(doc)),
    ] {
        out.push(title.to_string());
        out.push(rule.clone());
        out.extend(body);
    }
    out
}

const STYLE: &str = "body { background: #000; color: #00ff00; font-family: monospace; \
                     padding: 1rem; white-space: pre-wrap; margin: 0; }";

pub fn render(doc: &CvDocument) -> String {
    let mut lines = welcome(doc);
    lines.extend(run_command(doc, "all").lines);
    let body: String = lines
        .iter()
        .map(|line| format!("<div>{}</div>\n", escape(line)))
        .collect();
    let body = format!("{body}<div>{} <span class=\"cursor\">_</span></div>", escape(&prompt()));
    page(&doc.basics.name, STYLE, &body)
}
