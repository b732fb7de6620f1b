//! Arcade-menu theme.

use serde::{Deserialize, Serialize};

use crate::models::cv::CvDocument;
use crate::themes::html::{date_range, escape, page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Menu,
    Info,
    Exp,
    Edu,
    Skills,
    Langs,
}

pub const MENU: [(Screen, &str); 5] = [
    (Screen::Info, "PERSONAL INFO"),
    (Screen::Exp, "WORK EXPERIENCE"),
    (Screen::Edu, "EDUCATION"),
    (Screen::Skills, "SKILLS"),
    (Screen::Langs, "LANGUAGES"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

/// Menu cursor and current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub selected: usize,
    pub screen: Screen,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            selected: 0,
            screen: Screen::Menu,
        }
    }
}

impl MenuState {
    /// Up/down wrap around the menu; enter opens, escape returns.
    pub fn handle_key(self, key: Key) -> Self {
        let last = MENU.len() - 1;
        match key {
            Key::Up => Self {
                selected: if self.selected > 0 { self.selected - 1 } else { last },
                ..self
            },
            Key::Down => Self {
                selected: if self.selected < last { self.selected + 1 } else { 0 },
                ..self
            },
            Key::Enter => Self {
                screen: MENU[self.selected.min(last)].0,
                ..self
            },
            Key::Escape => Self {
                screen: Screen::Menu,
                ..self
            },
        }
    }
}

fn screen_title(screen: Screen) -> &'static str {
    MENU.iter()
        .find(|(s, _)| *s == screen)
        .map(|(_, label)| *label)
        .unwrap_or("MENU")
}

/// Inner HTML of one screen.
pub fn render_screen(doc: &CvDocument, state: MenuState) -> String {
    let mut html = String::new();
    match state.screen {
        Screen::Menu => {
            html.push_str(&format!("<h1>{}</h1>\n<ul class=\"menu\">\n", escape(&doc.basics.name)));
            for (i, (_, label)) in MENU.iter().enumerate() {
                if i == state.selected {
                    html.push_str(&format!("<li class=\"selected\">&rarr; {label}</li>\n"));
                } else {
                    html.push_str(&format!("<li>{label}</li>\n"));
                }
            }
            html.push_str("</ul>\n<p class=\"hint\">Use &uarr;&darr; to move, ENTER to select</p>\n");
            return html;
        }
        Screen::Info => {
            let b = &doc.basics;
            html.push_str(&format!(
                "<p>{}</p>\n<p>{}</p>\n<p>{}</p>\n<p>{}, {}</p>\n",
                escape(&b.label),
                escape(&b.email),
                escape(&b.summary),
                escape(&b.location.city),
                escape(&b.location.country)
            ));
        }
        Screen::Exp => {
            for job in &doc.work {
                html.push_str(&format!(
                    "<h3>{}</h3>\n<p>{}</p>\n<p>{}</p>\n<ul>\n",
                    escape(&job.company),
                    escape(&job.position),
                    escape(&date_range(&job.start_date, job.end_date.as_deref()))
                ));
                for h in &job.highlights {
                    html.push_str(&format!("<li>{}</li>\n", escape(h)));
                }
                html.push_str("</ul>\n");
            }
        }
        Screen::Edu => {
            for edu in &doc.education {
                html.push_str(&format!(
                    "<h3>{}</h3>\n<p>{} - {}</p>\n<p>{}</p>\n",
                    escape(&edu.institution),
                    escape(&edu.study_type),
                    escape(&edu.area),
                    escape(&date_range(&edu.start_date, edu.end_date.as_deref()))
                ));
            }
        }
        Screen::Skills => {
            for skill in &doc.skills {
                html.push_str(&format!(
                    "<h3>{} ({})</h3>\n<p>{}</p>\n",
                    escape(&skill.name),
                    escape(&skill.level),
                    escape(&skill.keywords.join(", "))
                ));
            }
        }
        Screen::Langs => {
            for lang in &doc.languages {
                html.push_str(&format!(
                    "<p>{}: {}</p>\n",
                    escape(&lang.language),
                    escape(&lang.fluency)
                ));
            }
        }
    }
    format!(
        "<h2>{}</h2>\n{html}<p class=\"hint\">Press ESC to return to the menu</p>\n",
        screen_title(state.screen)
    )
}

const STYLE: &str = "body { background: #5c94fc; color: #fff; font-family: 'Press Start 2P', monospace; padding: 2rem; }\n\
                     .screen { max-width: 42rem; margin: 0 auto 2rem; background: #000; padding: 2rem; border: 4px solid #fff; border-radius: 8px; }\n\
                     h1, h2, h3, .hint { color: #ffd700; }\n\
                     .menu { list-style: none; padding: 0; }\n\
                     .selected { background: #fff; color: #000; }";

/// Static page: the menu followed by every screen.
pub fn render(doc: &CvDocument) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<section class=\"screen\" id=\"menu\">\n{}</section>\n",
        render_screen(doc, MenuState::default())
    ));
    for (i, (screen, _)) in MENU.iter().enumerate() {
        let state = MenuState {
            selected: i,
            screen: *screen,
        };
        body.push_str(&format!(
            "<section class=\"screen\" id=\"screen-{i}\">\n{}</section>\n",
            render_screen(doc, state)
        ));
    }
    page(&doc.basics.name, STYLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::WorkItem;

    #[test]
    fn test_navigation_wraps() {
        let state = MenuState::default().handle_key(Key::Up);
        assert_eq!(state.selected, MENU.len() - 1);
        assert_eq!(state.handle_key(Key::Down).selected, 0);
    }

    #[test]
    fn test_enter_and_escape() {
        let state = MenuState::default()
            .handle_key(Key::Down)
            .handle_key(Key::Enter);
        assert_eq!(state.screen, Screen::Exp);
        let back = state.handle_key(Key::Escape);
        assert_eq!(back.screen, Screen::Menu);
        assert_eq!(back.selected, 1);
    }

    #[test]
    fn test_menu_marks_selection() {
        let html = render_screen(&CvDocument::default(), MenuState::default());
        assert!(html.contains("<li class=\"selected\">&rarr; PERSONAL INFO</li>"));
    }

    #[test]
    fn test_exp_screen_shows_present() {
        let mut doc = CvDocument::default();
        doc.work.push(WorkItem {
            company: "Mushroom Kingdom".into(),
            start_date: "1985".into(),
            ..Default::default()
        });
        let html = render_screen(
            &doc,
            MenuState {
                selected: 1,
                screen: Screen::Exp,
            },
        );
        assert!(html.contains("<h2>WORK EXPERIENCE</h2>"));
        assert!(html.contains("1985 - Present"));
    }

    #[test]
    fn test_page_has_all_screens() {
        let html = render(&CvDocument::default());
        assert_eq!(html.matches("class=\"screen\"").count(), MENU.len() + 1);
    }
}
