use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(teacher_nav: bool) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::HOME_URL) {
                            strong { "Card Clash" }
                        }
                    }
                }
                ul {
                    @if teacher_nav {
                        li { a href=(names::DASHBOARD_URL) { "Dashboard" } }
                        li { a href=(names::SESSIONS_URL) { "Sessions" } }
                        li { a href=(names::NEW_DECK_URL) { "New deck" } }
                        li {
                            form action=(names::LOGOUT_URL) method="post" class="inline" {
                                button type="submit" class="link" { "Log out" }
                            }
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn document(title: &str, body: Markup, teacher_nav: bool) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (icon())

            title { (format!("{title} - Card Clash")) }
        }

        body."container" {
            (header(teacher_nav))
            main { (body) }
        }
    }
}

/// Full page for visitors and students.
pub fn page(title: &str, body: Markup) -> Markup {
    document(title, body, false)
}

/// Full page with the teacher navigation bar.
pub fn teacher_page(title: &str, body: Markup) -> Markup {
    document(title, body, true)
}
