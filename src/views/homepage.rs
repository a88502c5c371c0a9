use maud::{html, Markup};

use crate::names;

pub fn landing_page() -> Markup {
    html! {
        section.landing-hero {
            h1 { "Card Clash" }
            p.landing-hero-desc { "A classroom quiz battle. Pick who you are to get started." }
            div.landing-cta {
                a role="button" href=(names::JOIN_URL) { "I'm a student" }
                a role="button" href=(names::LOGIN_URL) class="outline" { "I'm a teacher" }
            }
        }
    }
}

pub enum LoginState {
    NoError,
    InvalidCredentials,
}

pub fn login(state: LoginState) -> Markup {
    html! {
        h1 { "Teacher Login" }
        p { "Sign in to manage decks and review sessions." }
        article style="width: fit-content;" {
            form action=(names::LOGIN_URL) method="post" {
                label {
                    "Username"
                    input name="username"
                          type="text"
                          autocomplete="username"
                          required="true"
                          aria-label="Username";
                }
                label {
                    "Password"
                    @match state {
                        LoginState::NoError => {
                            input name="password"
                                  type="password"
                                  autocomplete="current-password"
                                  required="true"
                                  aria-label="Password";
                        },
                        LoginState::InvalidCredentials => {
                            input name="password"
                                  type="password"
                                  autocomplete="current-password"
                                  required="true"
                                  aria-invalid="true"
                                  aria-label="Password";
                            small { "Invalid username or password." }
                        },
                    }
                }
                button type="submit" { "Log in" }
            }
        }
    }
}

pub fn student_join(unity_path: &str) -> Markup {
    html! {
        section.game-frame {
            iframe src=(unity_path) title="Card Clash" allowfullscreen {}
        }
    }
}
