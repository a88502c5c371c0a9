use maud::{html, Markup};

use crate::{
    db::SessionMetrics,
    names,
    view_models::{DashboardData, DeckSummary, SessionReport, SessionSummary},
};

fn metrics(metrics: &SessionMetrics) -> Markup {
    html! {
        ul.metrics {
            li { "Rounds played: " strong { (metrics.rounds_played) } }
            li { "Average accuracy: " strong { (metrics.average_accuracy) } }
            li { "Average response time: " strong { (metrics.average_response_time) } }
        }
    }
}

fn deck_table(decks: &[DeckSummary]) -> Markup {
    html! {
        @if decks.is_empty() {
            p { "No decks yet." }
        } @else {
            table {
                thead { tr {
                    th { "Deck" }
                    th { "Questions" }
                    th {}
                } }
                tbody {
                    @for deck in decks {
                        tr {
                            td { (deck.title) }
                            td { (deck.question_count) }
                            td {
                                a href=(names::edit_deck_url(deck.id)) { "Edit" }
                                " · "
                                a href=(names::play_deck_url(deck.id)) { "Play" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn session_list(sessions: &[SessionSummary]) -> Markup {
    html! {
        @if sessions.is_empty() {
            p { "No sessions have been played yet." }
        }
        @for session in sessions {
            article.session-card {
                header {
                    a href=(names::report_url(session.id)) { strong { (session.deck_title) } }
                    " "
                    small { (session.created_at) }
                }
                @if let Some(preview) = &session.summary_preview {
                    p { (preview) }
                }
                (metrics(&session.metrics))
            }
        }
    }
}

pub fn dashboard(data: &DashboardData) -> Markup {
    html! {
        h1 { "Dashboard" }

        section {
            h2 { "Decks" }
            (deck_table(&data.decks))
            a role="button" href=(names::NEW_DECK_URL) { "Create deck" }
        }

        section {
            h2 { "Recent sessions" }
            (session_list(&data.sessions))
        }
    }
}

pub fn sessions(sessions: &[SessionSummary]) -> Markup {
    html! {
        h1 { "Sessions" }
        (session_list(sessions))
    }
}

pub fn report(report: &SessionReport) -> Markup {
    html! {
        h1 { "Session Report" }
        p {
            strong { (report.deck_title) }
            " · "
            (report.created_at)
        }

        article {
            header { h2 { "Summary" } }
            @if report.summary_paragraphs.is_empty() {
                p { em { "No summary has been written for this session yet." } }
            }
            @for paragraph in &report.summary_paragraphs {
                p { (paragraph) }
            }
        }

        article {
            header { h2 { "Metrics" } }
            (metrics(&report.metrics))
        }

        a href=(names::SESSIONS_URL) { "All sessions" }
    }
}
