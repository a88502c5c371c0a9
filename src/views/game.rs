use maud::{html, Markup};

use crate::{db::Deck, names};

pub fn game(deck: &Deck, unity_path: &str) -> Markup {
    html! {
        h1 { "Launch Game" }
        p {
            "Playing "
            mark { (deck.title) }
            " · "
            a href=(names::edit_deck_url(deck.id)) { "Edit deck" }
        }
        section.game-frame data-deck-id=(deck.id) {
            iframe src=(unity_path) title=(deck.title) allowfullscreen {}
        }
    }
}
