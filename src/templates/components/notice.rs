use maud::{html, Markup};

use crate::frontend::notice::Notice;

pub fn notice(n: &Notice) -> Markup {
    html! {
        div class=(n.level.css_class()) role="status" { (n.text) }
    }
}
