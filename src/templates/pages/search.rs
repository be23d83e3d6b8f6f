use maud::{html, Markup};

use crate::frontend::form::SearchForm;
use crate::frontend::view::ResultsView;
use crate::templates::components::{listing_table, notice, search_form};
use crate::templates::desktop_layout;

pub const PAGE_TITLE: &str = "Listing Search";
pub const NO_MATCHES_TEXT: &str = "No listings found for the selected filters.";

/// Form in the sidebar; the results area is empty until a search ran.
pub fn search_page(form: &SearchForm, results: Option<&ResultsView>) -> Markup {
    let content = html! {
        main {
            aside { (search_form(form)) }
            section class="results" {
                h1 { (PAGE_TITLE) }
                p class="subtitle" { "Find the right property for you." }

                @match results {
                    Some(ResultsView::Table(table)) => {
                        h2 { "Search results" }
                        (listing_table(table))
                    }
                    Some(ResultsView::NoMatches) => {
                        p class="no-matches" { (NO_MATCHES_TEXT) }
                    }
                    Some(ResultsView::Failed(n)) => {
                        (notice(n))
                    }
                    None => {}
                }
            }
        }
    };

    desktop_layout(PAGE_TITLE, content)
}
