use maud::{html, Markup};

use crate::frontend::view::ListingTable;

pub fn listing_table(table: &ListingTable) -> Markup {
    html! {
        table class="listings" {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}
