use maud::{html, Markup};

use crate::frontend::form::{
    SearchForm, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP, PROPERTY_TYPES,
};

pub fn search_form(form: &SearchForm) -> Markup {
    html! {
        form method="get" action="/search" class="search-form" {
            h2 { "Search filters" }

            label for="type" { "Property type" }
            select id="type" name="type" {
                @for ty in PROPERTY_TYPES {
                    option value=(ty) selected[ty == form.property_type] { (ty) }
                }
            }

            label for="postal_code" { "Postal code" }
            input type="text" id="postal_code" name="postal_code" value=(form.postal_code);

            label for="price_min" { "Minimum price" }
            input
                type="range"
                id="price_min"
                name="price_min"
                min=(PRICE_FLOOR)
                max=(PRICE_CEILING)
                step=(PRICE_STEP)
                value=(form.price_min)
                oninput="this.nextElementSibling.value = this.value";
            output for="price_min" { (form.price_min) }

            label for="price_max" { "Maximum price" }
            input
                type="range"
                id="price_max"
                name="price_max"
                min=(PRICE_FLOOR)
                max=(PRICE_CEILING)
                step=(PRICE_STEP)
                value=(form.price_max)
                oninput="this.nextElementSibling.value = this.value";
            output for="price_max" { (form.price_max) }

            p {
                button type="submit" class="primary" { "Search listings" }
            }
        }
    }
}
