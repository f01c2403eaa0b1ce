use itertools::Itertools;
use log::error;
use maud::{html, Markup};

use crate::{callbacks::Binding, charts::Figure};

/// Chart mount point. dashboard.js draws the figure carried in `data-figure`
pub fn chart(dom_id: &str, figure: &Figure) -> Markup {
    let spec = serde_json::to_string(figure).unwrap_or_else(|e| {
        error!("error serializing figure for {}: {}", dom_id, e);
        String::from("{}")
    });

    html! {
        div id=(dom_id) class="chart" data-figure=(spec) {}
    }
}

/// Chart that re-fetches itself whenever one of its bound inputs changes
pub fn chart_region(binding: &Binding, figure: &Figure) -> Markup {
    let dom_id = binding.output.dom_id();
    let trigger = binding
        .input_dom_ids()
        .map(|id| format!("change from:#{}", id))
        .join(", ");
    let include = binding.input_dom_ids().map(|id| format!("#{}", id)).join(", ");

    html! {
        div id=(format!("{}-container", dom_id))
            class="chart-container"
            hx-get=(format!("/fragments/charts/{}", dom_id))
            hx-trigger=(trigger)
            hx-include=(include)
            hx-swap="innerHTML" {
            (chart(dom_id, figure))
        }
    }
}

/// Chart computed once at startup, never re-fetched
pub fn static_chart(dom_id: &str, figure: &Figure) -> Markup {
    html! {
        div class="chart-container" {
            (chart(dom_id, figure))
        }
    }
}
