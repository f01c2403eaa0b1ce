use maud::{html, Markup};

/// Closing description of the dashboard
pub fn summary(attribution: Option<&str>) -> Markup {
    html! {
        div id="summary-text" class="content mt-5" {
            p {
                "This dashboard provides insights into weather patterns across various locations in Malaysia. "
                "You can explore temperature variations over time, humidity levels, and pressure statistics, "
                "as well as visualize geographical temperature distributions at specific hours."
            }
            @if let Some(attribution) = attribution {
                p class="is-size-7 has-text-grey" { (attribution) }
            }
        }
    }
}
