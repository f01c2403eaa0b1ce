use maud::{html, Markup};

/// Dashboard tabs, one per chart
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Temperature,
    Humidity,
    Pressure,
    Geographic,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Temperature, Tab::Humidity, Tab::Pressure, Tab::Geographic];

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Temperature => "temperature",
            Tab::Humidity => "humidity",
            Tab::Pressure => "pressure",
            Tab::Geographic => "geographic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Temperature => "Temperature Graph",
            Tab::Humidity => "Humidity Graph",
            Tab::Pressure => "Pressure Histogram",
            Tab::Geographic => "Geographical Plot",
        }
    }
}

/// Tab strip. Switching is handled client side by dashboard.js
pub fn tabs(active: Tab) -> Markup {
    html! {
        div class="tabs is-boxed mb-0" role="tablist" {
            ul {
                @for tab in Tab::ALL {
                    li class=(tab_item_class(active, tab)) {
                        a role="tab" data-tab=(tab.key()) {
                            span { (tab.label()) }
                        }
                    }
                }
            }
        }
    }
}

/// Panel hosting one tab's controls and chart; only the active panel is visible
pub fn tab_panel(tab: Tab, active: Tab, content: Markup) -> Markup {
    html! {
        div class="tab-panel box" role="tabpanel" data-panel=(tab.key())
            hidden[tab != active] {
            (content)
        }
    }
}

fn tab_item_class(current: Tab, tab: Tab) -> &'static str {
    if current == tab {
        "is-active"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_is_marked() {
        let markup = tabs(Tab::Humidity).into_string();
        assert!(markup.contains(r#"<li class="is-active"><a role="tab" data-tab="humidity">"#));
        assert!(markup.contains("Geographical Plot"));
    }

    #[test]
    fn inactive_panels_are_hidden() {
        let hidden = tab_panel(Tab::Pressure, Tab::Temperature, html! {}).into_string();
        assert!(hidden.contains("hidden"));

        let shown = tab_panel(Tab::Temperature, Tab::Temperature, html! {}).into_string();
        assert!(!shown.contains("hidden"));
    }
}
