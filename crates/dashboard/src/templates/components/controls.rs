use maud::{html, Markup};

use crate::{
    controls::{HourRange, StateFilter},
    view_model::{HourDomain, StateOption},
};

/// Two-handle hour range slider, rendered as a pair of range inputs
pub fn hour_range_slider(domain: &HourDomain, value: HourRange) -> Markup {
    html! {
        div class="field slider-field" {
            label class="label is-small" { "Hours" }
            div class="range-pair" {
                (hour_input("hour-range-lo", "lo", "hour-range-marks", domain, value.lo))
                (hour_input("hour-range-hi", "hi", "hour-range-marks", domain, value.hi))
            }
            (hour_marks("hour-range-marks", domain))
        }
    }
}

/// Single hour slider for the map
pub fn hour_slider(domain: &HourDomain, value: u32) -> Markup {
    html! {
        div class="field slider-field" {
            label class="label is-small" { "Hour" }
            (hour_input("hour-slider", "hour", "hour-slider-marks", domain, value))
            (hour_marks("hour-slider-marks", domain))
        }
    }
}

/// State dropdown. Always holds a value, `All` included
pub fn state_dropdown(options: &[StateOption], selected: &StateFilter) -> Markup {
    html! {
        div class="field state-field" {
            label class="label is-small" for="state-dropdown" { "State" }
            div class="control" {
                div class="select" {
                    select id="state-dropdown" name="state" {
                        @for option in options {
                            option value=(option.value) selected[option.value == selected.value()] {
                                (option.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn hour_input(id: &str, name: &str, marks_id: &str, domain: &HourDomain, value: u32) -> Markup {
    html! {
        div class="slider-with-tooltip" {
            input id=(id) class="slider" type="range" name=(name)
                min=(domain.min) max=(domain.max) step="1" value=(value)
                list=(marks_id);
            output class="slider-tooltip tag is-dark is-small" for=(id) { (value) }
        }
    }
}

fn hour_marks(id: &str, domain: &HourDomain) -> Markup {
    html! {
        datalist id=(id) {
            @for mark in &domain.marks {
                option value=(mark) label=(mark) {}
            }
        }
        div class="slider-marks is-size-7 has-text-grey" {
            @for mark in &domain.marks {
                span class="slider-mark" { (mark) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> HourDomain {
        HourDomain {
            min: 0,
            max: 23,
            marks: vec![0, 6, 12, 18, 23],
        }
    }

    #[test]
    fn range_slider_carries_both_bounds() {
        let markup = hour_range_slider(&domain(), HourRange::new(6, 18)).into_string();
        assert!(markup.contains(r#"id="hour-range-lo""#));
        assert!(markup.contains(r#"name="lo""#));
        assert!(markup.contains(r#"value="6""#));
        assert!(markup.contains(r#"name="hi""#));
        assert!(markup.contains(r#"value="18""#));
        assert!(markup.contains(r#"max="23""#));
    }

    #[test]
    fn dropdown_selects_current_state() {
        let options = vec![
            StateOption::from(&StateFilter::All),
            StateOption::from(&StateFilter::from("Johor")),
        ];
        let markup = state_dropdown(&options, &StateFilter::from("Johor")).into_string();
        assert!(markup.contains(r#"<option value="All">All States</option>"#));
        assert!(markup.contains(r#"<option value="Johor" selected>Johor</option>"#));
    }

    #[test]
    fn marks_list_every_hour() {
        let markup = hour_slider(&domain(), 12).into_string();
        assert_eq!(markup.matches(r#"class="slider-mark""#).count(), 5);
    }
}
