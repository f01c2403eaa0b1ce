use maud::{html, Markup};

use crate::dataset::{Dataset, WeatherRow};

pub const PAGE_SIZE: usize = 10;

const COLUMNS: [&str; 8] = [
    "city",
    "state",
    "hour",
    "temperature",
    "humidity",
    "pressure",
    "latitude",
    "longitude",
];

/// One page of the joined table, pages are 1-based
#[derive(Debug)]
pub struct DataPage<'a> {
    pub rows: &'a [WeatherRow],
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<'a> DataPage<'a> {
    /// Out of range page numbers are clamped to the first or last page
    pub fn of(data: &'a Dataset, page: usize) -> Self {
        let total = data.len();
        let page_count = total.div_ceil(PAGE_SIZE).max(1);
        let page = page.clamp(1, page_count);
        let start = ((page - 1) * PAGE_SIZE).min(total);
        let end = (start + PAGE_SIZE).min(total);

        Self {
            rows: &data.rows()[start..end],
            page,
            page_count,
            total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Raw data preview box
pub fn data_preview(page: &DataPage) -> Markup {
    html! {
        div class="box" {
            h2 class="title is-5" { "Raw Data" }
            div id="data-preview" {
                (data_preview_body(page))
            }
        }
    }
}

/// Table and pager, swapped in place when paging
pub fn data_preview_body(page: &DataPage) -> Markup {
    html! {
        div class="table-container" {
            table class="table is-striped is-narrow is-hoverable is-fullwidth" {
                thead {
                    tr {
                        @for column in COLUMNS {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @if page.rows.is_empty() {
                        tr {
                            td colspan=(COLUMNS.len()) class="has-text-centered has-text-grey" {
                                "No observations loaded"
                            }
                        }
                    }
                    @for row in page.rows {
                        tr {
                            td { (row.city) }
                            td { (row.state) }
                            td { (row.hour) }
                            td { (row.temperature) }
                            td { (row.humidity) }
                            td { (row.pressure) }
                            td { (optional(row.latitude)) }
                            td { (optional(row.longitude)) }
                        }
                    }
                }
            }
        }
        nav class="level is-mobile" {
            div class="level-left" {
                p class="level-item is-size-7 has-text-grey" {
                    "Page " (page.page) " of " (page.page_count) " (" (page.total) " rows)"
                }
            }
            div class="level-right" {
                div class="level-item buttons are-small" {
                    (pager_button("Previous", page.page - 1, page.has_prev()))
                    (pager_button("Next", page.page + 1, page.has_next()))
                }
            }
        }
    }
}

fn pager_button(label: &str, target: usize, enabled: bool) -> Markup {
    html! {
        @if enabled {
            button class="button"
                hx-get=(format!("/fragments/data-preview?page={}", target))
                hx-target="#data-preview"
                hx-swap="innerHTML" {
                (label)
            }
        } @else {
            button class="button" disabled { (label) }
        }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::row;

    fn dataset(len: usize) -> Dataset {
        Dataset::new(
            (0..len)
                .map(|i| row("Ipoh", "Perak", i as u32, 30.0, 70.0, 1008.0, None))
                .collect(),
        )
    }

    #[test]
    fn pages_hold_at_most_ten_rows() {
        let data = dataset(23);
        assert_eq!(DataPage::of(&data, 1).rows.len(), 10);
        let last = DataPage::of(&data, 3);
        assert_eq!(last.rows.len(), 3);
        assert_eq!(last.page_count, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let data = dataset(23);
        assert_eq!(DataPage::of(&data, 0).page, 1);
        assert_eq!(DataPage::of(&data, 99).page, 3);
    }

    #[test]
    fn empty_table_has_one_empty_page() {
        let data = Dataset::new(vec![]);
        let page = DataPage::of(&data, 4);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.rows.is_empty());
        assert!(data_preview_body(&page)
            .into_string()
            .contains("No observations loaded"));
    }

    #[test]
    fn missing_coordinates_render_as_dash() {
        let data = dataset(1);
        let markup = data_preview_body(&DataPage::of(&data, 1)).into_string();
        assert!(markup.contains("<td>Ipoh</td>"));
        assert!(markup.contains("<td>-</td>"));
        assert!(!markup.contains("hx-get"));
    }
}
