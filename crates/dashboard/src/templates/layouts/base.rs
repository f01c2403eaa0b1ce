use maud::{html, Markup, DOCTYPE};

pub struct PageConfig<'a> {
    pub title: &'a str,
}

pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
                link rel="stylesheet" href="/static/styles.css";
                script src="https://cdn.jsdelivr.net/npm/htmx.org@1.9.10/dist/htmx.min.js" {}
                script src=(PLOTLY_SRC) charset="utf-8" {}
            }
            body {
                section class="section" {
                    div class="container" {
                        nav class="level mb-4" {
                            div class="level-left" {
                                a href="/" class="has-text-current" style="text-decoration: none;" {
                                    h1 class="title level-item" { (config.title) }
                                }
                            }
                            div class="level-right" {
                                p class="level-item" {
                                    a href="/docs" class="button is-link is-light is-small ml-2 mr-2" {
                                        "API Docs"
                                    }
                                }
                            }
                        }

                        div id="main-content" {
                            (content)
                        }
                    }
                }

                script src="/static/dashboard.js" {}
            }
        }
    }
}
