//! HTML rendering of the shoe grid and single-card pages.

use minijinja::{context, Environment};
use thiserror::Error;

use shoefront_catalog::{ShoeCard, ShoeGrid};

#[derive(Debug, Error)]
#[error("failed to render {template}: {source}")]
pub struct RenderError {
    template: &'static str,
    #[source]
    source: minijinja::Error,
}

const LAYOUT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    :root {
      --color-white: hsl(0deg 0% 100%);
      --color-gray-700: hsl(220deg 5% 40%);
      --color-gray-900: hsl(220deg 3% 20%);
      --color-primary: hsl(340deg 65% 47%);
      --color-secondary: hsl(240deg 60% 63%);
    }
    body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 32px; }
    .shoe-link { text-decoration: none; color: inherit; }
    .shoe-card { position: relative; }
    .shoe-card img { width: 100%; display: flex; border-radius: 16px 16px 4px 4px; }
    .shoe-row { font-size: 1rem; display: flex; justify-content: space-between; }
    .shoe-name { font-weight: 500; color: var(--color-gray-900); margin: 14px 0 0; font-size: 1rem; }
    .shoe-price { color: var(--color-gray-900); margin-top: 14px; }
    .shoe-price.struck { color: var(--color-gray-700); text-decoration: line-through; }
    .shoe-colors { color: var(--color-gray-700); margin: 6px 0 0; }
    .shoe-sale-price { font-weight: 500; color: var(--color-primary); margin-top: 6px; }
    .shoe-flag {
      height: 32px; padding: 0 9px; border-radius: 2px;
      font-size: 0.875rem; font-weight: 700; color: var(--color-white);
      display: flex; align-items: center;
      position: absolute; top: 12px; right: -4px;
    }
    .shoe-flag.primary { background-color: var(--color-primary); }
    .shoe-flag.secondary { background-color: var(--color-secondary); }
  </style>
</head>
<body>
{% block content %}{% endblock %}
</body>
</html>
"#;

const CARD_TEMPLATE: &str = r#"<a class="shoe-link" href="{{ card.href }}">
  <article class="shoe-card" data-variant="{{ card.variant }}">
    <div><img alt="" src="{{ card.image_src }}"></div>
    <div class="shoe-row">
      <h3 class="shoe-name">{{ card.name }}</h3>
      <span class="shoe-price{% if card.price_style == "struck" %} struck{% endif %}">{{ card.price }}</span>
    </div>
    <div class="shoe-row">
      <p class="shoe-colors">{{ card.color_label }}</p>
      {%- if card.sale_price %}
      <span class="shoe-sale-price">{{ card.sale_price }}</span>
      {%- endif %}
    </div>
    {%- if card.badge %}
    <div class="shoe-flag {{ card.badge.tone }}">{{ card.badge.label }}</div>
    {%- endif %}
  </article>
</a>
"#;

const GRID_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block content %}
<div class="shoe-grid" style="display: flex; flex-wrap: wrap; gap: {{ grid.layout.gap_px }}px;">
  {%- for card in grid.cards %}
  <div class="shoe-grid-cell" style="flex: 1 1 {{ grid.layout.card_basis_percent }}%; min-width: {{ grid.layout.card_min_width_px }}px;">
    {% include "card.html" %}
  </div>
  {%- else %}
  <p>No shoes to show.</p>
  {%- endfor %}
</div>
{% endblock %}
"#;

const SHOE_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block content %}
<div style="max-width: 400px;">
  {% include "card.html" %}
</div>
<p><a href="/">Back to all shoes</a></p>
{% endblock %}
"#;

const ERROR_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block content %}
<h1>{{ title }}</h1>
<p>{{ message }}</p>
<p><a href="/">Back to all shoes</a></p>
{% endblock %}
"#;

/// Template environment with every page registered.
///
/// Template names end in `.html`, so minijinja auto-escapes all interpolated
/// values.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for (name, source) in [
            ("layout.html", LAYOUT_TEMPLATE),
            ("card.html", CARD_TEMPLATE),
            ("grid.html", GRID_TEMPLATE),
            ("shoe.html", SHOE_TEMPLATE),
            ("error.html", ERROR_TEMPLATE),
        ] {
            env.add_template(name, source)
                .map_err(|source| RenderError { template: name, source })?;
        }
        Ok(Self { env })
    }

    pub fn grid_page(&self, grid: &ShoeGrid) -> Result<String, RenderError> {
        self.render("grid.html", context! { title => "Shoes", grid })
    }

    pub fn shoe_page(&self, card: &ShoeCard) -> Result<String, RenderError> {
        self.render("shoe.html", context! { title => &card.name, card })
    }

    pub fn not_found_page(&self, message: &str) -> Result<String, RenderError> {
        self.error_page("Not found", message)
    }

    pub fn error_page(&self, title: &str, message: &str) -> Result<String, RenderError> {
        self.render("error.html", context! { title, message })
    }

    fn render(&self, template: &'static str, ctx: minijinja::Value) -> Result<String, RenderError> {
        self.env
            .get_template(template)
            .and_then(|t| t.render(ctx))
            .map_err(|source| RenderError { template, source })
    }
}
