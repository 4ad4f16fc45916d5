use crate::storage::KeyValueStore;
use crate::tabs::Tab;
use crate::view::Visualization;
use crate::widget::{Document, Widget};

#[derive(Debug, Clone, Copy)]
pub struct Page {
    template: &'static str,
}

impl Page {
    pub fn index() -> Self {
        Self {
            template: INDEX_HTML,
        }
    }

    pub fn from_template(template: &'static str) -> Self {
        Self { template }
    }

    pub fn render<S: KeyValueStore>(&self, widget: &Widget<S>) -> String {
        let tabs = widget.tabs();
        let status = widget.status();
        self.template
            .replace("{{DATE}}", &escape_html(widget.date()))
            .replace("{{RATING}}", &escape_html(widget.rating()))
            .replace("{{STATUS}}", &escape_html(&status.message))
            .replace("{{STATUS_KIND}}", status.kind.as_str())
            .replace("{{RATE_SELECTED}}", selected_attr(tabs.is_selected(Tab::Rate)))
            .replace("{{ANSWERS_SELECTED}}", selected_attr(tabs.is_selected(Tab::Answers)))
            .replace("{{RATE_HIDDEN}}", hidden_attr(tabs.is_hidden(Tab::Rate)))
            .replace("{{ANSWERS_HIDDEN}}", hidden_attr(tabs.is_hidden(Tab::Answers)))
            .replace("{{VISUALIZATION}}", &render_visualization_html(widget.visualization()))
    }
}

impl Document for Page {
    fn has_element(&self, id: &str) -> bool {
        self.template.contains(&format!("id=\"{id}\""))
    }

    fn tab_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (start, _) in self.template.match_indices("role=\"tab\"") {
            let tag_start = self.template[..start].rfind('<').unwrap_or(0);
            let tag_end = self.template[start..]
                .find('>')
                .map_or(self.template.len(), |offset| start + offset);
            if let Some(name) = attribute(&self.template[tag_start..tag_end], "data-tab") {
                names.push(name.to_string());
            }
        }
        names
    }
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { "true" } else { "false" }
}

fn hidden_attr(hidden: bool) -> &'static str {
    if hidden { " hidden" } else { "" }
}

pub fn render_visualization_html(visualization: &Visualization) -> String {
    match visualization {
        Visualization::Empty { message } => {
            format!("<p class=\"placeholder\">{}</p>", escape_html(message))
        }
        Visualization::Chart { summary_line, bars } => {
            let mut html = format!("<p class=\"summary\">{}</p>\n<ul class=\"bars\">", escape_html(summary_line));
            for bar in bars {
                html.push_str(&format!(
                    "\n  <li class=\"bar-row\"><span class=\"bar-date\">{}</span><span class=\"bar-track\"><span class=\"bar-fill\" style=\"width: {:.0}%\"></span></span><span class=\"bar-value\">{}</span></li>",
                    escape_html(&bar.date),
                    bar.fill * 100.0,
                    bar.rating
                ));
            }
            html.push_str("\n</ul>");
            html
        }
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Ratings</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab[aria-selected="true"] {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    input {
      font: inherit;
      font-size: 1.1rem;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      margin-top: 16px;
    }

    .action {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .action.primary {
      background: var(--accent);
    }

    .action.secondary {
      background: var(--accent-2);
    }

    .summary {
      margin: 0 0 12px;
      font-weight: 600;
      color: var(--accent-2);
    }

    .placeholder {
      margin: 0;
      color: #6f6a65;
    }

    .bars {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 110px 1fr 32px;
      align-items: center;
      gap: 12px;
    }

    .bar-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
      overflow: hidden;
    }

    .bar-fill {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Ratings</h1>
      <p class="subtitle">Rate each day from 1 to 5, then look back or export the lot.</p>
    </header>

    <form class="tabs" role="tablist" method="post" action="/tab">
      <button class="tab" type="submit" name="tab" value="rate" role="tab" data-tab="rate" aria-selected="{{RATE_SELECTED}}">Rate</button>
      <button class="tab" type="submit" name="tab" value="answers" role="tab" data-tab="answers" aria-selected="{{ANSWERS_SELECTED}}">Answers</button>
    </form>

    <section class="panel" role="tabpanel" data-tab="rate"{{RATE_HIDDEN}}>
      <form id="rate-form" method="post" action="/save">
        <div class="fields">
          <label>Date
            <input id="date" name="date" type="date" value="{{DATE}}" />
          </label>
          <label>Rating (1-5)
            <input id="rating" name="rating" type="number" min="1" max="5" step="1" value="{{RATING}}" />
          </label>
        </div>
        <div class="actions">
          <button class="action primary" id="save" type="submit">Save rating</button>
          <button class="action secondary" id="show" type="submit" formaction="/date">Show saved rating</button>
        </div>
      </form>
      <form method="post" action="/export" class="actions">
        <button class="action secondary" id="export" type="submit">Export CSV</button>
      </form>
    </section>

    <section class="panel" role="tabpanel" data-tab="answers"{{ANSWERS_HIDDEN}}>
      <div id="visualization">
{{VISUALIZATION}}
      </div>
    </section>

    <div class="status" id="status" role="status" data-type="{{STATUS_KIND}}">{{STATUS}}</div>
  </main>

  <script>
    const dateInput = document.getElementById('date');
    if (dateInput) {
      dateInput.addEventListener('change', () => {
        const form = dateInput.form;
        form.action = '/date';
        form.submit();
      });
    }
  </script>
</body>
</html>
"#;
