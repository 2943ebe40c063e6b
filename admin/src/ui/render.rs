//! Server-side HTML for the admin screens.
//!
//! All user and API supplied text passes through `escape`.

use axum::response::Html;
use product_core::{Category, Notice, PriceFormat, Product};

use super::form::FormValues;
use super::Screen;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; min-height: 100vh; }
nav { width: 220px; background: #f0f2f6; padding: 24px; }
nav a { display: block; padding: 6px 0; color: #31333f; text-decoration: none; }
nav a.current { font-weight: bold; }
main { flex: 1; padding: 24px 48px; }
form { margin: 16px 0; max-width: 640px; }
label { display: block; margin-top: 12px; }
input[type=text], input[type=number], textarea, select { width: 100%; padding: 6px; }
.notice { padding: 12px; border-radius: 6px; margin: 8px 0; }
.notice.success { background: #dff5e3; }
.notice.info { background: #e1ecf8; }
.notice.warning { background: #fff4d6; }
.notice.error { background: #fde2e1; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 6px 12px; text-align: left; }
td.price { text-align: right; }
"#;

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn page(screen: Screen, notices: &[Notice], body: &str) -> Html<String> {
    let notices: String = notices.iter().map(notice).collect();
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>Product Management</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{menu}<main>\n<h1>Product Management</h1>\n<h2>{heading}</h2>\n{notices}{body}</main>\n</body>\n</html>\n",
        menu = menu(screen),
        heading = screen.heading(),
    ))
}

fn menu(current: Screen) -> String {
    let links: String = Screen::ALL
        .iter()
        .map(|&screen| {
            let class = if screen == current { " class=\"current\"" } else { "" };
            format!("<a href=\"{}\"{class}>{}</a>\n", screen.path(), screen.label())
        })
        .collect();
    format!("<nav>\n<h3>Menu</h3>\n{links}</nav>\n")
}

fn notice(notice: &Notice) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>\n",
        notice.level.as_str(),
        escape(&notice.message)
    )
}

/// Insert/edit form posting every product field to `action`.
pub fn product_form(action: &str, values: &FormValues, submit_label: &str) -> String {
    let checked = if values.available { " checked" } else { "" };
    let options: String = Category::ALL
        .iter()
        .map(|&category| {
            let selected = if category == values.category { " selected" } else { "" };
            format!("<option value=\"{category}\"{selected}>{category}</option>")
        })
        .collect();
    format!(
        concat!(
            "<form method=\"post\" action=\"{action}\">\n",
            "<label>Product Title <input type=\"text\" name=\"title\" maxlength=\"100\" value=\"{title}\"></label>\n",
            "<label>Product Description <textarea name=\"description\" maxlength=\"500\">{description}</textarea></label>\n",
            "<label>Product Price <input type=\"number\" name=\"price\" min=\"0.01\" step=\"any\" value=\"{price}\"></label>\n",
            "<label><input type=\"checkbox\" name=\"available\"{checked}> Available</label>\n",
            "<label>Product Category <select name=\"category\">{options}</select></label>\n",
            "<button type=\"submit\">{submit}</button>\n",
            "</form>\n"
        ),
        action = escape(action),
        title = escape(&values.title),
        description = escape(&values.description),
        price = escape(&values.price),
        checked = checked,
        options = options,
        submit = escape(submit_label),
    )
}

/// Product picker for the edit and delete screens; submits `?id=` to `action`.
pub fn selector(action: &str, products: &[Product], selected: i64) -> String {
    let options: String = products
        .iter()
        .map(|product| {
            let mark = if product.id == selected { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{mark}>{}</option>",
                product.id,
                escape(&product.label())
            )
        })
        .collect();
    format!(
        "<form method=\"get\" action=\"{}\">\n<label>Select a Product <select name=\"id\">{options}</select></label>\n<button type=\"submit\">Select</button>\n</form>\n",
        escape(action)
    )
}

pub fn delete_form(product: &Product) -> String {
    format!(
        concat!(
            "<form method=\"post\" action=\"/delete/{id}\">\n",
            "<p>Deleting <strong>{label}</strong> cannot be undone.</p>\n",
            "<label><input type=\"checkbox\" name=\"confirm\"> I confirm the deletion</label>\n",
            "<button type=\"submit\">Delete Product</button>\n",
            "</form>\n"
        ),
        id = product.id,
        label = escape(&product.label()),
    )
}

pub fn product_table(products: &[Product], price_format: &PriceFormat) -> String {
    let rows: String = products
        .iter()
        .map(|product| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"price\">{}</td><td>{}</td><td>{}</td></tr>\n",
                product.id,
                escape(&product.title),
                escape(product.description.as_deref().unwrap_or_default()),
                escape(&price_format.format(product.price)),
                if product.available { "Yes" } else { "No" },
                escape(product.category.as_deref().unwrap_or_default()),
            )
        })
        .collect();
    format!(
        "<table>\n<thead><tr><th>ID</th><th>Title</th><th>Description</th><th>Price</th><th>Available</th><th>Category</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n"
    )
}
