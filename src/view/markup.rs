//! Standalone HTML rendering of the panel
//!
//! Produces a self-contained document for webview-style hosts. Every control
//! carries a `data-setting` attribute with its key; the embedded script posts
//! `{type: "updateSetting", setting, value}` messages on change and
//! `{type: "openSettings"}` from the footer link. Number and select values are
//! posted as strings, toggles as booleans.

use super::model::{ControlView, GroupView, PanelView, RowView};

const STYLE: &str = "body{font-family:sans-serif;margin:0;padding:12px 16px;}\
.group-header{cursor:pointer;font-weight:600;padding:6px 0;user-select:none;}\
.group-header::before{content:'\\25BE  ';}\
.group-header.collapsed::before{content:'\\25B8  ';}\
.group-content.collapsed{display:none;}\
.setting-item{display:flex;justify-content:space-between;align-items:center;padding:6px 0 6px 16px;}\
.setting-item .title{font-weight:500;}\
.setting-item .description{font-size:12px;opacity:0.7;}\
.setting-item .setting-control{flex:0 0 160px;width:160px;text-align:right;}\
.setting-control select,.setting-control input[type=number]{width:100%;box-sizing:border-box;}\
.footer{margin-top:16px;}";

const SCRIPT: &str = "const vscode = acquireVsCodeApi();\n\
document.querySelectorAll('.group-header').forEach(header => {\n\
  header.addEventListener('click', () => {\n\
    const body = document.querySelector('.group-content[data-group=\"' + header.dataset.group + '\"]');\n\
    header.classList.toggle('collapsed');\n\
    if (body) { body.classList.toggle('collapsed'); }\n\
  });\n\
});\n\
document.querySelectorAll('[data-setting]').forEach(control => {\n\
  control.addEventListener('change', () => {\n\
    const value = control.type === 'checkbox' ? control.checked : control.value;\n\
    vscode.postMessage({ type: 'updateSetting', setting: control.dataset.setting, value });\n\
  });\n\
});\n\
document.getElementById('open-settings').addEventListener('click', event => {\n\
  event.preventDefault();\n\
  vscode.postMessage({ type: 'openSettings' });\n\
});\n";

/// Render the full document
pub fn render_markup(view: &PanelView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Popular Settings</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    for (index, group) in view.groups.iter().enumerate() {
        render_group(&mut html, index, group);
    }

    html.push_str(
        "<div class=\"footer\"><a href=\"#\" id=\"open-settings\">Open settings.json</a></div>\n",
    );
    html.push_str(&format!("<script>\n{}</script>\n", SCRIPT));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_group(html: &mut String, index: usize, group: &GroupView) {
    html.push_str("<div class=\"settings-group\">\n");
    html.push_str(&format!(
        "<div class=\"group-header\" data-group=\"{}\">{}</div>\n",
        index,
        escape_html(&group.title)
    ));
    html.push_str(&format!(
        "<div class=\"group-content\" data-group=\"{}\">\n",
        index
    ));
    for row in &group.rows {
        render_row(html, row);
    }
    html.push_str("</div>\n</div>\n");
}

fn render_row(html: &mut String, row: &RowView) {
    html.push_str("<div class=\"setting-item\">\n<div class=\"label\">");
    html.push_str(&format!(
        "<div class=\"title\">{}</div><div class=\"description\">{}</div>",
        escape_html(&row.title),
        escape_html(&row.description)
    ));
    html.push_str("</div>\n<div class=\"setting-control\">");
    if let Some(control) = &row.control {
        render_control(html, &row.key, control);
    }
    html.push_str("</div>\n</div>\n");
}

fn render_control(html: &mut String, key: &str, control: &ControlView) {
    let key = escape_html(key);
    match control {
        ControlView::Toggle { checked } => {
            html.push_str(&format!(
                "<input type=\"checkbox\" data-setting=\"{}\"{}>",
                key,
                if *checked { " checked" } else { "" }
            ));
        }
        ControlView::NumberInput { text } => {
            html.push_str(&format!(
                "<input type=\"number\" data-setting=\"{}\" value=\"{}\">",
                key,
                escape_html(text)
            ));
        }
        ControlView::Select { options } => {
            html.push_str(&format!("<select data-setting=\"{}\">", key));
            for option in options {
                html.push_str(&format!(
                    "<option value=\"{}\"{}>{}</option>",
                    escape_html(&option.value),
                    if option.selected { " selected" } else { "" },
                    escape_html(&option.label)
                ));
            }
            html.push_str("</select>");
        }
    }
}

/// Escape text for element content and attribute values.
///
/// Line breaks become character references so the parser doesn't normalize
/// `\r\n` inside option values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\r' => escaped.push_str("&#13;"),
            '\n' => escaped.push_str("&#10;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::model::OptionView;

    fn view() -> PanelView {
        PanelView {
            groups: vec![GroupView {
                title: "Files & Saving".into(),
                rows: vec![
                    RowView {
                        key: "files.autoSave".into(),
                        title: "Auto Save".into(),
                        description: "Controls <auto> save".into(),
                        control: Some(ControlView::Select {
                            options: vec![
                                OptionView {
                                    value: "off".into(),
                                    label: "off".into(),
                                    selected: false,
                                },
                                OptionView {
                                    value: "afterDelay".into(),
                                    label: "afterDelay".into(),
                                    selected: true,
                                },
                            ],
                        }),
                    },
                    RowView {
                        key: "files.eol".into(),
                        title: "EOL".into(),
                        description: String::new(),
                        control: Some(ControlView::Select {
                            options: vec![OptionView {
                                value: "\r\n".into(),
                                label: "\\r\\n".into(),
                                selected: false,
                            }],
                        }),
                    },
                    RowView {
                        key: "editor.minimap.enabled".into(),
                        title: "Minimap".into(),
                        description: String::new(),
                        control: Some(ControlView::Toggle { checked: true }),
                    },
                    RowView {
                        key: "editor.fontSize".into(),
                        title: "Font Size".into(),
                        description: String::new(),
                        control: Some(ControlView::NumberInput { text: "14".into() }),
                    },
                    RowView {
                        key: "odd.setting".into(),
                        title: "Odd".into(),
                        description: String::new(),
                        control: None,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_controls_carry_setting_keys() {
        let html = render_markup(&view());
        assert!(html.contains("<select data-setting=\"files.autoSave\">"));
        assert!(html.contains("<input type=\"checkbox\" data-setting=\"editor.minimap.enabled\" checked>"));
        assert!(html.contains("<input type=\"number\" data-setting=\"editor.fontSize\" value=\"14\">"));
        assert!(!html.contains("data-setting=\"odd.setting\""));
    }

    #[test]
    fn test_selected_option_and_escaping() {
        let html = render_markup(&view());
        assert!(html.contains("<option value=\"afterDelay\" selected>afterDelay</option>"));
        assert!(html.contains("<option value=\"&#13;&#10;\">\\r\\n</option>"));
        assert!(html.contains("Files &amp; Saving"));
        assert!(html.contains("Controls &lt;auto&gt; save"));
    }

    #[test]
    fn test_footer_and_script() {
        let html = render_markup(&view());
        assert!(html.contains("id=\"open-settings\">Open settings.json</a>"));
        assert!(html.contains("type: 'updateSetting'"));
        assert!(html.contains("type: 'openSettings'"));
        assert!(html.contains("class=\"group-header\" data-group=\"0\""));
        assert!(html.contains("class=\"group-content\" data-group=\"0\""));
        assert_eq!(html.matches("class=\"setting-item\"").count(), 5);
    }

    #[test]
    fn test_control_column_has_fixed_width() {
        let html = render_markup(&view());
        assert!(html.contains(".setting-control{flex:0 0 160px;width:160px;"));
        assert!(html.contains(".setting-control select,.setting-control input[type=number]{width:100%;"));
        assert!(!html.contains("min-width"));
    }
}
