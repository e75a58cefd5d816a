// src/views.rs

//! HTML de las páginas. Sin estilos: solo estructura y formularios.

pub mod contacto;
pub mod dashboard;
pub mod login;
pub mod tomar_cliente;

use std::fmt::Write;

use crate::common::form::FormChoice;

/// Escapa texto para insertarlo en HTML (contenido y atributos).
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} · PeruLog Pallets</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            "<main>\n{}\n<p><a href=\"/dashboard\">Volver al dashboard</a></p>\n</main>",
            alert(message)
        ),
    )
}

pub(crate) fn alert(message: &str) -> String {
    format!("<p role=\"alert\" class=\"error\">{}</p>", escape(message))
}

pub(crate) fn notice(message: &str) -> String {
    format!("<p role=\"status\" class=\"message\">{}</p>", escape(message))
}

pub(crate) fn text_input(name: &str, label: &str, kind: &str, value: Option<&str>) -> String {
    format!(
        "<label>{label}<input type=\"{kind}\" name=\"{name}\" value=\"{value}\"></label>",
        label = escape(label),
        kind = kind,
        name = name,
        value = escape(value.unwrap_or_default()),
    )
}

/// `<select>` con las opciones de `T`; `with_blank` agrega la opción "—".
/// Un valor enviado que no está entre las opciones queda sin marcar.
pub(crate) fn select<T: FormChoice>(
    name: &str,
    label: &str,
    selected: Option<&str>,
    with_blank: bool,
) -> String {
    let mut html = format!("<label>{}<select name=\"{}\">", escape(label), name);
    if with_blank {
        let _ = write!(html, "<option value=\"\">—</option>");
    }
    for &choice in T::ALL {
        let attr = if selected == Some(choice.as_str()) { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escape(choice.as_str()),
            attr,
            escape(choice.label())
        );
    }
    html.push_str("</select></label>");
    html
}

pub(crate) fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{}\"{}> {}</label>",
        name,
        if checked { " checked" } else { "" },
        escape(label)
    )
}
