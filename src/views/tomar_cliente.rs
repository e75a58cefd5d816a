// src/views/tomar_cliente.rs

use std::fmt::Write;

use crate::{
    models::cliente::Client,
    views::{alert, escape, layout, notice},
};

pub struct TomarClienteView<'a> {
    pub query: &'a str,
    pub results: &'a [Client],
    pub error: Option<&'a str>,
    /// La última búsqueda falló y se muestran los resultados anteriores.
    pub stale: bool,
}

const STALE_RESULTS: &str =
    "No se pudo completar la búsqueda; se muestran los resultados anteriores.";

pub fn render(view: &TomarClienteView<'_>) -> String {
    let mut body = format!(
        "<main>\n<p><a href=\"/dashboard\">← Volver al dashboard</a></p>\n\
         <h1>Tomar cliente</h1>\n\
         <p>Busca la empresa que quieres asociar a tu cartera por parte o toda \
         la razón social o número de RUC.</p>\n\
         <form method=\"get\" action=\"/dashboard/tomar-cliente\">\n\
         <input type=\"search\" name=\"q\" value=\"{}\" \
         placeholder=\"Ejemplo: TECSUR o 20206018411\">\n\
         <button type=\"submit\">Buscar</button>\n\
         <a href=\"/dashboard/tomar-cliente\">Limpiar</a>\n\
         </form>\n",
        escape(view.query)
    );

    if let Some(error) = view.error {
        body.push_str(&alert(error));
    }
    if view.stale {
        body.push_str(&notice(STALE_RESULTS));
    }

    body.push_str(
        "<table>\n<thead><tr><th>RUC</th><th>Razón social</th><th>Acción</th></tr></thead>\n\
         <tbody>\n",
    );
    if view.results.is_empty() {
        body.push_str("<tr><td colspan=\"3\">Sin resultados</td></tr>\n");
    }
    for client in view.results {
        let _ = writeln!(
            body,
            "<tr><td>{ruc}</td><td>{razon}</td><td>\
             <form method=\"post\" action=\"/dashboard/tomar-cliente\">\
             <input type=\"hidden\" name=\"id_cliente\" value=\"{id}\">\
             <button type=\"submit\">Tomar</button></form></td></tr>",
            ruc = escape(&client.ruc),
            razon = escape(&client.razon_social),
            id = client.id,
        );
    }
    body.push_str("</tbody>\n</table>\n</main>");

    layout("Tomar cliente", &body)
}
