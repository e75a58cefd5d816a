// src/views/dashboard.rs

use std::fmt::Write;

use crate::{
    models::{
        cartera::PortfolioItem,
        vendedor::{KpiSnapshot, Salesperson},
    },
    views::{alert, escape, layout},
};

pub struct DashboardView<'a> {
    pub vendedor: &'a Salesperson,
    pub cartera: &'a [PortfolioItem],
    pub error: Option<&'a str>,
    /// `Some` solo cuando el usuario pidió ver los KPIs.
    pub kpi: Option<&'a KpiSnapshot>,
}

pub fn render(view: &DashboardView<'_>) -> String {
    let mut body = format!(
        "<main>\n<header>\n<h1>Mi cartera</h1>\n<p class=\"email\">{}</p>\n\
         <p class=\"vendedor\"><strong>{}</strong></p>\n</header>\n",
        escape(&view.vendedor.email),
        escape(&view.vendedor.full_name())
    );

    body.push_str(
        "<nav>\n<a href=\"/dashboard?kpi=1\">KPIs</a>\n\
         <a href=\"/dashboard/tomar-cliente\">Tomar cliente</a>\n\
         <form method=\"post\" action=\"/logout\">\
         <button type=\"submit\">Cerrar sesión</button></form>\n\
         </nav>\n",
    );

    if let Some(error) = view.error {
        body.push_str(&alert(error));
    }

    body.push_str(
        "<table>\n<thead><tr><th>RUC</th><th>Cliente</th><th>Contactos</th><th>Estado</th>\
         <th>Fecha alta</th><th>Fecha límite</th><th>Días</th><th>Acción</th></tr></thead>\n\
         <tbody>\n",
    );
    for item in view.cartera {
        let _ = writeln!(
            body,
            "<tr data-id=\"{id}\"><td>{ruc}</td><td>{razon}</td>\
             <td class=\"contactos\">{contactos}</td>\
             <td>{estado}</td><td>{alta}</td><td>{limite}</td><td class=\"dias\">{dias}</td>\
             <td><a href=\"/contacto/{id}\">Contactar</a></td></tr>",
            id = item.id_vendedor_cliente,
            ruc = escape(&item.cliente_ruc),
            razon = escape(&item.cliente_razon_social),
            contactos = item.total_contactos,
            estado = escape(&item.estado),
            alta = item.fecha_estado.format("%d/%m/%Y"),
            limite = item
                .fecha_max_prospecto
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| "—".to_string()),
            dias = item
                .dias_para_contactar
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".to_string()),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    if let Some(kpi) = view.kpi {
        let _ = write!(
            body,
            "<dialog open class=\"kpi\">\n<h2>KPIs del vendedor</h2>\n\
             <p>Total clientes: <strong class=\"total-clientes\">{}</strong></p>\n\
             <p>Contactados: <strong class=\"contactados\">{}</strong></p>\n\
             <a href=\"/dashboard\">Cerrar</a>\n</dialog>\n",
            kpi.total_clientes, kpi.prospectos_contactados
        );
    }

    body.push_str("</main>");
    layout("Mi cartera", &body)
}
