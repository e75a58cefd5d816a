// src/views/contacto.rs

use crate::{
    models::contacto::{
        Channel, ContactForm, InterestLevel, NextAction, Outcome, ProductionType, PurchaseType,
    },
    views::{alert, checkbox, escape, layout, select, text_input},
};

pub struct ContactoView<'a> {
    /// Segmento de la ruta tal como llegó (se reenvía al mismo destino).
    pub id_segment: &'a str,
    pub form: &'a ContactForm,
    pub error: Option<&'a str>,
}

pub fn render(view: &ContactoView<'_>) -> String {
    let form = view.form;
    let mut body = String::from(
        "<main>\n<h1>Registrar contacto</h1>\n<p><a href=\"/dashboard\">← Volver</a></p>\n",
    );

    if let Some(error) = view.error {
        body.push_str(&alert(error));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/contacto/{}\">\n",
        escape(view.id_segment)
    ));

    let fields = [
        "<fieldset><legend>Datos del contacto</legend>\n".to_string(),
        text_input(
            "nombre_contacto",
            "Nombre del contacto",
            "text",
            form.nombre_contacto.as_deref(),
        ),
        text_input("cargo_contacto", "Cargo", "text", form.cargo_contacto.as_deref()),
        text_input("telefono", "Teléfono", "tel", form.telefono.as_deref()),
        text_input("email", "Email", "email", form.email.as_deref()),
        "</fieldset>\n".to_string(),
        "<fieldset><legend>Gestión del contacto</legend>\n".to_string(),
        select::<Channel>("canal", "Canal de contacto", Some(form.canal.as_str()), false),
        select::<Outcome>("resultado", "Resultado", Some(form.resultado.as_str()), false),
        // Texto libre: el servidor decide si es un número válido
        text_input(
            "demanda_estimada",
            "Demanda estimada mensual",
            "text",
            form.demanda_estimada.as_deref(),
        ),
        select::<PurchaseType>(
            "tipo_compra",
            "Tipo de compra",
            form.tipo_compra.as_deref(),
            true,
        ),
        select::<ProductionType>(
            "tipo_produccion",
            "Tipo de producción",
            form.tipo_produccion.as_deref(),
            true,
        ),
        "</fieldset>\n".to_string(),
        "<fieldset><legend>Plano</legend>\n".to_string(),
        checkbox("tiene_plano", "Tiene plano", form.tiene_plano),
        checkbox("plano_compartido", "Plano compartido", form.plano_compartido),
        "</fieldset>\n".to_string(),
        "<fieldset><legend>Seguimiento</legend>\n".to_string(),
        select::<NextAction>(
            "accion_requerida",
            "Acción requerida",
            form.accion_requerida.as_deref(),
            true,
        ),
        text_input(
            "fecha_proximo_contacto",
            "Fecha próximo contacto",
            "date",
            form.fecha_proximo_contacto.as_deref(),
        ),
        select::<InterestLevel>(
            "nivel_interes",
            "Nivel de interés",
            form.nivel_interes.as_deref(),
            true,
        ),
        format!(
            "<label>Observaciones<textarea name=\"observaciones\">{}</textarea></label>\n",
            escape(form.observaciones.as_deref().unwrap_or_default())
        ),
        "</fieldset>\n".to_string(),
    ];
    for field in &fields {
        body.push_str(field);
    }

    body.push_str(
        "<a href=\"/dashboard\">Cancelar</a>\n\
         <button type=\"submit\">Registrar contacto</button>\n</form>\n</main>",
    );

    layout("Registrar contacto", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_values_are_rendered_back() {
        let form = ContactForm {
            nombre_contacto: Some("Rosa Huamán".into()),
            canal: "visita".into(),
            demanda_estimada: Some("1500,50".into()),
            nivel_interes: Some("ALTO".into()),
            ..ContactForm::default()
        };
        let html = render(&ContactoView {
            id_segment: "31",
            form: &form,
            error: Some("invalid input syntax for type numeric"),
        });

        assert!(html.contains("action=\"/contacto/31\""));
        assert!(html.contains("value=\"Rosa Huamán\""));
        assert!(html.contains("value=\"1500,50\""));
        assert!(html.contains("<option value=\"visita\" selected>"));
        assert!(html.contains("<option value=\"ALTO\" selected>"));
        assert!(html.contains("invalid input syntax for type numeric"));
    }
}
