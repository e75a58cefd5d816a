// src/views/login.rs

use crate::views::{alert, escape, layout, notice};

#[derive(Debug, Default)]
pub struct LoginView<'a> {
    pub email: &'a str,
    pub error: Option<&'a str>,
    pub message: Option<&'a str>,
}

pub fn render(view: &LoginView<'_>) -> String {
    let mut body = String::from("<main>\n<h1>Acceso al Sistema</h1>\n");

    body.push_str(&format!(
        "<form method=\"post\" action=\"/login\">\n\
         <label>Correo electrónico\
         <input type=\"email\" name=\"email\" value=\"{email}\"></label>\n\
         <label>Contraseña<input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Ingresar</button>\n\
         <button type=\"submit\" formaction=\"/login/recuperar\">\
         ¿Olvidaste tu contraseña?</button>\n\
         </form>\n",
        email = escape(view.email)
    ));

    if let Some(error) = view.error {
        body.push_str(&alert(error));
    }
    if let Some(message) = view.message {
        body.push_str(&notice(message));
    }

    body.push_str("\n<p><small>Plataforma interna · PeruLog Pallets</small></p>\n</main>");
    layout("Acceso", &body)
}
