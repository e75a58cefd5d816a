// src/common/form.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

/// Campo de formulario opcional: "" (o ausente) se convierte en `None`,
/// cualquier otro valor se interpreta con `FromStr`.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Casilla HTML: presente ("on") = marcada, ausente = sin marcar.
pub fn checkbox<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(matches!(opt.as_deref(), Some(v) if !v.is_empty() && v != "false" && v != "off"))
}

/// Opción de un `<select>`: valor que viaja al servidor y etiqueta visible.
pub trait FormChoice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
    fn label(self) -> &'static str;
}
