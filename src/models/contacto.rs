// src/models/contacto.rs

use serde::Deserialize;

use crate::common::form::{FormChoice, checkbox, empty_string_as_none};

// --- VOCABULARIOS ---
// Opciones de los `<select>`. El valor elegido viaja como texto a `registrar_contacto`,
// que es quien lo valida.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Llamada,
    Whatsapp,
    Email,
    Visita,
    Reunion,
}

impl FormChoice for Channel {
    const ALL: &'static [Self] = &[
        Channel::Llamada,
        Channel::Whatsapp,
        Channel::Email,
        Channel::Visita,
        Channel::Reunion,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Channel::Llamada => "llamada",
            Channel::Whatsapp => "whatsapp",
            Channel::Email => "email",
            Channel::Visita => "visita",
            Channel::Reunion => "reunion",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Channel::Llamada => "Llamada",
            Channel::Whatsapp => "WhatsApp",
            Channel::Email => "Email",
            Channel::Visita => "Visita",
            Channel::Reunion => "Reunión",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    NoContesta,
    Contactado,
    Interesado,
    Reprogramar,
    Rechaza,
    NumeroIncorrecto,
}

impl FormChoice for Outcome {
    const ALL: &'static [Self] = &[
        Outcome::NoContesta,
        Outcome::Contactado,
        Outcome::Interesado,
        Outcome::Reprogramar,
        Outcome::Rechaza,
        Outcome::NumeroIncorrecto,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Outcome::NoContesta => "no_contesta",
            Outcome::Contactado => "contactado",
            Outcome::Interesado => "interesado",
            Outcome::Reprogramar => "reprogramar",
            Outcome::Rechaza => "rechaza",
            Outcome::NumeroIncorrecto => "numero_incorrecto",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Outcome::NoContesta => "No contesta",
            Outcome::Contactado => "Contactado",
            Outcome::Interesado => "Interesado",
            Outcome::Reprogramar => "Reprogramar",
            Outcome::Rechaza => "Rechaza",
            Outcome::NumeroIncorrecto => "Número incorrecto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseType {
    Spot,
    Recurrente,
}

impl FormChoice for PurchaseType {
    const ALL: &'static [Self] = &[PurchaseType::Spot, PurchaseType::Recurrente];

    fn as_str(self) -> &'static str {
        match self {
            PurchaseType::Spot => "spot",
            PurchaseType::Recurrente => "recurrente",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PurchaseType::Spot => "Spot",
            PurchaseType::Recurrente => "Recurrente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionType {
    StockPerulog,
    ProyectoPropio,
}

impl FormChoice for ProductionType {
    const ALL: &'static [Self] = &[
        ProductionType::StockPerulog,
        ProductionType::ProyectoPropio,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ProductionType::StockPerulog => "STOCK_PERULOG",
            ProductionType::ProyectoPropio => "PROYECTO_PROPIO",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProductionType::StockPerulog => "Stock Perulog",
            ProductionType::ProyectoPropio => "Proyecto cliente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Cotizar,
    Reagendar,
    BuscarOtroContacto,
}

impl FormChoice for NextAction {
    const ALL: &'static [Self] = &[
        NextAction::Cotizar,
        NextAction::Reagendar,
        NextAction::BuscarOtroContacto,
    ];

    fn as_str(self) -> &'static str {
        match self {
            NextAction::Cotizar => "COTIZAR",
            NextAction::Reagendar => "REAGENDAR",
            NextAction::BuscarOtroContacto => "BUSCAR OTRO CONTACTO",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NextAction::Cotizar => "Cotizar",
            NextAction::Reagendar => "Reagendar",
            NextAction::BuscarOtroContacto => "Buscar otro contacto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestLevel {
    Alto,
    Medio,
    Bajo,
}

impl FormChoice for InterestLevel {
    const ALL: &'static [Self] = &[
        InterestLevel::Alto,
        InterestLevel::Medio,
        InterestLevel::Bajo,
    ];

    fn as_str(self) -> &'static str {
        match self {
            InterestLevel::Alto => "ALTO",
            InterestLevel::Medio => "MEDIO",
            InterestLevel::Bajo => "BAJO",
        }
    }

    fn label(self) -> &'static str {
        match self {
            InterestLevel::Alto => "Alto",
            InterestLevel::Medio => "Medio",
            InterestLevel::Bajo => "Bajo",
        }
    }
}

// --- FORMULARIO ---
// Solo se normaliza: un campo vacío llega como `None`. Números, fechas y opciones
// se envían como texto y los valida `registrar_contacto`.

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub nombre_contacto: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cargo_contacto: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,

    #[serde(default = "default_canal")]
    pub canal: String,
    #[serde(default = "default_resultado")]
    pub resultado: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub demanda_estimada: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tipo_compra: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tipo_produccion: Option<String>,

    #[serde(default, deserialize_with = "checkbox")]
    pub tiene_plano: bool,
    #[serde(default, deserialize_with = "checkbox")]
    pub plano_compartido: bool,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub accion_requerida: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_proximo_contacto: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub nivel_interes: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub observaciones: Option<String>,
}

fn default_canal() -> String {
    Channel::default().as_str().to_string()
}

fn default_resultado() -> String {
    Outcome::default().as_str().to_string()
}

// Formulario recién abierto: canal y resultado con su primera opción
impl Default for ContactForm {
    fn default() -> Self {
        Self {
            nombre_contacto: None,
            cargo_contacto: None,
            telefono: None,
            email: None,
            canal: default_canal(),
            resultado: default_resultado(),
            demanda_estimada: None,
            tipo_compra: None,
            tipo_produccion: None,
            tiene_plano: false,
            plano_compartido: false,
            accion_requerida: None,
            fecha_proximo_contacto: None,
            nivel_interes: None,
            observaciones: None,
        }
    }
}

impl ContactForm {
    pub fn into_event(self, id_vendedor_cliente: i64) -> ContactEvent {
        ContactEvent {
            id_vendedor_cliente,
            nombre_contacto: self.nombre_contacto,
            cargo_contacto: self.cargo_contacto,
            telefono: self.telefono,
            email: self.email,
            canal: self.canal,
            resultado: self.resultado,
            demanda_estimada: self.demanda_estimada,
            tipo_compra: self.tipo_compra,
            tipo_produccion: self.tipo_produccion,
            tiene_plano: self.tiene_plano,
            plano_compartido: self.plano_compartido,
            accion_requerida: self.accion_requerida,
            fecha_proximo_contacto: self.fecha_proximo_contacto,
            nivel_interes: self.nivel_interes,
            observaciones: self.observaciones,
        }
    }
}

// --- EVENTO (argumentos de `registrar_contacto`) ---

#[derive(Debug, Clone, PartialEq)]
pub struct ContactEvent {
    pub id_vendedor_cliente: i64,

    pub nombre_contacto: Option<String>,
    pub cargo_contacto: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,

    pub canal: String,
    pub resultado: String,

    pub demanda_estimada: Option<String>,
    pub tipo_compra: Option<String>,
    pub tipo_produccion: Option<String>,

    pub tiene_plano: bool,
    pub plano_compartido: bool,

    pub accion_requerida: Option<String>,
    pub fecha_proximo_contacto: Option<String>,
    pub nivel_interes: Option<String>,
    pub observaciones: Option<String>,
}
