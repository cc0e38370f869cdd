use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Workshop,
    Administration,
    Management,
    Design,
}

impl Role {
    /// Convert DB/CLI string → enum (case-insensitive).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "workshop" => Some(Role::Workshop),
            "administration" => Some(Role::Administration),
            "management" => Some(Role::Management),
            "design" => Some(Role::Design),
            _ => None,
        }
    }

    /// Convert enum → DB string.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Workshop => "workshop",
            Role::Administration => "administration",
            Role::Management => "management",
            Role::Design => "design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Workshop => "Workshop",
            Role::Administration => "Administration",
            Role::Management => "Management",
            Role::Design => "Design",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    /// Opaque, stable, unique id.
    pub id: String,
    pub name: String,
    /// None = no role assigned (stored as '' in the DB).
    pub role: Option<Role>,
    /// 4-digit self-service access code. Not interpreted by the engine.
    pub pin: String,
    /// Ids of employees this one must not overlap vacations with.
    /// Invariant: never contains `id` itself.
    pub incompatible_ids: Vec<String>,
}

impl Employee {
    pub fn role_label(&self) -> &'static str {
        self.role.map(|r| r.label()).unwrap_or("N/A")
    }
}
