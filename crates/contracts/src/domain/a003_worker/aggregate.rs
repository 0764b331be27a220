use crate::domain::common::AggregateId;
use crate::shared::form::{FormError, FormModel, RequiredField};
use crate::shared::format::format_cpf;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique identifier of a workshop employee
    WorkerId
);

pub const WORKER_ROLES: &[&str] = &[
    "Mecânico",
    "Eletricista",
    "Funileiro",
    "Pintor",
    "Atendente",
    "Gerente",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub cpf: String,
    pub role: String,
    pub phone: String,
    /// Share of labour revenue, 0..=100
    pub commission_percent: f64,
    pub active: bool,
}

impl Worker {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: WorkerId::new_v4(),
            name: name.into(),
            cpf: String::new(),
            role: role.into(),
            phone: String::new(),
            commission_percent: 0.0,
            active: true,
        }
    }

    /// Build a new worker from a validated "new worker" form
    pub fn from_dto(dto: &WorkerDto) -> Self {
        let mut worker = Self::new(String::new(), String::new());
        worker.update(dto);
        worker
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &WorkerDto) {
        self.name = dto.name.trim().to_string();
        self.cpf = format_cpf(&dto.cpf);
        self.role = dto.role.clone();
        self.phone = dto.phone.trim().to_string();
        self.commission_percent = parse_percent(&dto.commission_percent).unwrap_or(0.0);
        self.active = dto.active;
    }
}

fn parse_percent(text: &str) -> Option<f64> {
    let text = text.trim().trim_end_matches('%').trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".").parse().ok()
}

/// Form state of both the edit and the "new worker" modals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerDto {
    pub id: Option<String>,
    pub name: String,
    pub cpf: String,
    pub role: String,
    pub phone: String,
    pub commission_percent: String,
    pub active: bool,
}

impl Default for WorkerDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            cpf: String::new(),
            role: String::new(),
            phone: String::new(),
            commission_percent: String::new(),
            active: true,
        }
    }
}

impl From<&Worker> for WorkerDto {
    fn from(w: &Worker) -> Self {
        Self {
            id: Some(w.to_string_id()),
            name: w.name.clone(),
            cpf: w.cpf.clone(),
            role: w.role.clone(),
            phone: w.phone.clone(),
            commission_percent: if w.commission_percent == 0.0 {
                String::new()
            } else {
                w.commission_percent.to_string()
            },
            active: w.active,
        }
    }
}

impl FormModel for WorkerDto {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::new("Nome", &self.name),
            RequiredField::new("Função", &self.role),
        ]
    }

    fn check_values(&self) -> Result<(), FormError> {
        if self.commission_percent.trim().is_empty() {
            return Ok(());
        }
        match parse_percent(&self.commission_percent) {
            Some(p) if (0.0..=100.0).contains(&p) => Ok(()),
            _ => Err(FormError::invalid("Comissão", "informe um percentual entre 0 e 100")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worker_form_defaults_to_active() {
        let dto = WorkerDto::default();
        assert!(dto.active);
        assert_eq!(dto.missing_fields(), vec!["Nome", "Função"]);
    }

    #[test]
    fn test_from_dto_builds_worker() {
        let dto = WorkerDto {
            name: "Carlos".into(),
            role: "Mecânico".into(),
            commission_percent: "12,5%".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let worker = Worker::from_dto(&dto);
        assert_eq!(worker.name, "Carlos");
        assert_eq!(worker.commission_percent, 12.5);
        assert!(worker.active);
    }

    #[test]
    fn test_commission_out_of_range() {
        let dto = WorkerDto {
            name: "Ana".into(),
            role: "Pintor".into(),
            commission_percent: "140".into(),
            ..Default::default()
        };
        assert!(matches!(
            dto.validate(),
            Err(FormError::InvalidValue { field: "Comissão", .. })
        ));
    }

    #[test]
    fn test_dto_roundtrip_keeps_fields() {
        let mut worker = Worker::new("Bia", "Atendente");
        worker.commission_percent = 5.0;
        worker.active = false;
        let dto = WorkerDto::from(&worker);
        assert_eq!(dto.commission_percent, "5");
        let mut copy = worker.clone();
        copy.update(&dto);
        assert_eq!(copy, worker);
    }
}
