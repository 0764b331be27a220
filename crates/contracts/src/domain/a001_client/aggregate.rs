use crate::domain::common::AggregateId;
use crate::shared::form::{FormError, FormModel, RequiredField};
use crate::shared::format::format_cpf;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique identifier of a workshop client
    ClientId
);

/// Vehicle owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
}

impl Client {
    pub fn new(name: impl Into<String>, cpf: &str, phone: impl Into<String>) -> Self {
        Self {
            id: ClientId::new_v4(),
            name: name.into(),
            cpf: format_cpf(cpf),
            phone: phone.into(),
            email: String::new(),
            address: String::new(),
            notes: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Apply the edited form
    pub fn update(&mut self, dto: &ClientDto) {
        self.name = dto.name.trim().to_string();
        self.cpf = format_cpf(&dto.cpf);
        self.phone = dto.phone.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.address = dto.address.trim().to_string();
        self.notes = dto.notes.clone();
    }
}

/// Form state of the client modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: Option<String>,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
}

impl From<&Client> for ClientDto {
    fn from(c: &Client) -> Self {
        Self {
            id: Some(c.to_string_id()),
            name: c.name.clone(),
            cpf: c.cpf.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            notes: c.notes.clone(),
        }
    }
}

impl FormModel for ClientDto {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::new("Nome", &self.name),
            RequiredField::new("CPF", &self.cpf),
            RequiredField::new("Telefone", &self.phone),
        ]
    }

    fn check_values(&self) -> Result<(), FormError> {
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(FormError::invalid("E-mail", "endereço inválido"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client::new("Maria Souza", "52998224725", "(11) 98765-4321")
    }

    #[test]
    fn test_new_client_formats_cpf() {
        assert_eq!(sample().cpf, "529.982.247-25");
    }

    #[test]
    fn test_dto_seeds_from_client() {
        let client = sample();
        let dto = ClientDto::from(&client);
        assert_eq!(dto.id.as_deref(), Some(client.to_string_id().as_str()));
        assert_eq!(dto.name, "Maria Souza");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_required_set() {
        let dto = ClientDto {
            name: "João".into(),
            ..Default::default()
        };
        assert_eq!(dto.missing_fields(), vec!["CPF", "Telefone"]);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut dto = ClientDto::from(&sample());
        dto.email = "maria.example.com".into();
        assert!(matches!(
            dto.validate(),
            Err(FormError::InvalidValue { field: "E-mail", .. })
        ));
    }

    #[test]
    fn test_update_applies_trimmed_values() {
        let mut client = sample();
        let mut dto = ClientDto::from(&client);
        dto.name = "  Maria S. Lima ".into();
        dto.cpf = "52998224725".into();
        client.update(&dto);
        assert_eq!(client.name, "Maria S. Lima");
        assert_eq!(client.cpf, "529.982.247-25");
    }
}
