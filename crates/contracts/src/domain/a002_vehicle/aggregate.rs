use crate::domain::a001_client::ClientId;
use crate::domain::common::AggregateId;
use crate::shared::form::{FormError, FormModel, RequiredField};
use crate::shared::format::{digits_only, format_plate, PlateFormat};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique identifier of a vehicle
    VehicleId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub client_id: ClientId,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub plate: String,
    pub color: String,
    pub mileage: Option<u32>,
}

impl Vehicle {
    pub fn new(client_id: ClientId, brand: &str, model: &str, plate: &str) -> Self {
        Self {
            id: VehicleId::new_v4(),
            client_id,
            brand: brand.to_string(),
            model: model.to_string(),
            year: None,
            plate: format_plate(plate, PlateFormat::detect(plate)),
            color: String::new(),
            mileage: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn title(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.plate)
    }

    /// Apply a validated form. Fails only on an unparsable owner id.
    pub fn update(&mut self, dto: &VehicleDto) -> Result<(), String> {
        self.client_id = ClientId::from_string(&dto.client_id)?;
        self.brand = dto.brand.trim().to_string();
        self.model = dto.model.trim().to_string();
        self.year = dto.year.trim().parse().ok();
        self.plate = format_plate(&dto.plate, dto.plate_format);
        self.color = dto.color.trim().to_string();
        self.mileage = digits_only(&dto.mileage).parse().ok();
        Ok(())
    }
}

/// Form state of the vehicle modal. `plate_format` is UI-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: Option<String>,
    pub client_id: String,
    pub brand: String,
    pub model: String,
    pub year: String,
    pub plate: String,
    pub plate_format: PlateFormat,
    pub color: String,
    pub mileage: String,
}

impl VehicleDto {
    /// Switch the mask and re-apply it to the current plate text
    pub fn set_plate_format(&mut self, format: PlateFormat) {
        self.plate_format = format;
        self.plate = crate::shared::format::convert_plate(&self.plate, format);
    }

    pub fn set_plate(&mut self, raw: &str) {
        self.plate = format_plate(raw, self.plate_format);
    }
}

impl From<&Vehicle> for VehicleDto {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: Some(v.to_string_id()),
            client_id: v.client_id.as_string(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year.map(|y| y.to_string()).unwrap_or_default(),
            plate: v.plate.clone(),
            plate_format: PlateFormat::detect(&v.plate),
            color: v.color.clone(),
            mileage: v.mileage.map(|m| m.to_string()).unwrap_or_default(),
        }
    }
}

impl FormModel for VehicleDto {
    fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::new("Proprietário", &self.client_id),
            RequiredField::new("Marca", &self.brand),
            RequiredField::new("Modelo", &self.model),
            RequiredField::new("Placa", &self.plate),
        ]
    }

    fn check_values(&self) -> Result<(), FormError> {
        if format_plate(&self.plate, self.plate_format).chars().filter(|c| *c != '-').count() != 7 {
            return Err(FormError::invalid("Placa", "placa incompleta"));
        }
        let year = self.year.trim();
        if !year.is_empty() {
            match year.parse::<i32>() {
                Ok(y) if (1900..=2100).contains(&y) => {}
                _ => return Err(FormError::invalid("Ano", "ano inválido")),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vehicle {
        Vehicle::new(ClientId::new_v4(), "Fiat", "Uno", "abc1234")
    }

    #[test]
    fn test_new_vehicle_detects_old_plate() {
        assert_eq!(sample().plate, "ABC-1234");
    }

    #[test]
    fn test_dto_detects_plate_format() {
        let dto = VehicleDto::from(&sample());
        assert_eq!(dto.plate_format, PlateFormat::Old);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_switching_format_converts_plate() {
        let mut dto = VehicleDto::from(&sample());
        dto.set_plate_format(PlateFormat::Mercosul);
        assert_eq!(dto.plate, "ABC1C34");
        dto.set_plate("abc1d2");
        assert_eq!(dto.plate, "ABC1D2");
        assert!(matches!(
            dto.validate(),
            Err(FormError::InvalidValue { field: "Placa", .. })
        ));
    }

    #[test]
    fn test_required_set() {
        let dto = VehicleDto::default();
        assert_eq!(
            dto.missing_fields(),
            vec!["Proprietário", "Marca", "Modelo", "Placa"]
        );
    }

    #[test]
    fn test_year_range() {
        let mut dto = VehicleDto::from(&sample());
        dto.year = "1850".into();
        assert!(dto.validate().is_err());
        dto.year = "2015".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_parses_numbers() {
        let mut vehicle = sample();
        let mut dto = VehicleDto::from(&vehicle);
        dto.year = "2015".into();
        dto.mileage = "120.500".into();
        vehicle.update(&dto).unwrap();
        assert_eq!(vehicle.year, Some(2015));
        assert_eq!(vehicle.mileage, Some(120500));
    }

    #[test]
    fn test_update_rejects_bad_owner() {
        let mut vehicle = sample();
        let mut dto = VehicleDto::from(&vehicle);
        dto.client_id = "x".into();
        assert!(vehicle.update(&dto).is_err());
    }
}
