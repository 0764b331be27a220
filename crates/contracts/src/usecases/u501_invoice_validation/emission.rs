//! Stand-in for the invoice emitter's pre-flight check. Produces the same
//! free-text messages the emitter reports.

use super::form::InvoiceCorrectionForm;
use crate::domain::a005_service_order::{FiscalProfile, ServiceOrder};
use crate::shared::format::digits_only;

pub fn emission_errors(profile: &FiscalProfile, order: &ServiceOrder) -> Vec<String> {
    let mut errors = Vec::new();
    if profile.inscricao_estadual.trim().is_empty() {
        errors.push("Empresa sem Inscrição Estadual cadastrada".to_string());
    }
    if profile.inscricao_municipal.trim().is_empty() {
        errors.push("Empresa sem Inscrição Municipal cadastrada".to_string());
    }
    for item in &order.items {
        if item.ncm.trim().is_empty() {
            errors.push(format!("Produto \"{}\" sem NCM", item.name));
        }
        if item.codigo_produto.trim().is_empty() {
            errors.push(format!("Produto \"{}\" sem código", item.name));
        }
    }
    errors
}

/// Copy the filled fields back onto the profile and the order's items.
pub fn apply_corrections(
    profile: &mut FiscalProfile,
    order: &mut ServiceOrder,
    form: &InvoiceCorrectionForm,
) {
    if let Some(ie) = &form.inscricao_estadual {
        profile.inscricao_estadual = ie.trim().to_string();
    }
    if let Some(im) = &form.inscricao_municipal {
        profile.inscricao_municipal = im.trim().to_string();
    }
    for correction in &form.products {
        for item in order.items.iter_mut().filter(|i| i.name == correction.name) {
            if let Some(ncm) = &correction.ncm {
                item.ncm = digits_only(ncm);
            }
            if let Some(code) = &correction.codigo_produto {
                item.codigo_produto = code.trim().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::ClientId;
    use crate::domain::a002_vehicle::VehicleId;
    use crate::domain::a005_service_order::OrderItem;

    fn order() -> ServiceOrder {
        let mut order = ServiceOrder::new(7, ClientId::new_v4(), VehicleId::new_v4(), "Troca de óleo");
        order.items.push(OrderItem::new("Filtro", 1, 3500));
        let mut oil = OrderItem::new("Óleo 5W30", 4, 4200);
        oil.ncm = "27101932".into();
        oil.codigo_produto = "OL-5W30".into();
        order.items.push(oil);
        order
    }

    #[test]
    fn test_reports_missing_data() {
        let errors = emission_errors(&FiscalProfile::default(), &order());
        assert_eq!(
            errors,
            vec![
                "Empresa sem Inscrição Estadual cadastrada",
                "Empresa sem Inscrição Municipal cadastrada",
                "Produto \"Filtro\" sem NCM",
                "Produto \"Filtro\" sem código",
            ]
        );
    }

    #[test]
    fn test_filled_form_clears_every_error() {
        let mut profile = FiscalProfile::default();
        let mut order = order();
        let mut form = InvoiceCorrectionForm::from_messages(&emission_errors(&profile, &order));

        form.inscricao_estadual = Some("123.456.789.110".into());
        form.inscricao_municipal = Some("98765".into());
        form.products[0].ncm = Some("8421.23.00".into());
        form.products[0].codigo_produto = Some(" FLT-01 ".into());
        form.validate().unwrap();

        apply_corrections(&mut profile, &mut order, &form);
        assert!(emission_errors(&profile, &order).is_empty());
        assert_eq!(order.items[0].ncm, "84212300");
        assert_eq!(order.items[0].codigo_produto, "FLT-01");
    }

    #[test]
    fn test_quoted_product_name_can_be_corrected() {
        let mut profile = FiscalProfile {
            inscricao_estadual: "123".into(),
            inscricao_municipal: "456".into(),
        };
        let mut order = ServiceOrder::new(8, ClientId::new_v4(), VehicleId::new_v4(), "Arrefecimento");
        order.items.push(OrderItem::new("Mangueira 3/4\"", 1, 2900));
        let mut form = InvoiceCorrectionForm::from_messages(&emission_errors(&profile, &order));

        assert!(form.unresolved.is_empty());
        assert_eq!(form.products.len(), 1);
        form.products[0].ncm = Some("40093100".into());
        form.products[0].codigo_produto = Some("MG-34".into());

        apply_corrections(&mut profile, &mut order, &form);
        assert!(emission_errors(&profile, &order).is_empty());
    }
}
