use super::issue::InvoiceIssue;
use crate::shared::format::digits_only;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NCM_DIGITS: usize = 8;

/// Fields to fill for one product. `None` means the emitter did not flag it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCorrection {
    pub name: String,
    pub ncm: Option<String>,
    pub codigo_produto: Option<String>,
}

/// Correction form derived from the emitter's issue list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCorrectionForm {
    pub inscricao_estadual: Option<String>,
    pub inscricao_municipal: Option<String>,
    /// One entry per product, first-seen order
    pub products: Vec<ProductCorrection>,
    /// Messages the form cannot resolve, shown read-only
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceFormError {
    #[error("Preencha os campos: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("NCM do produto \"{0}\" deve ter 8 dígitos")]
    InvalidNcm(String),
}

impl InvoiceCorrectionForm {
    pub fn from_issues(issues: &[InvoiceIssue]) -> Self {
        let mut form = Self::default();
        for issue in issues {
            match issue {
                InvoiceIssue::MissingStateRegistration => {
                    form.inscricao_estadual.get_or_insert_with(String::new);
                }
                InvoiceIssue::MissingMunicipalRegistration => {
                    form.inscricao_municipal.get_or_insert_with(String::new);
                }
                InvoiceIssue::MissingNcm { product } => {
                    form.product_mut(product).ncm.get_or_insert_with(String::new);
                }
                InvoiceIssue::MissingProductCode { product } => {
                    form.product_mut(product)
                        .codigo_produto
                        .get_or_insert_with(String::new);
                }
                InvoiceIssue::Other { message } => {
                    if !form.unresolved.contains(message) {
                        form.unresolved.push(message.clone());
                    }
                }
            }
        }
        form
    }

    pub fn from_messages<S: AsRef<str>>(messages: &[S]) -> Self {
        Self::from_issues(&InvoiceIssue::parse_all(messages))
    }

    fn product_mut(&mut self, name: &str) -> &mut ProductCorrection {
        let index = match self.products.iter().position(|p| p.name == name) {
            Some(index) => index,
            None => {
                self.products.push(ProductCorrection {
                    name: name.to_string(),
                    ..Default::default()
                });
                self.products.len() - 1
            }
        };
        &mut self.products[index]
    }

    /// Nothing the user can fill in
    pub fn has_fillable_fields(&self) -> bool {
        self.inscricao_estadual.is_some()
            || self.inscricao_municipal.is_some()
            || !self.products.is_empty()
    }

    /// Every flagged field must be non-empty; NCM must have 8 digits.
    pub fn validate(&self) -> Result<(), InvoiceFormError> {
        let mut missing = Vec::new();
        let blank = |v: &Option<String>| v.as_ref().map(|s| s.trim().is_empty()).unwrap_or(false);

        if blank(&self.inscricao_estadual) {
            missing.push("Inscrição Estadual".to_string());
        }
        if blank(&self.inscricao_municipal) {
            missing.push("Inscrição Municipal".to_string());
        }
        for product in &self.products {
            if blank(&product.ncm) {
                missing.push(format!("NCM de \"{}\"", product.name));
            }
            if blank(&product.codigo_produto) {
                missing.push(format!("Código de \"{}\"", product.name));
            }
        }
        if !missing.is_empty() {
            return Err(InvoiceFormError::MissingFields(missing));
        }

        for product in &self.products {
            if let Some(ncm) = &product.ncm {
                if digits_only(ncm).len() != NCM_DIGITS {
                    return Err(InvoiceFormError::InvalidNcm(product.name.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_product_merges_into_one_entry() {
        let form = InvoiceCorrectionForm::from_messages(&[
            r#"Produto "Filtro" sem NCM"#,
            r#"Produto "Filtro" sem código"#,
        ]);
        assert_eq!(
            form.products,
            vec![ProductCorrection {
                name: "Filtro".into(),
                ncm: Some(String::new()),
                codigo_produto: Some(String::new()),
            }]
        );
        assert_eq!(form.inscricao_estadual, None);
        assert!(form.has_fillable_fields());
    }

    #[test]
    fn test_blank_flagged_fields_block_submit() {
        let mut form = InvoiceCorrectionForm::from_messages(&[
            r#"Produto "Filtro" sem NCM"#,
            r#"Produto "Filtro" sem código"#,
        ]);
        assert_eq!(
            form.validate(),
            Err(InvoiceFormError::MissingFields(vec![
                "NCM de \"Filtro\"".into(),
                "Código de \"Filtro\"".into(),
            ]))
        );

        form.products[0].ncm = Some("8421.23.00".into());
        assert!(form.validate().is_err());

        form.products[0].codigo_produto = Some("FLT-001".into());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_ncm_must_have_eight_digits() {
        let mut form = InvoiceCorrectionForm::from_messages(&[r#"Produto "Vela" sem NCM"#]);
        form.products[0].ncm = Some("8511".into());
        assert_eq!(
            form.validate(),
            Err(InvoiceFormError::InvalidNcm("Vela".into()))
        );
    }

    #[test]
    fn test_registrations_and_unresolved() {
        let form = InvoiceCorrectionForm::from_messages(&[
            "Empresa sem Inscrição Estadual",
            "Empresa sem Inscrição Municipal",
            "Certificado digital expirado",
            "Certificado digital expirado",
        ]);
        assert_eq!(form.inscricao_estadual, Some(String::new()));
        assert_eq!(form.inscricao_municipal, Some(String::new()));
        assert!(form.products.is_empty());
        assert_eq!(form.unresolved, vec!["Certificado digital expirado".to_string()]);
    }

    #[test]
    fn test_only_unresolved_has_nothing_to_fill() {
        let form = InvoiceCorrectionForm::from_messages(&["Falha na SEFAZ"]);
        assert!(!form.has_fillable_fields());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_products_keep_first_seen_order() {
        let form = InvoiceCorrectionForm::from_messages(&[
            r#"Produto "B" sem NCM"#,
            r#"Produto "A" sem código"#,
            r#"Produto "B" sem código"#,
        ]);
        let names: Vec<&str> = form.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(form.products[1].ncm, None);
    }
}
