use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One problem blocking invoice emission.
///
/// The emitter still reports free text; `parse` adapts those messages.
/// A source that already knows the code can send this enum directly
/// (`{"code":"missing_ncm","product":"Filtro"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum InvoiceIssue {
    MissingStateRegistration,
    MissingMunicipalRegistration,
    MissingNcm { product: String },
    MissingProductCode { product: String },
    Other { message: String },
}

// Lazy name: quotes inside the product name are kept, the match ends at the
// closing quote that precedes "sem".
static PRODUCT_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)produto\s*["“”'](.+?)["“”']\s*sem\s+(ncm|c[oó]digo)"#)
        .expect("product issue pattern")
});

static STATE_REGISTRATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)inscri[cç][aã]o\s+estadual").expect("state registration pattern")
});

static MUNICIPAL_REGISTRATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)inscri[cç][aã]o\s+municipal").expect("municipal registration pattern")
});

impl InvoiceIssue {
    pub fn parse(message: &str) -> Self {
        if let Some(caps) = PRODUCT_FIELD.captures(message) {
            let product = caps[1].trim().to_string();
            let field = caps[2].to_lowercase();
            return if field == "ncm" {
                InvoiceIssue::MissingNcm { product }
            } else {
                InvoiceIssue::MissingProductCode { product }
            };
        }
        if STATE_REGISTRATION.is_match(message) {
            return InvoiceIssue::MissingStateRegistration;
        }
        if MUNICIPAL_REGISTRATION.is_match(message) {
            return InvoiceIssue::MissingMunicipalRegistration;
        }
        InvoiceIssue::Other {
            message: message.trim().to_string(),
        }
    }

    /// Parse a batch, dropping repeats and keeping first-seen order.
    pub fn parse_all<S: AsRef<str>>(messages: &[S]) -> Vec<Self> {
        let mut issues: Vec<Self> = Vec::with_capacity(messages.len());
        for message in messages {
            let issue = Self::parse(message.as_ref());
            if !issues.contains(&issue) {
                issues.push(issue);
            }
        }
        issues
    }

    pub fn description(&self) -> String {
        match self {
            InvoiceIssue::MissingStateRegistration => "Inscrição Estadual não informada".to_string(),
            InvoiceIssue::MissingMunicipalRegistration => {
                "Inscrição Municipal não informada".to_string()
            }
            InvoiceIssue::MissingNcm { product } => format!("Produto \"{}\" sem NCM", product),
            InvoiceIssue::MissingProductCode { product } => {
                format!("Produto \"{}\" sem código", product)
            }
            InvoiceIssue::Other { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_issues() {
        assert_eq!(
            InvoiceIssue::parse(r#"Produto "Filtro" sem NCM"#),
            InvoiceIssue::MissingNcm {
                product: "Filtro".into()
            }
        );
        assert_eq!(
            InvoiceIssue::parse(r#"Produto "Filtro de ar" sem código"#),
            InvoiceIssue::MissingProductCode {
                product: "Filtro de ar".into()
            }
        );
        assert_eq!(
            InvoiceIssue::parse("produto “Pastilha” sem codigo cadastrado"),
            InvoiceIssue::MissingProductCode {
                product: "Pastilha".into()
            }
        );
    }

    #[test]
    fn test_parse_product_names_with_quotes() {
        assert_eq!(
            InvoiceIssue::parse(r#"Produto "Mangueira 3/4"" sem NCM"#),
            InvoiceIssue::MissingNcm {
                product: "Mangueira 3/4\"".into()
            }
        );
        assert_eq!(
            InvoiceIssue::parse(r#"Produto "Óleo d'água" sem código"#),
            InvoiceIssue::MissingProductCode {
                product: "Óleo d'água".into()
            }
        );
    }

    #[test]
    fn test_inch_mark_product_reads_back_from_description() {
        let issue = InvoiceIssue::MissingNcm {
            product: "Abraçadeira 1/2\"".into(),
        };
        assert_eq!(InvoiceIssue::parse(&issue.description()), issue);
    }

    #[test]
    fn test_parse_registrations_case_and_accent_insensitive() {
        assert_eq!(
            InvoiceIssue::parse("Empresa sem Inscrição Estadual cadastrada"),
            InvoiceIssue::MissingStateRegistration
        );
        assert_eq!(
            InvoiceIssue::parse("INSCRICAO MUNICIPAL obrigatória para NFS-e"),
            InvoiceIssue::MissingMunicipalRegistration
        );
    }

    #[test]
    fn test_unknown_message_is_kept() {
        assert_eq!(
            InvoiceIssue::parse("  Certificado digital expirado "),
            InvoiceIssue::Other {
                message: "Certificado digital expirado".into()
            }
        );
    }

    #[test]
    fn test_parse_all_dedups_in_order() {
        let issues = InvoiceIssue::parse_all(&[
            r#"Produto "Filtro" sem NCM"#,
            "Empresa sem Inscrição Estadual",
            r#"Produto "Filtro" sem NCM"#,
        ]);
        assert_eq!(
            issues,
            vec![
                InvoiceIssue::MissingNcm {
                    product: "Filtro".into()
                },
                InvoiceIssue::MissingStateRegistration,
            ]
        );
    }

    #[test]
    fn test_structured_form_uses_code_tag() {
        let issue: InvoiceIssue =
            serde_json::from_str(r#"{"code":"missing_ncm","product":"Filtro"}"#).unwrap();
        assert_eq!(
            issue,
            InvoiceIssue::MissingNcm {
                product: "Filtro".into()
            }
        );
        assert_eq!(
            serde_json::to_string(&InvoiceIssue::MissingStateRegistration).unwrap(),
            r#"{"code":"missing_state_registration"}"#
        );
    }

    #[test]
    fn test_description_reads_back_as_same_issue() {
        let issue = InvoiceIssue::MissingProductCode {
            product: "Correia".into(),
        };
        assert_eq!(InvoiceIssue::parse(&issue.description()), issue);
    }
}
