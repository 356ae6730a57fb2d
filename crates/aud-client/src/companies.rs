//! Company endpoints. Create and update use multipart bodies.

use aud_core::entities::Company;
use reqwest::{Method, multipart::Form};

use crate::{ApiClient, error::ClientError};

fn company_form(company: &Company) -> Form {
    let mut form = Form::new().text("nombreEmpresa", company.name.clone());
    if let Some(logo) = &company.logo_base64 {
        form = form.text("imagenBase64", logo.clone());
    }
    form
}

impl ApiClient {
    /// List companies visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.get_json("/Empresas").await
    }

    /// List every company, including ones hidden from the default listing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be parsed.
    pub async fn list_all_companies(&self) -> Result<Vec<Company>, ClientError> {
        self.get_json("/Empresas/all").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the company does not exist.
    pub async fn get_company(&self, id: i64) -> Result<Company, ClientError> {
        self.get_json(&format!("/Empresas/{id}")).await
    }

    /// Create a company. The id of `company` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the company.
    pub async fn create_company(&self, company: &Company) -> Result<Company, ClientError> {
        tracing::debug!(name = %company.name, "creating company");
        self.send_form(Method::POST, "/Empresas", company_form(company))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the update.
    pub async fn update_company(&self, id: i64, company: &Company) -> Result<(), ClientError> {
        let form = company_form(company).text("id_Empresas", id.to_string());
        self.send_form_unit(Method::PUT, &format!("/Empresas/{id}"), form)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend refuses the deletion.
    pub async fn delete_company(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Empresas/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_company_list_fixture() {
        let json = r#"[
            {"id_Empresas":1,"nombreEmpresa":"Acme","imagenBase64":"iVBORw0KGgo="},
            {"id_Empresas":2,"nombreEmpresa":"Globex"}
        ]"#;
        let companies: Vec<Company> = serde_json::from_str(json).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].logo_base64.as_deref(), Some("iVBORw0KGgo="));
        assert!(companies[1].logo_base64.is_none());
    }

    #[test]
    fn form_has_boundary() {
        let company = Company {
            id: 0,
            name: "Acme".into(),
            logo_base64: None,
        };
        assert!(!company_form(&company).boundary().is_empty());
    }
}
