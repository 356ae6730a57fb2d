use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Attachment;
use crate::enums::RiskRating;

/// A finding as stored, referencing its plan, activity and responsible user by id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Finding {
    #[serde(rename = "idHallazgo", default, skip_serializing_if = "crate::wire::is_unassigned")]
    pub id: i64,
    #[serde(rename = "idPlanAuditoria")]
    pub plan_id: i64,
    #[serde(rename = "idActividad")]
    pub activity_id: i64,
    #[serde(rename = "idResponsable")]
    pub responsible_id: i64,
    #[serde(rename = "montoImpacto", default)]
    pub impact_amount: f64,
    #[serde(rename = "semaforo", default)]
    pub rating: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "riesgo", default)]
    pub risk: String,
    #[serde(rename = "recomendaciones", default)]
    pub recommendations: String,
    #[serde(rename = "planAccion", default)]
    pub action_plan: String,
    /// Written by the client responsible only.
    #[serde(rename = "seguimiento", default)]
    pub follow_up: String,
    #[serde(rename = "fechaCompromiso", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub commitment_date: Option<NaiveDate>,
    #[serde(rename = "cumplido", default)]
    pub compliant: bool,
    #[serde(rename = "archivosSeguimiento", default, skip_serializing_if = "Vec::is_empty")]
    pub follow_up_files: Vec<Attachment>,
}

impl Finding {
    #[must_use]
    pub fn rating(&self) -> Option<RiskRating> {
        RiskRating::parse(&self.rating)
    }
}

/// Denormalised read view served by `/Hallazgos/vista`.
///
/// Carries display names instead of ids, plus the owning company so rows can be
/// scoped to a client session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FindingView {
    #[serde(rename = "iD_Hallazgo")]
    pub id: i64,
    #[serde(rename = "iD_Auditoria", default)]
    pub audit_id: i64,
    #[serde(rename = "nombre_Auditoria", default)]
    pub audit_name: String,
    #[serde(rename = "nombre_Proceso", default)]
    pub process_name: String,
    #[serde(rename = "nombre_Actividad", default)]
    pub activity_name: String,
    #[serde(rename = "montoImpacto", default)]
    pub impact_amount: f64,
    #[serde(rename = "semaforo", default)]
    pub rating: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "riesgo", default)]
    pub risk: String,
    #[serde(rename = "seguimiento", default)]
    pub follow_up: String,
    #[serde(rename = "recomendaciones", default)]
    pub recommendations: String,
    #[serde(rename = "planAccion", default)]
    pub action_plan: String,
    #[serde(rename = "nombre_Responsable", default)]
    pub responsible_name: String,
    #[serde(rename = "fechaCompromiso", default, with = "crate::wire::opt_date")]
    #[schemars(with = "Option<String>")]
    pub commitment_date: Option<NaiveDate>,
    #[serde(rename = "cumplido", default)]
    pub compliant: bool,
    #[serde(rename = "idUsuario", default)]
    pub user_id: i64,
    #[serde(rename = "idRol", default)]
    pub role_id: i64,
    #[serde(rename = "idEmpresa", default)]
    pub company_id: i64,
}

impl FindingView {
    #[must_use]
    pub fn rating(&self) -> Option<RiskRating> {
        RiskRating::parse(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_parses_backend_row() {
        let row: FindingView = serde_json::from_str(
            r#"{
                "iD_Hallazgo": 11,
                "iD_Auditoria": 2,
                "nombre_Auditoria": "Auditoria 2024",
                "nombre_Proceso": "Compras",
                "nombre_Actividad": "Conciliacion",
                "montoImpacto": 1500.5,
                "semaforo": "NCA",
                "descripcion": "Sin soporte",
                "riesgo": "Alto",
                "seguimiento": "",
                "recomendaciones": "",
                "planAccion": "",
                "nombre_Responsable": "Luis",
                "fechaCompromiso": "2024-06-30T00:00:00",
                "cumplido": false,
                "idUsuario": 5,
                "idRol": 4,
                "idEmpresa": 3
            }"#,
        )
        .unwrap();
        assert_eq!(row.rating(), Some(RiskRating::Nca));
        assert_eq!(row.company_id, 3);
        assert_eq!(row.commitment_date, NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn new_finding_omits_id_and_empty_files() {
        let finding = Finding {
            id: 0,
            plan_id: 1,
            activity_id: 2,
            responsible_id: 3,
            impact_amount: 0.0,
            rating: "OM".into(),
            description: String::new(),
            risk: String::new(),
            recommendations: String::new(),
            action_plan: String::new(),
            follow_up: String::new(),
            commitment_date: None,
            compliant: false,
            follow_up_files: Vec::new(),
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert!(json.get("idHallazgo").is_none());
        assert!(json.get("archivosSeguimiento").is_none());
        assert_eq!(json["semaforo"], "OM");
    }
}
