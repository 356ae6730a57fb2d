//! Resource clients against an in-process backend implementing the REST contract.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{delete, get, put},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use aud_client::{ApiClient, ClientError};
use aud_core::{
    access::scope_plans,
    entities::{AuditPlan, Process, User},
    enums::AttachmentKind,
    identity::SessionIdentity,
};

const TOKEN: &str = "test-token";

#[derive(Default)]
struct Backend {
    users: Vec<Value>,
    plans: Vec<Value>,
    processes: Vec<Value>,
    files: Vec<(i64, String, Vec<u8>)>,
    next_id: i64,
}

impl Backend {
    fn seeded() -> Self {
        Self {
            users: vec![
                json!({"idUsuario":1,"nombre":"Admin","nombreUsuario":"admin","idRol":1,"estatus":true,"idEmpresa":1}),
                json!({"idUsuario":3,"nombre":"Mario","nombreUsuario":"mario","idRol":3,"estatus":true,"idEmpresa":1}),
            ],
            plans: vec![
                json!({"idPlanAuditoria":1,"id_Auditoria":10,"idProceso":100,"idActividad":5,"idAuditor":3,"estado":"Pendiente","estatus":true}),
                json!({"idPlanAuditoria":2,"id_Auditoria":10,"idProceso":100,"idActividad":6,"idAuditor":1,"estado":"Listo","estatus":true}),
            ],
            processes: vec![json!({"idProceso":100,"nombreProceso":"Compras"})],
            files: Vec::new(),
            next_id: 100,
        }
    }

    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<Backend>>;
type Reply = (StatusCode, Json<Value>);

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str())
}

fn unauthorized() -> Reply {
    (StatusCode::UNAUTHORIZED, Json(Value::Null))
}

fn not_found() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "No encontrado" })))
}

fn deactivate(rows: &mut [Value], key: &str, id: i64) -> Reply {
    match rows.iter_mut().find(|row| row[key] == id) {
        Some(row) => {
            row["estatus"] = json!(false);
            (StatusCode::NO_CONTENT, Json(Value::Null))
        }
        None => not_found(),
    }
}

async fn active_users(State(db): State<Shared>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    let db = db.lock().unwrap();
    let active: Vec<Value> = db.users.iter().filter(|u| u["estatus"] == true).cloned().collect();
    (StatusCode::OK, Json(json!(active)))
}

async fn all_users(State(db): State<Shared>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!(db.lock().unwrap().users)))
}

async fn create_user(State(db): State<Shared>, headers: HeaderMap, mut form: Multipart) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut user = serde_json::Map::new();
    while let Some(field) = form.next_field().await.unwrap() {
        let name = field.name().unwrap().to_string();
        let text = field.text().await.unwrap();
        let value = match name.as_str() {
            "idRol" | "idEmpresa" | "intentos" => json!(text.parse::<i64>().unwrap()),
            "estatus" => json!(text == "true"),
            _ => json!(text),
        };
        user.insert(name, value);
    }
    if !user.contains_key("contrasenia") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Contrasenia requerida" })));
    }
    user.remove("contrasenia");
    let mut db = db.lock().unwrap();
    let id = db.allocate();
    user.insert("idUsuario".into(), json!(id));
    let user = Value::Object(user);
    db.users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn delete_user(State(db): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    deactivate(&mut db.lock().unwrap().users, "idUsuario", id)
}

async fn list_plans(State(db): State<Shared>) -> Reply {
    (StatusCode::OK, Json(json!(db.lock().unwrap().plans)))
}

async fn create_plan(State(db): State<Shared>, Json(mut plan): Json<Value>) -> Reply {
    let mut db = db.lock().unwrap();
    let id = db.allocate();
    plan["idPlanAuditoria"] = json!(id);
    db.plans.push(plan.clone());
    (StatusCode::CREATED, Json(plan))
}

async fn delete_plan(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    deactivate(&mut db.lock().unwrap().plans, "idPlanAuditoria", id)
}

async fn list_processes(State(db): State<Shared>) -> Reply {
    (StatusCode::OK, Json(json!(db.lock().unwrap().processes)))
}

async fn create_process(State(db): State<Shared>, Json(mut process): Json<Value>) -> Reply {
    if process["nombreProceso"].as_str().is_none_or(str::is_empty) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Nombre requerido" })));
    }
    let mut db = db.lock().unwrap();
    let id = db.allocate();
    process["idProceso"] = json!(id);
    db.processes.push(process.clone());
    (StatusCode::CREATED, Json(process))
}

async fn update_process(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(process): Json<Value>,
) -> Reply {
    let mut db = db.lock().unwrap();
    match db.processes.iter_mut().find(|p| p["idProceso"] == id) {
        Some(row) => {
            *row = process;
            (StatusCode::NO_CONTENT, Json(Value::Null))
        }
        None => not_found(),
    }
}

async fn delete_process(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut db = db.lock().unwrap();
    let before = db.processes.len();
    db.processes.retain(|p| p["idProceso"] != id);
    if db.processes.len() == before {
        return not_found();
    }
    (StatusCode::NO_CONTENT, Json(Value::Null))
}

fn attachment_json(id: i64, name: &str) -> Value {
    json!({
        "idArchivo": id,
        "rutaArchivo": format!("/uploads/{name}"),
        "nombreArchivo": name,
        "tipoArchivo": "text/plain"
    })
}

async fn list_files(State(db): State<Shared>, Path(_finding): Path<i64>) -> Reply {
    let db = db.lock().unwrap();
    let files: Vec<Value> = db
        .files
        .iter()
        .map(|(id, name, _)| attachment_json(*id, name))
        .collect();
    (StatusCode::OK, Json(json!(files)))
}

async fn upload_file(
    State(db): State<Shared>,
    Path(_finding): Path<i64>,
    mut form: Multipart,
) -> Reply {
    let Some(field) = form.next_field().await.unwrap() else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Sin archivo" })));
    };
    assert_eq!(field.name(), Some("archivo"));
    let name = field.file_name().unwrap().to_string();
    let data = field.bytes().await.unwrap().to_vec();
    let mut db = db.lock().unwrap();
    let id = db.allocate();
    db.files.push((id, name.clone(), data));
    (StatusCode::OK, Json(attachment_json(id, &name)))
}

async fn serve_upload(State(db): State<Shared>, Path(name): Path<String>) -> (StatusCode, Vec<u8>) {
    let db = db.lock().unwrap();
    db.files
        .iter()
        .find(|(_, file, _)| *file == name)
        .map_or((StatusCode::NOT_FOUND, Vec::new()), |(_, _, data)| {
            (StatusCode::OK, data.clone())
        })
}

async fn spawn_backend() -> (ApiClient, Shared) {
    let db: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let app = Router::new()
        .route("/api/Usuarios", get(active_users).post(create_user))
        .route("/api/Usuarios/all", get(all_users))
        .route("/api/Usuarios/{id}", delete(delete_user))
        .route("/api/PlanAuditoria", get(list_plans).post(create_plan))
        .route("/api/PlanAuditoria/{id}", delete(delete_plan))
        .route("/api/Procesos", get(list_processes).post(create_process))
        .route("/api/Procesos/{id}", put(update_process).delete(delete_process))
        .route("/api/hallazgos/{id}/archivos", get(list_files).post(upload_file))
        .route("/uploads/{name}", get(serve_upload))
        .with_state(db.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    let api = ApiClient::with_http(reqwest::Client::new(), &format!("http://{addr}/api"))
        .with_token(TOKEN);
    (api, db)
}

fn find_user(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}

#[tokio::test]
async fn deactivating_a_user_keeps_the_row() {
    let (api, _db) = spawn_backend().await;

    api.deactivate_user(3).await.expect("deactivate");

    let active = api.list_users().await.expect("active users");
    assert!(find_user(&active, 3).is_none());

    let all = api.list_all_users().await.expect("all users");
    let mario = find_user(&all, 3).expect("row still present");
    assert!(!mario.active);
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn deactivating_a_plan_hides_it_from_scoped_lists() {
    let (api, _db) = spawn_backend().await;
    api.deactivate_plan(1).await.expect("deactivate");

    let plans = api.list_plans().await.expect("plans");
    assert_eq!(plans.len(), 2);
    assert!(!plans.iter().find(|p| p.id == 1).unwrap().active);

    let admin = SessionIdentity {
        role_id: Some(1),
        user_id: Some(1),
        company_id: Some(1),
        display_name: None,
    };
    let visible: Vec<i64> = scope_plans(&admin, plans).iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![2]);
}

#[tokio::test]
async fn missing_rows_surface_as_api_errors() {
    let (api, _db) = spawn_backend().await;
    let err = api.deactivate_user(999).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Api { status: 404, ref message } if message == "No encontrado"
    ));
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let (api, _db) = spawn_backend().await;
    let anonymous = ApiClient::with_http(reqwest::Client::new(), api.base_url());
    let err = anonymous.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn created_users_are_sent_active_as_multipart() {
    let (api, db) = spawn_backend().await;
    let user = User {
        id: 0,
        name: "Lucia".into(),
        username: "lucia".into(),
        email: "lucia@example.com".into(),
        password: "s3cret".into(),
        role_id: 5,
        active: false,
        phone: String::new(),
        failed_attempts: 0,
        photo_base64: None,
        company_id: 2,
    };
    let created = api.create_user(&user).await.expect("create");
    assert!(created.active);
    assert_eq!(created.company_id, 2);
    assert!(created.password.is_empty());
    assert_eq!(db.lock().unwrap().users.len(), 3);
}

#[tokio::test]
async fn new_plans_start_active() {
    let (api, _db) = spawn_backend().await;
    let plan = AuditPlan {
        id: 0,
        audit_id: 10,
        process_id: 100,
        activity_id: 5,
        auditor_id: 3,
        start_date: None,
        end_date: None,
        status: "Pendiente".into(),
        rating: String::new(),
        drafted: false,
        reviewed: false,
        comments: String::new(),
        active: false,
    };
    let created = api.create_plan(&plan).await.expect("create");
    assert!(created.id > 0);
    assert!(created.active);
}

#[tokio::test]
async fn process_crud_round() {
    let (api, _db) = spawn_backend().await;

    let created = api
        .create_process(&Process { id: 0, name: "Ventas".into() })
        .await
        .expect("create");
    api.update_process(created.id, &Process { id: 0, name: "Ventas y cobranza".into() })
        .await
        .expect("update");
    let names: Vec<String> = api
        .list_processes()
        .await
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Compras", "Ventas y cobranza"]);

    api.delete_process(100).await.expect("delete");
    assert_eq!(api.list_processes().await.expect("list").len(), 1);

    let err = api
        .create_process(&Process { id: 0, name: String::new() })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
}

#[tokio::test]
async fn upload_then_download_follow_up_file() {
    let (api, _db) = spawn_backend().await;

    let uploaded = api
        .upload_attachment(
            40,
            AttachmentKind::FollowUp,
            "evidencia.txt",
            Some("text/plain"),
            b"evidence".to_vec(),
        )
        .await
        .expect("upload");
    assert_eq!(uploaded.file_name, "evidencia.txt");

    let listed = api
        .list_attachments(40, AttachmentKind::FollowUp)
        .await
        .expect("list");
    assert_eq!(listed, vec![uploaded.clone()]);

    let bytes = api.download_attachment(&uploaded).await.expect("download");
    assert_eq!(&bytes[..], b"evidence");
}
