mod common;

use chamados_backend::api::dto::CreateChamadoRequest;
use chamados_backend::domain::ChamadoError;
use chamados_backend::infrastructure::db;
use chamados_backend::services::ChamadoService;

fn request(descricao: &str, tipo: &str, status: Option<&str>) -> CreateChamadoRequest {
    CreateChamadoRequest {
        descricao: Some(descricao.to_string()),
        tipo: Some(tipo.to_string()),
        status: status.map(str::to_string),
    }
}

#[tokio::test]
async fn test_sync_schema_is_idempotent() {
    let pool = common::setup_test_db().await;

    db::sync_schema(&pool).await.expect("second sync succeeds");

    let tables = db::list_tables(&pool).await.unwrap();
    assert!(tables.contains(&"chamados".to_string()));
}

#[tokio::test]
async fn test_verify_reports_closed_pool_as_connection_error() {
    let pool = common::setup_test_db().await;
    pool.close().await;

    let err = db::verify(&pool).await.unwrap_err();
    assert!(matches!(err, ChamadoError::Connection(_)));
}

#[tokio::test]
async fn test_connect_fails_when_database_cannot_be_opened() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("chamados.db");
    let url = format!("sqlite://{}", missing.display());

    let err = db::connect(&url, 1).await.unwrap_err();
    assert!(matches!(err, ChamadoError::Connection(_)));
}

#[tokio::test]
async fn test_create_returns_populated_record() {
    let pool = common::setup_test_db().await;

    let chamado = ChamadoService::create(&pool, request("Printer broken", "Hardware", None))
        .await
        .unwrap();

    assert!(chamado.id > 0);
    assert_eq!(chamado.descricao, "Printer broken");
    assert_eq!(chamado.tipo, "Hardware");
    assert_eq!(chamado.status, "Aberto");
    assert_eq!(chamado.created_at, chamado.updated_at);
    assert!(chrono::DateTime::parse_from_rfc3339(&chamado.created_at).is_ok());
}

#[tokio::test]
async fn test_list_all_returns_every_record() {
    let pool = common::setup_test_db().await;
    assert!(ChamadoService::list_all(&pool).await.unwrap().is_empty());

    let first = ChamadoService::create(&pool, request("A", "Rede", None))
        .await
        .unwrap();
    let second = ChamadoService::create(&pool, request("B", "Rede", Some("Fechado")))
        .await
        .unwrap();

    let all = ChamadoService::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
    assert_eq!(ChamadoService::count(&pool).await.unwrap(), 2);
}

#[tokio::test]
async fn test_missing_tipo_is_a_persistence_error() {
    let pool = common::setup_test_db().await;

    let req = CreateChamadoRequest {
        descricao: Some("Sem tipo".into()),
        ..Default::default()
    };
    let err = ChamadoService::create(&pool, req).await.unwrap_err();

    assert!(matches!(err, ChamadoError::Persistence { .. }));
    assert!(err.to_string().starts_with("Erro ao criar chamado: "));
}

#[tokio::test]
async fn test_records_survive_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("chamados.db").display());

    let pool = db::connect(&url, 2).await.unwrap();
    db::sync_schema(&pool).await.unwrap();
    let created = ChamadoService::create(&pool, request("Disco cheio", "Infra", None))
        .await
        .unwrap();
    pool.close().await;

    let pool = db::connect(&url, 2).await.unwrap();
    db::sync_schema(&pool).await.unwrap();
    let all = ChamadoService::list_all(&pool).await.unwrap();

    assert_eq!(all, vec![created]);
    pool.close().await;
}

#[tokio::test]
async fn test_init_db_keeps_serving_when_schema_sync_fails() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("chamados.db").display());

    let pool = db::init_db(&url, 1).await.unwrap();
    // A recorded checksum that no longer matches the embedded migration.
    sqlx::query("UPDATE _sqlx_migrations SET checksum = x'00'")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = db::init_db(&url, 1)
        .await
        .expect("schema sync failure does not fail init");

    let err = db::sync_schema(&pool).await.unwrap_err();
    assert!(matches!(err, ChamadoError::Schema(_)));
    assert!(err
        .to_string()
        .starts_with("Erro ao sincronizar o banco de dados: "));

    db::verify(&pool).await.unwrap();
    let created = ChamadoService::create(&pool, request("Rede lenta", "Rede", None))
        .await
        .unwrap();
    assert_eq!(ChamadoService::list_all(&pool).await.unwrap(), vec![created]);
    pool.close().await;
}

#[tokio::test]
async fn test_init_db_fails_only_on_connection() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}",
        dir.path().join("missing").join("chamados.db").display()
    );

    let err = db::init_db(&url, 1).await.unwrap_err();
    assert!(matches!(err, ChamadoError::Connection(_)));
}
