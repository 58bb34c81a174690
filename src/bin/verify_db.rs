use chamados_backend::config::Config;
use chamados_backend::infrastructure::db;
use chamados_backend::services::ChamadoService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let pool = db::connect(&config.database_url, 1).await?;

    db::verify(&pool).await?;
    println!("Connection: ok ({})", config.database_url);

    let tables = db::list_tables(&pool).await?;
    println!("Tables: {}", tables.join(", "));

    if tables.iter().any(|t| t == "chamados") {
        let count = ChamadoService::count(&pool).await?;
        println!("Chamado count: {}", count);
    } else {
        println!("Table chamados is missing; start the server to sync the schema");
    }

    pool.close().await;
    Ok(())
}
