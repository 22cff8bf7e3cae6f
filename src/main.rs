use car_marketplace::config::Config;
use car_marketplace::utils::logging::init_tracing;
use mimalloc::MiMalloc;
use tracing::info;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    init_tracing(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        loglevel = %cfg.basic.loglevel,
        "creating marketplace schema"
    );

    let report = car_marketplace::initialize(&cfg.basic.database_url).await?;
    println!("Таблицы успешно созданы!");

    match (&report.database_file, report.file_size) {
        (Some(path), Some(size)) => {
            println!("Файл базы данных создан: {}", path.display());
            println!("Размер файла: {size} байт");
        }
        _ => println!("Файл базы данных НЕ создан!"),
    }

    Ok(())
}
