use sea_orm_migration::prelude::*;

use conecta_login_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
