use std::io;
use std::sync::Arc;

use clap::Parser;
use filedeck::app::App;
use filedeck::config::{Args, PanelConfig, filedeck_home};
use filedeck::infra::local_store::LocalFileStore;
use filedeck::infra::logging;

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let home = filedeck_home();
    let config = PanelConfig::resolve(&args, &home).map_err(io::Error::other)?;
    logging::init(&config.log_path, &args.log_level)?;

    let store = LocalFileStore::open(&config.store_root)?;
    tracing::info!(store_root = %config.store_root.display(), "Starting filedeck");

    let mut app = App::new(Arc::new(store), config.app_options());
    app.start();

    filedeck::runtime::run(&mut app).await
}
