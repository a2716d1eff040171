use anyhow::Context;
use eframe::egui;

use terminal_catalog::app::TerminalSearchApp;
use terminal_catalog::{logging, Catalog, SearchConfig, TerminalSearch};

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config = SearchConfig::from_env().context("invalid widget configuration")?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_title(&config.title)
            .with_resizable(true),
        ..Default::default()
    };

    let search = TerminalSearch::new(catalog);
    let bindings = config.bindings.clone();

    tracing::info!(title = %config.title, "starting terminal catalog");
    eframe::run_native(
        &config.title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(TerminalSearchApp::new(search, bindings)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the window: {err}"))
}
