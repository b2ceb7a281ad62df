use anyhow::Context;
use env_logger::Env;
use workroom::{app::ViewerApp, config::ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = ViewerConfig::default();
    if let Some(dir) = std::env::var_os("WORKROOM_SHADER_DIR") {
        config = config.with_shader_dir(dir);
    }

    let app = ViewerApp::new(config).context("failed to set up the viewer")?;
    app.run().context("viewer stopped with an error")?;
    Ok(())
}
