use crate::config::Config;
use crate::context::Context;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle(ctx: &Context) -> AppResult<()> {
    println!("⚙️  Initializing rAttendance…");

    let path = Config::init_all(Some(&ctx.config_path), ctx.test)?;
    let cfg = Config::load_from(&path)?;
    let policy = cfg.policy()?;

    println!("📄 Config file : {}", path.display());
    println!("🕘 Session     : {}", policy.window.label());
    println!("🎯 Threshold   : {:.0}%", policy.min_fraction * 100.0);
    println!("📂 Output dir  : {}", cfg.output_dir_path().display());

    if ctx.test {
        info("Test mode: configuration file not written");
    }

    ctx.journal(
        "init",
        "config",
        &format!("Configuration initialized at {}", path.display()),
    );

    success("rAttendance initialization completed!");
    Ok(())
}
