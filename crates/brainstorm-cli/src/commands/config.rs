use brainstorm_core::storage::TOKEN_KEY;
use colored::Colorize;

use crate::app::App;

pub fn show(app: &App) {
    let logged_in = matches!(app.storage.get(TOKEN_KEY), Ok(Some(_)));
    println!("{}", "Configuration".bright_magenta().bold());
    println!("  environment:   {}", app.config.environment);
    println!("  app API:       {}", app.config.app_api_base);
    println!("  AI API:        {}", app.config.ai_api_base);
    println!("  config file:   {}", app.paths.config_file().display());
    println!("  local storage: {}", app.paths.local_storage_file().display());
    println!("  logs:          {}", app.paths.logs_dir().display());
    println!("  logged in:     {}", if logged_in { "yes" } else { "no" });
}
