use super::*;

pub(super) fn handle_config(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Init(args) => handle_init(args),
        ConfigCommands::Show => handle_show(),
    }
}

fn handle_init(args: ConfigInitArgs) -> anyhow::Result<()> {
    let config_path = default_config_path()?;
    let mut config = AppConfig::load(&config_path)?;
    config.base_url = Some(args.base_url.trim_end_matches('/').to_string());
    if let Some(role) = args.role {
        config.role = role.into();
    }
    if let Some(student_id) = args.student_id {
        config.student_id = Some(student_id);
    }
    config.save(&config_path)?;
    println!("Config saved to {}", config_path.display());
    Ok(())
}

fn handle_show() -> anyhow::Result<()> {
    let config_path = default_config_path()?;
    let config = AppConfig::load(&config_path)?;
    let rendered = serde_json::to_string_pretty(&config).context("render config")?;
    println!("{rendered}");
    Ok(())
}
