use anyhow::{Result, Context};
use tracing::info;

use unistyle_types::Config;
use crate::{ConfigAction, config_manager::ConfigManager};

pub async fn config_command(
    action: ConfigAction,
    config_manager: &ConfigManager,
) -> Result<()> {
    match action {
        ConfigAction::List => list_profiles(config_manager).await,
        ConfigAction::Show { profile } => show_profile(profile, config_manager).await,
        ConfigAction::Create { profile, from } => create_profile(profile, from, config_manager).await,
        ConfigAction::Delete { profile } => delete_profile(profile, config_manager).await,
    }
}

async fn list_profiles(config_manager: &ConfigManager) -> Result<()> {
    info!("Listing available profiles");

    let profiles = config_manager.list_profiles()
        .context("Failed to list profiles")?;

    if profiles.is_empty() {
        println!("No configuration profiles found in {}.", config_manager.get_config_dir().display());
        println!("Create a new profile with: unistyle config create <name>");
        return Ok(());
    }

    println!("📋 Available Configuration Profiles:");
    for (i, profile) in profiles.iter().enumerate() {
        let marker = if profile == "default" { " (default)" } else { "" };
        println!("  {}. {}{}", i + 1, profile, marker);
    }

    println!("\nUse 'unistyle config show <profile>' to view profile details.");

    Ok(())
}

async fn show_profile(profile_name: String, config_manager: &ConfigManager) -> Result<()> {
    info!("Showing profile: {}", profile_name);

    let config = config_manager.load_config(Some(&profile_name))
        .with_context(|| format!("Failed to load profile '{}'", profile_name))?;

    println!("📄 Profile: {}", profile_name);
    println!("{}", "=".repeat(50));

    println!("\n🎨 Styles:");
    println!("  Built-in styles: {}", enabled(config.include_builtin));
    println!("  Default style: {}", config.default_style.as_deref().unwrap_or("(none)"));

    println!("\n📚 Catalogs ({}):", config.catalogs.len());
    if config.catalogs.is_empty() {
        println!("  (none configured)");
    } else {
        for (i, path) in config.catalogs.iter().enumerate() {
            println!("  {}. {}", i + 1, path.display());
        }
    }

    println!("\n🔤 Text Normalization:");
    println!("  Unicode normalization (NFKC): {}", enabled(config.normalization.normalize_unicode));
    println!("  Strip detached marks: {}", enabled(config.normalization.strip_detached_marks));

    Ok(())
}

fn enabled(flag: bool) -> &'static str {
    if flag { "Enabled" } else { "Disabled" }
}

async fn create_profile(
    profile_name: String,
    from_profile: Option<String>,
    config_manager: &ConfigManager,
) -> Result<()> {
    info!("Creating profile: {}", profile_name);

    if config_manager.profile_exists(&profile_name) {
        anyhow::bail!("Profile '{}' already exists", profile_name);
    }

    let base_config = if let Some(from) = from_profile {
        println!("📋 Copying from profile: {}", from);
        config_manager.load_config(Some(&from))
            .with_context(|| format!("Failed to load base profile '{}'", from))?
    } else {
        println!("📋 Creating new profile with default settings");
        Config::default()
    };

    config_manager.save_config(&profile_name, &base_config)
        .with_context(|| format!("Failed to save profile '{}'", profile_name))?;

    println!("✅ Profile '{}' created at {}", profile_name,
             config_manager.get_profile_path(&profile_name).display());

    Ok(())
}

async fn delete_profile(profile_name: String, config_manager: &ConfigManager) -> Result<()> {
    info!("Deleting profile: {}", profile_name);

    config_manager.delete_profile(&profile_name)?;
    println!("🗑️ Profile '{}' deleted", profile_name);

    Ok(())
}
