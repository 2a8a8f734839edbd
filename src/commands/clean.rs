use crate::{CleanArgs, config::SiteConfig};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let config = SiteConfig::load_from_arg(args.config_file.as_deref()).await?;

    // Delete the generated site folder
    let site_path = &config.output_dir;
    if !site_path.exists() {
        println!("Nothing to clean at {}", site_path.display());
        return Ok(());
    }

    if args.dry_run {
        println!("Would delete {}", site_path.display());
    } else {
        tokio::fs::remove_dir_all(site_path).await?;
        println!("Deleted {}", site_path.display());
    }

    Ok(())
}
