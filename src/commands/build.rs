use crate::{BuildArgs, build::Builder, config::SiteConfig};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let config = SiteConfig::load_from_arg(args.config_file.as_deref()).await?;

    let builder = Builder::new(config, args.verbose);
    let result = builder.build()?;

    println!(
        "Built site to {} ({} pages, {} static files)",
        result.output_dir.display(),
        result.pages,
        result.static_files
    );
    if let Some(sitemap) = &result.sitemap {
        println!("Wrote {}", sitemap.display());
    }

    Ok(())
}
