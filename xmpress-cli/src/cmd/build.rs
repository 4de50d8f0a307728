use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::Path;
use tokio::task::JoinSet;
use xmpress_core::{AssetManifest, CmarkRenderer, Document, PageAssembler, PageScanner, SourcePage};

use crate::config::load_build_config;

pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Source directory containing page shells and assets")
                .default_value("./site"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for assembled pages")
                .default_value("./out"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./xmpress.toml"),
        )
}

pub fn make_subcommand() -> Command {
    add_build_args(Command::new("build")).about("Assemble every source page into a static site")
}

pub async fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = load_build_config(args)?;
    let build_config = config.build_config();

    let source_dir = Path::new(&build_config.source);
    let output_dir = Path::new(&build_config.output);

    let site = config.site.site.clone().unwrap_or_default();
    let assets = config.site.assets.clone().unwrap_or_default();

    let pages = PageScanner::new(source_dir).scan()?;
    println!("Discovered {} pages in {}", pages.len(), source_dir.display());

    // Pages are assembled only once every declared asset has loaded
    load_assets(&assets, source_dir, output_dir).await?;

    let renderer = CmarkRenderer::default();
    let assembler = PageAssembler::new(&site, &renderer);

    for relative in &pages {
        let mut source = SourcePage::read(source_dir.join(relative))?;
        let mut doc = Document::new();
        assembler
            .assemble(&mut doc, &mut source)
            .with_context(|| format!("failed to assemble {}", relative.display()))?;

        let out_path = output_dir.join(relative);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out_path, doc.to_html(&assets))?;
        println!("- {}", relative.display());
    }

    println!("Site built successfully in {}", output_dir.display());

    Ok(())
}

/// Loads every manifest asset concurrently and copies it into the output
/// tree. Any single failure fails the whole join, so assembly never runs
/// against a partially loaded asset set.
async fn load_assets(assets: &AssetManifest, source_dir: &Path, output_dir: &Path) -> Result<()> {
    let mut set = JoinSet::new();

    for path in assets.paths() {
        let from = source_dir.join(path);
        let to = output_dir.join(path);

        set.spawn(async move {
            if let Some(parent) = to.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let bytes = tokio::fs::read(&from)
                .await
                .with_context(|| format!("failed to load asset {}", from.display()))?;
            tokio::fs::write(&to, bytes).await?;

            anyhow::Ok(())
        });
    }

    while let Some(result) = set.join_next().await {
        result??;
    }

    Ok(())
}
