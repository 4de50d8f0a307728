use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use xmpress_core::{CmarkRenderer, Config, Document, PageAssembler, SourcePage};

pub fn make_subcommand() -> Command {
    Command::new("page")
        .about("Assemble a single source page")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Source page containing one <xmp> literal block")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the assembled page here instead of stdout"),
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

pub fn execute(args: &ArgMatches) -> Result<()> {
    let input = args.get_one::<String>("input").expect("required arg");
    let config_path = args.get_one::<String>("config").expect("has default");

    let config = Config::read(config_path).unwrap_or_default();
    let site = config.site.unwrap_or_default();
    let assets = config.assets.unwrap_or_default();

    let mut source =
        SourcePage::read(input).with_context(|| format!("failed to read page {}", input))?;

    let renderer = CmarkRenderer::default();
    let assembler = PageAssembler::new(&site, &renderer);

    let mut doc = Document::new();
    assembler
        .assemble(&mut doc, &mut source)
        .with_context(|| format!("failed to assemble {}", input))?;

    let html = doc.to_html(&assets);

    match args.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, html)?;
            println!("Assembled {} -> {}", input, path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
