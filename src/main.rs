use clap::Parser;

use rust_syllable_styler::render::{markup_to_html, to_unicode_bold};
use rust_syllable_styler::ui::routes::run_server;
use rust_syllable_styler::{StylerConfig, StylerPipeline};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Syllable-emphasis text styling service", long_about = None)]
struct CliArgs {
    /// Address to bind the HTTP server to.
    #[clap(long, value_parser, default_value = "127.0.0.1")]
    host: String,
    #[clap(long, value_parser, default_value_t = 8080)]
    port: u16,
    /// Optional JSON config file overriding the pipeline defaults.
    #[clap(long, value_parser)]
    config: Option<String>,
    /// Style this text once, print the three renderings and exit instead
    /// of serving.
    #[clap(long, value_parser)]
    text: Option<String>,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => StylerConfig::load(path)?,
        None => StylerConfig::default(),
    };

    if let Some(text) = args.text {
        let pipeline = StylerPipeline::new(config);
        let markdown = pipeline.process(&text);
        println!("markdown: {}", markdown);
        println!("html:     {}", markup_to_html(&markdown));
        println!("unicode:  {}", to_unicode_bold(&markdown));
        return Ok(());
    }

    run_server(args.host, args.port, config).await?;
    Ok(())
}
