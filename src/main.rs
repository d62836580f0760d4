use env_logger::Env;
use std::env;

use yumblock::config::load_config;
use yumblock::{server, AiExtractor, ExtractResponse};

const USAGE: &str = "Usage: yumblock [serve | extract <dish text>]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = load_config()?;

    match args.first().map(String::as_str) {
        None | Some("serve") => server::serve(config).await?,
        Some("extract") => {
            let text = args[1..].join(" ");
            let extractor = AiExtractor::from_config(&config.ai);
            let draft = extractor.extract(&text).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&ExtractResponse::from(draft))?
            );
        }
        Some("-h") | Some("--help") => println!("{}", USAGE),
        Some(other) => return Err(format!("Unknown command '{}'. {}", other, USAGE).into()),
    }

    Ok(())
}
