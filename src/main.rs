use std::io::Read;

use text_summarizer::{config::Config, summarizer::summarize};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Read the text to summarize from stdin
    let mut input_text = String::new();
    std::io::stdin().read_to_string(&mut input_text)?;

    println!("Summarizing with model {}", config.model);
    let output = summarize(&config, &input_text).await?;

    for summary in output {
        println!("{}", summary.summary_text);
    }

    Ok(())
}
