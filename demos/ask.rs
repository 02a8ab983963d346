use argh::FromArgs;
use dotenv::dotenv;
use invoice_insight::{AppConfig, GeminiClient, InvoiceAnalyst, UploadedImage};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(FromArgs)]
/// Ask questions about an invoice image from the terminal.
struct AskArgs {
    /// the path to the invoice image (jpg, jpeg or png)
    #[argh(option, short = 'i')]
    image: PathBuf,

    /// a single question; omit to enter an interactive loop
    #[argh(option, short = 'q')]
    question: Option<String>,
}

fn load_image(path: &PathBuf) -> Result<UploadedImage, Box<dyn Error>> {
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();
    let bytes = std::fs::read(path)?;
    Ok(UploadedImage::new(&mime_type, bytes)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let args: AskArgs = argh::from_env();

    let config = AppConfig::from_env()?;
    let client = GeminiClient::new(config.api_key.clone()).with_model(config.model.clone());
    let analyst = InvoiceAnalyst::new(Arc::new(client));

    let image = load_image(&args.image)?;
    println!("✅ Loaded {} ({}).\n", args.image.display(), image.mime_type());

    if let Some(question) = args.question {
        println!("Thinking...\n");
        let answer = analyst.ask(Some(&image), &question).await?;
        println!("{}", answer);
        return Ok(());
    }

    println!("🤖 Ready! Ask questions about your invoice (type 'quit' to exit).");
    println!("------------------------------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let question = input.trim();

        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        if question.is_empty() {
            continue;
        }

        println!("\nThinking...");

        match analyst.ask(Some(&image), question).await {
            Ok(answer) => {
                println!("\n{}\n", answer);
                println!("------------------------------------------------------------------");
            }
            Err(e) => {
                eprintln!("❌ Error: {}", e);
            }
        }
    }

    Ok(())
}
