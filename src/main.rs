use std::error::Error;

use dotenv::dotenv;

mod app;
mod cli;
mod context;
mod error;
mod models;
mod opt;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let invocation = match cli::parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(clap_err) => clap_err.exit(),
            Err(err) => return Err(err),
        },
    };

    let flags = opt::enabled_flags();
    if !flags.is_empty() {
        println!("Debug flags: {}", flags.join(", "));
    }

    let summary = app::convert_file(&invocation.config, &invocation.file_name)?;
    println!(
        "Converted [{}]: {} cards, {} tokens -> {}",
        summary.set_name,
        summary.card_count,
        summary.token_count,
        summary.output_path.display()
    );

    Ok(())
}
