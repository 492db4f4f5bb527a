use clap::Parser;

use passgen_lib::generator::generate;
use passgen_lib::options::GenerationOptions;
use passgen_lib::validation::ValidationError;
use passgen_lib::zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random password")]
struct Args {
    /// Password length, between 4 and 16
    #[arg(short, long, value_name = "length", default_value = "", allow_negative_numbers = true)]
    length: String,

    /// Include upper case letters
    #[arg(short, long, default_value_t = false)]
    upper_case: bool,

    /// Include digits
    #[arg(short, long, default_value_t = false)]
    digits: bool,

    /// Include special characters
    #[arg(short, long, default_value_t = false)]
    special_chars: bool,

    /// Number of passwords to print
    #[arg(short = 'n', long, value_name = "count", default_value_t = 1,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    count: u8,

    /// Copy the last password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,
}

impl Args {
    fn options(&self) -> Result<GenerationOptions, ValidationError> {
        GenerationOptions::from_raw(
            &self.length,
            self.digits,
            self.special_chars,
            self.upper_case,
        )
    }
}

fn copy_to_clipboard(password: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(password)?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    let options = match args.options() {
        Ok(options) => options,
        Err(error) => {
            eprintln!("length: {}", error);
            std::process::exit(1);
        }
    };

    let mut last = Zeroizing::new(String::new());
    for _ in 0..args.count {
        last = generate(&options);
        println!("{}", last.as_str());
    }

    if args.copy {
        if let Err(error) = copy_to_clipboard(&last) {
            eprintln!("failed to copy to clipboard: {}", error);
            std::process::exit(1);
        }
    }
}
