//! pimorse - blink a message in Morse code.
//!
//! Order of operations:
//! 1. Check arguments (usage error exits before anything else)
//! 2. Load and validate config.json
//! 3. Parse the message
//! 4. Claim the GPIO pin and transmit

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use log::error;

use pimorse::cancel::{install_interrupt_handler, CancelFlag};
use pimorse::config::{Config, CONFIG_FILE};
use pimorse::hal::open_output;
use pimorse::{Message, MorseError, Outcome, Transmitter};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("pimorse");
        println!("Usage: {} <message>", program);
        return ExitCode::from(MorseError::Usage.exit_code());
    }

    if let Err(e) = pimorse::logging::init() {
        eprintln!("logger: {}", e);
    }

    match run(&args[1]) {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Cancelled) => {
            println!("Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Logging may be off; always tell the user
            let _ = report(&e, &mut std::io::stderr().lock());
            error!("{:#}", e);
            let code = e
                .downcast_ref::<MorseError>()
                .map(MorseError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn report(e: &anyhow::Error, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "pimorse: {:#}", e)
}

fn run(text: &str) -> anyhow::Result<Outcome> {
    let settings = Config::load(CONFIG_FILE)?.validate()?;
    let message = Message::parse(text)?;

    let cancel = CancelFlag::new();
    install_interrupt_handler(&cancel);

    let output = open_output(settings.bcm_pin, cancel)
        .with_context(|| format!("opening GPIO {}", settings.bcm_pin))?;
    let mut transmitter = Transmitter::new(settings.timing, output);

    Ok(transmitter.send(&message)?)
}
