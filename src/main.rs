//! Application entry point: installs the interrupt handler, parses argv,
//! configures logging, and funnels fatal errors through the default handler.

use create_express_api::{
    args::parse,
    cli::run,
    error::default_error_handler,
    logger::init_logger,
};

fn main() {
    // Interrupts abort the whole run with no cleanup of partial output.
    let interrupt = ctrlc::set_handler(|| {
        eprintln!("{}", console::style("Cancelled by user.").yellow());
        std::process::exit(1);
    });
    if let Err(err) = interrupt {
        eprintln!("{}", console::style(format!("Error: {err}")).red());
        std::process::exit(1);
    }

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = parse(&argv);

    init_logger(parsed.flags.verbose);

    if let Err(err) = run(parsed) {
        default_error_handler(err);
    }
}
