// zfs-reporter - ZFS appliance filesystem inventory reporter
use clap::Parser;
use std::error::Error;
use std::process;
use zfs_reporter::cli::{execute, wait_for_interrupt, Args};
use zfs_reporter::ReporterError;

const INTERRUPT_EXIT_CODE: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tokio::select! {
        result = execute(args) => {
            if let Err(e) = result {
                print_error(&e);
                process::exit(e.exit_code());
            }
        }
        _ = wait_for_interrupt(tokio::signal::ctrl_c()) => {
            println!("\nReceived Ctrl^C. Exiting....");
            process::exit(INTERRUPT_EXIT_CODE);
        }
    }
}

fn print_error(error: &ReporterError) {
    eprintln!("Error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("Caused by: {}", cause);
        source = cause.source();
    }
}
