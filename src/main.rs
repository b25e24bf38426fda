use log::error;

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    // Outermost guard: no fault should reach the player as a raw crash.
    match std::panic::catch_unwind(hilo::ui::run) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            error!("terminal i/o failed: {}", e);
            println!("A critical error occurred: {}", e);
            println!("Please restart the program.");
        }
        Err(_) => {
            println!("An unexpected error occurred. Please restart the program.");
        }
    }
}
