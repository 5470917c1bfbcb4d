use veneer_core::Stdout;
use veneer_lessons::{Config, logging, run};

fn main() {
    logging::init();

    run(&Stdout, &Config::default());
}
