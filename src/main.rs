use BurgersBVP::BurgersBVP::PicardSolver::BurgersBVPTask;
use BurgersBVP::cli::cli_main::run_interactive_menu;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    // task file given: solve it and print the result document
    let Some(arg) = std::env::args().nth(1) else {
        run_interactive_menu();
        return ExitCode::SUCCESS;
    };
    let mut task = BurgersBVPTask::new();
    match task.solve_from_file(&PathBuf::from(arg)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
