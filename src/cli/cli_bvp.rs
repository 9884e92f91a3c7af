use super::bvp_help::BVP_HELPER;
use super::cli_main::{get_user_input, prompt};
use crate::BurgersBVP::PicardSolver::{BVPError, BurgersBVPTask};
use crate::BurgersBVP::task_parser_BVP::{create_template, parse_config_file, result_to_json};
use log::error;
use regex::Regex;
use std::path::{Path, PathBuf};

pub fn bvp_menu() {
    loop {
        println!("\n=== Burgers BVP ===");
        println!("\x1b[33m1. Solve built-in problem\x1b[0m");
        println!("\x1b[33m2. Solve from file\x1b[0m");
        println!("\x1b[33m3. Auto-discover problem files\x1b[0m");
        println!("\x1b[33m4. Generate template\x1b[0m");
        println!("\x1b[33m5. Read help\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "1" => report(solve_task(BurgersBVPTask::new())),
            "2" => solve_from_file(),
            "3" => auto_solve_problems(),
            "4" => match create_template() {
                Ok(path) => println!("Template generated successfully: {:?}", path),
                Err(e) => println!("Failed to generate template: {}", e),
            },
            "5" => show_help(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn solve_task(mut task: BurgersBVPTask) -> Result<String, BVPError> {
    task.pretty_print_task();
    let json = {
        let solution = task.solve()?;
        result_to_json(solution)?
    };
    task.pretty_print_result();
    Ok(json)
}

fn report(outcome: Result<String, BVPError>) {
    match outcome {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("solution failed: {}", e);
            println!("Error: {}", e);
        }
    }
}

fn solve_from_file() {
    prompt("Enter file path: ");
    let file_path = get_user_input();
    let path = PathBuf::from(file_path.trim());

    if path.exists() {
        solve_from_file_dialog(&path);
    } else {
        println!("File not found: {}", file_path.trim());
    }
}

/// Files named `problem*.json` in `dir`
pub fn discover_problem_files(dir: &Path) -> Result<Vec<PathBuf>, BVPError> {
    let pattern = Regex::new(r"^problem.*\.json$")
        .map_err(|e| BVPError::InvalidConfiguration(e.to_string()))?;
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .map(|name| pattern.is_match(&name.to_string_lossy()))
            .unwrap_or(false);
        if matches && path.is_file() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn auto_solve_problems() {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            println!("Failed to get current directory: {}", e);
            return;
        }
    };
    println!("Searching for problem files in: {:?}", current_dir);

    match discover_problem_files(&current_dir) {
        Ok(files) if files.is_empty() => {
            println!("No files matching 'problem*.json' found in current directory.")
        }
        Ok(files) => {
            for path in files {
                println!("Found problem file: {:?}", path);
                solve_from_file_dialog(&path);
            }
        }
        Err(e) => println!("Failed to read directory: {}", e),
    }
}

pub fn solve_from_file_dialog(path: &Path) {
    match parse_config_file(path) {
        Ok(datum) => {
            println!("Document parsed successfully");
            let mut task = BurgersBVPTask::new();
            task.set_params_from_config(&datum);
            task.pretty_print_task();

            prompt("Start calculation? (y/n): ");
            let choice = get_user_input();
            let choice = choice.trim().to_lowercase();
            if choice == "y" || choice == "yes" {
                report(solve_task(task));
            } else {
                println!("Calculation cancelled. Returning to menu.");
            }
        }
        Err(e) => println!("Error parsing document: {}", e),
    }
}

fn show_help() {
    println!("\n=== Burgers BVP Help ===");
    println!("{}", BVP_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_problem_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("problem_1.json"), "{}").unwrap();
        fs::write(dir.path().join("problem_template.json"), "{}").unwrap();
        fs::write(dir.path().join("problem.txt"), "{}").unwrap();
        fs::write(dir.path().join("my_problem.json"), "{}").unwrap();
        let found = discover_problem_files(dir.path()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["problem_1.json", "problem_template.json"]);
    }
}
