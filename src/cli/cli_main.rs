use super::cli_bvp::bvp_menu;
use super::cli_utils::utils_menu;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => bvp_menu(),
            "2" => utils_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options (1, 2, 0)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to BurgersBVP: steady viscous Burgers profile\n
    u*u' - eps*u'' = 0, u(x_min) = 1, u(x_max) = -1 \n \x1b[0m"
    );
    println!("\x1b[33m1. Burgers BVP\x1b[0m");
    println!("\x1b[33m2. Utilities\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

/// Prints a cyan prompt without a line break
pub fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// One line from stdin; an unreadable stdin reads as "0" so every menu can be left
pub fn get_user_input() -> String {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "0".to_string(),
        Ok(_) => input,
    }
}
