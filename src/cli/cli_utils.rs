use super::cli_main::{get_user_input, prompt};
use crate::Utils::demo_functions::{add_two_numbers, concatenate_strings};
use crate::Utils::float_array_codec::{float64_slice_from_base64_string, increment_slice_elements};

pub fn utils_menu() {
    loop {
        println!("\n=== Utilities ===");
        println!("\x1b[33m1. Increment base64 float array\x1b[0m");
        println!("\x1b[33m2. Concatenate strings\x1b[0m");
        println!("\x1b[33m3. Add two numbers\x1b[0m");
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "1" => increment_dialog(),
            "2" => {
                prompt("First string: ");
                let a = get_user_input();
                prompt("Second string: ");
                let b = get_user_input();
                println!("{}", concatenate_strings(a.trim_end(), b.trim_end()));
            }
            "3" => add_dialog(),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn increment_dialog() {
    prompt("Base64 encoded f64 array: ");
    let text = get_user_input();
    match increment_slice_elements(text.trim()) {
        Ok(encoded) => {
            println!("{}", encoded);
            if let Ok(values) = float64_slice_from_base64_string(&encoded) {
                println!("{:?}", values);
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn add_dialog() {
    prompt("First number: ");
    let a = get_user_input().trim().parse::<f64>();
    prompt("Second number: ");
    let b = get_user_input().trim().parse::<f64>();
    match (a, b) {
        (Ok(a), Ok(b)) => println!("{}", add_two_numbers(a, b)),
        _ => println!("Both inputs must be numbers."),
    }
}
