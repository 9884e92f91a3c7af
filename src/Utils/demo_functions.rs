use log::info;

/// `string1` followed by `string2`
pub fn concatenate_strings(string1: &str, string2: &str) -> String {
    info!("concatenate_strings called");
    format!("{}{}", string1, string2)
}

pub fn add_two_numbers(num1: f64, num2: f64) -> f64 {
    info!("add_two_numbers called");
    num1 + num2
}
