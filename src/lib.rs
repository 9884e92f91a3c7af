#[allow(non_snake_case)]
pub mod BurgersBVP;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
