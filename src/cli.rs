pub mod bvp_help;
pub mod cli_bvp;
pub mod cli_main;
pub mod cli_utils;
