pub mod generate_results;
