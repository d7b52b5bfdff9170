use colored::Colorize;
use pattern_catalog::builder;
use pattern_catalog::console::Stdout;

fn main() {
    println!("{}", "=== Builder Demo ===".bold().cyan());
    builder::demo(&Stdout);
}
