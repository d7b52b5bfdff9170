use colored::Colorize;
use pattern_catalog::console::Stdout;
use pattern_catalog::decorator;

fn main() {
    println!("{}", "=== Decorator Demo ===".bold().cyan());
    decorator::demo(&Stdout);
}
