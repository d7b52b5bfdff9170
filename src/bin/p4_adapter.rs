use colored::Colorize;
use pattern_catalog::adapter;
use pattern_catalog::console::Stdout;

fn main() {
    println!("{}", "=== Adapter Demo ===".bold().cyan());
    adapter::demo(&Stdout);
}
