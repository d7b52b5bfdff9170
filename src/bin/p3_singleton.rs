use colored::Colorize;
use pattern_catalog::console::Stdout;
use pattern_catalog::singleton;

fn main() {
    println!("{}", "=== Singleton Demo ===".bold().cyan());
    singleton::demo(&Stdout);
}
