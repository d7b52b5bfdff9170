use colored::Colorize;
use pattern_catalog::capabilities;
use pattern_catalog::console::Stdout;

fn main() {
    println!("{}", "=== Capability Segregation Demo ===".bold().cyan());
    capabilities::demo(&Stdout);
}
