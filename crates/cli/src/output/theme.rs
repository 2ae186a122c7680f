use colored::Colorize;

const LABEL_WIDTH: usize = 18;

pub fn print_header(title: &str) {
    let rule = "═".repeat(title.chars().count() + 4);
    println!();
    println!("  {}", rule.yellow());
    println!("    {}", title.bright_yellow().bold());
    println!("  {}", rule.yellow());
}

pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "▸".bright_yellow(), title.bold());
}

pub fn print_kv(label: &str, value: &str) {
    println!(
        "    {} {}",
        format!("{label:<width$}", width = LABEL_WIDTH).dimmed(),
        value.bright_white()
    );
}

pub fn print_kv_colored(label: &str, value: &str, ok: bool) {
    let styled = if ok { value.green() } else { value.red() };
    println!("    {} {}", format!("{label:<width$}", width = LABEL_WIDTH).dimmed(), styled);
}

pub fn print_dim(msg: &str) {
    println!("  {}", msg.dimmed());
}
