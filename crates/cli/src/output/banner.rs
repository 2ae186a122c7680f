use colored::Colorize;

const LOGO: &[&str] = &[
    r"   ___ ___ __ _ _ _ __| |_ __ ____ _| |_ __| |_  ",
    r"  (_-</ -_) _` | '_/ _| ' \\ V  V / _` |  _/ _| ' \ ",
    r"  /__/\___\__,_|_| \__|_||_\_/\_/\__,_|\__\__|_||_|",
];

pub fn print_banner() {
    for line in LOGO {
        println!("{}", line.bright_yellow().bold());
    }
    println!("  {}", "alarms and diagnostics for managed search domains".dimmed());
}

pub fn print_version_block(version: &str, mapped_signals: usize) {
    print_banner();
    println!();
    println!("  {} {}", "Version".dimmed(), version.bright_yellow().bold());
    println!(
        "  {} {}",
        "Signals".dimmed(),
        format!("{mapped_signals} with diagnostics").bright_white()
    );
    println!(
        "  {} {}",
        "   Arch".dimmed(),
        std::env::consts::ARCH.bright_white()
    );
    println!(
        "  {} {}",
        "     OS".dimmed(),
        std::env::consts::OS.bright_white()
    );
    println!();
}
