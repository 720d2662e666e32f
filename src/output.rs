//! Terminal output for the pull request workflow.
//!
//! All reporting goes through these functions; they print and return,
//! never affecting control flow.

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

/// Print a status message before the create call goes out.
pub fn print_creating_pr(head: &str, base: &str, repo: &str) {
    println!(
        "{CYAN}Creating new pull request from '{}' to branch '{}' of '{}'...{RESET}",
        head, base, repo
    );
}

/// Print a prominent success message for a created PR with its number and URL.
pub fn print_pr_created(number: u64, url: &str) {
    println!();
    println!("{GREEN}{BOLD}╔════════════════════════════════════════════════════════╗{RESET}");
    println!("{GREEN}{BOLD}║  ✓ Pull Request Created                                ║{RESET}");
    println!("{GREEN}{BOLD}╚════════════════════════════════════════════════════════╝{RESET}");
    println!();
    println!("{GREEN}{BOLD}  #{} {}{RESET}", number, url);
    println!();
}

/// Print a muted notice for the benign non-create answer.
pub fn print_pr_already_handled() {
    println!("{GRAY}GitHub answered 200: nothing to create.{RESET}");
}

/// Print an error message for a host-level rejection, with status and raw body.
pub fn print_api_error(status: u16, body: &str) {
    eprintln!("{RED}GitHub responded with {}: {}{RESET}", status, body);
}

/// Print a generic error message.
pub fn print_error(message: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {RED}{}{RESET}", message);
}
