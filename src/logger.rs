use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Progress line on stdout.
pub fn log_line(line: &str) {
    println!("{}", line);
}

pub fn log_notice(line: &str) {
    println!("NOTICE: {}", line);
}

/// `prefix: error`, followed by one `caused by:` entry per `source()` level.
pub fn error_chain(prefix: &str, e: &dyn std::error::Error) -> String {
    let mut out = format!("{}: {}", prefix, e);
    let mut cause = e.source();
    while let Some(c) = cause {
        out.push_str(&format!("\n  caused by: {}", c));
        cause = c.source();
    }
    out
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    eprintln!("[{}] ERROR: {}", timestamp(), error_chain(prefix, e));
}
