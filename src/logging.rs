use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;
use colored::*;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("wit-outline")
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("wit-outline-{}.log", Local::now().format("%Y%m%d-%H%M%S")));

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(log_file.clone());
    }

    log_debug(&format!("Logging initialized to: {}", log_file.display()));

    Ok(log_file)
}

/// Suppress console echo; the log file still receives every line.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
    if !is_quiet() {
        eprintln!("{}", message.red());
    }
}

/// Progress goes to stderr so stdout only ever carries command output.
pub fn log_info(message: &str) {
    log_with_level("INFO", message);
    if !is_quiet() {
        eprintln!("{}", message);
    }
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!("at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    log_with_level("ERROR", &message);

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn log_with_level(level: &str, message: &str) {
    let path = match LOG_FILE.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };

    if let Some(log_file) = path {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
        {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|guard| guard.clone())
}
