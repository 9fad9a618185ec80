/// The dry-run rendering of an invocation.
pub fn format_invocation(command: &str, directory: Option<&str>) -> String {
    match directory {
        Some(dir) => format!("{command}\nWorking directory: {dir}"),
        None => command.to_string(),
    }
}

/// Discovered test names, one per line, followed by a count.
pub fn format_test_names(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    let noun = if names.len() == 1 { "test" } else { "tests" };
    out.push_str(&format!("🧪 {} {} discovered", names.len(), noun));
    out
}

/// The announcement printed when a run is issued.
pub fn format_run_started(test_name: &str) -> String {
    if test_name.is_empty() {
        "▶️  Running all tests".to_string()
    } else {
        format!("▶️  Running {test_name}")
    }
}
