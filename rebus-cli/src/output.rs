//! Output formatting for equation results

use crate::executor::{EquationResult, Solved};
use chrono::TimeDelta;

/// Output formatter for equation results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &EquationResult) {
        match &result.outcome {
            Ok(solved) => print!("{}", self.render(result, solved)),
            Err(e) => eprintln!("{}: Error - {}", result.equation, e),
        }
    }

    /// Render a solved equation; quiet mode keeps only the decoded lines
    fn render(&self, result: &EquationResult, solved: &Solved) -> String {
        if self.quiet {
            return solved.decoded.iter().map(|s| format!("{s}\n")).collect();
        }

        let mut out = format!("{}\n", result.equation);
        out.push_str(&headline(solved.decoded.len()));
        out.push('\n');
        for line in &solved.decoded {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!(
            "(compile: {}, solve: {}, evaluations: {})\n",
            format_duration(solved.compile_duration),
            format_duration(solved.solve_duration),
            solved.evaluations
        ));
        out
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[EquationResult]) {
        if self.quiet {
            return;
        }
        print!("{}", self.render_summary(results, self.start_time.elapsed()));
    }

    fn render_summary(
        &self,
        results: &[EquationResult],
        elapsed_time: std::time::Duration,
    ) -> String {
        let total = results.len();
        let solved: Vec<&Solved> = results
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .collect();
        let rejected = total - solved.len();
        let with_solutions = solved.iter().filter(|s| !s.decoded.is_empty()).count();

        let total_compile_time: TimeDelta = solved.iter().map(|s| s.compile_duration).sum();
        let total_solve_time: TimeDelta = solved.iter().map(|s| s.solve_duration).sum();
        let total_evaluations: u64 = solved.iter().map(|s| s.evaluations).sum();
        let total_compute_time = total_compile_time + total_solve_time;

        let mut out = String::from("\n--- Summary ---\n");
        out.push_str(&format!(
            "Equations: {} solved, {} without solutions, {} rejected\n",
            with_solutions,
            solved.len() - with_solutions,
            rejected
        ));
        out.push_str(&format!("Total evaluations: {total_evaluations}\n"));
        out.push_str(&format!(
            "Total compile time: {}\n",
            format_duration(total_compile_time)
        ));
        out.push_str(&format!(
            "Total solve time: {}\n",
            format_duration(total_solve_time)
        ));
        out.push_str(&format!(
            "Elapsed wall-clock time: {}\n",
            format_std_duration(elapsed_time)
        ));
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            out.push_str(&format!("Speedup factor: {:.2}x\n", speedup));
        }
        out
    }
}

/// Headline printed above the solutions of one equation
fn headline(count: usize) -> String {
    match count {
        0 => "Solutions not found!".to_string(),
        1 => "Found one solution:".to_string(),
        n => format!("Found {n} solutions:"),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebus_solver::CompileError;
    use std::time::Duration;

    fn solved(index: usize, equation: &str, decoded: &[&str]) -> EquationResult {
        EquationResult {
            index,
            equation: equation.to_string(),
            outcome: Ok(Solved {
                decoded: decoded.iter().map(|s| s.to_string()).collect(),
                compile_duration: TimeDelta::microseconds(40),
                solve_duration: TimeDelta::milliseconds(3),
                evaluations: 120,
            }),
        }
    }

    #[test]
    fn test_headline() {
        assert_eq!(headline(0), "Solutions not found!");
        assert_eq!(headline(1), "Found one solution:");
        assert_eq!(headline(7), "Found 7 solutions:");
    }

    #[test]
    fn test_render_full() {
        let formatter = OutputFormatter::new(false);
        let result = solved(
            0,
            "КОЗА+КОЗА = СТАДО",
            &["7693+7693 = 15386", "8653+8653 = 17306"],
        );
        let Ok(s) = &result.outcome else { unreachable!() };
        assert_eq!(
            formatter.render(&result, s),
            "КОЗА+КОЗА = СТАДО\n\
             Found 2 solutions:\n\
             \t7693+7693 = 15386\n\
             \t8653+8653 = 17306\n\
             (compile: 40µs, solve: 3.00ms, evaluations: 120)\n"
        );
    }

    #[test]
    fn test_render_quiet() {
        let formatter = OutputFormatter::new(true);
        let result = solved(0, "A + A = B", &["1 + 1 = 2"]);
        let Ok(s) = &result.outcome else { unreachable!() };
        assert_eq!(formatter.render(&result, s), "1 + 1 = 2\n");
    }

    #[test]
    fn test_summary_counts() {
        let formatter = OutputFormatter::new(false);
        let results = vec![
            solved(0, "A + A = B", &["1 + 1 = 2"]),
            solved(1, "A + B = C + B", &[]),
            EquationResult {
                index: 2,
                equation: "A = 1/B".to_string(),
                outcome: Err(CompileError::UnknownSymbol("/".to_string())),
            },
        ];
        let summary = formatter.render_summary(&results, Duration::from_millis(2));
        assert!(summary.contains("Equations: 1 solved, 1 without solutions, 1 rejected"));
        assert!(summary.contains("Total evaluations: 240"));
        assert!(summary.contains("Total solve time: 6.00ms"));
        assert!(summary.contains("Elapsed wall-clock time: 2.00ms"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }
}
