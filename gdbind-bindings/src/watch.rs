/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};

/// Measures the duration of consecutive build phases (JSON loading, domain mapping, file generation).
pub struct StopWatch {
    last_instant: Instant,
    metrics: Vec<Metric>,
    lwidth: usize,
}

impl StopWatch {
    pub fn start() -> Self {
        Self {
            last_instant: Instant::now(),
            metrics: vec![],
            lwidth: 0,
        }
    }

    /// Closes the current phase under the name `what` and starts the next one.
    pub fn record(&mut self, what: &'static str) {
        let now = Instant::now();
        let duration = now - self.last_instant;
        self.last_instant = now;
        self.lwidth = usize::max(self.lwidth, what.len());
        self.metrics.push(Metric {
            name: what,
            duration,
        });
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.name).collect()
    }

    /// Renders one right-aligned line per phase, followed by the total.
    pub fn render_stats(&self) -> String {
        let total: Duration = self.metrics.iter().map(|m| m.duration).sum();
        let rwidth = decimal_digits(total.as_millis());
        let lwidth = usize::max(self.lwidth, "total".len());

        let mut out = String::new();
        for metric in self.metrics.iter() {
            metric.render(&mut out, lwidth, rwidth);
        }
        let _ = writeln!(out, "{}", "-".repeat(lwidth + rwidth + 5));

        let total_metric = Metric {
            name: "total",
            duration: total,
        };
        total_metric.render(&mut out, lwidth, rwidth);
        out
    }

    pub fn write_stats_to(self, to_file: &Path) {
        std::fs::write(to_file, self.render_stats()).unwrap_or_else(|e| {
            panic!("failed to write stats file {}: {e}", to_file.display())
        });
    }
}

fn decimal_digits(n: u128) -> usize {
    std::iter::successors(Some(n), |&n| (n >= 10).then_some(n / 10)).count()
}

struct Metric {
    name: &'static str,
    duration: Duration,
}

impl Metric {
    fn render(&self, out: &mut String, lwidth: usize, rwidth: usize) {
        let _ = writeln!(
            out,
            "{: >l$}: {: >r$} ms",
            self.name,
            self.duration.as_millis(),
            l = lwidth,
            r = rwidth,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(12345), 5);
    }

    #[test]
    fn stats_list_every_phase_and_total() {
        let mut watch = StopWatch::start();
        watch.record("load_api_json");
        watch.record("map_domain_models");

        let stats = watch.render_stats();
        let lines: Vec<&str> = stats.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with("load_api_json:"));
        assert!(lines[1].trim_start().starts_with("map_domain_models:"));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].trim_start().starts_with("total:"));
        assert!(lines[3].ends_with(" ms"));
    }
}
