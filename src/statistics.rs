use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected while a search engine runs.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    engine: &'static str,
    /// Nodes popped from the frontier
    expanded_nodes: usize,
    /// Successor boards produced by the move generator
    generated_nodes: usize,
    /// Successors admitted to the open list
    opened_nodes: usize,
    /// Successors rejected as duplicates of open or closed nodes
    pruned_nodes: usize,
    /// Best heuristic value seen so far
    best_heuristic_value: Option<u32>,
    search_start_time: Instant,
    last_log_time: Instant,
    search_duration: Option<Duration>,
}

impl SearchStatistics {
    pub fn new(engine: &'static str) -> Self {
        info!(engine, "starting search");
        SearchStatistics {
            engine,
            expanded_nodes: 0,
            generated_nodes: 0,
            opened_nodes: 0,
            pruned_nodes: 0,
            best_heuristic_value: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: u32) {
        if self.best_heuristic_value.map_or(true, |best| heuristic_value < best) {
            self.best_heuristic_value = Some(heuristic_value);
            info!(engine = self.engine, best_heuristic_value = heuristic_value);
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_opened_nodes(&mut self) {
        self.opened_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn opened_nodes(&self) -> usize {
        self.opened_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn best_heuristic_value(&self) -> Option<u32> {
        self.best_heuristic_value
    }

    /// Wall time of the search, once finalised.
    pub fn search_duration(&self) -> Option<Duration> {
        self.search_duration
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            engine = self.engine,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            opened_nodes = self.opened_nodes,
            pruned_nodes = self.pruned_nodes,
            best_heuristic_value = self.best_heuristic_value,
        );
    }

    pub fn finalise_search(&mut self) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!(engine = self.engine, "finalising search");
        self.log();
        info!(engine = self.engine, search_duration = duration.as_secs_f64());
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} search statistics:", self.engine)?;
        writeln!(f, "Expanded nodes: {}", self.expanded_nodes)?;
        writeln!(f, "Generated nodes: {}", self.generated_nodes)?;
        writeln!(f, "Opened nodes: {}", self.opened_nodes)?;
        writeln!(f, "Pruned duplicates: {}", self.pruned_nodes)?;
        if let Some(best) = self.best_heuristic_value {
            writeln!(f, "Best heuristic value: {}", best)?;
        }
        if let Some(duration) = self.search_duration {
            writeln!(f, "Search time: {:.2?}", duration)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_smallest_heuristic_value() {
        let mut stats = SearchStatistics::new("test");
        assert_eq!(stats.best_heuristic_value(), None);
        stats.register_heuristic_value(7);
        stats.register_heuristic_value(9);
        stats.register_heuristic_value(3);
        assert_eq!(stats.best_heuristic_value(), Some(3));
    }

    #[test]
    fn summary_lists_counters() {
        let mut stats = SearchStatistics::new("gbfs");
        stats.increment_expanded_nodes();
        stats.increment_generated_nodes(3);
        stats.increment_opened_nodes();
        stats.increment_pruned_nodes();
        stats.finalise_search();
        assert!(stats.search_duration().is_some());

        let summary = stats.to_string();
        assert!(summary.starts_with("gbfs search statistics:"));
        assert!(summary.contains("Expanded nodes: 1"));
        assert!(summary.contains("Generated nodes: 3"));
        assert!(summary.contains("Pruned duplicates: 1"));
    }
}
