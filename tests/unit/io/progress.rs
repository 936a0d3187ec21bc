//! Tests for multi-run progress tracking

#[cfg(test)]
mod tests {
    use lairforge::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use lairforge::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests a single run going through every layer
    // Verified by walking the full lifecycle without a terminal attached
    #[test]
    fn test_single_run_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        assert_eq!(pm.run_count(), 1);

        pm.start_run(0, 42, 6);
        for layer in 1..=6 {
            pm.update_layer(0, layer);
        }
        pm.complete_run(0, Duration::from_millis(120));
        pm.finish();
    }

    // Tests default and new start empty and initialize sets the run count
    // Verified by leaving runs empty in initialize
    #[test]
    fn test_default_matches_new() {
        let mut pm = ProgressManager::default();
        assert_eq!(pm.run_count(), 0);
        pm.initialize(2);
        assert_eq!(pm.run_count(), 2);
        pm.finish();
    }

    // Tests the rolling window once runs outnumber the visible bars
    // Verified by indexing bars by run index instead of window slot
    #[test]
    fn test_batch_mode_rolls_window() {
        let runs = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 1;
        let mut pm = ProgressManager::new();
        pm.initialize(runs);

        for index in 0..runs {
            pm.start_run(index, 100 + index as u64, 3);
            pm.update_layer(index, 2);
            pm.complete_run(index, Duration::from_millis(5));
        }
        pm.finish();
    }

    // Tests updates for runs that never started are ignored
    // Verified by resizing on update_layer
    #[test]
    fn test_unknown_run_is_ignored() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.update_layer(7, 1);
        pm.complete_run(7, Duration::ZERO);
        pm.finish();
    }
}
